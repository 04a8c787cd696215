use yew::prelude::*;

use crate::components::icons::{ArrowRightIcon, CheckIcon, DownloadIcon, ShieldIcon};
use crate::components::lead_modal::LeadModal;
use crate::config::Config;
use crate::leads::store::SupabaseStore;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Config,
}

/// The whole single-page site: hero, biography, booklet card and
/// footer. Every call-to-action opens the lead modal with its own
/// provenance tag.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let store = use_memo(props.config.clone(), |config| SupabaseStore::new(config));
    let modal_source = use_state(|| None::<String>);

    // Scroll to top only on initial mount
    use_effect_with((), |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    let close_modal = {
        let modal_source = modal_source.clone();
        Callback::from(move |_: ()| modal_source.set(None))
    };
    let open_from = |source: &'static str| {
        let modal_source = modal_source.clone();
        Callback::from(move |_: MouseEvent| modal_source.set(Some(source.to_string())))
    };

    html! {
        <div class="landing">
            <style>{LANDING_CSS}</style>

            {
                if let Some(source) = (*modal_source).clone() {
                    html! {
                        <LeadModal
                            source={source}
                            store={store.clone()}
                            on_close={close_modal.clone()}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <section class="hero-section">
                <div class="hero-banner"></div>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1>{"A violência contra a mulher não começa no soco."}</h1>
                    <p>
                        {"Ela começa no controle, na humilhação e no silêncio. \
                          Junte-se ao trabalho da Delegada Karen Langkammer pela \
                          segurança das mulheres do DF."}
                    </p>
                    <button class="hero-cta" onclick={open_from("hero")}>
                        {"Apoie essa luta"}
                        <ArrowRightIcon />
                    </button>
                </div>
            </section>

            <section class="bio-section">
                <div class="bio-inner">
                    <img
                        class="bio-photo"
                        src="/assets/karen-palestra.jpg"
                        alt="Karen Langkammer em palestra"
                    />
                    <div class="bio-text">
                        <h2>{"Quem fala aqui não é espectadora."}</h2>
                        <p>
                            {"Karen Langkammer é Delegada da Polícia Civil do \
                              Distrito Federal e dedica sua carreira à proteção \
                              e à segurança feminina."}
                        </p>
                        <ul class="bio-points">
                            <li>
                                <span class="point-icon"><CheckIcon /></span>
                                {"Atendimento direto a vítimas de violência doméstica"}
                            </li>
                            <li>
                                <span class="point-icon"><CheckIcon /></span>
                                {"Palestras de prevenção em escolas e comunidades"}
                            </li>
                            <li>
                                <span class="point-icon"><CheckIcon /></span>
                                {"Orientação prática sobre medidas protetivas"}
                            </li>
                        </ul>
                        <div class="bio-badge">
                            <ShieldIcon />
                            <span>{"Delegada da PCDF"}</span>
                        </div>
                    </div>
                </div>
            </section>

            <section class="booklet-section">
                <div class="booklet-card">
                    <h3>{"Cartilha de Orientação"}</h3>
                    <p>
                        {"Um guia gratuito para reconhecer os sinais da violência \
                          e saber onde buscar ajuda no Distrito Federal."}
                    </p>
                    <button class="booklet-cta" onclick={open_from("download")}>
                        <DownloadIcon />
                        {"Baixar Agora"}
                    </button>
                </div>
            </section>

            <footer class="site-footer">
                <p class="footer-brand">{"KAREN LANGKAMMER"}</p>
                <p class="footer-tagline">{"Pela segurança de todas as mulheres."}</p>
                <div class="footer-actions">
                    <button class="footer-cta" onclick={open_from("footer")}>
                        {"Apoie a campanha"}
                    </button>
                    <button class="footer-link" onclick={open_from("footer_info")}>
                        {"Receber a cartilha"}
                    </button>
                </div>
                <p class="footer-credit">{"© 2026 Desenvolvido por Wess design"}</p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.hero-section {
    position: relative;
    min-height: 90vh;
    display: flex;
    align-items: center;
    background: #111827;
    color: #fff;
    overflow: hidden;
}
.hero-banner {
    position: absolute;
    inset: 0;
    background-image: url('/assets/banner-hero.jpg');
    background-size: cover;
    background-position: top center;
}
.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to right,
        rgba(30, 58, 138, 0.78),
        rgba(30, 58, 138, 0.72),
        transparent);
}
.hero-content {
    position: relative;
    z-index: 1;
    max-width: 1100px;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.hero-content h1 {
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 800;
    line-height: 1.15;
    max-width: 22ch;
    margin-bottom: 1.5rem;
}
.hero-content p {
    font-size: 1.125rem;
    max-width: 48ch;
    margin-bottom: 2rem;
    color: rgba(255, 255, 255, 0.9);
}
.hero-cta {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    background: #fff;
    color: #4c1d95;
    font-size: 1.05rem;
    font-weight: 700;
    border: none;
    border-radius: 9999px;
    padding: 1rem 2rem;
    cursor: pointer;
    transition: transform 0.15s ease;
}
.hero-cta:hover {
    transform: translateY(-2px);
}
.bio-section {
    padding: 5rem 1.5rem;
    background: #fff;
}
.bio-inner {
    max-width: 1100px;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 3rem;
    align-items: center;
}
@media (min-width: 768px) {
    .bio-inner {
        flex-direction: row;
    }
}
.bio-photo {
    width: 100%;
    max-width: 340px;
    border-radius: 12px;
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
    object-fit: cover;
}
.bio-text h2 {
    font-size: 1.9rem;
    margin-bottom: 1.5rem;
}
.bio-text > p {
    font-size: 1.125rem;
    color: #4b5563;
    margin-bottom: 1.5rem;
}
.bio-points {
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin-bottom: 2rem;
}
.bio-points li {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: #374151;
}
.point-icon {
    color: #7c3aed;
    line-height: 0;
}
.bio-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    background: #ede9fe;
    color: #4c1d95;
    font-weight: 600;
    border-radius: 9999px;
    padding: 0.5rem 1.25rem;
}
.booklet-section {
    background: #f9fafb;
    padding: 4rem 1.5rem;
}
.booklet-card {
    max-width: 56rem;
    margin: 0 auto;
    background: #4c1d95;
    color: #fff;
    text-align: center;
    border-radius: 24px;
    padding: 2.5rem;
}
.booklet-card h3 {
    font-size: 1.5rem;
    margin-bottom: 1rem;
}
.booklet-card p {
    color: rgba(255, 255, 255, 0.85);
    max-width: 52ch;
    margin: 0 auto 1.5rem;
}
.booklet-cta {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    background: #fff;
    color: #4c1d95;
    font-weight: 700;
    font-size: 1rem;
    border: none;
    border-radius: 12px;
    padding: 0.85rem 2rem;
    cursor: pointer;
}
.booklet-cta:hover {
    background: #ede9fe;
}
.site-footer {
    background: #030712;
    color: #6b7280;
    text-align: center;
    padding: 3rem 1.5rem;
}
.footer-brand {
    color: #fff;
    font-weight: 700;
    letter-spacing: 0.1em;
}
.footer-tagline {
    margin-top: 0.5rem;
    font-size: 0.95rem;
}
.footer-actions {
    display: flex;
    justify-content: center;
    gap: 1rem;
    margin-top: 1.5rem;
}
.footer-cta {
    background: #4c1d95;
    color: #fff;
    border: none;
    border-radius: 9999px;
    padding: 0.6rem 1.5rem;
    font-weight: 600;
    cursor: pointer;
}
.footer-cta:hover {
    background: #5b21b6;
}
.footer-link {
    background: none;
    border: 1px solid #374151;
    color: #9ca3af;
    border-radius: 9999px;
    padding: 0.6rem 1.5rem;
    cursor: pointer;
}
.footer-link:hover {
    color: #fff;
    border-color: #6b7280;
}
.footer-credit {
    margin-top: 2rem;
    font-size: 0.75rem;
}
"#;
