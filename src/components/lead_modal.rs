use std::rc::Rc;

use gloo_console::{error, log};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::icons::{CheckIcon, CloseIcon};
use crate::leads::email::is_valid_email;
use crate::leads::form::LeadDraft;
use crate::leads::phone::format_phone;
use crate::leads::regions::REGIONS;
use crate::leads::store::SupabaseStore;
use crate::leads::submit::{submit_lead, SubmitOutcome, BOOKLET_FILENAME, DOWNLOAD_SOURCE};
use crate::utils::download;

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    /// Which call-to-action opened the form; stored with the lead.
    pub source: String,
    pub store: Rc<SupabaseStore>,
    pub on_close: Callback<()>,
}

/// The lead-capture form. Mounted fresh on every open, so each
/// open/close cycle owns an independent draft; closing discards it.
#[function_component(LeadModal)]
pub fn lead_modal(props: &LeadModalProps) -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let region = use_state(String::new);
    let email_error = use_state(|| None::<String>);
    let form_error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let is_success = use_state(|| false);

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    // Reformatted on every keystroke; the displayed value is the stored value.
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(format_phone(&input.value()));
        })
    };
    let on_email = {
        let email = email.clone();
        let email_error = email_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            email_error.set(if !value.is_empty() && !is_valid_email(&value) {
                Some("E-mail inválido".to_string())
            } else {
                None
            });
            email.set(value);
        })
    };
    let on_region = {
        let region = region.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            region.set(select.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let region = region.clone();
        let form_error = form_error.clone();
        let is_submitting = is_submitting.clone();
        let is_success = is_success.clone();
        let source = props.source.clone();
        let store = props.store.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = LeadDraft {
                name: (*name).clone(),
                phone: (*phone).clone(),
                email: (*email).clone(),
                region: (*region).clone(),
            };
            // The gate is synchronous: an incomplete draft never leaves
            // the editing state.
            if let Err(gate) = draft.validate() {
                form_error.set(Some(gate.to_string()));
                return;
            }
            form_error.set(None);
            is_submitting.set(true);

            let source = source.clone();
            let store = store.clone();
            let form_error = form_error.clone();
            let is_submitting = is_submitting.clone();
            let is_success = is_success.clone();
            spawn_local(async move {
                match submit_lead(&draft, &source, &*store).await {
                    SubmitOutcome::Saved { download } => {
                        log!(format!("lead stored (source: {source})"));
                        is_success.set(true);
                        if let Some(path) = download {
                            download::save_file(path, BOOKLET_FILENAME);
                        }
                    }
                    SubmitOutcome::Rejected(gate) => {
                        form_error.set(Some(gate.to_string()));
                    }
                    SubmitOutcome::Failed(err) => {
                        error!(format!("lead insert failed: {err}"));
                        form_error.set(Some(format!("Erro ao salvar: {err}")));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let title = if props.source == DOWNLOAD_SOURCE {
        "Baixar Cartilha"
    } else {
        "Apoie a Causa"
    };

    html! {
        <div class="lead-modal">
            <style>{MODAL_CSS}</style>
            <div class="modal-backdrop" onclick={on_backdrop}></div>
            <div class="modal-card">
                {
                    if !*is_success {
                        html! {
                            <>
                                <div class="modal-header">
                                    <h3>{title}</h3>
                                    <button type="button" class="modal-close" aria-label="Fechar" onclick={on_close_click.clone()}>
                                        <CloseIcon />
                                    </button>
                                </div>
                                <form class="modal-form" onsubmit={onsubmit}>
                                    {
                                        if let Some(message) = (*form_error).as_ref() {
                                            html! { <div class="error-message">{message.clone()}</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <input
                                        type="text"
                                        name="name"
                                        placeholder="Nome"
                                        value={(*name).clone()}
                                        oninput={on_name}
                                        required=true
                                    />
                                    <input
                                        type="tel"
                                        name="phone"
                                        placeholder="Telefone"
                                        value={(*phone).clone()}
                                        oninput={on_phone}
                                        required=true
                                    />
                                    <input
                                        type="text"
                                        name="email"
                                        placeholder="E-mail"
                                        value={(*email).clone()}
                                        oninput={on_email}
                                        class={if email_error.is_some() { "invalid-input" } else { "" }}
                                        required=true
                                    />
                                    {
                                        if let Some(message) = (*email_error).as_ref() {
                                            html! { <p class="field-error">{message.clone()}</p> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <select name="region" onchange={on_region} required=true>
                                        <option value="" selected={region.is_empty()}>{"Selecione a RA"}</option>
                                        { for REGIONS.iter().map(|ra| html! {
                                            <option value={*ra} selected={*region == *ra}>{*ra}</option>
                                        }) }
                                    </select>
                                    <button type="submit" class="submit-button" disabled={*is_submitting}>
                                        { if *is_submitting { "Enviando..." } else { "Enviar" } }
                                    </button>
                                </form>
                            </>
                        }
                    } else {
                        html! {
                            <div class="modal-success">
                                <span class="success-icon"><CheckIcon /></span>
                                <h3>{"Sucesso!"}</h3>
                                <p>
                                    { if props.source == DOWNLOAD_SOURCE {
                                        "Obrigada! O download da cartilha já começou."
                                    } else {
                                        "Obrigada por apoiar esta luta."
                                    } }
                                </p>
                                <button type="button" class="close-success" onclick={on_close_click}>
                                    {"Fechar"}
                                </button>
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}

const MODAL_CSS: &str = r#"
.lead-modal {
    position: fixed;
    inset: 0;
    z-index: 1000;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.modal-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(17, 24, 39, 0.8);
    backdrop-filter: blur(4px);
}
.modal-card {
    position: relative;
    background: #fff;
    border-radius: 16px;
    width: 100%;
    max-width: 32rem;
    overflow: hidden;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.modal-header {
    background: #4c1d95;
    padding: 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.modal-header h3 {
    color: #fff;
    font-size: 1.25rem;
    font-weight: 700;
}
.modal-close {
    background: none;
    border: none;
    color: #fff;
    cursor: pointer;
    line-height: 0;
    padding: 0.25rem;
}
.modal-close:hover {
    opacity: 0.8;
}
.modal-form {
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.modal-form input,
.modal-form select {
    width: 100%;
    padding: 0.75rem;
    border: 1px solid #d1d5db;
    border-radius: 8px;
    font-size: 1rem;
    background: #fff;
    color: inherit;
}
.modal-form input:focus,
.modal-form select:focus {
    outline: 2px solid #7c3aed;
    border-color: transparent;
}
.modal-form input.invalid-input {
    border-color: #dc2626;
}
.field-error {
    color: #dc2626;
    font-size: 0.85rem;
    margin-top: -0.5rem;
}
.error-message {
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #b91c1c;
    border-radius: 8px;
    padding: 0.75rem;
    font-size: 0.9rem;
}
.submit-button {
    width: 100%;
    background: #4c1d95;
    color: #fff;
    border: none;
    border-radius: 8px;
    padding: 1rem;
    font-size: 1rem;
    font-weight: 700;
    cursor: pointer;
}
.submit-button:hover:enabled {
    background: #5b21b6;
}
.submit-button:disabled {
    opacity: 0.6;
    cursor: wait;
}
.modal-success {
    padding: 3rem 2rem;
    text-align: center;
}
.success-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    background: #ede9fe;
    color: #7c3aed;
    margin-bottom: 1rem;
}
.modal-success h3 {
    font-size: 1.5rem;
    margin-bottom: 0.75rem;
}
.modal-success p {
    color: #4b5563;
    margin-bottom: 1.5rem;
}
.close-success {
    background: #e5e7eb;
    border: none;
    border-radius: 8px;
    padding: 0.5rem 1.5rem;
    font-size: 1rem;
    cursor: pointer;
}
.close-success:hover {
    background: #d1d5db;
}
"#;
