use gloo_console::error;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod leads;
mod pages;
mod utils;

use config::Config;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Config,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let render = {
        let config = props.config.clone();
        // Single-page site: unknown paths land on the page as well.
        move |route: Route| match route {
            Route::Home | Route::NotFound => html! { <Landing config={config.clone()} /> },
        }
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(format!("fatal: {err}"));
            panic!("{err}");
        }
    };

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
