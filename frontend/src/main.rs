use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod form;
mod nav;
mod reveal;
mod ripple;
mod scheduler;
mod scroll;

mod components {
    pub mod anchor;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod products;
    pub mod ripple_button;
    pub mod sections;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use error::ConfigurationError;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering not-found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn start() -> Result<(), ConfigurationError> {
    let root = dom::require_by_id(config::MOUNT_ROOT_ID)?;
    info!("Starting application");
    yew::Renderer::<App>::with_root(root).render();
    Ok(())
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", err.to_string());
    }

    if let Err(err) = start() {
        error!("startup failed: {}", err);
        wasm_bindgen::throw_str(&err.to_string());
    }
}
