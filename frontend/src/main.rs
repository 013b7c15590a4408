use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod styles;
mod reveal {
    pub mod settings;
    pub mod presentation;
    pub mod timer;
    pub mod observer;
    pub mod machine;
}
mod components {
    pub mod scroll_reveal;
    pub mod theme;
    pub mod navbar;
    pub mod hero_background;
    pub mod carousel;
    pub mod contact;
    pub mod whatsapp_button;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod trading;
}

use components::{
    navbar::Navbar,
    theme::use_system_theme,
    whatsapp_button::WhatsAppButton,
};
use pages::{
    home::Home,
    services::{Catalog, CatalogView, Showcase, ShowcaseView},
    trading::{NotFound, Trading},
};
use reveal::observer::DetectorContext;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/cleaning")]
    Cleaning,
    #[at("/services/engineering")]
    Engineering,
    #[at("/services/laundry")]
    Laundry,
    #[at("/services/washing-bay")]
    WashingBay,
    #[at("/services/trading")]
    Trading,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Cleaning => {
            info!("Rendering Cleaning page");
            html! { <CatalogView catalog={Catalog::Cleaning} /> }
        },
        Route::Engineering => {
            info!("Rendering Engineering page");
            html! { <CatalogView catalog={Catalog::Engineering} /> }
        },
        Route::Laundry => {
            info!("Rendering Laundry page");
            html! { <ShowcaseView showcase={Showcase::Laundry} /> }
        },
        Route::WashingBay => {
            info!("Rendering Washing Bay page");
            html! { <ShowcaseView showcase={Showcase::WashingBay} /> }
        },
        Route::Trading => {
            info!("Rendering Trading page");
            html! { <Trading /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let is_dark = use_system_theme();
    // Capability probe runs once; every reveal wrapper shares the result.
    let detector = use_memo(|_| DetectorContext::detect(), ());

    html! {
        <ContextProvider<DetectorContext> context={(*detector).clone()}>
            <BrowserRouter>
                <style>{styles::BASE_CSS}</style>
                <Navbar is_dark={is_dark} />
                <Switch<Route> render={switch} />
                <WhatsAppButton />
            </BrowserRouter>
        </ContextProvider<DetectorContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
