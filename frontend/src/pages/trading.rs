use log::warn;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Trading)]
pub fn trading() -> Html {
    let go_back = Callback::from(|_: MouseEvent| {
        let Some(window) = window() else { return };
        match window.history() {
            Ok(history) => {
                if let Err(e) = history.back() {
                    warn!("history.back failed: {:?}", e);
                }
            }
            Err(e) => warn!("history unavailable: {:?}", e),
        }
    });

    html! {
        <section class="placeholder-page">
            <style>{PLACEHOLDER_CSS}</style>
            <div class="placeholder-card card">
                <div class="placeholder-icon">{"📈"}</div>
                <h1>{"Trading Services"}</h1>
                <p class="muted">{"Coming Soon"}</p>
                <p class="muted small">
                    {"We are putting together general trading and supply services. Check back shortly."}
                </p>
                <button class="btn" onclick={go_back}>{"← Go Back"}</button>
            </div>
        </section>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="placeholder-page">
            <style>{PLACEHOLDER_CSS}</style>
            <div class="placeholder-card card">
                <div class="placeholder-icon">{"🧭"}</div>
                <h1>{"Page not found"}</h1>
                <p class="muted">{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn">{"Back to Home"}</Link<Route>>
            </div>
        </section>
    }
}

const PLACEHOLDER_CSS: &str = r#"
    .placeholder-page {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 6rem 1rem 2rem;
        background: linear-gradient(135deg, #eff6ff, #eef2ff);
    }
    html.dark .placeholder-page {
        background: linear-gradient(135deg, #111827, #1f2937);
    }
    .placeholder-card {
        max-width: 32rem;
        padding: 3rem 2rem;
        text-align: center;
    }
    .placeholder-icon {
        font-size: 3.5rem;
        margin-bottom: 1rem;
    }
"#;
