use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::SERVICE_PAGES;
use crate::Route;

const SCROLLED_AFTER_PX: f64 = 20.0;
const DROPDOWN_CLOSE_DELAY_MS: u32 = 200;

pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}

/// Smooth-scrolls to the element with `id`. Returns false when it is not on this page.
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

/// Maps a location hash such as `#contact` to a home-page section id.
pub fn section_from_hash(hash: &str) -> Option<&'static str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    SECTIONS.iter().map(|(section, _)| *section).find(|section| *section == id)
}

/// Scrolls to a home-page section, routing to the home page first when the section is
/// not on the current page. The hash tells the home page where to land.
pub fn go_to_section(id: &'static str, navigator: Option<&Navigator>) {
    if scroll_to_section(id) {
        return;
    }
    let Some(navigator) = navigator else {
        warn!("No router available to reach section {}", id);
        return;
    };
    navigator.push(&Route::Home);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(id) {
            warn!("Could not set location hash: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub is_dark: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled_state = use_state(|| false);
    let dropdown_open = use_state(|| false);
    let close_timer = use_mut_ref(|| None::<Timeout>);
    let navigator = use_navigator();

    {
        let is_scrolled_state = is_scrolled_state.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled_state = is_scrolled_state.clone();
                        move || {
                            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                                is_scrolled_state.set(is_scrolled(y));
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    if let Ok(y) = window.scroll_y() {
                        is_scrolled_state.set(is_scrolled(y));
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let go_to = {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            let navigator = navigator.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                go_to_section(id, navigator.as_ref());
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    // The close timer lives in this instance; dropping it cancels a pending close.
    let open_dropdown = {
        let dropdown_open = dropdown_open.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: MouseEvent| {
            close_timer.borrow_mut().take();
            dropdown_open.set(true);
        })
    };
    let close_dropdown_later = {
        let dropdown_open = dropdown_open.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let dropdown_open = dropdown_open.clone();
            *close_timer.borrow_mut() = Some(Timeout::new(DROPDOWN_CLOSE_DELAY_MS, move || {
                dropdown_open.set(false);
            }));
        })
    };

    let nav_style = match (*is_scrolled_state, props.is_dark) {
        (false, _) => "background-color: transparent;",
        (true, true) => "background-color: rgba(17, 24, 39, 0.7); backdrop-filter: blur(12px) saturate(180%);",
        (true, false) => "background-color: rgba(255, 255, 255, 0.7); backdrop-filter: blur(12px) saturate(180%);",
    };

    let section_links = |class: &'static str| -> Html {
        SECTIONS
            .iter()
            .map(|(id, label)| {
                html! {
                    <button class={class} onclick={go_to(*id)}>{*label}</button>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled_state).then(|| "scrolled"))} style={nav_style}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to("home")}>{config::COMPANY_SHORT_NAME}</button>

                <div class="nav-desktop">
                    { section_links("nav-link") }
                    <div class="nav-dropdown" onmouseenter={open_dropdown} onmouseleave={close_dropdown_later}>
                        <span class="nav-link">{"Our Companies ▾"}</span>
                        {
                            if *dropdown_open {
                                html! {
                                    <div class="nav-dropdown-menu">
                                        { for SERVICE_PAGES.iter().map(|page| html! {
                                            <Link<Route> to={page.route.clone()} classes="nav-dropdown-item">
                                                {page.name}
                                            </Link<Route>>
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <button class="nav-cta" onclick={go_to("contact")}>{"Get Quote"}</button>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            { section_links("nav-mobile-link") }
                            { for SERVICE_PAGES.iter().map(|page| html! {
                                <Link<Route> to={page.route.clone()} classes="nav-mobile-link">
                                    {page.name}
                                </Link<Route>>
                            }) }
                            <button class="nav-cta nav-cta-wide" onclick={go_to("contact")}>{"Get Quote"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        transition: all 300ms;
    }
    .top-nav.scrolled {
        margin: 1rem 1rem 0;
        border-radius: 1rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 4.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.75rem;
        font-weight: 700;
        color: var(--primary);
        background: none;
        border: none;
        cursor: pointer;
    }
    .nav-desktop {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link, .nav-mobile-link {
        background: none;
        border: none;
        color: inherit;
        font-size: 0.9rem;
        font-weight: 500;
        cursor: pointer;
        text-decoration: none;
        opacity: 0.8;
    }
    .nav-link:hover, .nav-mobile-link:hover {
        color: var(--primary);
        opacity: 1;
    }
    .nav-dropdown {
        position: relative;
    }
    .nav-dropdown-menu {
        position: absolute;
        top: 2rem;
        left: 0;
        min-width: 12rem;
        display: flex;
        flex-direction: column;
        padding: 0.5rem;
        border-radius: 0.75rem;
        background: var(--card);
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
    }
    .nav-dropdown-item {
        padding: 0.5rem 0.75rem;
        border-radius: 0.5rem;
        color: inherit;
        text-decoration: none;
    }
    .nav-dropdown-item:hover {
        background: var(--muted);
    }
    .nav-cta {
        padding: 0.6rem 1.25rem;
        border-radius: 0.5rem;
        border: none;
        background: var(--primary);
        color: white;
        font-weight: 600;
        cursor: pointer;
    }
    .nav-cta-wide {
        width: 100%;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        font-size: 1.5rem;
        color: inherit;
        cursor: pointer;
    }
    .nav-mobile {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        padding: 1rem 1.5rem;
        border-top: 1px solid rgba(127, 127, 127, 0.25);
    }
    .nav-mobile-link {
        text-align: left;
        padding: 0.5rem 0;
    }
    @media (max-width: 768px) {
        .nav-desktop {
            display: none;
        }
        .burger-menu {
            display: block;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
    }

    #[test]
    fn test_section_from_hash() {
        assert_eq!(section_from_hash("#contact"), Some("contact"));
        assert_eq!(section_from_hash("about"), Some("about"));
        assert_eq!(section_from_hash(""), None);
        assert_eq!(section_from_hash("#"), None);
        assert_eq!(section_from_hash("#pricing"), None);
    }

    #[test]
    fn test_sections_are_unique() {
        let mut ids: Vec<&str> = SECTIONS.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
