use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;
use yew::prelude::*;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn apply_theme(dark: bool) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}

/// Follows the system colour scheme, mirroring it as a `dark` class on `<html>`.
#[hook]
pub fn use_system_theme() -> bool {
    let is_dark = use_state(|| false);

    {
        let is_dark = is_dark.clone();
        use_effect_with_deps(
            move |_| {
                let media = web_sys::window().and_then(|window| window.match_media(DARK_QUERY).ok().flatten());

                let destructor: Box<dyn FnOnce()> = match media {
                    Some(media) => {
                        apply_theme(media.matches());
                        is_dark.set(media.matches());

                        let listener = Closure::<dyn Fn(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                            apply_theme(event.matches());
                            is_dark.set(event.matches());
                        });
                        if media
                            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("Could not follow colour scheme changes");
                        }

                        Box::new(move || {
                            let _ = media.remove_event_listener_with_callback(
                                "change",
                                listener.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    None => Box::new(|| ()),
                };

                move || destructor()
            },
            (),
        );
    }

    *is_dark
}
