use yew::prelude::*;

use crate::config;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    html! {
        <a
            class="whatsapp-button"
            href={config::whatsapp_href()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat on WhatsApp"
            title="Chat on WhatsApp"
        >
            <style>{r#"
                .whatsapp-button {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 9999px;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    background: #10b981;
                    color: white;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: background 150ms;
                }
                .whatsapp-button:hover {
                    background: #059669;
                }
            "#}</style>
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" width="28" height="28" aria-hidden="true">
                <path d="M20.52 3.48A11.7 11.7 0 0012 .75C6.21.75 1.5 5.46 1.5 11.25c0 1.98.52 3.9 1.5 5.6L.75 23.25l6.7-2.05a11.42 11.42 0 005.05 1.1h.01c5.79 0 10.5-4.71 10.5-10.5 0-2.82-1.1-5.46-3.14-7.32zM12 21.37h-.01c-1.57 0-3.11-.38-4.48-1.11l-.32-.18-3.98 1.22 1.2-3.9-.21-.37A8.63 8.63 0 013.5 11.25c0-4.69 3.81-8.5 8.5-8.5 2.27 0 4.4.89 6.01 2.5a8.43 8.43 0 012.49 6.01c0 4.69-3.81 8.5-8.49 8.5z" />
            </svg>
        </a>
    }
}
