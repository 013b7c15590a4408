use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::reveal::settings::AnimationKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    /// Phone is optional, everything else has to be filled in.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn mailto_href(&self, to: &str) -> String {
        let sender = if self.name.trim().is_empty() { "Website" } else { self.name.as_str() };
        let subject = format!("Contact from {}", sender);
        let body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\n{}",
            self.name, self.email, self.phone, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Error,
}

/// Where a submitted message goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Relay(String),
    MailClient(&'static str),
}

impl Delivery {
    pub fn configured() -> Self {
        match config::relay_endpoint() {
            Some(endpoint) => Delivery::Relay(endpoint),
            None => Delivery::MailClient(config::FALLBACK_MAILBOX),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelayErrors {
    #[serde(default)]
    errors: Vec<RelayError>,
}

#[derive(Debug, Deserialize)]
struct RelayError {
    message: String,
}

/// Pulls readable messages out of a relay error body, falling back to the raw text.
pub fn relay_error_summary(body: &str) -> String {
    match serde_json::from_str::<RelayErrors>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; "),
        _ => body.trim().to_string(),
    }
}

async fn send_to_relay(endpoint: &str, message: &ContactMessage) -> Result<(), String> {
    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(message)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    if response.ok() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(format!("status {}: {}", response.status(), relay_error_summary(&body)))
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let message = use_state(ContactMessage::default);
    let status = use_state(|| FormStatus::Idle);

    let on_input = |apply: fn(&mut ContactMessage, String)| {
        let message = message.clone();
        Callback::from(move |value: String| {
            let mut updated = (*message).clone();
            apply(&mut updated, value);
            message.set(updated);
        })
    };
    let on_name = on_input(|m, v| m.name = v);
    let on_email = on_input(|m, v| m.email = v);
    let on_phone = on_input(|m, v| m.phone = v);
    let on_message = on_input(|m, v| m.message = v);

    let onsubmit = {
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !message.is_complete() {
                status.set(FormStatus::Error);
                return;
            }

            match Delivery::configured() {
                Delivery::MailClient(to) => {
                    let href = message.mailto_href(to);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&href);
                    }
                    info!("No form relay configured, handed the message to the mail client");
                    status.set(FormStatus::Success);
                }
                Delivery::Relay(endpoint) => {
                    status.set(FormStatus::Sending);
                    let message = message.clone();
                    let status = status.clone();
                    let payload = (*message).clone();
                    spawn_local(async move {
                        match send_to_relay(&endpoint, &payload).await {
                            Ok(()) => {
                                status.set(FormStatus::Success);
                                message.set(ContactMessage::default());
                            }
                            Err(err) => {
                                error!("Contact form submission failed: {}", err);
                                status.set(FormStatus::Error);
                            }
                        }
                    });
                }
            }
        })
    };

    let input_value = |callback: Callback<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };
    let sending = *status == FormStatus::Sending;

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-field">
                <label for="name">{"Name"}</label>
                <input id="name" type="text" placeholder="Your name" required=true
                    value={message.name.clone()} oninput={input_value(on_name)} />
            </div>
            <div class="form-field">
                <label for="email">{"Email"}</label>
                <input id="email" type="email" placeholder="your.email@example.com" required=true
                    value={message.email.clone()} oninput={input_value(on_email)} />
            </div>
            <div class="form-field">
                <label for="phone">{"Phone"}</label>
                <input id="phone" type="tel" placeholder={config::CONTACT_PHONE}
                    value={message.phone.clone()} oninput={input_value(on_phone)} />
            </div>
            <div class="form-field">
                <label for="message">{"Message"}</label>
                <textarea id="message" rows="4" placeholder="Tell us about your cleaning needs..." required=true
                    value={message.message.clone()}
                    oninput={
                        let on_message = on_message.clone();
                        Callback::from(move |e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            on_message.emit(area.value());
                        })
                    } />
            </div>
            <button type="submit" class="form-submit" disabled={sending}>
                { if sending { "Sending..." } else { "Send Message" } }
            </button>
            {
                match *status {
                    FormStatus::Success => html! {
                        <p class="form-status success">{"Message sent. We'll be in touch soon."}</p>
                    },
                    FormStatus::Error => html! {
                        <p class="form-status error">{"There was an error sending your message. Please try again."}</p>
                    },
                    FormStatus::Idle | FormStatus::Sending => html! {},
                }
            }
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct ContactInfoItemProps {
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
    sub: &'static str,
}

#[function_component(ContactInfoItem)]
fn contact_info_item(props: &ContactInfoItemProps) -> Html {
    html! {
        <div class="contact-info-item">
            <div class="icon-badge">{props.icon}</div>
            <div>
                <h3>{props.title}</h3>
                <p class="muted">{props.detail}</p>
                <p class="muted small">{props.sub}</p>
            </div>
        </div>
    }
}

/// "Get in touch" section: contact details on one side, the form on the other.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="section">
            <style>{CONTACT_CSS}</style>
            <div class="container">
                <ScrollReveal animation={AnimationKind::FadeUp} class="section-heading">
                    <h2>{"Get In Touch"}</h2>
                    <p class="muted">{"Ready to transform your space? Contact us today for a free quote"}</p>
                </ScrollReveal>

                <div class="contact-grid">
                    <ScrollReveal animation={AnimationKind::FadeRight}>
                        <div class="contact-info">
                            <ScrollReveal animation={AnimationKind::FadeUp}>
                                <ContactInfoItem icon="📞" title="Phone" detail={config::CONTACT_PHONE} sub={config::CONTACT_HOURS} />
                            </ScrollReveal>
                            <ScrollReveal animation={AnimationKind::FadeUp} delay_ms={100}>
                                <ContactInfoItem icon="✉️" title="Email" detail={config::CONTACT_EMAIL} sub="We respond within 24 hours" />
                            </ScrollReveal>
                            <ScrollReveal animation={AnimationKind::FadeUp} delay_ms={200}>
                                <ContactInfoItem icon="📍" title="Service Area" detail={config::SERVICE_AREA} sub="Free estimates available" />
                            </ScrollReveal>
                        </div>
                    </ScrollReveal>
                    <ScrollReveal animation={AnimationKind::FadeLeft} delay_ms={200}>
                        <div class="card contact-card">
                            <ContactForm />
                        </div>
                    </ScrollReveal>
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        max-width: 64rem;
        margin: 0 auto;
    }
    .contact-info {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .contact-info-item {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }
    .contact-card {
        padding: 2rem;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
    }
    .form-field label {
        display: block;
        font-size: 0.875rem;
        font-weight: 500;
        margin-bottom: 0.5rem;
    }
    .form-field input, .form-field textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.6rem 1rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(127, 127, 127, 0.35);
        background: var(--background);
        color: inherit;
        font: inherit;
        resize: none;
    }
    .form-submit {
        padding: 0.9rem;
        border: none;
        border-radius: 0.5rem;
        background: var(--primary);
        color: white;
        font-weight: 600;
        cursor: pointer;
    }
    .form-submit:disabled {
        opacity: 0.6;
        cursor: wait;
    }
    .form-status.success {
        color: #16a34a;
    }
    .form-status.error {
        color: #dc2626;
    }
    @media (min-width: 1024px) {
        .contact-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ocen".to_string(),
            email: "ocen@example.com".to_string(),
            phone: String::new(),
            message: "Office clean on Friday?".to_string(),
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(filled().is_complete());
        assert!(!ContactMessage::default().is_complete());
        let blank_message = ContactMessage {
            message: "   ".to_string(),
            ..filled()
        };
        assert!(!blank_message.is_complete());
    }

    #[test]
    fn test_mailto_href() {
        let href = filled().mailto_href("team@example.com");
        assert!(href.starts_with("mailto:team@example.com?subject=Contact%20from%20Ocen&body="));
        assert!(href.contains("Name%3A%20Ocen%0AEmail%3A%20ocen%40example.com%0APhone%3A%20%0A%0AOffice"));
    }

    #[test]
    fn test_mailto_without_name() {
        let message = ContactMessage {
            name: String::new(),
            ..filled()
        };
        assert!(message.mailto_href("a@b.c").contains("subject=Contact%20from%20Website"));
    }

    #[test]
    fn test_payload_shape() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["name"], "Ocen");
        assert_eq!(json["phone"], "");
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
    }

    #[test]
    fn test_relay_error_summary() {
        let body = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"form disabled"}]}"#;
        assert_eq!(relay_error_summary(body), "should be an email; form disabled");
        assert_eq!(relay_error_summary(" Bad Gateway \n"), "Bad Gateway");
        assert_eq!(relay_error_summary(r#"{"errors":[]}"#), r#"{"errors":[]}"#);
    }
}
