use log::Level;

pub const COMPANY_NAME: &str = "Albert International Uganda Limited";
pub const COMPANY_SHORT_NAME: &str = "AIU";
pub const CONTACT_PHONE: &str = "(555) 123-4567";
pub const CONTACT_HOURS: &str = "Mon-Sun: 7AM - 9PM";
pub const CONTACT_EMAIL: &str = "info@albertuganda.com";
pub const SERVICE_AREA: &str = "Greater Metro Area";

/// Mailbox the contact form falls back to when no relay is configured.
pub const FALLBACK_MAILBOX: &str = "ocenmoses76@gmail.com";

/// International format, no `+` or spaces.
pub const WHATSAPP_PHONE: &str = "256776112595";
pub const WHATSAPP_GREETING: &str = "Hello! I saw your website and would like a cleaning quote.";

const FORMSPREE_BASE: &str = "https://formspree.io/f/";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Relay endpoint baked in at build time from `FORMSPREE_ENDPOINT` or `FORMSPREE_FORM_ID`.
pub fn relay_endpoint() -> Option<String> {
    resolve_relay_endpoint(option_env!("FORMSPREE_ENDPOINT"), option_env!("FORMSPREE_FORM_ID"))
}

/// A full endpoint wins over a form id; blank values count as unset.
pub fn resolve_relay_endpoint(endpoint: Option<&str>, form_id: Option<&str>) -> Option<String> {
    let non_blank: fn(Option<&str>) -> Option<&str> = |value| value.map(str::trim).filter(|v| !v.is_empty());

    non_blank(endpoint)
        .map(str::to_string)
        .or_else(|| non_blank(form_id).map(|id| format!("{}{}", FORMSPREE_BASE, id)))
}

pub fn whatsapp_href() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_PHONE,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_preferred_over_form_id() {
        assert_eq!(
            resolve_relay_endpoint(Some("https://relay.example/x"), Some("abc")),
            Some("https://relay.example/x".to_string())
        );
    }

    #[test]
    fn test_form_id_fallback() {
        assert_eq!(
            resolve_relay_endpoint(None, Some("xyzzy")),
            Some("https://formspree.io/f/xyzzy".to_string())
        );
        assert_eq!(
            resolve_relay_endpoint(Some("  "), Some(" xyzzy ")),
            Some("https://formspree.io/f/xyzzy".to_string())
        );
    }

    #[test]
    fn test_no_relay() {
        assert_eq!(resolve_relay_endpoint(None, None), None);
        assert_eq!(resolve_relay_endpoint(Some(""), Some("")), None);
    }

    #[test]
    fn test_whatsapp_href_is_encoded() {
        let href = whatsapp_href();
        assert!(href.starts_with("https://wa.me/256776112595?text=Hello%21%20I%20saw"));
        assert!(!href.contains(' '));
    }

    #[test]
    fn test_page_title_matches_company_name() {
        let index = include_str!("../index.html");
        assert!(index.contains(&format!("<title>{}</title>", COMPANY_NAME)));
    }

    #[test]
    fn test_manifest_only_binds_used_media_elements() {
        let manifest = include_str!("../Cargo.toml");
        assert!(!manifest.contains("\"HtmlVideoElement\""));
        assert!(manifest.contains("\"MediaQueryList\""));
    }
}
