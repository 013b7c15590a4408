use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::navbar::go_to_section;
use crate::config;

const SERVICE_LINKS: [(&str, &str); 4] = [
    ("services", "Residential"),
    ("services", "Commercial"),
    ("services", "Deep Cleaning"),
    ("services", "Specialized"),
];

const COMPANY_LINKS: [(&str, &str); 3] = [
    ("about", "About Us"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

fn section_links(links: &[(&'static str, &'static str)], navigator: &Option<Navigator>) -> Html {
    links
        .iter()
        .map(|&(id, label)| {
            let navigator = navigator.clone();
            let onclick = Callback::from(move |_: MouseEvent| go_to_section(id, navigator.as_ref()));
            html! {
                <li><button class="footer-link" {onclick}>{label}</button></li>
            }
        })
        .collect()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let navigator = use_navigator();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="brand">{config::COMPANY_NAME}</h3>
                        <p class="muted small">{"Professional services you can trust. Making your space shine since 2015."}</p>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <ul>
                            { section_links(&SERVICE_LINKS, &navigator) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Company"}</h4>
                        <ul>
                            { section_links(&COMPANY_LINKS, &navigator) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <ul class="muted small">
                            <li>{config::CONTACT_PHONE}</li>
                            <li>{config::CONTACT_EMAIL}</li>
                            <li>{config::SERVICE_AREA}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom muted small">
                    {format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::navbar::section_from_hash;

    #[test]
    fn test_links_point_at_home_sections() {
        for (id, label) in SERVICE_LINKS.iter().chain(COMPANY_LINKS.iter()) {
            assert_eq!(section_from_hash(id), Some(*id), "{label}");
        }
    }
}
