use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero_background::HeroBackground;
use crate::components::navbar::scroll_to_section;
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::content::{CatalogEntry, CatalogPage, ShowcasePage, CLEANING, ENGINEERING, LAUNDRY, WASHING_BAY};
use crate::reveal::settings::AnimationKind;

const PREVIEW_FEATURES: usize = 3;
const STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Cleaning,
    Engineering,
}

impl Catalog {
    fn page(&self) -> &'static CatalogPage {
        match self {
            Catalog::Cleaning => &CLEANING,
            Catalog::Engineering => &ENGINEERING,
        }
    }
}

pub fn quote_href(service: &str) -> String {
    format!(
        "mailto:{}?subject={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(&format!("Quote request: {}", service))
    )
}

#[derive(Properties, PartialEq)]
pub struct CatalogProps {
    pub catalog: Catalog,
}

/// Service grid; clicking a card opens its full description.
#[function_component(CatalogView)]
pub fn catalog_view(props: &CatalogProps) -> Html {
    let page = props.catalog.page();
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let cards = page.entries.iter().enumerate().map(|(idx, entry)| {
        let open = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(idx)))
        };
        html! {
            <ScrollReveal animation={AnimationKind::FadeUp} delay_ms={(idx as u32 % 3) * STAGGER_MS}>
                <div class="card catalog-card" onclick={open}>
                    <div class="catalog-image" style={format!("background-image: url({});", entry.image)}>
                        <div class="icon-badge">{entry.icon}</div>
                    </div>
                    <div class="catalog-body">
                        <h3>{entry.title}</h3>
                        <p class="muted">{entry.summary}</p>
                        <ul class="check-list">
                            { for entry.features.iter().take(PREVIEW_FEATURES).map(|f| html! { <li>{*f}</li> }) }
                        </ul>
                        <span class="learn-more">{"Learn More →"}</span>
                    </div>
                </div>
            </ScrollReveal>
        }
    });

    let modal = selected
        .and_then(|idx| page.entries.get(idx))
        .map(|entry| detail_modal(entry, close.clone()))
        .unwrap_or_else(|| html! {});

    html! {
        <div class="catalog-page">
            <style>{SERVICES_CSS}</style>
            <section class="page-hero" style={format!("background-image: url({});", page.hero_image)}>
                <div class="page-hero-shade"></div>
                <div class="container page-hero-content">
                    <ScrollReveal animation={AnimationKind::FadeDown}>
                        <h1>{page.heading}</h1>
                        <p class="page-hero-tagline">{page.tagline}</p>
                    </ScrollReveal>
                    <ScrollReveal animation={AnimationKind::FadeUp} delay_ms={200}>
                        <div class="hero-actions">
                            <a class="btn" href={quote_href(page.heading)}>{"Get a Free Quote"}</a>
                            <a class="btn outline" href="#services-grid">{"View Our Work"}</a>
                        </div>
                    </ScrollReveal>
                </div>
            </section>

            <section id="services-grid" class="section">
                <div class="container">
                    <ScrollReveal animation={AnimationKind::FadeUp} class="section-heading">
                        <h2>{page.grid_heading}</h2>
                        <p class="muted">{page.grid_tagline}</p>
                    </ScrollReveal>
                    <div class="catalog-grid">
                        { for cards }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <ScrollReveal animation={AnimationKind::ScaleIn}>
                        <div class="cta-panel">
                            <h2>{"Ready to Get Started?"}</h2>
                            <p>{"Contact us today for a free consultation and quote."}</p>
                            <div class="hero-actions">
                                <a class="btn" href={format!("tel:{}", config::CONTACT_PHONE)}>{"📞 Call Us Now"}</a>
                                <a class="btn outline" href={format!("mailto:{}", config::CONTACT_EMAIL)}>{"✉️ Email Us"}</a>
                            </div>
                        </div>
                    </ScrollReveal>
                </div>
            </section>

            { modal }
            <Footer />
        </div>
    }
}

fn detail_modal(entry: &CatalogEntry, close: Callback<MouseEvent>) -> Html {
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal card" onclick={keep_open}>
                <div class="modal-image" style={format!("background-image: url({});", entry.image)}>
                    <button class="modal-close" aria-label="Close" onclick={close}>{"✕"}</button>
                </div>
                <div class="modal-body">
                    <div class="modal-title">
                        <div class="icon-badge">{entry.icon}</div>
                        <h3>{entry.title}</h3>
                    </div>
                    <p class="muted">{entry.details}</p>
                    <h4>{"What's Included:"}</h4>
                    <ul class="check-list">
                        { for entry.features.iter().map(|f| html! { <li>{*f}</li> }) }
                    </ul>
                    <a class="btn modal-cta" href={quote_href(entry.title)}>{"Request a Quote"}</a>
                </div>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showcase {
    Laundry,
    WashingBay,
}

impl Showcase {
    fn page(&self) -> &'static ShowcasePage {
        match self {
            Showcase::Laundry => &LAUNDRY,
            Showcase::WashingBay => &WASHING_BAY,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub showcase: Showcase,
}

/// Video hero, four feature cards and the contact section.
#[function_component(ShowcaseView)]
pub fn showcase_view(props: &ShowcaseProps) -> Html {
    let page = props.showcase.page();
    let to_contact = Callback::from(|_: MouseEvent| {
        scroll_to_section("contact");
    });

    html! {
        <div class="showcase-page">
            <style>{SERVICES_CSS}</style>
            <section class="page-hero">
                <HeroBackground
                    video_src={Some(AttrValue::from(page.hero_video))}
                    image_src={Some(AttrValue::from(page.hero_image))}
                    overlay_opacity={0.55}
                />
                <div class="container page-hero-content">
                    <ScrollReveal animation={AnimationKind::FadeUp}>
                        <h1>{page.heading}</h1>
                        <p class="page-hero-tagline">{page.tagline}</p>
                        <button class="btn" onclick={to_contact}>{"Book Now"}</button>
                    </ScrollReveal>
                </div>
            </section>

            <section class="section">
                <div class="container feature-grid">
                    { for page.features.iter().zip(0u32..).map(|(feature, idx)| html! {
                        <ScrollReveal animation={AnimationKind::FadeUp} delay_ms={idx * STAGGER_MS}>
                            <div class="card feature-card">
                                <div class="icon-badge">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p class="muted small">{feature.description}</p>
                            </div>
                        </ScrollReveal>
                    }) }
                </div>
            </section>

            <ContactSection />
            <Footer />
        </div>
    }
}

const SERVICES_CSS: &str = r#"
    .page-hero {
        position: relative;
        min-height: 70vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        padding: 8rem 0 5rem;
        color: white;
        background-size: cover;
        background-position: center;
        text-align: center;
    }
    .page-hero-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, rgba(30, 58, 138, 0.85), rgba(55, 48, 163, 0.85));
    }
    .page-hero-content {
        position: relative;
        z-index: 10;
        max-width: 56rem;
    }
    .page-hero h1 {
        font-size: clamp(2.25rem, 6vw, 3.75rem);
        margin: 0 0 1.5rem;
    }
    .page-hero-tagline {
        font-size: 1.25rem;
        opacity: 0.9;
        margin-bottom: 2rem;
    }
    .catalog-grid, .feature-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
        gap: 2rem;
    }
    .catalog-card {
        overflow: hidden;
        cursor: pointer;
        transition: transform 300ms, box-shadow 300ms;
    }
    .catalog-card:hover {
        transform: translateY(-0.5rem);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
    }
    .catalog-image, .modal-image {
        position: relative;
        height: 12rem;
        background-size: cover;
        background-position: center;
        display: flex;
        align-items: flex-end;
        padding: 1rem;
        box-sizing: border-box;
    }
    .catalog-body, .modal-body {
        padding: 1.5rem;
    }
    .learn-more {
        color: var(--primary);
        font-weight: 600;
    }
    .feature-card {
        padding: 1.5rem;
        height: 100%;
        box-sizing: border-box;
    }
    .cta-panel {
        border-radius: 1.5rem;
        padding: 3rem 2rem;
        text-align: center;
        color: white;
        background: linear-gradient(135deg, #111827, #1f2937);
    }
    .modal-backdrop {
        position: fixed;
        inset: 0;
        z-index: 60;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(4px);
    }
    .modal {
        max-width: 42rem;
        width: 100%;
        max-height: 90vh;
        overflow-y: auto;
        border-radius: 1.5rem;
    }
    .modal-image {
        height: 16rem;
        align-items: flex-start;
        justify-content: flex-end;
    }
    .modal-close {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        border: none;
        background: rgba(255, 255, 255, 0.9);
        cursor: pointer;
    }
    .modal-title {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .modal-cta {
        display: block;
        text-align: center;
        margin-top: 1.5rem;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_href() {
        assert_eq!(
            quote_href("Roofing"),
            "mailto:info@albertuganda.com?subject=Quote%20request%3A%20Roofing"
        );
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(Catalog::Cleaning.page().heading, CLEANING.heading);
        assert_eq!(Catalog::Engineering.page().entries.len(), ENGINEERING.entries.len());
        assert_eq!(Showcase::WashingBay.page().heading, WASHING_BAY.heading);
    }
}
