use yew::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero_background::HeroBackground;
use crate::components::navbar::{scroll_to_section, section_from_hash};
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::content::{ServiceSummary, Testimonial, HIGHLIGHTS, SERVICES, STATS, TESTIMONIALS};
use crate::reveal::settings::AnimationKind;

const SERVICES_AUTOPLAY_MS: u32 = 3000;
const TESTIMONIALS_AUTOPLAY_MS: u32 = 2000;
const STAGGER_MS: u32 = 100;

fn scroll_button(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        scroll_to_section(id);
    })
}

fn service_card(service: &ServiceSummary) -> Html {
    html! {
        <div class="card service-card">
            <div class="icon-badge">{service.icon}</div>
            <h3>{service.title}</h3>
            <p class="muted">{service.description}</p>
            <ul class="check-list">
                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
        </div>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="card testimonial-card">
            <div class="stars">{("★").repeat(usize::from(testimonial.rating))}</div>
            <p class="muted small">{format!("\"{}\"", testimonial.content)}</p>
            <div class="testimonial-author">
                <div class="avatar">{testimonial.initial()}</div>
                <div>
                    <p class="author-name">{testimonial.name}</p>
                    <p class="muted small">{testimonial.role}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                let target = window
                    .location()
                    .hash()
                    .ok()
                    .and_then(|hash| section_from_hash(&hash));
                match target {
                    Some(id) => {
                        scroll_to_section(id);
                    }
                    None => window.scroll_to_with_x_and_y(0.0, 0.0),
                }
            }
            || ()
        },
        (),
    );

    let service_slides: Vec<Html> = SERVICES.iter().map(service_card).collect();
    let testimonial_slides: Vec<Html> = TESTIMONIALS.iter().map(testimonial_card).collect();

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>

            <section id="home" class="hero">
                <HeroBackground video_src={Some(AttrValue::from("/clean.mp4"))} />
                <div class="container hero-content">
                    <div class="hero-badge">{"✨ Professional Cleaning Services"}</div>
                    <h1>{"Your Space, Our Expertise"}</h1>
                    <p class="hero-subtitle">
                        {"Transform your home or office with our professional cleaning services. We deliver spotless results every time."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn" onclick={scroll_button("contact")}>{"Get Free Quote"}</button>
                        <button class="btn outline" onclick={scroll_button("services")}>{"Our Services"}</button>
                    </div>
                </div>
            </section>

            <section id="services" class="section tinted">
                <div class="container">
                    <ScrollReveal animation={AnimationKind::FadeUp} class="section-heading">
                        <h2>{"Our Services"}</h2>
                        <p class="muted">{"Comprehensive cleaning solutions tailored to your needs"}</p>
                    </ScrollReveal>
                    <ScrollReveal animation={AnimationKind::FadeUp} delay_ms={200}>
                        <Carousel slides={service_slides} autoplay_ms={SERVICES_AUTOPLAY_MS} label="Our services" />
                    </ScrollReveal>
                </div>
            </section>

            <section id="about" class="section">
                <div class="container about-grid">
                    <ScrollReveal animation={AnimationKind::FadeRight}>
                        <h2 class="about-title">{format!("Why Choose {}?", config::COMPANY_NAME)}</h2>
                        <p class="muted about-text">
                            {"With years of experience and a commitment to excellence, we've become the trusted choice for cleaning services in the area. Our team is trained, insured, and dedicated to making your space shine."}
                        </p>
                        <div class="highlight-grid">
                            { for HIGHLIGHTS.iter().zip(0u32..).map(|(item, idx)| html! {
                                <ScrollReveal animation={AnimationKind::FadeUp} delay_ms={idx * STAGGER_MS}>
                                    <div class="highlight">
                                        <div class="icon-badge">{item.icon}</div>
                                        <div>
                                            <h4>{item.title}</h4>
                                            <p class="muted small">{item.description}</p>
                                        </div>
                                    </div>
                                </ScrollReveal>
                            }) }
                        </div>
                        <button class="btn" onclick={scroll_button("contact")}>{"Get Started Today"}</button>
                    </ScrollReveal>

                    <ScrollReveal animation={AnimationKind::FadeLeft} delay_ms={200}>
                        <div class="stats-panel">
                            { for STATS.iter().zip(1u32..).map(|(stat, n)| html! {
                                <ScrollReveal animation={AnimationKind::ScaleIn} delay_ms={n * STAGGER_MS}>
                                    <div class="card stat">
                                        <div class="stat-value">{stat.value}</div>
                                        <div class="muted small">{stat.label}</div>
                                    </div>
                                </ScrollReveal>
                            }) }
                        </div>
                    </ScrollReveal>
                </div>
            </section>

            <section id="testimonials" class="section tinted">
                <div class="container">
                    <ScrollReveal animation={AnimationKind::FadeUp} class="section-heading">
                        <h2>{"What Our Clients Say"}</h2>
                        <p class="muted">{"Don't just take our word for it - hear from our satisfied customers"}</p>
                    </ScrollReveal>
                    <ScrollReveal animation={AnimationKind::FadeUp} delay_ms={200}>
                        <Carousel slides={testimonial_slides} autoplay_ms={TESTIMONIALS_AUTOPLAY_MS} label="Testimonials" />
                    </ScrollReveal>
                </div>
            </section>

            <ContactSection />
            <Footer />
        </div>
    }
}

const HOME_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        padding-top: 5rem;
        color: white;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 56rem;
        text-align: center;
    }
    .hero-badge {
        display: inline-block;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        background: rgba(37, 99, 235, 0.2);
        font-size: 0.875rem;
        font-weight: 500;
        margin-bottom: 2rem;
    }
    .hero h1 {
        font-size: clamp(2.25rem, 7vw, 4.5rem);
        font-weight: 700;
        margin: 0 0 1.5rem;
    }
    .hero-subtitle {
        font-size: clamp(1.1rem, 2.5vw, 1.5rem);
        opacity: 0.85;
        margin: 0 auto 2rem;
        max-width: 42rem;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
    }
    .service-card, .testimonial-card {
        height: 100%;
        padding: 1.5rem;
        box-sizing: border-box;
    }
    .check-list {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        font-size: 0.875rem;
    }
    .check-list li::before {
        content: "✓ ";
        color: var(--primary);
    }
    .stars {
        color: #facc15;
        margin-bottom: 1rem;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .avatar {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(37, 99, 235, 0.1);
        color: var(--primary);
        font-weight: 600;
    }
    .author-name {
        font-weight: 600;
        font-size: 0.875rem;
        margin: 0;
    }
    .about-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        align-items: center;
    }
    .about-title {
        font-size: clamp(1.875rem, 4vw, 3rem);
        margin: 0 0 1.5rem;
    }
    .about-text {
        font-size: 1.1rem;
        margin-bottom: 2rem;
    }
    .highlight-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1.5rem;
        margin-bottom: 2rem;
    }
    .highlight {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }
    .highlight h4 {
        margin: 0 0 0.25rem;
    }
    .stats-panel {
        aspect-ratio: 1;
        border-radius: 1rem;
        padding: 2rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
        align-content: center;
        background: linear-gradient(135deg, rgba(37, 99, 235, 0.2), rgba(37, 99, 235, 0.05));
    }
    .stat {
        aspect-ratio: 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .stat-value {
        font-size: 1.875rem;
        font-weight: 700;
        color: var(--primary);
    }
    @media (min-width: 1024px) {
        .about-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
"#;
