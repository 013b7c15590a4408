use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroBackgroundProps {
    #[prop_or_default]
    pub video_src: Option<AttrValue>,
    #[prop_or_default]
    pub image_src: Option<AttrValue>,
    #[prop_or_default]
    pub poster: Option<AttrValue>,
    /// 0.0..=1.0, higher is darker.
    #[prop_or(0.45)]
    pub overlay_opacity: f64,
    #[prop_or(0.2)]
    pub pattern_opacity: f64,
}

/// Full-bleed video behind the hero, falling back to a still image when it fails.
#[function_component(HeroBackground)]
pub fn hero_background(props: &HeroBackgroundProps) -> Html {
    let video_error = use_state(|| false);
    let video_loaded = use_state(|| false);

    let show_video = props.video_src.is_some() && !*video_error;
    let show_image = !show_video && props.image_src.is_some();

    let on_loaded = {
        let video_loaded = video_loaded.clone();
        Callback::from(move |_: Event| video_loaded.set(true))
    };
    let on_error = {
        let video_error = video_error.clone();
        Callback::from(move |_: Event| {
            log::warn!("Hero video failed to load, using the image fallback");
            video_error.set(true);
        })
    };

    html! {
        <>
            <style>{HERO_CSS}</style>
            {
                match (&props.video_src, show_video) {
                    (Some(src), true) => html! {
                        <video
                            class={classes!("hero-media", (*video_loaded).then(|| "loaded"))}
                            autoplay=true
                            muted=true
                            loop=true
                            playsinline=true
                            poster={props.poster.clone()}
                            onloadeddata={on_loaded}
                            onerror={on_error.clone()}
                        >
                            <source src={src.clone()} type="video/mp4" />
                            // A failing last source is reported here, not on the video.
                            <source src={src.clone()} type="video/webm" onerror={on_error} />
                        </video>
                    },
                    _ => html! {},
                }
            }
            {
                match &props.image_src {
                    Some(src) if show_image => html! {
                        <div class="hero-media loaded" style={format!("background-image: url({});", src)}></div>
                    },
                    _ => html! {},
                }
            }
            <div class="hero-overlay" style={format!("background: rgba(0,0,0,{});", props.overlay_opacity)}></div>
            <div class="hero-pattern" style={format!("opacity: {};", props.pattern_opacity)}></div>
        </>
    }
}

const HERO_CSS: &str = r#"
    .hero-media {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        background-size: cover;
        background-position: center;
        opacity: 0;
        transition: opacity 700ms;
    }
    .hero-media.loaded {
        opacity: 1;
    }
    .hero-overlay, .hero-pattern {
        position: absolute;
        inset: 0;
    }
    .hero-pattern {
        background-image: linear-gradient(rgba(255,255,255,0.06) 1px, transparent 1px),
            linear-gradient(90deg, rgba(255,255,255,0.06) 1px, transparent 1px);
        background-size: 60px 60px;
    }
"#;
