use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::scroll_reveal::use_visibility;
use crate::reveal::settings::Threshold;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    /// Autoplay step; ignored while paused or stopped.
    Tick,
    Next,
    Prev,
    Hover(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
    pub hovered: bool,
    /// Set by the first manual navigation; autoplay never resumes after that.
    pub stopped: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            hovered: false,
            stopped: false,
        }
    }

    pub fn autoplaying(&self, on_screen: bool) -> bool {
        on_screen && self.len > 1 && !self.hovered && !self.stopped
    }

    pub fn apply(&self, action: CarouselAction) -> Self {
        let mut next = self.clone();
        if self.len == 0 {
            return next;
        }
        match action {
            CarouselAction::Tick => {
                if !self.hovered && !self.stopped {
                    next.index = (self.index + 1) % self.len;
                }
            }
            CarouselAction::Next => {
                next.stopped = true;
                next.index = (self.index + 1) % self.len;
            }
            CarouselAction::Prev => {
                next.stopped = true;
                next.index = (self.index + self.len - 1) % self.len;
            }
            CarouselAction::Hover(hovered) => next.hovered = hovered,
        }
        next
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Html>,
    pub autoplay_ms: u32,
    #[prop_or_default]
    pub label: AttrValue,
}

/// Looping slide strip. Autoplay runs only while the strip is on screen and not hovered.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = use_reducer(|| CarouselState::new(props.slides.len()));
    let (node, on_screen) = use_visibility(Threshold::DEFAULT, false);

    let interval_ms = if state.autoplaying(on_screen) { props.autoplay_ms } else { 0 };
    {
        let state = state.clone();
        use_interval(move || state.dispatch(CarouselAction::Tick), interval_ms);
    }

    let dispatch = |action: CarouselAction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(action))
    };

    html! {
        <div
            class="carousel"
            ref={node}
            aria-label={props.label.clone()}
            onmouseenter={dispatch(CarouselAction::Hover(true))}
            onmouseleave={dispatch(CarouselAction::Hover(false))}
        >
            <style>{CAROUSEL_CSS}</style>
            <div class="carousel-viewport">
                <div
                    class="carousel-track"
                    style={format!("transform: translateX(calc(-{} * var(--slide-basis)));", state.index)}
                >
                    { for props.slides.iter().map(|slide| html! {
                        <div class="carousel-slide">{ slide.clone() }</div>
                    }) }
                </div>
            </div>
            <button class="carousel-nav carousel-prev" aria-label="Previous slide" onclick={dispatch(CarouselAction::Prev)}>{"‹"}</button>
            <button class="carousel-nav carousel-next" aria-label="Next slide" onclick={dispatch(CarouselAction::Next)}>{"›"}</button>
        </div>
    }
}

const CAROUSEL_CSS: &str = r#"
    .carousel {
        --slide-basis: 100%;
        position: relative;
        width: 100%;
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .carousel-viewport {
        overflow: hidden;
    }
    .carousel-track {
        display: flex;
        transition: transform 500ms ease;
    }
    .carousel-slide {
        flex: 0 0 var(--slide-basis);
        padding: 0 0.5rem;
        box-sizing: border-box;
    }
    .carousel-nav {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        border: 1px solid rgba(127, 127, 127, 0.3);
        background: var(--card);
        color: inherit;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .carousel-prev {
        left: 0.5rem;
    }
    .carousel-next {
        right: 0.5rem;
    }
    @media (min-width: 768px) {
        .carousel {
            --slide-basis: 50%;
        }
        .carousel-prev {
            left: -3rem;
        }
        .carousel-next {
            right: -3rem;
        }
    }
    @media (min-width: 1024px) {
        .carousel {
            --slide-basis: 33.3333%;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoplay_loops() {
        let mut state = CarouselState::new(3);
        for expected in [1, 2, 0, 1] {
            state = state.apply(CarouselAction::Tick);
            assert_eq!(state.index, expected);
        }
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let state = CarouselState::new(3).apply(CarouselAction::Hover(true));
        assert!(!state.autoplaying(true));
        assert_eq!(state.apply(CarouselAction::Tick).index, 0);

        let resumed = state.apply(CarouselAction::Hover(false));
        assert!(resumed.autoplaying(true));
        assert!(!resumed.autoplaying(false));
    }

    #[test]
    fn test_manual_navigation_stops_autoplay() {
        let state = CarouselState::new(4).apply(CarouselAction::Prev);
        assert_eq!(state.index, 3);
        assert!(state.stopped);
        assert!(!state.autoplaying(true));
        assert_eq!(state.apply(CarouselAction::Tick).index, 3);
        assert_eq!(state.apply(CarouselAction::Next).index, 0);
    }

    #[test]
    fn test_empty_and_single_slide() {
        let empty = CarouselState::new(0);
        assert_eq!(empty.apply(CarouselAction::Next), empty);
        assert!(!CarouselState::new(1).autoplaying(true));
    }
}
