use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::Element;
use yew::context::ContextHandle;
use yew::prelude::*;

use crate::reveal::machine::RevealDriver;
use crate::reveal::observer::{DetectorContext, ObservedRegion, ObserverHandle};
use crate::reveal::settings::{AnimationKind, RevealSettings, Threshold};
use crate::reveal::timer::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub animation: AnimationKind,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub threshold: Threshold,
    #[prop_or(true)]
    pub trigger_once: bool,
}

impl ScrollRevealProps {
    fn settings(&self) -> RevealSettings {
        RevealSettings {
            animation: self.animation,
            delay_ms: self.delay_ms,
            threshold: self.threshold,
            trigger_once: self.trigger_once,
        }
    }
}

pub enum ScrollRevealMsg {
    Visibility(bool),
    DelayElapsed(u64),
    Redraw,
}

/// Wraps content that slides or fades into place the first time it scrolls into view.
/// Settings are read once at mount. Without visibility detection the content is shown as is.
pub struct ScrollReveal {
    node: NodeRef,
    driver: RevealDriver<BrowserScheduler>,
    detector: DetectorContext,
    observer: Option<ObserverHandle>,
    _detector_handle: Option<ContextHandle<DetectorContext>>,
}

impl Component for ScrollReveal {
    type Message = ScrollRevealMsg;
    type Properties = ScrollRevealProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (detector, handle) = match ctx.link().context::<DetectorContext>(Callback::noop()) {
            Some((detector, handle)) => (detector, Some(handle)),
            None => (DetectorContext::detect(), None),
        };

        let settings = ctx.props().settings();
        let driver = if detector.reveals_immediately() {
            RevealDriver::revealed(settings, BrowserScheduler)
        } else {
            RevealDriver::new(settings, BrowserScheduler)
        };

        Self {
            node: NodeRef::default(),
            driver,
            detector,
            observer: None,
            _detector_handle: handle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ScrollRevealMsg::Visibility(visible) => {
                let wake = ctx.link().callback(ScrollRevealMsg::DelayElapsed);
                let changed = self.driver.on_visibility(visible, wake);
                if self.driver.is_settled() {
                    if let Some(observer) = self.observer.as_mut() {
                        observer.stop();
                    }
                }
                changed
            }
            ScrollRevealMsg::DelayElapsed(ticket) => self.driver.on_delay_elapsed(ticket),
            ScrollRevealMsg::Redraw => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div
                ref={self.node.clone()}
                class={classes!("scroll-reveal", props.class.clone())}
                style={self.driver.style()}
                data-reveal={self.driver.settings().animation.as_str()}
                data-reveal-phase={self.driver.phase().as_str()}
            >
                { props.children.clone() }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.detector.reveals_immediately() {
            return;
        }
        match self.node.cast::<Element>() {
            Some(element) => {
                let on_change = ctx.link().callback(ScrollRevealMsg::Visibility);
                let threshold = self.driver.settings().threshold;
                let observer = self.detector.observe(&element, threshold, on_change);
                // The observer could not be built after all; the queued report is ignored.
                if observer.is_fallback() && self.driver.reveal_now() {
                    ctx.link().send_message(ScrollRevealMsg::Redraw);
                }
                self.observer = Some(observer);
            }
            None => debug!("Reveal wrapper mounted without a node"),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.driver.teardown();
        if let Some(mut observer) = self.observer.take() {
            observer.stop();
        }
    }
}

/// Reports whether the node behind the returned ref is on screen.
///
/// With `trigger_once` the flag latches at `true` and the observation ends there.
#[hook]
pub fn use_visibility(threshold: Threshold, trigger_once: bool) -> (NodeRef, bool) {
    let node = use_node_ref();
    let detector = use_context::<DetectorContext>();
    let visible = use_state(|| detector.as_ref().map_or(false, DetectorContext::reveals_immediately));

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let handle: Rc<RefCell<Option<ObserverHandle>>> = Rc::new(RefCell::new(None));
                let region = Rc::new(RefCell::new(ObservedRegion::new(trigger_once)));

                if let Some(element) = node.cast::<Element>() {
                    let detector = detector.unwrap_or_else(DetectorContext::detect);
                    let on_change = {
                        let handle = handle.clone();
                        Callback::from(move |is_visible: bool| {
                            let mut region = region.borrow_mut();
                            if let Some(is_visible) = region.record(is_visible) {
                                visible.set(is_visible);
                            }
                            if region.is_settled() {
                                if let Ok(mut handle) = handle.try_borrow_mut() {
                                    if let Some(handle) = handle.as_mut() {
                                        handle.stop();
                                    }
                                }
                            }
                        })
                    };
                    let observer = detector.observe(&element, threshold, on_change);
                    *handle.borrow_mut() = Some(observer);
                }

                move || {
                    handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    (node, *visible)
}
