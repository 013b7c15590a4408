use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use super::settings::Threshold;

/// Visibility bookkeeping for one observed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedRegion {
    is_visible: bool,
    has_triggered: bool,
    trigger_once: bool,
}

impl ObservedRegion {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            is_visible: false,
            has_triggered: false,
            trigger_once,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    /// Nothing can change any more: trigger-once and already revealed.
    pub fn is_settled(&self) -> bool {
        self.trigger_once && self.has_triggered
    }

    /// Already triggered and on screen, for hosts that cannot detect visibility.
    pub fn revealed(trigger_once: bool) -> Self {
        Self {
            is_visible: true,
            has_triggered: true,
            trigger_once,
        }
    }

    /// Applies a report from the detector. Returns the new state if it changed.
    pub fn record(&mut self, visible: bool) -> Option<bool> {
        if self.is_settled() || visible == self.is_visible {
            return None;
        }
        self.is_visible = visible;
        if visible {
            self.has_triggered = true;
        }
        Some(visible)
    }
}

/// Decides whether an intersection entry counts as past the threshold.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: Threshold) -> bool {
    if !is_intersecting {
        return false;
    }
    threshold.get() == 0.0 || ratio >= threshold.get()
}

/// The platform side of a live observation.
pub trait Subscription {
    fn disconnect(&self);
}

struct IntersectionSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Subscription for IntersectionSubscription {
    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Live observation of one node. Stopping is idempotent and also happens on drop.
///
/// `stop` only disconnects; the JS callback stays allocated until the handle is dropped,
/// so stopping from inside a visibility notification is safe.
pub struct ObserverHandle {
    subscription: Option<Box<dyn Subscription>>,
    stopped: bool,
    fallback: bool,
}

impl ObserverHandle {
    pub fn live(subscription: impl Subscription + 'static) -> Self {
        Self {
            subscription: Some(Box::new(subscription)),
            stopped: false,
            fallback: false,
        }
    }

    pub fn inert() -> Self {
        Self {
            subscription: None,
            stopped: true,
            fallback: false,
        }
    }

    /// No detection behind it: the region was reported visible straight away.
    pub fn fallback() -> Self {
        Self {
            subscription: None,
            stopped: true,
            fallback: true,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.stopped
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        if let Some(subscription) = &self.subscription {
            subscription.disconnect();
        }
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Host capability that reports visibility crossings for a node.
pub trait VisibilityDetector {
    fn observe(&self, node: &Element, threshold: Threshold, on_change: Callback<bool>) -> ObserverHandle;

    /// Regions are shown in their final state without waiting for a crossing.
    fn reveals_immediately(&self) -> bool {
        false
    }
}

/// Backed by the browser's `IntersectionObserver`.
pub struct IntersectionDetector;

impl VisibilityDetector for IntersectionDetector {
    fn observe(&self, node: &Element, threshold: Threshold, on_change: Callback<bool>) -> ObserverHandle {
        if !node.is_connected() {
            debug!("Skipping observation of a detached node");
            return ObserverHandle::inert();
        }

        let fallback = on_change.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change.emit(crosses_threshold(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        threshold,
                    ));
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold.get()));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(node);
                ObserverHandle::live(IntersectionSubscription {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                warn!("IntersectionObserver rejected, showing content immediately: {:?}", err);
                show_immediately(node.is_connected(), fallback)
            }
        }
    }
}

/// Used when the host cannot detect intersections: every region is visible at once.
pub struct AlwaysVisible;

impl VisibilityDetector for AlwaysVisible {
    fn observe(&self, node: &Element, _threshold: Threshold, on_change: Callback<bool>) -> ObserverHandle {
        show_immediately(node.is_connected(), on_change)
    }

    fn reveals_immediately(&self) -> bool {
        true
    }
}

/// Reports a connected node as visible once. A detached node gets no callback.
fn show_immediately(connected: bool, on_change: Callback<bool>) -> ObserverHandle {
    if !connected {
        return ObserverHandle::inert();
    }
    on_change.emit(true);
    ObserverHandle::fallback()
}

pub fn intersection_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// The detector picked for this page, shared with every reveal wrapper through context.
#[derive(Clone)]
pub struct DetectorContext(Rc<dyn VisibilityDetector>);

impl DetectorContext {
    pub fn detect() -> Self {
        if intersection_supported() {
            DetectorContext(Rc::new(IntersectionDetector))
        } else {
            warn!("IntersectionObserver unavailable, scroll reveals are disabled");
            DetectorContext(Rc::new(AlwaysVisible))
        }
    }

    pub fn with_detector(detector: Rc<dyn VisibilityDetector>) -> Self {
        DetectorContext(detector)
    }

    pub fn observe(&self, node: &Element, threshold: Threshold, on_change: Callback<bool>) -> ObserverHandle {
        self.0.observe(node, threshold, on_change)
    }

    pub fn reveals_immediately(&self) -> bool {
        self.0.reveals_immediately()
    }
}

impl PartialEq for DetectorContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_region_starts_hidden() {
        let region = ObservedRegion::new(true);
        assert!(!region.is_visible());
        assert!(!region.has_triggered());
        assert!(!region.is_settled());
    }

    #[test]
    fn test_trigger_once_is_monotonic() {
        let mut region = ObservedRegion::new(true);
        assert_eq!(region.record(false), None);
        assert_eq!(region.record(true), Some(true));
        assert!(region.is_settled());

        assert_eq!(region.record(false), None);
        assert_eq!(region.record(true), None);
        assert!(region.is_visible());
    }

    #[test]
    fn test_revealed_region_ignores_reports() {
        let mut region = ObservedRegion::revealed(true);
        assert!(region.is_visible() && region.is_settled());
        assert_eq!(region.record(true), None);
        assert_eq!(region.record(false), None);
    }

    #[test]
    fn test_repeatable_reports_every_crossing() {
        let mut region = ObservedRegion::new(false);
        assert_eq!(region.record(true), Some(true));
        assert_eq!(region.record(true), None);
        assert_eq!(region.record(false), Some(false));
        assert_eq!(region.record(true), Some(true));
        assert!(region.has_triggered());
        assert!(!region.is_settled());
    }

    #[test]
    fn test_threshold_crossing() {
        let tenth = Threshold::DEFAULT;
        assert!(!crosses_threshold(false, 0.5, tenth));
        assert!(!crosses_threshold(true, 0.05, tenth));
        assert!(crosses_threshold(true, 0.1, tenth));
        assert!(!crosses_threshold(true, 0.0991, tenth));
        assert!(crosses_threshold(true, 0.0, Threshold::new(0.0).unwrap()));
        assert!(!crosses_threshold(true, 0.9995, Threshold::new(1.0).unwrap()));
        assert!(crosses_threshold(true, 1.0, Threshold::new(1.0).unwrap()));
    }

    struct CountingSubscription(Rc<Cell<u32>>);

    impl Subscription for CountingSubscription {
        fn disconnect(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn recorder() -> (Callback<bool>, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = seen.clone();
            Callback::from(move |visible| seen.borrow_mut().push(visible))
        };
        (callback, seen)
    }

    #[test]
    fn test_live_handle_disconnects_once() {
        let disconnects = Rc::new(Cell::new(0));
        let mut handle = ObserverHandle::live(CountingSubscription(disconnects.clone()));
        assert!(handle.is_active());

        handle.stop();
        handle.stop();
        assert!(!handle.is_active());
        drop(handle);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_dropping_live_handle_disconnects() {
        let disconnects = Rc::new(Cell::new(0));
        drop(ObserverHandle::live(CountingSubscription(disconnects.clone())));
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_without_detection_connected_node_is_visible_at_once() {
        let (callback, seen) = recorder();
        let handle = show_immediately(true, callback);
        assert_eq!(*seen.borrow(), vec![true]);
        assert!(handle.is_fallback());
        assert!(!handle.is_active());
    }

    #[test]
    fn test_detached_node_never_calls_back() {
        let (callback, seen) = recorder();
        let handle = show_immediately(false, callback);
        assert!(seen.borrow().is_empty());
        assert!(!handle.is_fallback());
        assert!(!handle.is_active());
    }

    #[test]
    fn test_detector_context_reports_fallback() {
        assert!(DetectorContext::with_detector(Rc::new(AlwaysVisible)).reveals_immediately());
        assert!(!DetectorContext::with_detector(Rc::new(IntersectionDetector)).reveals_immediately());
    }

    #[test]
    fn test_inert_handle_stop_is_idempotent() {
        let mut handle = ObserverHandle::inert();
        assert!(!handle.is_active());
        handle.stop();
        handle.stop();
        assert!(!handle.is_active());
    }
}
