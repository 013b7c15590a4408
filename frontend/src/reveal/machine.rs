use log::debug;
use yew::Callback;

use super::observer::ObservedRegion;
use super::presentation::Presentation;
use super::settings::RevealSettings;
use super::timer::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    PendingDelay,
    Visible,
}

impl RevealPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealPhase::Hidden => "hidden",
            RevealPhase::PendingDelay => "pending",
            RevealPhase::Visible => "visible",
        }
    }
}

/// What the owner of the machine has to do after feeding it an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Nothing,
    Render,
    Arm { ticket: u64, delay_ms: u32 },
    Disarm,
}

/// Hidden -> PendingDelay -> Visible, with the way back to Hidden when visibility drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMachine {
    phase: RevealPhase,
    delay_ms: u32,
    ticket: u64,
}

impl RevealMachine {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            phase: RevealPhase::Hidden,
            delay_ms,
            ticket: 0,
        }
    }

    /// Starts in `Visible`; used when there is nothing to wait for.
    pub fn revealed(delay_ms: u32) -> Self {
        Self {
            phase: RevealPhase::Visible,
            ..Self::new(delay_ms)
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Jumps to `Visible`, invalidating any armed delay.
    pub fn reveal_now(&mut self) -> Command {
        match self.phase {
            RevealPhase::Visible => Command::Nothing,
            RevealPhase::Hidden | RevealPhase::PendingDelay => {
                self.ticket += 1;
                self.phase = RevealPhase::Visible;
                Command::Render
            }
        }
    }

    pub fn on_visibility(&mut self, visible: bool) -> Command {
        match (self.phase, visible) {
            (RevealPhase::Hidden, true) if self.delay_ms == 0 => {
                self.phase = RevealPhase::Visible;
                Command::Render
            }
            (RevealPhase::Hidden, true) => {
                self.ticket += 1;
                self.phase = RevealPhase::PendingDelay;
                Command::Arm {
                    ticket: self.ticket,
                    delay_ms: self.delay_ms,
                }
            }
            (RevealPhase::PendingDelay, false) => {
                self.phase = RevealPhase::Hidden;
                Command::Disarm
            }
            (RevealPhase::Visible, false) => {
                self.phase = RevealPhase::Hidden;
                Command::Render
            }
            _ => Command::Nothing,
        }
    }

    /// Stale tickets belong to timers that were cancelled after they fired.
    pub fn on_delay_elapsed(&mut self, ticket: u64) -> Command {
        if self.phase == RevealPhase::PendingDelay && ticket == self.ticket {
            self.phase = RevealPhase::Visible;
            Command::Render
        } else {
            Command::Nothing
        }
    }
}

/// One reveal wrapper's state: visibility filter, phase machine and its delay timer.
pub struct RevealDriver<S: Scheduler> {
    settings: RevealSettings,
    region: ObservedRegion,
    machine: RevealMachine,
    scheduler: S,
    pending: Option<S::Task>,
    torn_down: bool,
    animated: bool,
}

impl<S: Scheduler> RevealDriver<S> {
    pub fn new(settings: RevealSettings, scheduler: S) -> Self {
        Self {
            settings,
            region: ObservedRegion::new(settings.trigger_once),
            machine: RevealMachine::new(settings.delay_ms),
            scheduler,
            pending: None,
            torn_down: false,
            animated: true,
        }
    }

    /// Shown in its final state from the first render, without delay or transition.
    pub fn revealed(settings: RevealSettings, scheduler: S) -> Self {
        Self {
            settings,
            region: ObservedRegion::revealed(settings.trigger_once),
            machine: RevealMachine::revealed(settings.delay_ms),
            scheduler,
            pending: None,
            torn_down: false,
            animated: false,
        }
    }

    pub fn settings(&self) -> &RevealSettings {
        &self.settings
    }

    pub fn phase(&self) -> RevealPhase {
        self.machine.phase()
    }

    pub fn is_revealed(&self) -> bool {
        self.region.is_visible()
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::for_phase(self.settings.animation, self.phase())
    }

    /// Inline style for the current phase. Content revealed without detection carries no transition.
    pub fn style(&self) -> String {
        if self.animated {
            self.presentation().style()
        } else {
            self.presentation().static_style()
        }
    }

    /// The observer can be released: the region will never report anything new.
    pub fn is_settled(&self) -> bool {
        self.region.is_settled()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Feeds a crossing reported by the detector. `wake` receives the ticket of an armed
    /// delay once it elapses. Returns whether the phase changed.
    pub fn on_visibility(&mut self, visible: bool, wake: Callback<u64>) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(visible) = self.region.record(visible) else {
            return false;
        };
        let command = self.machine.on_visibility(visible);
        self.apply(command, wake)
    }

    pub fn on_delay_elapsed(&mut self, ticket: u64) -> bool {
        if self.torn_down {
            return false;
        }
        let command = self.machine.on_delay_elapsed(ticket);
        if command == Command::Render {
            self.pending = None;
        }
        self.apply(command, Callback::noop())
    }

    /// Detection turned out to be unavailable: show the content now, unanimated.
    pub fn reveal_now(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.pending = None;
        self.animated = false;
        self.region = ObservedRegion::revealed(self.settings.trigger_once);
        self.machine.reveal_now() == Command::Render
    }

    /// Cancels any pending delay; later events are ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.pending = None;
    }

    fn apply(&mut self, command: Command, wake: Callback<u64>) -> bool {
        match command {
            Command::Nothing => false,
            Command::Render => true,
            Command::Arm { ticket, delay_ms } => {
                debug!("Reveal delayed by {}ms", delay_ms);
                self.pending = Some(self.scheduler.schedule(delay_ms, move || wake.emit(ticket)));
                true
            }
            Command::Disarm => {
                self.pending = None;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::settings::{AnimationKind, Threshold};
    use crate::reveal::timer::manual::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Harness {
        driver: RevealDriver<ManualScheduler>,
        clock: ManualScheduler,
        woken: Rc<RefCell<Vec<u64>>>,
    }

    impl Harness {
        fn new(settings: RevealSettings) -> Self {
            let clock = ManualScheduler::default();
            Self {
                driver: RevealDriver::new(settings, clock.clone()),
                clock,
                woken: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn wake(&self) -> Callback<u64> {
            let woken = self.woken.clone();
            Callback::from(move |ticket| woken.borrow_mut().push(ticket))
        }

        fn crossing(&mut self, visible: bool) -> bool {
            let wake = self.wake();
            self.driver.on_visibility(visible, wake)
        }

        /// Advances time and delivers elapsed delays the way the component's message loop does.
        fn advance(&mut self, ms: u64) {
            self.clock.advance(ms);
            let tickets: Vec<u64> = self.woken.borrow_mut().drain(..).collect();
            for ticket in tickets {
                self.driver.on_delay_elapsed(ticket);
            }
        }
    }

    fn fade_up(delay_ms: u32) -> RevealSettings {
        RevealSettings::new(AnimationKind::FadeUp)
            .with_delay(delay_ms)
            .with_threshold(Threshold::DEFAULT)
    }

    #[test]
    fn test_machine_paths() {
        let mut machine = RevealMachine::new(0);
        assert_eq!(machine.phase(), RevealPhase::Hidden);
        assert_eq!(machine.on_visibility(false), Command::Nothing);
        assert_eq!(machine.on_visibility(true), Command::Render);
        assert_eq!(machine.phase(), RevealPhase::Visible);
        assert_eq!(machine.on_visibility(false), Command::Render);
        assert_eq!(machine.phase(), RevealPhase::Hidden);

        let mut delayed = RevealMachine::new(50);
        assert_eq!(delayed.on_visibility(true), Command::Arm { ticket: 1, delay_ms: 50 });
        assert_eq!(delayed.on_delay_elapsed(0), Command::Nothing);
        assert_eq!(delayed.on_delay_elapsed(1), Command::Render);
        assert_eq!(delayed.phase(), RevealPhase::Visible);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut machine = RevealMachine::new(50);
        machine.on_visibility(true);
        machine.on_visibility(false);
        assert_eq!(machine.on_visibility(true), Command::Arm { ticket: 2, delay_ms: 50 });
        assert_eq!(machine.on_delay_elapsed(1), Command::Nothing);
        assert_eq!(machine.phase(), RevealPhase::PendingDelay);
    }

    #[test]
    fn test_initial_presentation_is_hidden() {
        for kind in AnimationKind::ALL {
            let harness = Harness::new(RevealSettings::new(kind));
            assert_eq!(harness.driver.phase(), RevealPhase::Hidden);
            assert_eq!(harness.driver.presentation(), Presentation::hidden(kind));
            assert!(!harness.driver.is_revealed());
        }
    }

    #[test]
    fn test_zero_delay_reveals_in_same_tick() {
        let mut harness = Harness::new(fade_up(0));
        assert!(harness.crossing(true));
        assert_eq!(harness.driver.phase(), RevealPhase::Visible);
        assert!(!harness.driver.is_armed());
        assert_eq!(harness.clock.pending(), 0);
    }

    #[test]
    fn test_delay_is_honoured() {
        let mut harness = Harness::new(fade_up(200));
        harness.crossing(true);
        assert_eq!(harness.driver.phase(), RevealPhase::PendingDelay);

        harness.advance(199);
        assert_eq!(harness.driver.phase(), RevealPhase::PendingDelay);
        harness.advance(1);
        assert_eq!(harness.driver.phase(), RevealPhase::Visible);
        assert_eq!(harness.driver.presentation(), Presentation::VISIBLE);
        assert!(!harness.driver.is_armed());
    }

    #[test]
    fn test_trigger_once_scenario() {
        let mut harness = Harness::new(fade_up(200));

        harness.crossing(true);
        assert_eq!(harness.driver.phase(), RevealPhase::PendingDelay);
        assert!(harness.driver.is_settled());

        harness.advance(200);
        assert_eq!(harness.driver.phase(), RevealPhase::Visible);

        harness.advance(300);
        assert!(!harness.crossing(false));
        assert_eq!(harness.clock.now(), 500);
        assert_eq!(harness.driver.phase(), RevealPhase::Visible);
        assert!(harness.driver.is_revealed());
    }

    #[test]
    fn test_trigger_once_ignores_exit_during_delay() {
        let mut harness = Harness::new(fade_up(200));
        harness.crossing(true);
        harness.advance(100);
        assert!(!harness.crossing(false));
        harness.advance(100);
        assert_eq!(harness.driver.phase(), RevealPhase::Visible);
    }

    #[test]
    fn test_repeatable_exit_cancels_pending_delay() {
        let mut harness = Harness::new(fade_up(200).repeatable());

        harness.crossing(true);
        harness.advance(100);
        assert!(harness.crossing(false));
        assert_eq!(harness.driver.phase(), RevealPhase::Hidden);
        assert!(!harness.driver.is_armed());
        assert_eq!(harness.clock.pending(), 0);

        harness.advance(500);
        assert_eq!(harness.driver.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_repeatable_toggles() {
        let mut harness = Harness::new(RevealSettings::new(AnimationKind::FadeIn).repeatable());
        for _ in 0..3 {
            harness.crossing(true);
            assert_eq!(harness.driver.phase(), RevealPhase::Visible);
            harness.crossing(false);
            assert_eq!(harness.driver.phase(), RevealPhase::Hidden);
        }
        assert!(!harness.driver.is_settled());
    }

    #[test]
    fn test_revealed_driver_starts_visible() {
        let clock = ManualScheduler::default();
        let mut driver = RevealDriver::revealed(fade_up(200), clock.clone());
        assert_eq!(driver.phase(), RevealPhase::Visible);
        assert_eq!(driver.presentation(), Presentation::VISIBLE);
        assert!(!driver.style().contains("transition"));
        assert!(driver.is_settled());

        assert!(!driver.on_visibility(true, Callback::noop()));
        assert!(!driver.is_armed());
        assert_eq!(clock.pending(), 0);
        assert_eq!(driver.phase(), RevealPhase::Visible);
    }

    #[test]
    fn test_repeatable_revealed_driver_stays_visible() {
        let mut harness = Harness::new(fade_up(0).repeatable());
        harness.driver = RevealDriver::revealed(fade_up(0).repeatable(), harness.clock.clone());
        assert!(!harness.crossing(true));
        assert_eq!(harness.driver.phase(), RevealPhase::Visible);
    }

    #[test]
    fn test_reveal_now_cancels_pending_delay() {
        let mut harness = Harness::new(fade_up(200));
        harness.crossing(true);
        assert!(harness.driver.is_armed());
        assert!(harness.driver.style().contains("transition"));

        assert!(harness.driver.reveal_now());
        assert_eq!(harness.driver.phase(), RevealPhase::Visible);
        assert!(!harness.driver.is_armed());
        assert_eq!(harness.clock.pending(), 0);
        assert!(!harness.driver.style().contains("transition"));

        assert!(!harness.driver.reveal_now());
        harness.advance(500);
        assert_eq!(harness.driver.phase(), RevealPhase::Visible);
    }

    #[test]
    fn test_machine_reveal_now_invalidates_ticket() {
        let mut machine = RevealMachine::new(50);
        machine.on_visibility(true);
        assert_eq!(machine.reveal_now(), Command::Render);
        assert_eq!(machine.on_delay_elapsed(1), Command::Nothing);
        assert_eq!(machine.reveal_now(), Command::Nothing);
    }

    #[test]
    fn test_teardown_during_delay_prevents_reveal() {
        let mut harness = Harness::new(fade_up(200));
        harness.crossing(true);
        harness.driver.teardown();
        assert_eq!(harness.clock.pending(), 0);

        harness.advance(1_000);
        assert_eq!(harness.driver.phase(), RevealPhase::PendingDelay);
        assert!(!harness.driver.on_delay_elapsed(1));
        assert!(!harness.crossing(true));
    }
}
