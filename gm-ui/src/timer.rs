//! Browser timers that cancel themselves.
//!
//! A [`Timer`] owns whatever its [`Scheduler`] needs to keep the timer alive
//! (in the browser: the `setTimeout`/`setInterval` handle and the closure it
//! calls); dropping it clears the timer. The `use_*` hooks bind a timer to the
//! component that created it, so nothing fires after the component unmounts.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// `setTimeout`
    Once,
    /// `setInterval`
    Repeat,
}

/// Starts and clears timers.
pub trait Scheduler: Clone {
    /// Kept alive for as long as the timer may still fire.
    type Pending;

    fn start(&self, kind: TimerKind, millis: u32, callback: Box<dyn FnMut()>)
        -> Option<Self::Pending>;

    fn clear(&self, pending: Self::Pending);
}

/// `window.setTimeout` / `window.setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

pub struct BrowserPending {
    kind: TimerKind,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Scheduler for BrowserScheduler {
    type Pending = BrowserPending;

    /// `None` outside a browser window or if the browser refuses the timer.
    fn start(
        &self,
        kind: TimerKind,
        millis: u32,
        callback: Box<dyn FnMut()>,
    ) -> Option<BrowserPending> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(callback);
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        let started = match kind {
            TimerKind::Once => window
                .set_timeout_with_callback_and_timeout_and_arguments_0(function, clamp_millis(millis)),
            TimerKind::Repeat => window
                .set_interval_with_callback_and_timeout_and_arguments_0(function, clamp_millis(millis)),
        };
        let handle = started
            .map_err(|e| log::warn!("[GM] starting {:?} timer failed: {:?}", kind, e))
            .ok()?;
        Some(BrowserPending {
            kind,
            handle,
            _callback: callback,
        })
    }

    fn clear(&self, pending: BrowserPending) {
        if let Some(window) = web_sys::window() {
            match pending.kind {
                TimerKind::Once => window.clear_timeout_with_handle(pending.handle),
                TimerKind::Repeat => window.clear_interval_with_handle(pending.handle),
            }
        }
    }
}

fn clamp_millis(millis: u32) -> i32 {
    i32::try_from(millis).unwrap_or(i32::MAX)
}

/// A started timer; cleared on [`Timer::cancel`] or drop.
pub struct Timer<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    pending: Option<S::Pending>,
}

impl Timer {
    /// One-shot browser timer.
    pub fn timeout(millis: u32, callback: impl FnMut() + 'static) -> Option<Timer> {
        Timer::start_with(BrowserScheduler, TimerKind::Once, millis, callback)
    }

    /// Repeating browser timer.
    pub fn interval(millis: u32, callback: impl FnMut() + 'static) -> Option<Timer> {
        Timer::start_with(BrowserScheduler, TimerKind::Repeat, millis, callback)
    }
}

impl<S: Scheduler> Timer<S> {
    pub fn start_with(
        scheduler: S,
        kind: TimerKind,
        millis: u32,
        callback: impl FnMut() + 'static,
    ) -> Option<Timer<S>> {
        let pending = scheduler.start(kind, millis, Box::new(callback))?;
        Some(Timer {
            scheduler,
            pending: Some(pending),
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.scheduler.clear(pending);
        }
    }
}

impl<S: Scheduler> Drop for Timer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Holds at most one timer; scheduling replaces (and cancels) the previous one.
pub struct TimerSlot<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    current: Rc<RefCell<Option<Timer<S>>>>,
}

impl<S: Scheduler> Clone for TimerSlot<S> {
    fn clone(&self) -> Self {
        TimerSlot {
            scheduler: self.scheduler.clone(),
            current: Rc::clone(&self.current),
        }
    }
}

impl<S: Scheduler + Default> Default for TimerSlot<S> {
    fn default() -> Self {
        TimerSlot::with_scheduler(S::default())
    }
}

impl<S: Scheduler> TimerSlot<S> {
    pub fn with_scheduler(scheduler: S) -> Self {
        TimerSlot {
            scheduler,
            current: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, millis: u32, callback: impl FnMut() + 'static) {
        let timer = Timer::start_with(self.scheduler.clone(), TimerKind::Once, millis, callback);
        self.replace(timer);
    }

    pub fn repeat(&self, millis: u32, callback: impl FnMut() + 'static) {
        let timer = Timer::start_with(self.scheduler.clone(), TimerKind::Repeat, millis, callback);
        self.replace(timer);
    }

    pub fn cancel(&self) {
        self.replace(None);
    }

    pub fn is_active(&self) -> bool {
        self.current.borrow().is_some()
    }

    fn replace(&self, timer: Option<Timer<S>>) {
        // Drop the old timer after the borrow ends.
        let previous = self.current.replace(timer);
        drop(previous);
    }
}

/// A timer slot cancelled when the calling component unmounts.
pub fn use_timer_slot() -> TimerSlot {
    let slot = use_hook(TimerSlot::<BrowserScheduler>::default);
    let on_drop = slot.clone();
    use_drop(move || on_drop.cancel());
    slot
}

/// Run `callback` once, `millis` after the component mounts.
pub fn use_timeout(millis: u32, callback: impl FnMut() + 'static) {
    let slot = use_timer_slot();
    use_hook(move || slot.schedule(millis, callback));
}

/// Run `callback` every `millis` while the component is mounted.
pub fn use_interval(millis: u32, callback: impl FnMut() + 'static) {
    let slot = use_timer_slot();
    use_hook(move || slot.repeat(millis, callback));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Started(u32, TimerKind, u32),
        Cleared(u32),
    }

    /// Records every start/clear and lets tests fire live timers by id.
    #[derive(Clone, Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<Event>>>,
        live: Rc<RefCell<BTreeMap<u32, Box<dyn FnMut()>>>>,
        next_id: Rc<Cell<u32>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        /// Run timer `id` if it has not been cleared.
        fn fire(&self, id: u32) -> bool {
            match self.live.borrow_mut().get_mut(&id) {
                Some(callback) => {
                    callback();
                    true
                }
                None => false,
            }
        }
    }

    impl Scheduler for Recorder {
        type Pending = u32;

        fn start(&self, kind: TimerKind, millis: u32, callback: Box<dyn FnMut()>) -> Option<u32> {
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.events.borrow_mut().push(Event::Started(id, kind, millis));
            self.live.borrow_mut().insert(id, callback);
            Some(id)
        }

        fn clear(&self, id: u32) {
            self.events.borrow_mut().push(Event::Cleared(id));
            self.live.borrow_mut().remove(&id);
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = Rc::clone(&count);
        (count, move || bump.set(bump.get() + 1))
    }

    #[test]
    fn millis_beyond_i32_saturate() {
        assert_eq!(clamp_millis(3000), 3000);
        assert_eq!(clamp_millis(u32::MAX), i32::MAX);
    }

    #[test]
    fn empty_slot_cancels_quietly() {
        let slot = TimerSlot::with_scheduler(Recorder::default());
        assert!(!slot.is_active());
        slot.cancel();
        assert!(!slot.is_active());
    }

    #[test]
    fn dropping_a_timer_clears_it() {
        let recorder = Recorder::default();
        let timer = Timer::start_with(recorder.clone(), TimerKind::Once, 3000, || {}).unwrap();
        assert!(timer.is_pending());
        drop(timer);
        assert_eq!(
            recorder.events(),
            vec![Event::Started(1, TimerKind::Once, 3000), Event::Cleared(1)]
        );
        assert!(!recorder.fire(1));
    }

    #[test]
    fn cancel_clears_once_and_drop_adds_nothing() {
        let recorder = Recorder::default();
        let mut timer = Timer::start_with(recorder.clone(), TimerKind::Repeat, 2000, || {}).unwrap();
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_pending());
        drop(timer);
        assert_eq!(
            recorder.events(),
            vec![Event::Started(1, TimerKind::Repeat, 2000), Event::Cleared(1)]
        );
    }

    #[test]
    fn scheduling_clears_the_timer_it_replaces() {
        let recorder = Recorder::default();
        let slot = TimerSlot::with_scheduler(recorder.clone());
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();

        slot.schedule(500, first_cb);
        slot.schedule(500, second_cb);

        assert_eq!(
            recorder.events(),
            vec![
                Event::Started(1, TimerKind::Once, 500),
                Event::Started(2, TimerKind::Once, 500),
                Event::Cleared(1),
            ]
        );
        assert!(!recorder.fire(1));
        assert!(recorder.fire(2));
        assert_eq!((first.get(), second.get()), (0, 1));
        assert!(slot.is_active());
    }

    #[test]
    fn cancelled_interval_stops_firing() {
        let recorder = Recorder::default();
        let slot = TimerSlot::with_scheduler(recorder.clone());
        let (ticks, tick) = counter();

        slot.repeat(2000, tick);
        assert!(recorder.fire(1));
        assert!(recorder.fire(1));
        slot.cancel();
        assert!(!recorder.fire(1));

        assert_eq!(ticks.get(), 2);
        assert!(!slot.is_active());
        assert_eq!(recorder.events().last(), Some(&Event::Cleared(1)));
    }

    #[test]
    fn clones_share_one_timer() {
        // the unmount hook cancels through a clone of the component's slot
        let recorder = Recorder::default();
        let slot = TimerSlot::with_scheduler(recorder.clone());
        let on_drop = slot.clone();

        slot.repeat(2000, || {});
        on_drop.cancel();

        assert!(!slot.is_active());
        assert_eq!(
            recorder.events(),
            vec![Event::Started(1, TimerKind::Repeat, 2000), Event::Cleared(1)]
        );
    }
}
