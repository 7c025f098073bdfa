use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
    time::Duration,
};

use thiserror::Error;

use super::{Frame, WordCycler};

#[derive(Error, Debug, Clone)]
pub enum TimerError {
    #[error("could not schedule timer: {0}")]
    Schedule(String),
}

/// One-shot timers provided by the host (browser `setTimeout`, a test clock...).
pub trait Timer: 'static {
    type Handle: 'static;

    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, TimerError>;

    fn cancel(&self, handle: Self::Handle);
}

struct Inner<T: Timer> {
    timer: T,
    cycler: RefCell<WordCycler>,
    pending: RefCell<Option<T::Handle>>,
    disposed: Cell<bool>,
    on_frame: Box<dyn Fn(Frame<'_>)>,
}

/// Owns a [`WordCycler`] and the timer that ticks it.
///
/// Each tick reschedules the next one using the delay the tick returned.
/// Dropping the driver (or calling [`CyclerDriver::dispose`]) cancels the
/// pending timer; a callback that still fires afterwards does nothing.
pub struct CyclerDriver<T: Timer> {
    inner: Rc<Inner<T>>,
}

impl<T: Timer> CyclerDriver<T> {
    pub fn start(timer: T, cycler: WordCycler, on_frame: impl Fn(Frame<'_>) + 'static) -> Self {
        let delay = cycler.delay();
        let inner = Rc::new(Inner {
            timer,
            cycler: RefCell::new(cycler),
            pending: RefCell::new(None),
            disposed: Cell::new(false),
            on_frame: Box::new(on_frame),
        });
        log::debug!("word cycler started, first tick in {delay:?}");
        schedule(&inner, delay);
        Self { inner }
    }

    /// Cancels the pending tick. Safe to call more than once.
    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        if let Some(handle) = self.inner.pending.borrow_mut().take() {
            self.inner.timer.cancel(handle);
        }
        log::debug!("word cycler disposed");
    }

    pub fn is_running(&self) -> bool {
        !self.inner.disposed.get() && self.inner.pending.borrow().is_some()
    }

    pub fn with_cycler<R>(&self, f: impl FnOnce(&WordCycler) -> R) -> R {
        f(&self.inner.cycler.borrow())
    }
}

impl<T: Timer> Drop for CyclerDriver<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn schedule<T: Timer>(inner: &Rc<Inner<T>>, delay: Duration) {
    let weak = Rc::downgrade(inner);
    match inner.timer.schedule(delay, Box::new(move || fire(&weak))) {
        Ok(handle) => *inner.pending.borrow_mut() = Some(handle),
        Err(e) => log::error!("word cycler halted: {e}"),
    }
}

fn fire<T: Timer>(weak: &Weak<Inner<T>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    if inner.disposed.get() {
        return;
    }
    inner.pending.borrow_mut().take();

    let delay = {
        let mut cycler = inner.cycler.borrow_mut();
        let frame = cycler.tick();
        (inner.on_frame)(frame);
        frame.delay
    };

    // on_frame may have torn the owner down
    if inner.disposed.get() {
        return;
    }
    schedule(&inner, delay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CyclerTiming;

    type Callback = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        queue: Vec<(u64, Duration, Callback)>,
        cancelled: Vec<u64>,
        ignore_cancel: bool,
        fail: bool,
    }

    #[derive(Clone, Default)]
    struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    impl Timer for ManualTimer {
        type Handle = u64;

        fn schedule(&self, delay: Duration, callback: Callback) -> Result<u64, TimerError> {
            let mut clock = self.clock.borrow_mut();
            if clock.fail {
                return Err(TimerError::Schedule("no timers left".to_string()));
            }
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.queue.push((id, due, callback));
            Ok(id)
        }

        fn cancel(&self, handle: u64) {
            let mut clock = self.clock.borrow_mut();
            clock.cancelled.push(handle);
            if !clock.ignore_cancel {
                clock.queue.retain(|(id, _, _)| *id != handle);
            }
        }
    }

    impl ManualTimer {
        fn advance_ms(&self, ms: u64) -> usize {
            let target = self.clock.borrow().now + Duration::from_millis(ms);
            let mut fired = 0;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .queue
                        .iter()
                        .enumerate()
                        .filter(|(_, (_, due, _))| *due <= target)
                        .min_by_key(|(_, (_, due, _))| *due)
                        .map(|(i, _)| i);
                    due.map(|i| {
                        let (_, due, cb) = clock.queue.remove(i);
                        clock.now = due;
                        cb
                    })
                };
                match next {
                    Some(cb) => {
                        cb();
                        fired += 1;
                    }
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
            fired
        }

        fn pending(&self) -> usize {
            self.clock.borrow().queue.len()
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<(String, bool)>>>, impl Fn(Frame<'_>) + 'static) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        (frames, move |f: Frame<'_>| {
            sink.borrow_mut().push((f.text.to_string(), f.deleting));
        })
    }

    fn cycler(words: &[&str]) -> WordCycler {
        WordCycler::new(words.iter().copied(), CyclerTiming::default(), 125.0).unwrap()
    }

    #[test]
    fn test_ticks_follow_returned_delays() {
        let timer = ManualTimer::default();
        let (frames, on_frame) = recorder();
        let driver = CyclerDriver::start(timer.clone(), cycler(&["ab"]), on_frame);
        assert!(driver.is_running());

        assert_eq!(timer.advance_ms(124), 0);
        assert_eq!(timer.advance_ms(1), 1);
        assert_eq!(timer.advance_ms(125), 1);
        assert_eq!(
            *frames.borrow(),
            [("a".to_string(), false), ("ab".to_string(), true)]
        );

        // full-word pause
        assert_eq!(timer.advance_ms(1999), 0);
        assert_eq!(timer.advance_ms(1), 1);
        assert_eq!(frames.borrow().last().unwrap().0, "a");

        // 2000 / 1.5 ms later the word is gone, then a 500 ms pause
        assert_eq!(timer.advance_ms(1334), 1);
        assert_eq!(frames.borrow().last().unwrap(), &(String::new(), false));
        assert_eq!(timer.advance_ms(499), 0);
        assert_eq!(timer.advance_ms(1), 1);
        assert_eq!(driver.with_cycler(|c| c.text().to_string()), "a");
        assert_eq!(timer.pending(), 1);
    }

    #[test]
    fn test_dispose_cancels_pending_tick() {
        let timer = ManualTimer::default();
        let (frames, on_frame) = recorder();
        let driver = CyclerDriver::start(timer.clone(), cycler(&["hello"]), on_frame);
        timer.advance_ms(125);
        assert_eq!(frames.borrow().len(), 1);

        driver.dispose();
        assert!(!driver.is_running());
        assert_eq!(timer.pending(), 0);
        assert_eq!(timer.advance_ms(60_000), 0);
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(driver.with_cycler(|c| c.text().to_string()), "h");

        // second dispose is a no-op, including on drop
        driver.dispose();
        drop(driver);
        assert_eq!(timer.clock.borrow().cancelled.len(), 1);
    }

    #[test]
    fn test_drop_cancels_pending_tick() {
        let timer = ManualTimer::default();
        let (frames, on_frame) = recorder();
        {
            let _driver = CyclerDriver::start(timer.clone(), cycler(&["hello"]), on_frame);
            timer.advance_ms(250);
        }
        assert_eq!(timer.pending(), 0);
        assert_eq!(timer.advance_ms(60_000), 0);
        assert_eq!(frames.borrow().len(), 2);
    }

    #[test]
    fn test_stale_callback_after_dispose_does_nothing() {
        let timer = ManualTimer::default();
        timer.clock.borrow_mut().ignore_cancel = true;
        let (frames, on_frame) = recorder();

        let driver = CyclerDriver::start(timer.clone(), cycler(&["hello"]), on_frame);
        driver.dispose();
        assert_eq!(timer.advance_ms(1000), 1);
        assert!(frames.borrow().is_empty());
        assert_eq!(timer.pending(), 0);
        assert_eq!(driver.with_cycler(|c| c.text().to_string()), "");

        // and once the driver is gone entirely
        let (frames, on_frame) = recorder();
        let driver = CyclerDriver::start(timer.clone(), cycler(&["hello"]), on_frame);
        drop(driver);
        assert_eq!(timer.advance_ms(1000), 1);
        assert!(frames.borrow().is_empty());
    }

    #[test]
    fn test_dispose_from_frame_callback() {
        let timer = ManualTimer::default();
        let slot: Rc<RefCell<Option<CyclerDriver<ManualTimer>>>> = Rc::new(RefCell::new(None));
        let ticks = Rc::new(Cell::new(0));

        let on_frame = {
            let slot = Rc::clone(&slot);
            let ticks = Rc::clone(&ticks);
            move |_: Frame<'_>| {
                ticks.set(ticks.get() + 1);
                if let Some(driver) = slot.borrow().as_ref() {
                    driver.dispose();
                }
            }
        };
        let driver = CyclerDriver::start(timer.clone(), cycler(&["hello"]), on_frame);
        *slot.borrow_mut() = Some(driver);

        assert_eq!(timer.advance_ms(10_000), 1);
        assert_eq!(ticks.get(), 1);
        assert_eq!(timer.pending(), 0);
        slot.borrow_mut().take();
    }

    #[test]
    fn test_schedule_failure_halts() {
        let timer = ManualTimer::default();
        timer.clock.borrow_mut().fail = true;
        let (frames, on_frame) = recorder();
        let driver = CyclerDriver::start(timer.clone(), cycler(&["hello"]), on_frame);
        assert!(!driver.is_running());
        assert_eq!(timer.advance_ms(10_000), 0);
        assert!(frames.borrow().is_empty());
    }
}
