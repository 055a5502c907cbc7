//! Display sessions and the lifetime of their repeating tick.
//!
//! An [`AccrualSession`] pins a declaration to a fixed start instant; every
//! sample recomputes elapsed time from that instant, so timer jitter never
//! accumulates. A [`LiveCounter`] owns the session together with the handle
//! of the timer that samples it, and guarantees at most one handle is alive.

use log::{debug, info};
use rust_decimal::Decimal;

use crate::accrual::SalaryDeclaration;

/// One reading of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub elapsed_ms: u64,
    pub earnings: Decimal,
}

impl Sample {
    pub const ZERO: Sample = Sample {
        elapsed_ms: 0,
        earnings: Decimal::ZERO,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccrualSession {
    declaration: SalaryDeclaration,
    start_ms: f64,
}

impl AccrualSession {
    /// Begin a session at wall-clock `now_ms` (milliseconds since the epoch).
    pub fn start(declaration: SalaryDeclaration, now_ms: f64) -> Self {
        Self {
            declaration,
            start_ms: now_ms,
        }
    }

    pub fn declaration(&self) -> &SalaryDeclaration {
        &self.declaration
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    /// Milliseconds since the start instant. A clock reading earlier than the
    /// start clamps to zero.
    pub fn elapsed_ms(&self, now_ms: f64) -> u64 {
        let elapsed = now_ms - self.start_ms;
        if elapsed.is_finite() && elapsed > 0.0 {
            elapsed as u64
        } else {
            0
        }
    }

    pub fn sample(&self, now_ms: f64) -> Sample {
        let elapsed_ms = self.elapsed_ms(now_ms);
        Sample {
            elapsed_ms,
            earnings: self.declaration.earnings_at_elapsed_ms(elapsed_ms),
        }
    }
}

/// Holds the current session and the handle of the timer sampling it.
///
/// `T` is any handle that cancels its timer on drop (`gloo_timers::callback::Interval`
/// in the browser). Starting a new session drops the previous handle before the
/// new one is created.
#[derive(Debug)]
pub struct LiveCounter<T> {
    active: Option<(AccrualSession, T)>,
}

impl<T> Default for LiveCounter<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T> LiveCounter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running session with `session`, creating its timer with `spawn`.
    pub fn start<F>(&mut self, session: AccrualSession, spawn: F)
    where
        F: FnOnce(&AccrualSession) -> T,
    {
        if self.active.take().is_some() {
            debug!("Dropped previous tick before starting a new session");
        }
        let handle = spawn(&session);
        info!(
            "Session started: {} {} ({})",
            session.declaration().amount(),
            session.declaration().currency(),
            session.declaration().period()
        );
        self.active = Some((session, handle));
    }

    /// Stop the timer and discard the session. No-op when idle.
    pub fn reset(&mut self) {
        if let Some((session, handle)) = self.active.take() {
            drop(handle);
            info!("Session reset after start at {}", session.start_ms());
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Option<&AccrualSession> {
        self.active.as_ref().map(|(session, _)| session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accrual::{HolidayPolicy, Period};
    use crate::currency::Currency;
    use std::cell::Cell;
    use std::rc::Rc;

    fn declaration() -> SalaryDeclaration {
        SalaryDeclaration::new(
            Decimal::from(120_000),
            Period::Yearly,
            Currency::Cny,
            Decimal::from(8),
            HolidayPolicy::StandardWorkingDays,
        )
        .unwrap()
    }

    /// Stand-in timer handle that tracks how many are alive.
    struct FakeTick {
        live: Rc<Cell<usize>>,
    }

    impl FakeTick {
        fn spawn(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Self { live: live.clone() }
        }
    }

    impl Drop for FakeTick {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[test]
    fn sample_is_zero_at_start() {
        let session = AccrualSession::start(declaration(), 1_000_000.0);
        assert_eq!(session.sample(1_000_000.0), Sample::ZERO);
    }

    #[test]
    fn elapsed_is_measured_from_fixed_start() {
        let session = AccrualSession::start(declaration(), 5_000.0);
        // Irregular tick times still land on the exact elapsed value.
        for now in [5_049.0, 5_113.0, 5_160.0, 65_000.0] {
            assert_eq!(session.elapsed_ms(now), (now - 5_000.0) as u64);
        }
        let minute = session.sample(65_000.0);
        assert_eq!(minute.elapsed_ms, 60_000);
        assert_eq!(minute.earnings.round_dp(2), Decimal::new(100, 2));
    }

    #[test]
    fn clock_before_start_clamps_to_zero() {
        let session = AccrualSession::start(declaration(), 10_000.0);
        assert_eq!(session.elapsed_ms(9_000.0), 0);
        assert_eq!(session.elapsed_ms(f64::NAN), 0);
    }

    #[test]
    fn reset_releases_the_tick() {
        let live = Rc::new(Cell::new(0));
        let mut counter = LiveCounter::new();

        counter.start(AccrualSession::start(declaration(), 0.0), |_| FakeTick::spawn(&live));
        assert!(counter.is_running());
        assert_eq!(live.get(), 1);

        counter.reset();
        assert!(!counter.is_running());
        assert!(counter.session().is_none());
        assert_eq!(live.get(), 0);

        // Resetting twice is harmless.
        counter.reset();
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn restart_after_reset_is_fresh_with_one_tick() {
        let live = Rc::new(Cell::new(0));
        let mut counter = LiveCounter::new();

        counter.start(AccrualSession::start(declaration(), 1_000.0), |_| FakeTick::spawn(&live));
        counter.reset();
        counter.start(AccrualSession::start(declaration(), 90_000.0), |_| FakeTick::spawn(&live));

        let session = counter.session().unwrap();
        assert_eq!(session.start_ms(), 90_000.0);
        assert_eq!(session.sample(90_000.0), Sample::ZERO);
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn restart_without_reset_drops_old_tick_first() {
        let live = Rc::new(Cell::new(0));
        let mut counter = LiveCounter::new();

        counter.start(AccrualSession::start(declaration(), 0.0), |_| FakeTick::spawn(&live));
        let live_probe = live.clone();
        counter.start(AccrualSession::start(declaration(), 500.0), move |_| {
            // Prior handle must already be gone when the new one is spawned.
            assert_eq!(live_probe.get(), 0);
            FakeTick::spawn(&live_probe)
        });
        assert_eq!(live.get(), 1);
        assert_eq!(counter.session().map(|s| s.start_ms()), Some(500.0));
    }
}
