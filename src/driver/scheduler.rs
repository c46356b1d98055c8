//! Run/stop cadence for advancing a board.
//!
//! The scheduler owns no clock. Callers report elapsed time through
//! [`Scheduler::tick`] (for example from `requestAnimationFrame` or a render
//! loop) and receive the number of generations that became due.

use std::time::Duration;

use crate::compute::LifeEngine;
use crate::schema::BoardConfig;

/// Most generations a single [`Scheduler::tick`] reports by default.
pub const DEFAULT_MAX_CATCH_UP: u32 = 10;

/// Convert a millisecond count reported by a host timer into a `Duration`.
///
/// Negative, NaN and zero reports are `Duration::ZERO`; values too large to
/// represent saturate to `Duration::MAX`.
pub fn duration_from_millis(ms: f64) -> Duration {
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
}

/// Scheduler errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchedulerError {
    #[error("Update interval must be non-zero")]
    ZeroInterval,
}

/// Fixed-interval scheduler with a running flag.
#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    running: bool,
    /// Time accumulated towards the next generation.
    pending: Duration,
    /// Cap on generations reported per tick, at least 1.
    max_catch_up: u32,
}

impl Scheduler {
    /// Create a stopped scheduler.
    pub fn new(interval: Duration) -> Result<Self, SchedulerError> {
        if interval.is_zero() {
            return Err(SchedulerError::ZeroInterval);
        }
        Ok(Self {
            interval,
            running: false,
            pending: Duration::ZERO,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        })
    }

    /// Create a stopped scheduler using the configured interval.
    pub fn from_config(config: &BoardConfig) -> Result<Self, SchedulerError> {
        Self::new(config.interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval. Time already accumulated is kept.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), SchedulerError> {
        if interval.is_zero() {
            return Err(SchedulerError::ZeroInterval);
        }
        self.interval = interval;
        Ok(())
    }

    pub fn max_catch_up(&self) -> u32 {
        self.max_catch_up
    }

    /// Limit how many generations one tick may report. Zero is treated as 1.
    pub fn set_max_catch_up(&mut self, max: u32) {
        self.max_catch_up = max.max(1);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn run(&mut self) {
        if !self.running {
            log::debug!("Scheduler running every {:?}", self.interval);
        }
        self.running = true;
    }

    /// Stop and drop any partially elapsed interval.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("Scheduler stopped");
        }
        self.running = false;
        self.pending = Duration::ZERO;
    }

    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.run();
        }
    }

    /// Report `elapsed` time and return how many generations are due.
    ///
    /// At most `max_catch_up` generations are reported; any backlog beyond
    /// that is dropped, so a long stall resumes at normal pace.
    pub fn tick(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.pending = self.pending.saturating_add(elapsed);
        let due = u32::try_from(self.pending.as_nanos() / self.interval.as_nanos())
            .unwrap_or(u32::MAX)
            .min(self.max_catch_up);

        self.pending = self
            .pending
            .saturating_sub(self.interval.saturating_mul(due));
        if self.pending >= self.interval {
            log::debug!("Dropping scheduler backlog of {:?}", self.pending);
            self.pending = Duration::ZERO;
        }
        due
    }

    /// Report `elapsed` time and advance `engine` by every due generation.
    pub fn drive(&mut self, engine: &mut LifeEngine, elapsed: Duration) -> u32 {
        let due = self.tick(elapsed);
        engine.step_n(u64::from(due));
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert_eq!(
            Scheduler::new(Duration::ZERO).unwrap_err(),
            SchedulerError::ZeroInterval
        );
        let mut scheduler = Scheduler::new(ms(10)).unwrap();
        assert!(scheduler.set_interval(Duration::ZERO).is_err());
        assert_eq!(scheduler.interval(), ms(10));
    }

    #[test]
    fn test_stopped_scheduler_never_fires() {
        let mut scheduler = Scheduler::new(ms(100)).unwrap();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.tick(ms(1000)), 0);

        // Time spent stopped does not count once running
        scheduler.run();
        assert_eq!(scheduler.tick(ms(50)), 0);
    }

    #[test]
    fn test_accumulates_partial_intervals() {
        let mut scheduler = Scheduler::new(ms(100)).unwrap();
        scheduler.run();
        assert_eq!(scheduler.tick(ms(60)), 0);
        assert_eq!(scheduler.tick(ms(60)), 1);
        assert_eq!(scheduler.tick(ms(80)), 1);
        assert_eq!(scheduler.tick(ms(350)), 3);
        assert_eq!(scheduler.tick(ms(50)), 1);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut scheduler = Scheduler::new(ms(1)).unwrap();
        scheduler.run();

        // An hour-long stall at a 1 ms interval
        assert_eq!(scheduler.tick(Duration::from_secs(3600)), DEFAULT_MAX_CATCH_UP);
        // The backlog is gone afterwards
        assert_eq!(scheduler.tick(Duration::ZERO), 0);
        assert_eq!(scheduler.tick(ms(1)), 1);

        assert_eq!(scheduler.tick(Duration::MAX), DEFAULT_MAX_CATCH_UP);
        assert_eq!(scheduler.tick(Duration::ZERO), 0);
    }

    #[test]
    fn test_duration_from_millis() {
        assert_eq!(duration_from_millis(250.0), ms(250));
        assert_eq!(duration_from_millis(0.0), Duration::ZERO);
        assert_eq!(duration_from_millis(-5.0), Duration::ZERO);
        assert_eq!(duration_from_millis(f64::NAN), Duration::ZERO);
        assert_eq!(duration_from_millis(1e30), Duration::MAX);
        assert_eq!(duration_from_millis(f64::INFINITY), Duration::MAX);
    }

    #[test]
    fn test_custom_catch_up_limit() {
        let config = BoardConfig {
            rows: 4,
            cols: 4,
            interval_ms: 10,
            ..Default::default()
        };
        let mut engine = LifeEngine::new(config.rows, config.cols).unwrap();
        let mut scheduler = Scheduler::from_config(&config).unwrap();
        scheduler.set_max_catch_up(3);
        scheduler.run();

        assert_eq!(scheduler.drive(&mut engine, ms(10_000)), 3);
        assert_eq!(engine.generation(), 3);

        scheduler.set_max_catch_up(0);
        assert_eq!(scheduler.max_catch_up(), 1);
        assert_eq!(scheduler.drive(&mut engine, ms(50)), 1);
        assert_eq!(engine.generation(), 4);
    }

    #[test]
    fn test_stop_discards_pending() {
        let mut scheduler = Scheduler::new(ms(100)).unwrap();
        scheduler.run();
        assert_eq!(scheduler.tick(ms(90)), 0);
        scheduler.stop();
        scheduler.run();
        assert_eq!(scheduler.tick(ms(20)), 0);
    }

    #[test]
    fn test_toggle_running() {
        let mut scheduler = Scheduler::new(ms(100)).unwrap();
        scheduler.toggle_running();
        assert!(scheduler.is_running());
        scheduler.toggle_running();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_drive_advances_engine() {
        let config = BoardConfig {
            rows: 10,
            cols: 10,
            interval_ms: 250,
            ..Default::default()
        };
        let mut engine = LifeEngine::new(config.rows, config.cols).unwrap();
        for x in 1..=3 {
            engine.toggle(x, 1).unwrap();
        }

        let mut scheduler = Scheduler::from_config(&config).unwrap();
        assert_eq!(scheduler.drive(&mut engine, ms(1000)), 0);
        assert_eq!(engine.generation(), 0);

        scheduler.run();
        assert_eq!(scheduler.drive(&mut engine, ms(500)), 2);
        assert_eq!(engine.generation(), 2);
        // Blinker is back to horizontal after an even number of generations
        assert!(engine.is_alive(1, 1).unwrap());
        assert!(!engine.is_alive(2, 0).unwrap());
    }
}
