mod clock;

pub use clock::{Clock, ManualClock, MonotonicClock};

use crate::error::LoadTestError;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const UNSET: u64 = u64::MAX;

/// Both readings of a single mark, taken from one clock sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    pub since_start: Duration,
    pub since_last_mark: Duration,
}

/// Step recorder measuring time since start and time between consecutive marks.
///
/// The start can be recorded once only. The last mark lives in a single atomic that is
/// moved forward with compare-and-swap, so concurrent callers never observe the same
/// prior mark and the gaps they report add up to the time of the latest mark.
pub struct StepTimer {
    name: String,
    clock: Arc<dyn Clock>,
    verbose: bool,
    started_at: AtomicU64,
    last_mark: AtomicU64,
}

impl StepTimer {
    pub fn new(name: impl Into<String>, clock: Arc<dyn Clock>, verbose: bool) -> Self {
        Self {
            name: name.into(),
            clock,
            verbose,
            started_at: AtomicU64::new(UNSET),
            last_mark: AtomicU64::new(UNSET),
        }
    }

    pub fn monotonic(name: impl Into<String>, verbose: bool) -> Self {
        Self::new(name, Arc::new(MonotonicClock::new()), verbose)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> Result<(), LoadTestError> {
        let now = self.clock_nanos();
        self.started_at
            .compare_exchange(UNSET, now, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| LoadTestError::TimerAlreadyStarted)?;
        self.step("Started");
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.started_at.load(Ordering::Acquire) != UNSET
    }

    pub fn since_start(&self) -> Result<Duration, LoadTestError> {
        let started_at = self.started_at()?;
        Ok(Duration::from_nanos(
            self.clock_nanos().saturating_sub(started_at),
        ))
    }

    pub fn since_last_mark(&self) -> Result<Duration, LoadTestError> {
        self.mark().map(|lap| lap.since_last_mark)
    }

    /// Moves the last mark to now and returns the gap to the previous mark (or to the
    /// start for the first mark) together with the time since start.
    pub fn mark(&self) -> Result<Lap, LoadTestError> {
        let started_at = self.started_at()?;
        let mut previous = self.last_mark.load(Ordering::Acquire);
        loop {
            let base = if previous == UNSET {
                started_at
            } else {
                previous
            };
            // The clock is sampled after `previous` was observed, so `now >= base` unless
            // the clock itself went backwards.
            let now = self.clock_nanos().max(base);
            match self.last_mark.compare_exchange_weak(
                previous,
                now,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    return Ok(Lap {
                        since_start: Duration::from_nanos(now - started_at),
                        since_last_mark: Duration::from_nanos(now - base),
                    })
                }
                Err(actual) => previous = actual,
            }
        }
    }

    /// Logs `label` with the time since start when verbose stepping is enabled.
    pub fn step(&self, label: impl Display) {
        if !self.verbose {
            return;
        }
        let since_start = self
            .since_start()
            .map(|elapsed| elapsed.as_secs_f64() * 1_000.0)
            .unwrap_or_default();
        info!("{} → {label} [{since_start:.3} ms]", self.name);
    }

    fn started_at(&self) -> Result<u64, LoadTestError> {
        match self.started_at.load(Ordering::Acquire) {
            UNSET => Err(LoadTestError::TimerNotStarted),
            started_at => Ok(started_at),
        }
    }

    fn clock_nanos(&self) -> u64 {
        self.clock.now().as_nanos() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn manual_timer() -> (Arc<ManualClock>, StepTimer) {
        let clock = Arc::new(ManualClock::new());
        let timer = StepTimer::new("test", clock.clone(), false);
        (clock, timer)
    }

    #[test]
    fn should_fail_when_started_twice() {
        let (clock, timer) = manual_timer();
        clock.advance(Duration::from_millis(3));
        timer.start().unwrap();
        clock.advance(Duration::from_millis(10));

        assert!(matches!(
            timer.start(),
            Err(LoadTestError::TimerAlreadyStarted)
        ));
        assert_eq!(timer.since_start().unwrap(), Duration::from_millis(10));
    }

    #[test]
    fn should_fail_when_queried_before_start() {
        let (_, timer) = manual_timer();
        assert!(!timer.is_started());
        assert!(matches!(
            timer.since_start(),
            Err(LoadTestError::TimerNotStarted)
        ));
        assert!(matches!(
            timer.since_last_mark(),
            Err(LoadTestError::TimerNotStarted)
        ));
    }

    #[test]
    fn first_mark_should_measure_from_start() {
        let (clock, timer) = manual_timer();
        clock.set(Duration::from_millis(100));
        timer.start().unwrap();

        clock.advance(Duration::from_millis(4));
        assert_eq!(timer.since_last_mark().unwrap(), Duration::from_millis(4));

        clock.advance(Duration::from_millis(6));
        let lap = timer.mark().unwrap();
        assert_eq!(lap.since_last_mark, Duration::from_millis(6));
        assert_eq!(lap.since_start, Duration::from_millis(10));

        assert_eq!(timer.since_last_mark().unwrap(), Duration::ZERO);
    }

    #[test]
    fn since_start_should_not_move_the_mark() {
        let (clock, timer) = manual_timer();
        timer.start().unwrap();
        clock.advance(Duration::from_millis(5));
        timer.since_start().unwrap();
        timer.step("ignored");
        clock.advance(Duration::from_millis(5));
        assert_eq!(timer.since_last_mark().unwrap(), Duration::from_millis(10));
    }

    #[test]
    fn should_not_report_negative_gap_when_clock_goes_backwards() {
        let (clock, timer) = manual_timer();
        clock.set(Duration::from_millis(50));
        timer.start().unwrap();
        clock.set(Duration::from_millis(60));
        timer.mark().unwrap();
        clock.set(Duration::from_millis(55));
        assert_eq!(timer.since_last_mark().unwrap(), Duration::ZERO);
    }

    #[test]
    fn concurrent_marks_should_never_share_a_prior_mark() {
        let timer = Arc::new(StepTimer::monotonic("concurrent", false));
        timer.start().unwrap();

        let handles = (0..8)
            .map(|_| {
                let timer = timer.clone();
                std::thread::spawn(move || {
                    (0..500)
                        .map(|_| timer.mark().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        let laps = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();

        let total_gaps: Duration = laps.iter().map(|lap| lap.since_last_mark).sum();
        let latest = laps.iter().map(|lap| lap.since_start).max().unwrap();
        assert_eq!(total_gaps, latest);

        // Every successful swap ends at a distinct position of the mark, except
        // zero-length gaps which land on the same instant.
        let positions = laps
            .iter()
            .filter(|lap| !lap.since_last_mark.is_zero())
            .map(|lap| lap.since_start)
            .collect::<HashSet<_>>();
        assert_eq!(
            positions.len(),
            laps.iter().filter(|lap| !lap.since_last_mark.is_zero()).count()
        );
    }
}
