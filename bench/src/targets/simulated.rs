use crate::error::LoadTestError;
use crate::operation::Operation;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Sleeps for a random delay and fails with the configured probability. Useful to see
/// how the harness behaves without any transport in the way.
#[derive(Debug, Clone)]
pub struct SimulatedOperation {
    min_delay: Duration,
    max_delay: Duration,
    failure_rate: f64,
}

impl SimulatedOperation {
    pub fn new(
        min_delay: Duration,
        max_delay: Duration,
        failure_rate: f64,
    ) -> Result<Self, LoadTestError> {
        if min_delay > max_delay {
            return Err(LoadTestError::InvalidConfiguration(format!(
                "min delay {min_delay:?} is greater than max delay {max_delay:?}"
            )));
        }
        if !(0.0..=1.0).contains(&failure_rate) {
            return Err(LoadTestError::InvalidConfiguration(format!(
                "failure rate {failure_rate} is not within 0.0..=1.0"
            )));
        }
        Ok(Self {
            min_delay,
            max_delay,
            failure_rate,
        })
    }
}

#[async_trait]
impl Operation for SimulatedOperation {
    /// Delay in milliseconds
    type Output = u64;
    type Error = String;

    async fn execute(&self, request_id: u64) -> Result<u64, String> {
        let (delay, failed) = {
            let mut rng = rand::thread_rng();
            let delay = rng.gen_range(self.min_delay..=self.max_delay);
            (delay, rng.gen_bool(self.failure_rate))
        };
        tokio::time::sleep(delay).await;
        let delay_ms = delay.as_millis() as u64;
        if failed {
            Err(format!(
                "request #{request_id} failed after {delay_ms} ms"
            ))
        } else {
            Ok(delay_ms)
        }
    }

    fn describe(&self) -> String {
        format!(
            "simulated operation ({:?}..={:?}, failure rate: {})",
            self.min_delay, self.max_delay, self.failure_rate
        )
    }
}
