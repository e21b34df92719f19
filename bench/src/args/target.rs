use super::defaults::*;
use clap::{Parser, Subcommand};
use std::num::NonZeroU64;

#[derive(Subcommand, Debug, Clone)]
pub enum TargetCommand {
    /// Random sleep with an optional failure rate, no I/O involved
    Simulated(SimulatedArgs),

    /// HTTP GET against a single URL
    Http(HttpArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct SimulatedArgs {
    /// Shortest delay of a single request, in milliseconds
    #[arg(long, default_value_t = DEFAULT_SIMULATED_MIN_DELAY_MS)]
    pub min_delay_ms: u64,

    /// Longest delay of a single request, in milliseconds
    #[arg(long, default_value_t = DEFAULT_SIMULATED_MAX_DELAY_MS)]
    pub max_delay_ms: u64,

    /// Probability of a request failing, between 0.0 and 1.0
    #[arg(long, default_value_t = DEFAULT_SIMULATED_FAILURE_RATE, value_parser = parse_failure_rate)]
    pub failure_rate: f64,
}

#[derive(Parser, Debug, Clone)]
pub struct HttpArgs {
    /// URL to send GET requests to
    #[arg(long, short = 'u')]
    pub url: String,

    /// Timeout of a single request, in milliseconds
    #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_MS)]
    pub timeout_ms: NonZeroU64,
}

fn parse_failure_rate(value: &str) -> Result<f64, String> {
    let rate = value
        .parse::<f64>()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("failure rate must be between 0.0 and 1.0, got {rate}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_rate_should_be_a_probability() {
        assert_eq!(parse_failure_rate("0.25"), Ok(0.25));
        assert_eq!(parse_failure_rate("1"), Ok(1.0));
        assert!(parse_failure_rate("1.5").is_err());
        assert!(parse_failure_rate("-0.1").is_err());
        assert!(parse_failure_rate("often").is_err());
    }
}
