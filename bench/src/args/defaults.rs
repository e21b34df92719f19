use std::num::{NonZeroU64, NonZeroUsize};

pub const DEFAULT_TEST_NAME: &str = crate::load_test::DEFAULT_TEST_NAME;
pub const DEFAULT_REQUESTS: NonZeroU64 = nonzero_lit::u64!(100);
pub const DEFAULT_MAX_CONCURRENCY: NonZeroUsize = crate::load_test::DEFAULT_MAX_CONCURRENCY;

pub const DEFAULT_PRINT_STEPS: bool = false;
pub const DEFAULT_PRINT_RESPONSES: bool = false;
pub const DEFAULT_SKIP_REPORT: bool = false;

pub const DEFAULT_SIMULATED_MIN_DELAY_MS: u64 = 1;
pub const DEFAULT_SIMULATED_MAX_DELAY_MS: u64 = 10;
pub const DEFAULT_SIMULATED_FAILURE_RATE: f64 = 0.0;

pub const DEFAULT_HTTP_TIMEOUT_MS: NonZeroU64 = nonzero_lit::u64!(30_000);
