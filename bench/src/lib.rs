pub mod analytics;
pub mod args;
pub mod dispatcher;
pub mod error;
pub mod log;
pub mod operation;
pub mod runner;
pub mod targets;
pub mod timer;

pub use analytics::reduce;
pub use dispatcher::Dispatcher;
pub use error::LoadTestError;
pub use load_test::{run_load_test, LoadTest, LoadTestConfig};
pub use operation::{callback_operation, operation_fn, Done, Operation};
pub use timer::StepTimer;

pub use arete_report::{params, presenter, record, report, service_time};
