mod http;
mod simulated;

pub use http::{HttpOperation, HttpResponse};
pub use simulated::SimulatedOperation;
