mod prints;
mod types;
mod utils;

pub mod presenter;

pub use types::*;
pub use utils::duration_to_ms;
