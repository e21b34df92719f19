pub mod common;
pub mod defaults;
pub mod output;
pub mod target;
