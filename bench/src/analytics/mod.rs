pub mod percentiles;
pub mod reducer;
pub mod series;

pub use reducer::reduce;
