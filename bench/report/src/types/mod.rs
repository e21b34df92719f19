pub mod params;
pub mod record;
pub mod report;
pub mod service_time;
