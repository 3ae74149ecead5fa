mod performance;

pub use performance::{elapsed_ms, performance_now};
