//! Process-level setup shared by every mode

pub mod logging;

pub use logging::init_logging;
