#[cfg(feature = "server")]
pub mod shutdown;
pub mod startup;
