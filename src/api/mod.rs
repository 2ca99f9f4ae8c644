pub mod middleware;
pub mod services;
