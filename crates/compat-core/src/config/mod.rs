//! Configuration types.

mod check_config;

pub use check_config::CheckConfig;
