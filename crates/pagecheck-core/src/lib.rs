pub mod config;
pub mod logging;

pub mod canon;
pub mod checker;
pub mod store;
