pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod food;
pub mod logging;
pub mod navbar;
pub mod provider;
pub mod session;
pub mod suggest;
pub mod widgets;
