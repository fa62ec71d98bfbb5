pub mod args;
pub mod config;
pub mod entity;
pub mod logging;
pub mod service;
pub mod session;
pub mod ui;
