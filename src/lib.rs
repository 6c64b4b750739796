pub mod app;
pub mod config;
pub mod formula;
pub mod suggest;
pub mod ui;
