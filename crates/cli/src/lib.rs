//! # Me-API CLI
//!
//! Terminal front end: one-shot commands plus an interactive page that
//! hosts the shell.

pub mod app;
pub mod commands;
pub mod interactive;
pub mod progress;
pub mod render;
pub mod style;
