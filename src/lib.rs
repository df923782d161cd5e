#![forbid(unsafe_code)]

pub mod app;
pub mod classifier;
pub mod cli;
pub mod content;
pub mod error;
pub mod filter;
pub mod formats;
pub mod forms;
pub mod logging;
pub mod render;
pub mod report;
pub mod router;
