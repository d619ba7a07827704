//! Newsdeck - a terminal news reader
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
