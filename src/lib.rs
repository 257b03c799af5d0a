//! paydesk - a terminal client for the payroll and HR service.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod helpers;
pub mod input;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
