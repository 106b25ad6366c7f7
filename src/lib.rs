//! Kiosk - A self-service ordering kiosk for the terminal.
//!
//! This crate provides a menu, a running order with tax and totals, and a
//! simulated payment flow, laid out with clean architecture behind a TUI.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the kiosk shell and timer services.
pub mod application;
/// Domain layer containing entities, money helpers and errors.
pub mod domain;
/// Infrastructure layer containing configuration and storage.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "kiosk";
