//! # Roster Architecture
//!
//! Roster is a **UI-agnostic record library** for a list of people (name, surname, age),
//! with CSV import and export. The terminal session shipped in the binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI Shell (cli/, wired by main.rs)                          │
//! │  - Parses arguments, runs the session loop and the form     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves rows of the current view into people            │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Edit Form (form.rs)        │
//! │  - Record management, CSV parsing/writing, validation       │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait, InMemoryStore for the session         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints, never logs and never exits the process.
//! Failures come back as [`error::RosterError`] values or as per-line entries of an
//! [`commands::import::ImportReport`]; the shell decides how to show them.
//!
//! The only filesystem access in the core is the single read of `import_file` and the
//! single write of `export_file`.
//!
//! ## Sessions
//!
//! A store lives exactly as long as the session that owns it. Nothing is persisted except
//! through an explicit CSV export.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Record store abstraction and the in-memory implementation
//! - [`model`]: The [`model::Person`] record
//! - [`form`]: Edit form validation
//! - [`index`]: Row numbering for rendered views
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod index;
pub mod model;
pub mod store;
