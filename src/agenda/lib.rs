//! # Agenda Architecture
//!
//! Agenda keeps track of people and their appointments for the length of one
//! terminal session. It is a small library with a menu-driven CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, tables, colors, key-press pauses     │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Input Validators (input.rs)                                │
//! │  - Pure parse functions + a generic retrying Prompter       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session state, dispatches to commands           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Domain rules: unique person ids, appointments must       │
//! │    reference an existing person                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the CLI layer prints, exits the process or reads from a terminal.
//! Commands return `Result<CmdResult>`; domain violations come back as
//! [`error::AgendaError`] values and leave the store untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for people and appointments
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: `Person` and `Appointment`
//! - [`input`]: Line parsing and the retrying prompt loop
//! - [`config`]: Optional presentation settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod store;
