//! # Stockpile Architecture
//!
//! Stockpile is a small inventory manager: a list of named items with stock
//! counts, kept in a plain JSON file. The library is UI-agnostic; the binary
//! ships two clients on top of it, a subcommand CLI and an interactive
//! full-screen form.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI / TUI Layer (cli/, wired by main.rs)                   │
//! │  - Parses arguments, draws the form, prints results         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the inventory, turns 1-based ids into positions     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Runs one operation, returns items + messages             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inventory Core (inventory.rs)                              │
//! │  - In-memory sequence, validation, save after each change   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait; FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust values and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. An unreadable inventory file or a failed write comes back as an
//! [`error::StockError`] value and the client decides what to do.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`inventory`]: The in-memory item sequence and its persistence rules
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Item` and `LoadPolicy`
//! - [`index`]: 1-based display ids
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod inventory;
pub mod model;
pub mod store;
