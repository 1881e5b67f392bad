//! # Jotter Architecture
//!
//! Jotter is a **UI-agnostic note library**: short titled notes with free-form
//! content and tags, kept in a local key-value storage. The `jot` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the list and note views        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Session (api.rs, session.rs)                         │
//! │  - JotterApi owns the single NoteStore                      │
//! │  - Session is the List/Editor view controller               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business operations returning CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: ordered collection, ids, tags, filtering      │
//! │  - Storage trait: FileStorage (production),                 │
//! │    MemoryStorage (testing)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns Rust types and never writes to
//! stdout/stderr. Diagnostics go through `tracing`; the binary decides where they
//! end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`session`]: List/Editor view state machine
//! - [`commands`]: Business logic for each command
//! - [`store`]: Note store and storage backends
//! - [`model`]: Core data types (`Note`, `NoteDraft`, `NoteId`)
//! - [`filter`]: Query/tag filtering
//! - [`tags`]: Comma-separated tag field parsing
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod session;
pub mod store;
pub mod tags;
