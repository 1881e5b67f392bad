//! # CLI Layer
//!
//! The `jot` binary: argument parsing ([`setup`]), dispatch ([`commands`]) and
//! terminal output ([`render`]).
//!
//! Handlers call into [`jotter::api::JotterApi`] or drive a
//! [`jotter::session::Session`] for the editor flows, then render whatever comes
//! back. Nothing below this layer prints; nothing in this layer touches the
//! storage format.

mod commands;
mod render;
mod setup;

pub use commands::run;
