//! TUI Circuit (workspace facade crate).
//!
//! This package exposes a single `tui_circuit::{core,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_circuit_core as core;
pub use tui_circuit_term as term;
pub use tui_circuit_types as types;
