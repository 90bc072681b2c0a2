//! Shared contracts between the site frontend and its backend host.
//!
//! Everything here is pure: no I/O, no browser APIs, so the same code runs
//! in the wasm bundle, in the axum server and in native unit tests.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
