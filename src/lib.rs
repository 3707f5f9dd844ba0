//! Workspace facade: re-exports `thaiaddr-core` so the demos can write
//! `use thaiaddr_rs::prelude::*`.
pub use thaiaddr_core::*;
