//! Prelude module with commonly used types and traits.
//!
//! This module re-exports the most commonly used items from the crate,
//! allowing users to quickly import everything they need with
//! `use mc_rcon_core::prelude::*;`.

pub use crate::connection::RconConnection;
pub use crate::error::{RconError, Result};
