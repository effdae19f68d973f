//! Prelude module with commonly used types and traits.
//!
//! This module re-exports the most commonly used items from the crate,
//! allowing users to quickly import everything they need with
//! `use mc_rcon::prelude::*;`.

pub use crate::client::AdminClient;
pub use crate::command::{Rotation, TeleportTarget};
pub use crate::fortune::{FortuneCommand, FortuneOptions, FortuneSource};
pub use crate::response::OnlinePlayers;
pub use mc_rcon_core::prelude::*;
