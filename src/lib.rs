//! High-level RCON administration client.
//!
//! This crate translates structured administrative intents (teleport a
//! player, broadcast a message, query the player list) into RCON command
//! strings and decodes the raw textual responses back into typed results.
//! The raw protocol connection (socket, handshake, framing) stays behind
//! the [`mc_rcon_core::RconConnection`] trait.

#![cfg_attr(not(debug_assertions), forbid(missing_docs))]

pub mod client;
pub mod command;
pub mod fortune;
pub mod prelude;
pub mod response;

pub use client::AdminClient;
pub use command::{Rotation, TeleportTarget};
pub use fortune::{FortuneCommand, FortuneOptions, FortuneSource};
pub use response::OnlinePlayers;
