use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use mc_rcon_core::{RconConnection, RconError, Result};
use tracing::{debug, error, warn};

use crate::command::{Rotation, TeleportTarget};
use crate::fortune::{FortuneOptions, FortuneSource};
use crate::response::OnlinePlayers;

/// Strftime format used when the caller does not supply one.
const DEFAULT_TIME_FORMAT: &str = "%c";

/// Neutral fallback when the requested format fails to parse.
const FALLBACK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tab expansion for console-safe text.
const TAB_REPLACEMENT: &str = "        ";

/// Fixes text for console compatibility.
fn fix_text(text: &str) -> String {
    text.replace('\t', TAB_REPLACEMENT)
}

/// High-level administration client for an RCON server.
///
/// Wraps a raw protocol connection and exposes one method per
/// administrative action. The client holds no state beyond the connection
/// handle; every method performs at most one round-trip.
pub struct AdminClient<C>
where
    C: RconConnection,
{
    connection: C,
}

impl<C> AdminClient<C>
where
    C: RconConnection,
{
    /// Creates a new admin client over the given connection.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Consumes the client and returns the underlying connection.
    pub fn into_inner(self) -> C {
        self.connection
    }

    /// Performs a login, returning `false` on failure.
    ///
    /// A request/response correlation fault from the raw layer is treated as
    /// a failed login rather than an error; callers rely on the boolean
    /// contract. Every other error propagates unmodified.
    pub async fn login(&mut self, password: &str) -> Result<bool> {
        match self.connection.login(password).await {
            Ok(accepted) => Ok(accepted),
            Err(RconError::RequestIdMismatch { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Queries the currently online players.
    pub async fn players(&mut self) -> Result<OnlinePlayers> {
        self.connection.run("list", &[]).await?.parse()
    }

    /// Broadcasts a message to all players.
    pub async fn say(&mut self, message: &str) -> Result<String> {
        debug!("Sending text: \"{}\".", message);
        self.connection.run("say", &[fix_text(message)]).await
    }

    /// Whispers a message to the respective player.
    pub async fn tell(&mut self, player: &str, message: &str) -> Result<String> {
        self.connection
            .run("tell", &[player.to_string(), fix_text(message)])
            .await
    }

    /// Makes the respective player an operator.
    pub async fn make_operator(&mut self, player: &str) -> Result<String> {
        self.connection.run("op", &[player.to_string()]).await
    }

    /// Revokes operator status from the respective player.
    pub async fn revoke_operator(&mut self, player: &str) -> Result<String> {
        self.connection.run("deop", &[player.to_string()]).await
    }

    /// Kicks the respective player, with optional reason tokens.
    pub async fn kick(&mut self, player: &str, reasons: &[&str]) -> Result<String> {
        let args: Vec<String> = std::iter::once(player)
            .chain(reasons.iter().copied())
            .map(String::from)
            .collect();

        self.connection.run("kick", &args).await
    }

    /// Teleports a player to the given target.
    pub async fn teleport(
        &mut self,
        player: &str,
        target: &TeleportTarget,
        rotation: Option<&Rotation>,
    ) -> Result<String> {
        let args = target.args(player, rotation);
        self.connection.run("tp", &args).await
    }

    /// Tells all players the current date and time.
    ///
    /// Formats the local time with the given strftime format (`%c` when
    /// omitted). An unparseable format logs a warning and falls back to a
    /// neutral format instead of failing.
    pub async fn datetime(&mut self, format: Option<&str>) -> Result<String> {
        let format = format.unwrap_or(DEFAULT_TIME_FORMAT);
        let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();

        let text = if items.contains(&Item::Error) {
            warn!("Unsupported time format \"{}\", using fallback.", format);
            Local::now().format(FALLBACK_TIME_FORMAT).to_string()
        } else {
            Local::now().format_with_items(items.into_iter()).to_string()
        };

        self.say(&text).await
    }

    /// Sends a fortune to all players.
    ///
    /// A missing or failing fortune tool is contained: the event is logged
    /// and `None` is returned. On success the generated text is broadcast
    /// and the server's response returned.
    pub async fn fortune<S>(
        &mut self,
        source: &S,
        options: &FortuneOptions,
    ) -> Result<Option<String>>
    where
        S: FortuneSource,
    {
        let text = match source.generate(options).await {
            Ok(text) => text,
            Err(RconError::ToolUnavailable { tool }) => {
                error!("{} is not available.", tool);
                return Ok(None);
            }
            Err(RconError::ToolFailed { tool, reason }) => {
                error!("Error running {}.", tool);
                debug!("{}", reason);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        debug!("Fortune text:\n{}", text);
        self.say(&text).await.map(Some)
    }
}
