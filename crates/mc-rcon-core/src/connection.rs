use std::future::Future;

use crate::Result;

/// Core trait for the raw RCON protocol capability.
///
/// Implementations own the socket, the authentication handshake and the
/// request/response framing. The high-level client issues requests strictly
/// sequentially, so implementations never see more than one call in flight.
pub trait RconConnection: Send + Sync {
    /// Run a command with the given arguments and return the server's
    /// textual response.
    fn run(
        &mut self,
        command: &str,
        args: &[String],
    ) -> impl Future<Output = Result<String>> + Send;

    /// Perform the authentication handshake with the given password.
    ///
    /// Returns whether the server accepted the password. A request/response
    /// correlation fault surfaces as `RconError::RequestIdMismatch`.
    fn login(&mut self, password: &str) -> impl Future<Output = Result<bool>> + Send;
}
