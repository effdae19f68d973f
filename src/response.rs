use std::str::FromStr;

use mc_rcon_core::RconError;

/// Player list information reported by the server's `list` command.
///
/// The header's reported count and the enumerated names may diverge when the
/// server truncates its output, so `online` is kept independent of
/// `names.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlinePlayers {
    /// Number of players currently connected
    pub online: u32,
    /// Server capacity
    pub max: u32,
    /// Player names in the order the server reported them
    pub names: Vec<String>,
}

impl FromStr for OnlinePlayers {
    type Err = RconError;

    /// Decodes a response of the form
    /// `"There are 3/20 players online: alice, bob, carol"`.
    ///
    /// The header is everything before the first colon; the `online/max`
    /// pair is located by scanning the header tokens rather than assuming a
    /// fixed word count. A header without such a token is a decode failure.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (header, listing) = raw.split_once(':').unwrap_or((raw, ""));

        let (online, max) = header
            .split_whitespace()
            .find_map(count_token)
            .ok_or_else(|| RconError::MalformedResponse {
                response: raw.to_string(),
            })?;

        let names = listing
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        Ok(Self { online, max, names })
    }
}

/// Parses an `online/max` header token, e.g. `"3/20"`.
fn count_token(token: &str) -> Option<(u32, u32)> {
    let (online, max) = token.split_once('/')?;
    Some((online.parse().ok()?, max.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_populated_list() {
        let info: OnlinePlayers = "There are 3/20 players online: alice, bob, carol"
            .parse()
            .unwrap();

        assert_eq!(info.online, 3);
        assert_eq!(info.max, 20);
        assert_eq!(info.names, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_parses_empty_list_with_trailing_colon() {
        let info: OnlinePlayers = "There are 0/20 players online:".parse().unwrap();

        assert_eq!(info.online, 0);
        assert_eq!(info.max, 20);
        assert!(info.names.is_empty());
    }

    #[test]
    fn test_parses_empty_list_without_colon() {
        let info: OnlinePlayers = "There are 0/20 players online".parse().unwrap();

        assert_eq!(info.online, 0);
        assert!(info.names.is_empty());
    }

    #[test]
    fn test_tolerates_whitespace_around_commas() {
        let ragged: OnlinePlayers = "There are 3/20 players online: a,  b ,c".parse().unwrap();
        let tidy: OnlinePlayers = "There are 3/20 players online: a, b, c".parse().unwrap();

        assert_eq!(ragged.names, tidy.names);
    }

    #[test]
    fn test_header_count_is_not_derived_from_names() {
        let info: OnlinePlayers = "There are 5/20 players online: alice".parse().unwrap();

        assert_eq!(info.online, 5);
        assert_eq!(info.names.len(), 1);
    }

    #[test]
    fn test_missing_count_token_is_a_decode_failure() {
        let result = "There are no players online".parse::<OnlinePlayers>();

        assert!(matches!(
            result,
            Err(RconError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_non_numeric_slash_tokens_are_skipped() {
        let info: OnlinePlayers = "Server a/b status 2/10 ready: dave".parse().unwrap();

        assert_eq!(info.online, 2);
        assert_eq!(info.max, 10);
        assert_eq!(info.names, vec!["dave"]);
    }
}
