use mc_rcon_core::{RconError, Result};

/// Destination selector for a teleport command.
///
/// The two variants are mutually exclusive by construction. Coordinate
/// tokens are kept in rendered string form so absolute and relative
/// (`~10`) values compose the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeleportTarget {
    /// Teleport onto another player
    Player(String),
    /// Teleport to world coordinates
    Coordinates {
        /// X coordinate token
        x: String,
        /// Y coordinate token
        y: String,
        /// Z coordinate token
        z: String,
    },
}

/// Optional yaw/pitch orientation for a teleport command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    yaw: String,
    pitch: String,
}

impl Rotation {
    /// Creates a rotation from yaw and pitch values.
    pub fn new(yaw: impl ToString, pitch: impl ToString) -> Self {
        Self {
            yaw: yaw.to_string(),
            pitch: pitch.to_string(),
        }
    }
}

impl TeleportTarget {
    /// Creates a target pointing at another player.
    pub fn player(name: impl Into<String>) -> Self {
        Self::Player(name.into())
    }

    /// Creates a coordinate target.
    pub fn coordinates(x: impl ToString, y: impl ToString, z: impl ToString) -> Self {
        Self::Coordinates {
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
        }
    }

    /// Builds a target from two independently optional parts.
    ///
    /// # Errors
    ///
    /// Fails with `RconError::InvalidArguments` when both parts are supplied
    /// or when neither is, before any network interaction takes place.
    pub fn from_parts(
        destination: Option<String>,
        coordinates: Option<(f64, f64, f64)>,
    ) -> Result<Self> {
        match (destination, coordinates) {
            (Some(_), Some(_)) => Err(RconError::InvalidArguments {
                details: "destination player and coordinates are mutually exclusive".to_string(),
            }),
            (Some(player), None) => Ok(Self::Player(player)),
            (None, Some((x, y, z))) => Ok(Self::coordinates(x, y, z)),
            (None, None) => Err(RconError::InvalidArguments {
                details: "must specify either a destination player or coordinates".to_string(),
            }),
        }
    }

    /// Assembles the argument tokens for a `tp` command.
    ///
    /// Ordering is: acting player, then the destination, then yaw/pitch.
    /// The server only honors yaw/pitch together with coordinates, but the
    /// tokens are appended for either variant when supplied.
    pub fn args(&self, player: &str, rotation: Option<&Rotation>) -> Vec<String> {
        let mut args = vec![player.to_string()];

        match self {
            Self::Player(destination) => args.push(destination.clone()),
            Self::Coordinates { x, y, z } => {
                args.extend([x.clone(), y.clone(), z.clone()]);
            }
        }

        if let Some(rotation) = rotation {
            args.extend([rotation.yaw.clone(), rotation.pitch.clone()]);
        }

        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_rejects_both() {
        let result = TeleportTarget::from_parts(
            Some("steve".to_string()),
            Some((1.0, 2.0, 3.0)),
        );

        assert!(matches!(
            result,
            Err(RconError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_from_parts_rejects_neither() {
        let result = TeleportTarget::from_parts(None, None);

        assert!(matches!(
            result,
            Err(RconError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_from_parts_accepts_destination_player() {
        let target = TeleportTarget::from_parts(Some("steve".to_string()), None).unwrap();

        assert_eq!(target, TeleportTarget::player("steve"));
    }

    #[test]
    fn test_coordinate_args_in_order() {
        let target = TeleportTarget::coordinates(1, 2, 3);
        let args = target.args("steve", None);

        assert_eq!(args, vec!["steve", "1", "2", "3"]);
    }

    #[test]
    fn test_player_args_lead_with_acting_player() {
        let target = TeleportTarget::player("alex");
        let args = target.args("steve", None);

        assert_eq!(args, vec!["steve", "alex"]);
    }

    #[test]
    fn test_rotation_appended_after_coordinates() {
        let target = TeleportTarget::coordinates(10, 64, -10);
        let args = target.args("steve", Some(&Rotation::new(90, 0)));

        assert_eq!(args, vec!["steve", "10", "64", "-10", "90", "0"]);
    }

    #[test]
    fn test_rotation_appended_for_player_target_too() {
        let target = TeleportTarget::player("alex");
        let args = target.args("steve", Some(&Rotation::new(90, 0)));

        assert_eq!(args, vec!["steve", "alex", "90", "0"]);
    }

    #[test]
    fn test_relative_coordinates_pass_through() {
        let target = TeleportTarget::coordinates("~", "~10", "~");
        let args = target.args("steve", None);

        assert_eq!(args, vec!["steve", "~", "~10", "~"]);
    }
}
