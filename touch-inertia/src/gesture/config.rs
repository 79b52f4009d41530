//! Gesture configuration - move delivery mode and axis filter

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown mode '{0}' (expected 'realtime' or 'animation')")]
    UnknownMode(String),
    #[error("unknown direction '{0}' (expected 'x', 'y' or 'xy')")]
    UnknownDirection(String),
}

/// How move deltas are delivered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// One delta per move event, delivered immediately
    #[default]
    Realtime,
    /// At most one delta per frame, newest wins
    Animation,
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "realtime" => Ok(Mode::Realtime),
            "animation" => Ok(Mode::Animation),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Realtime => "realtime",
            Mode::Animation => "animation",
        })
    }
}

/// Axes reported in every emitted delta
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    X,
    Y,
    #[default]
    Xy,
}

impl Direction {
    pub fn includes_x(self) -> bool {
        matches!(self, Direction::X | Direction::Xy)
    }

    pub fn includes_y(self) -> bool {
        matches!(self, Direction::Y | Direction::Xy)
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Direction::X),
            "y" => Ok(Direction::Y),
            "xy" => Ok(Direction::Xy),
            other => Err(ConfigError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::X => "x",
            Direction::Y => "y",
            Direction::Xy => "xy",
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InertiaConfig {
    pub mode: Mode,
    pub direction: Direction,
}

impl InertiaConfig {
    pub fn new(mode: Mode, direction: Direction) -> Self {
        Self { mode, direction }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InertiaConfig::default();
        assert_eq!(config.mode, Mode::Realtime);
        assert_eq!(config.direction, Direction::Xy);
    }

    #[test]
    fn test_parse_known_values() {
        assert_eq!("animation".parse::<Mode>(), Ok(Mode::Animation));
        assert_eq!("realtime".parse::<Mode>(), Ok(Mode::Realtime));
        assert_eq!("x".parse::<Direction>(), Ok(Direction::X));
        assert_eq!("y".parse::<Direction>(), Ok(Direction::Y));
        assert_eq!("xy".parse::<Direction>(), Ok(Direction::Xy));
        assert_eq!(Mode::Animation.to_string(), "animation");
        assert_eq!(Direction::Xy.to_string(), "xy");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "smooth".parse::<Mode>(),
            Err(ConfigError::UnknownMode("smooth".into()))
        );
        assert_eq!(
            "z".parse::<Direction>(),
            Err(ConfigError::UnknownDirection("z".into()))
        );
    }

    #[test]
    fn test_axis_membership() {
        assert!(Direction::X.includes_x() && !Direction::X.includes_y());
        assert!(!Direction::Y.includes_x() && Direction::Y.includes_y());
        assert!(Direction::Xy.includes_x() && Direction::Xy.includes_y());
    }
}
