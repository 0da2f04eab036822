//! Resize handle directions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

/// Edge or corner a resize gesture is anchored on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    /// All directions, edges first
    pub fn all() -> &'static [ResizeDirection] {
        &[
            ResizeDirection::N,
            ResizeDirection::S,
            ResizeDirection::E,
            ResizeDirection::W,
            ResizeDirection::NE,
            ResizeDirection::NW,
            ResizeDirection::SE,
            ResizeDirection::SW,
        ]
    }

    /// Whether the handle moves the top edge
    pub fn has_north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    /// Whether the handle moves the bottom edge
    pub fn has_south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    /// Whether the handle moves the right edge
    pub fn has_east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    /// Whether the handle moves the left edge
    pub fn has_west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    /// Compass string for this direction ("n", "se", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeDirection {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Self::N),
            "s" => Ok(Self::S),
            "e" => Ok(Self::E),
            "w" => Ok(Self::W),
            "ne" => Ok(Self::NE),
            "nw" => Ok(Self::NW),
            "se" => Ok(Self::SE),
            "sw" => Ok(Self::SW),
            _ => Err(DesktopError::UnknownResizeDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_direction() {
        for dir in ResizeDirection::all() {
            assert_eq!(dir.as_str().parse::<ResizeDirection>().unwrap(), *dir);
        }
        assert!("north".parse::<ResizeDirection>().is_err());
    }

    #[test]
    fn test_diagonals_compose_edges() {
        let ne = ResizeDirection::NE;
        assert!(ne.has_north() && ne.has_east());
        assert!(!ne.has_south() && !ne.has_west());

        let sw = ResizeDirection::SW;
        assert!(sw.has_south() && sw.has_west());
        assert!(!sw.has_north() && !sw.has_east());

        let e = ResizeDirection::E;
        assert!(e.has_east());
        assert!(!e.has_north() && !e.has_south() && !e.has_west());
    }
}
