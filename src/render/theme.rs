//! Colour themes.
//!
//! Categories come from `classify`; a theme only decides what they look like.

use super::classify::{LineKind, ThingKind};

/// Named colour palette for a rendered map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Black background, white walls
    #[default]
    Dark,
    /// White background, black walls
    Light,
}

impl Theme {
    pub fn background(self) -> &'static str {
        match self {
            Theme::Dark => "black",
            Theme::Light => "white",
        }
    }

    pub fn line(self, kind: LineKind) -> &'static str {
        match kind {
            LineKind::Plain => match self {
                Theme::Dark => "white",
                Theme::Light => "black",
            },
            LineKind::Door => match self {
                Theme::Dark => "gainsboro",
                Theme::Light => "grey",
            },
            LineKind::BlueDoor => "blue",
            LineKind::YellowDoor => "yellow",
            LineKind::RedDoor => "red",
            LineKind::Stairs => "orange",
            LineKind::Exit => "springgreen",
            LineKind::Teleport => "purple",
            LineKind::Lift => "saddlebrown",
            LineKind::Floor => "slategrey",
            LineKind::Other => "magenta",
        }
    }

    pub fn thing(self, kind: ThingKind) -> &'static str {
        match kind {
            ThingKind::Monster => "crimson",
            ThingKind::Weapon | ThingKind::Ammo => "lightsteelblue",
            ThingKind::Artifact => "lavender",
            ThingKind::BlueKey => "blue",
            ThingKind::RedKey => "red",
            ThingKind::YellowKey => "yellow",
            ThingKind::PlayerStart => "green",
            ThingKind::Other => "magenta",
        }
    }

    /// Stroke of the facing indicator drawn on monsters and player starts
    pub fn facing(self) -> &'static str {
        match self {
            Theme::Dark => "yellow",
            Theme::Light => "black",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme {other:?} (expected dark or light)")),
        }
    }
}
