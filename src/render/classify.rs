//! Game-rule classification of linedefs and things.
//!
//! One declarative table per dimension: linedef specials, linedef flags and
//! thing types. Colours are not decided here; see `theme`.

use super::defaults;

/// What a linedef's special code does, as far as the map view cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Special 0: an ordinary wall
    Plain,
    BlueDoor,
    YellowDoor,
    RedDoor,
    Door,
    Stairs,
    Exit,
    Teleport,
    Lift,
    Floor,
    /// Any special not in the table
    Other,
}

impl LineKind {
    #[rustfmt::skip]
    pub fn from_special(special: i16) -> Self {
        match special {
            0 => LineKind::Plain,
            26 | 32 => LineKind::BlueDoor,
            27 | 34 => LineKind::YellowDoor,
            28 | 33 => LineKind::RedDoor,
            1 | 2 | 3 | 4 | 29 | 31 | 42 | 46 | 50 | 61 | 63 | 75 | 76 | 86 | 90 | 99
            | 103 | 105..=118 => LineKind::Door,
            7 | 8 => LineKind::Stairs,
            11 | 51 | 52 | 124 => LineKind::Exit,
            39 | 97 => LineKind::Teleport,
            62 | 88 | 120..=123 => LineKind::Lift,
            5 | 9 | 14 | 15 | 18 | 19 | 20 | 22 | 23 | 24 | 30 | 36 | 37 | 38 | 45 | 47
            | 55 | 56 | 58 | 59 | 60 | 64..=71 => LineKind::Floor,
            _ => LineKind::Other,
        }
    }
}

/// Stroke weight selected by a linedef's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineWeight {
    Normal,
    /// Flags exactly `4` (two-sided, nothing else set)
    Slim,
}

impl LineWeight {
    pub fn from_flags(flags: i16) -> Self {
        match flags {
            4 => LineWeight::Slim,
            _ => LineWeight::Normal,
        }
    }

    /// Stroke width in map units
    pub fn width(self) -> f64 {
        match self {
            LineWeight::Normal => defaults::LINEDEF_WIDTH,
            LineWeight::Slim => defaults::LINEDEF_SLIM,
        }
    }
}

/// Broad category of a thing type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThingKind {
    Monster,
    Weapon,
    Ammo,
    /// Artifacts, powerups and other pickups
    Artifact,
    BlueKey,
    RedKey,
    YellowKey,
    /// Player 1-4 and deathmatch starts
    PlayerStart,
    Other,
}

impl ThingKind {
    #[rustfmt::skip]
    pub fn from_type(kind: i16) -> Self {
        match kind {
            7 | 9 | 16 | 58 | 64 | 65 | 66 | 67 | 68 | 69 | 71 | 72 | 84
            | 3001..=3006 => ThingKind::Monster,
            82 | 2001..=2006 => ThingKind::Weapon,
            17 | 2007 | 2008 | 2010 | 2046..=2049 => ThingKind::Ammo,
            8 | 83 | 2011..=2015 | 2018 | 2019 | 2022..=2026 | 2045 => ThingKind::Artifact,
            5 | 40 => ThingKind::BlueKey,
            13 | 38 => ThingKind::RedKey,
            6 | 39 => ThingKind::YellowKey,
            1..=4 | 11 => ThingKind::PlayerStart,
            _ => ThingKind::Other,
        }
    }

    /// Marker radius in map units
    pub fn radius(self) -> f64 {
        match self {
            ThingKind::Monster | ThingKind::PlayerStart => defaults::MONSTER_SIZE,
            ThingKind::Weapon => defaults::WEAPON_SIZE,
            ThingKind::BlueKey | ThingKind::RedKey | ThingKind::YellowKey => defaults::KEY_SIZE,
            ThingKind::Ammo => defaults::AMMO_SIZE,
            ThingKind::Artifact | ThingKind::Other => defaults::ITEM_SIZE,
        }
    }

    /// Whether the marker gets a facing indicator
    pub fn shows_facing(self) -> bool {
        matches!(self, ThingKind::Monster | ThingKind::PlayerStart)
    }
}
