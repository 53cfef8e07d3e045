//! Default sizes and settings, in map units before scaling

/// Scale of the evolved profile
pub const SCALE: f64 = 0.5;
/// Scale of the classic profile
pub const CLASSIC_SCALE: f64 = 1.0;
pub const PADDING: i32 = 0;

pub const LINEDEF_WIDTH: f64 = 4.0;
pub const LINEDEF_SLIM: f64 = 2.0;

pub const MONSTER_SIZE: f64 = 16.0;
pub const WEAPON_SIZE: f64 = 12.0;
pub const KEY_SIZE: f64 = 12.0;
pub const AMMO_SIZE: f64 = 8.0;
pub const ITEM_SIZE: f64 = 8.0;

/// Length of a facing indicator: a little past the monster radius
pub const DIRECTION_LENGTH: f64 = MONSTER_SIZE + 4.0;
