/// Number of spell slots read from a character record (Q, W, E, R).
pub const MAX_SPELL_SLOTS: usize = 4;

/// Substituted when a character carries no usable ability text.
/// Must not contain any taxonomy keyword.
pub const FALLBACK_ABILITY_TEXT: &str = "No ability description is available for this character.";

/// Data Dragon map id of the primary battlefield.
pub const PRIMARY_MAP_ID: &str = "11";

/// Items below this total cost are treated as components.
pub const DEFAULT_MIN_TOTAL_COST: f32 = 300.0;

pub const DEFAULT_PRIMARY_LIMIT: usize = 10;
pub const DEFAULT_MOVEMENT_LIMIT: usize = 3;

/// Item tag that routes an item into the movement bucket.
pub const DEFAULT_MOVEMENT_TAG: &str = "Boots";

/// Item tags that are never recommended.
pub const DEFAULT_EXCLUDED_TAGS: &str = "Consumable,Trinket";

pub const DEFAULT_DESCRIPTION_WEIGHT: f32 = 0.5;
pub const DEFAULT_ATTRIBUTE_WEIGHT: f32 = 1.0;
pub const DEFAULT_TAG_WEIGHT: f32 = 1.5;
