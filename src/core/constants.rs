// Map generation
pub const MAP_WIDTH: i32 = 60;
pub const MAP_HEIGHT: i32 = 45;
pub const MAX_ROOMS: usize = 16;
pub const ROOM_MIN_SIZE: i32 = 4;
pub const ROOM_MAX_SIZE: i32 = 7;

// Entity placement
pub const MIN_ENEMIES: usize = 4;
pub const MIN_CONSUMABLES: usize = 2;
pub const MIN_CONTAINERS: usize = 2;
/// Upper bound on redraws when searching for a free floor tile.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

// Enemies
pub const LEASH_MIN: i32 = 4;
pub const LEASH_MAX: i32 = 7;
pub const ENEMY_BASE_HP: u32 = 3;
pub const ENEMY_XP_BASE: u64 = 2;

// Consumables
pub const HEAL_BASE: u32 = 3;

// Player
pub const STARTING_HP: u32 = 10;
pub const STARTING_XP_TO_NEXT: u64 = 10;
pub const LEVEL_UP_MAX_HP_GAIN: u32 = 2;
pub const LEVEL_UP_HEAL: u32 = 2;
/// Threshold growth is `floor(threshold * 1.35) + 2`, kept in integer percent.
pub const XP_THRESHOLD_GROWTH_PERCENT: u64 = 135;
pub const XP_THRESHOLD_GROWTH_FLAT: u64 = 2;

// Combat
pub const PLAYER_BASE_DAMAGE: (u32, u32) = (1, 3);
pub const ENEMY_BASE_DAMAGE: (u32, u32) = (1, 2);
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const CRIT_MULTIPLIER: u32 = 2;

// Loot: weights for Common / Rare / Epic / Legendary
pub const RARITY_WEIGHTS: [u32; 4] = [60, 25, 10, 5];
pub const ACCESSORY_CRIT_PER_SCALE: f64 = 0.02;
pub const ARMOR_REGEN_DIVISOR: f64 = 1.5;

// Visibility and presentation
pub const FOG_RADIUS: i32 = 6;
pub const DAMAGE_FLOAT_LIFETIME_SECONDS: f64 = 0.8;
pub const MAX_MESSAGE_LOG: usize = 8;
pub const RENDER_FRAME_MS: u64 = 16;
