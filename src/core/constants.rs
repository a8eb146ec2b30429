// Wheel layout
pub const DEFAULT_SLOT_COUNT: usize = 8;

// Zone classification
pub const DEFAULT_SAFE_ZONE_INTERVAL: i32 = 5;
pub const DEFAULT_SUPER_ZONE_INTERVAL: i32 = 30;
pub const FIRST_ZONE: u32 = 1;

// Zone at which every curve reaches its high-zone value
pub const ZONE_CURVE_SPAN: f64 = 100.0;

// Tier draws below this total weight are rejected
pub const WEIGHT_EPSILON: f64 = 0.0001;

// Tier weight curves: (low_zone, high_zone) per tier, interpolated by zone / 100
// Order: common, rare, epic, legendary
pub const NORMAL_ZONE_CURVES: [(f64, f64); 4] = [(60.0, 5.0), (30.0, 20.0), (9.0, 35.0), (1.0, 40.0)];
pub const SAFE_ZONE_CURVES: [(f64, f64); 4] = [(30.0, 5.0), (35.0, 25.0), (25.0, 35.0), (10.0, 35.0)];
pub const SUPER_ZONE_CURVES: [(f64, f64); 4] = [(0.0, 0.0), (20.0, 10.0), (40.0, 45.0), (40.0, 45.0)];

// Reward quantity: max interpolates between these, min starts at 1
pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX_LOW_ZONE: f64 = 2.0;
pub const QUANTITY_MAX_HIGH_ZONE: f64 = 10.0;
pub const COMMON_QUANTITY_BONUS: u32 = 1;
pub const EPIC_QUANTITY_PENALTY: u32 = 1;
pub const LEGENDARY_QUANTITY_PENALTY: u32 = 2;
pub const LEGENDARY_QUANTITY_FLOOR: u32 = 2;
pub const SAFE_ZONE_QUANTITY_BONUS: u32 = 1;
pub const SUPER_ZONE_QUANTITY_MIN: u32 = 2;
pub const SUPER_ZONE_QUANTITY_BONUS: u32 = 2;
