// Nominal gas limit of a big block
pub const BIG_BLOCK_GAS_LIMIT: u64 = 50_000_000;
// Nominal gas limit of a small block
pub const SMALL_BLOCK_GAS_LIMIT: u64 = 2_000_000;
// Observed gas limits drift slightly from the nominal tiers
// (rounding in upstream reporting), so classification accepts
// values within this band of either tier
pub const GAS_LIMIT_TOLERANCE: u64 = 1_000_000;
