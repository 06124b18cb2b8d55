// Numeric thresholds shared by the enumerator
pub const EPSILON: f64 = 1e-9;
pub const POWER_LIMIT: f64 = 1e10;
// Beyond 2^53 every f64 is an integer, so integrality carries no meaning
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
pub const LARGE_INPUT_WARNING: usize = 6;
