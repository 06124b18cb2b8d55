pub const DEFAULT_CACHE_FILE: &str = "solutions.json";

/// Parameters of a catalog build. Not persisted: a stored catalog built
/// with other parameters must be discarded by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Largest literal value in a generated problem
    pub max_value: u64,
    /// Count of numbers in each generated problem
    pub size: usize,
    pub min_target: i64,
    pub max_target: i64,
}

impl CatalogConfig {
    pub fn accepts_target(&self, target: i64) -> bool {
        (self.min_target..=self.max_target).contains(&target)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_value: 10,
            size: 4,
            min_target: 0,
            max_target: 100,
        }
    }
}
