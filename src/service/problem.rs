use std::fmt;

use serde::Serialize;

/// A puzzle handed to players: reach `target` using every number once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub target: i64,
    /// Numbers in display order, deliberately unrelated to the solution's order
    pub numbers: Vec<u64>,
    #[serde(skip)]
    pub solution: String,
}

impl Problem {
    /// Space-separated numbers, e.g. `"5 2 4 3"`
    pub fn numbers_string(&self) -> String {
        self.numbers
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.numbers_string())
    }
}
