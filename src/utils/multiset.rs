use std::fmt;

/// Every maximal run of ASCII digits in `text`, in order of appearance.
///
/// Literals too large for `u64` saturate at `u64::MAX`.
pub fn literal_numbers(text: &str) -> Vec<u64> {
    let mut numbers = Vec::new();
    let mut current: Option<u64> = None;

    for c in text.chars() {
        match c.to_digit(10) {
            Some(d) => {
                let acc = current.unwrap_or(0);
                current = Some(acc.saturating_mul(10).saturating_add(u64::from(d)));
            }
            None => {
                if let Some(n) = current.take() {
                    numbers.push(n);
                }
            }
        }
    }
    if let Some(n) = current {
        numbers.push(n);
    }

    numbers
}

/// Sorted collection of numbers compared by value and count
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Multiset(Vec<u64>);

impl Multiset {
    pub fn new(mut numbers: Vec<u64>) -> Self {
        numbers.sort_unstable();
        Self(numbers)
    }

    /// Collect the literal numbers written in `text`, e.g. `"5 4 3 2"` or `"4*(5+3-2)"`
    pub fn from_text(text: &str) -> Self {
        Self::new(literal_numbers(text))
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u64>> for Multiset {
    fn from(numbers: Vec<u64>) -> Self {
        Self::new(numbers)
    }
}

impl From<&[u64]> for Multiset {
    fn from(numbers: &[u64]) -> Self {
        Self::new(numbers.to_vec())
    }
}

impl From<Multiset> for Vec<u64> {
    fn from(multiset: Multiset) -> Self {
        multiset.0
    }
}

impl fmt::Display for Multiset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for n in &self.0 {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", n)?;
            first = false;
        }
        Ok(())
    }
}
