use log::debug;

/// All non-decreasing sequences of `size` values drawn from `1..=max_value`,
/// in lexicographic order.
///
/// This uses an iterative approach to avoid deep recursion; each pushed
/// value is at least the previous one, so permutations of the same multiset
/// are never produced twice.
pub fn generate_multisets(size: usize, max_value: u64) -> Vec<Vec<u64>> {
    debug!(
        "Generating multisets of size {} over 1..={}",
        size, max_value
    );

    if size == 0 {
        return vec![Vec::new()];
    }
    if max_value == 0 {
        return vec![];
    }

    let mut result = Vec::new();

    let mut stack = Vec::new();
    stack.push(Vec::with_capacity(size));

    while let Some(current) = stack.pop() {
        if current.len() == size {
            result.push(current);
            continue;
        }

        let low = current.last().copied().unwrap_or(1);

        // Reverse push keeps the smallest continuation on top of the stack.
        for value in (low..=max_value).rev() {
            let mut next = current.clone();
            next.push(value);
            stack.push(next);
        }
    }

    debug!("Generated {} multisets", result.len());
    result
}
