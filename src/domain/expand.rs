//! Candidate expansion: pad a list to an exact size while keeping every
//! distinct item, then shuffle the distinct prefix.

use rand::Rng;
use thiserror::Error;

use super::candidate::dedupe;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("count must be at least {unique} to include every unique item (got {requested})")]
    InvalidCount { requested: usize, unique: usize },
    #[error("cannot expand an empty candidate list to {requested} items")]
    EmptyInput { requested: usize },
}

/// Whether a list with `unique_count` distinct items may be expanded to
/// `requested` items. Single-item lists are never worth expanding.
pub fn can_expand(unique_count: usize, requested: usize) -> bool {
    unique_count > 1 && requested >= unique_count
}

/// Returns exactly `n` items: every distinct item of `items` once, in a
/// uniformly shuffled order, followed by draws with replacement from the raw
/// `items` (so frequent entries pad more often).
pub fn expand<R>(items: &[String], n: usize, rng: &mut R) -> Result<Vec<String>, ExpandError>
where
    R: Rng + ?Sized,
{
    let mut result = dedupe(items);

    if n < result.len() {
        return Err(ExpandError::InvalidCount {
            requested: n,
            unique: result.len(),
        });
    }
    if items.is_empty() {
        return if n == 0 {
            Ok(Vec::new())
        } else {
            Err(ExpandError::EmptyInput { requested: n })
        };
    }

    shuffle(&mut result, rng);

    result.reserve(n - result.len());
    while result.len() < n {
        let index = rng.gen_range(0..items.len());
        result.push(items[index].clone());
    }

    Ok(result)
}

/// Fisher-Yates, walking from the back.
fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
