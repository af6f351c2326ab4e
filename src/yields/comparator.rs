//! Yield comparison against the best pool in the catalog

use crate::types::{ComparisonResult, Pool};

/// Highest-APY pool; the first one wins on ties.
pub fn find_best_pool(pools: &[Pool]) -> Option<&Pool> {
    pools.iter().fold(None, |best: Option<&Pool>, pool| match best {
        Some(current) if pool.apy <= current.apy => Some(current),
        _ => Some(pool),
    })
}

pub fn compare(pools: &[Pool], selected_id: &str) -> Option<ComparisonResult> {
    let current_pool = pools.iter().find(|pool| pool.id == selected_id)?;
    let best_pool = find_best_pool(pools)?;

    Some(ComparisonResult {
        current_pool: current_pool.clone(),
        best_pool: best_pool.clone(),
        yield_difference: best_pool.apy - current_pool.apy,
    })
}
