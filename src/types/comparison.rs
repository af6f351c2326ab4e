//! Yield comparison types

use rust_decimal::Decimal;
use serde::Serialize;
use super::Pool;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub current_pool: Pool,
    pub best_pool: Pool,
    /// `best_pool.apy - current_pool.apy`
    pub yield_difference: Decimal,
}

impl ComparisonResult {
    pub fn is_already_best(&self) -> bool {
        self.yield_difference <= Decimal::ZERO
    }
}
