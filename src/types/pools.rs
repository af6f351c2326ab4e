//! Pool-related types and structures

use rust_decimal::Decimal;
use serde::Serialize;

/// A liquidity pair and its yield. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    pub id: String,
    pub name: String,
    pub apy: Decimal,
    pub tvl: Decimal,
    pub token0: String,
    pub token1: String,
}

impl Pool {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        apy: Decimal,
        tvl: Decimal,
        token0: impl Into<String>,
        token1: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            apy,
            tvl,
            token0: token0.into(),
            token1: token1.into(),
        }
    }
}
