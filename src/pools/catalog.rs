//! Pool catalog loading

use rust_decimal_macros::dec;
use tracing::info;
use crate::{
    errors::BlendableResult,
    pools::validate_catalog,
    types::Pool,
};

/// The demo pool set. There is no live data source.
pub fn mock_pools() -> Vec<Pool> {
    vec![
        Pool::new("1", "ETH-USDC", dec!(3.2), dec!(1500000), "ETH", "USDC"),
        Pool::new("2", "XLM-USDC", dec!(5.1), dec!(800000), "XLM", "USDC"),
        Pool::new("3", "BTC-USDC", dec!(2.8), dec!(2200000), "BTC", "USDC"),
        Pool::new("4", "SOL-USDC", dec!(4.7), dec!(950000), "SOL", "USDC"),
        Pool::new("5", "MATIC-USDC", dec!(3.9), dec!(650000), "MATIC", "USDC"),
    ]
}

/// Validated, ordered collection of pools.
#[derive(Debug, Clone)]
pub struct Catalog {
    pools: Vec<Pool>,
}

impl Catalog {
    pub fn new(pools: Vec<Pool>) -> BlendableResult<Self> {
        validate_catalog(&pools)?;
        Ok(Self { pools })
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    pub fn get(&self, id: &str) -> Option<&Pool> {
        self.pools.iter().find(|pool| pool.id == id)
    }

    /// Id of the first pool; a validated catalog is never empty.
    pub fn default_selection(&self) -> Option<&str> {
        self.pools.first().map(|pool| pool.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

pub fn load_catalog() -> BlendableResult<Catalog> {
    let catalog = Catalog::new(mock_pools())?;
    info!("📚 Loaded {} pools", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_keeps_order() {
        let catalog = load_catalog().unwrap();
        let names: Vec<&str> = catalog.pools().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ETH-USDC", "XLM-USDC", "BTC-USDC", "SOL-USDC", "MATIC-USDC"]);
        assert_eq!(catalog.default_selection(), Some("1"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = load_catalog().unwrap();
        let sol = catalog.get("4").unwrap();
        assert_eq!(sol.name, "SOL-USDC");
        assert_eq!(sol.apy, dec!(4.7));
        assert_eq!(sol.tvl, dec!(950000));
        assert_eq!((sol.token0.as_str(), sol.token1.as_str()), ("SOL", "USDC"));
        assert!(catalog.get("6").is_none());
        assert!(catalog.get("").is_none());
    }
}
