//! Pool catalog validation

use std::collections::HashSet;
use rust_decimal::Decimal;
use tracing::debug;
use crate::{
    errors::{BlendableError, BlendableResult},
    types::Pool,
};

pub fn validate_pool(pool: &Pool) -> BlendableResult<()> {
    let invalid = |reason: String| BlendableError::InvalidPool {
        pool: if pool.name.is_empty() { pool.id.clone() } else { pool.name.clone() },
        reason,
    };

    if pool.id.trim().is_empty() {
        return Err(invalid("empty id".to_string()));
    }
    if pool.name.trim().is_empty() {
        return Err(invalid("empty name".to_string()));
    }
    if pool.apy < Decimal::ZERO {
        return Err(invalid(format!("negative APY: {}%", pool.apy)));
    }
    if pool.tvl < Decimal::ZERO {
        return Err(invalid(format!("negative TVL: {}", pool.tvl)));
    }

    Ok(())
}

pub fn validate_catalog(pools: &[Pool]) -> BlendableResult<()> {
    if pools.is_empty() {
        return Err(BlendableError::EmptyCatalog);
    }

    let mut seen = HashSet::new();
    for pool in pools {
        validate_pool(pool)?;
        if !seen.insert(pool.id.as_str()) {
            return Err(BlendableError::InvalidPool {
                pool: pool.name.clone(),
                reason: format!("duplicate id {}", pool.id),
            });
        }
        debug!("✅ {} - valid pool", pool.name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use crate::pools::mock_pools;

    #[test]
    fn test_mock_pools_are_valid() {
        assert!(validate_catalog(&mock_pools()).is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(validate_catalog(&[]), Err(BlendableError::EmptyCatalog)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut pools = mock_pools();
        pools[4].id = "1".to_string();
        match validate_catalog(&pools) {
            Err(BlendableError::InvalidPool { pool, reason }) => {
                assert_eq!(pool, "MATIC-USDC");
                assert!(reason.contains("duplicate"));
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_values_rejected() {
        let pool = Pool::new("9", "BAD-USDC", dec!(-0.1), dec!(10), "BAD", "USDC");
        assert!(validate_pool(&pool).is_err());

        let pool = Pool::new("9", "BAD-USDC", dec!(1), dec!(-10), "BAD", "USDC");
        assert!(validate_pool(&pool).is_err());

        let pool = Pool::new("9", "ZERO-USDC", dec!(0), dec!(0), "ZERO", "USDC");
        assert!(validate_pool(&pool).is_ok());
    }

    #[test]
    fn test_blank_identity_rejected() {
        let pool = Pool::new(" ", "X-USDC", dec!(1), dec!(1), "X", "USDC");
        assert!(validate_pool(&pool).is_err());
        let pool = Pool::new("7", "", dec!(1), dec!(1), "X", "USDC");
        assert!(validate_pool(&pool).is_err());
    }
}
