//! Email template parameters derived from a comparison

use crate::{
    types::{ComparisonResult, TemplateParams},
    utils::{format_apy, format_one_decimal},
};

impl TemplateParams {
    pub fn from_comparison(email: &str, result: &ComparisonResult) -> Self {
        let current = &result.current_pool;
        let best = &result.best_pool;
        let current_apy = format_apy(current.apy);
        let best_apy = format_apy(best.apy);
        let difference = format_one_decimal(result.yield_difference);

        Self {
            email: email.to_string(),
            current_pool: current.name.clone(),
            current_apy: format!("{}%", current_apy),
            best_pool: best.name.clone(),
            best_apy: format!("{}%", best_apy),
            yield_difference: format!("+{}%", difference),
            message: format!(
                "You're currently in {} Pool ({}% APY). The best pool is {} Pool ({}% APY). \
                 You could earn {}% more by switching.",
                current.name, current_apy, best.name, best_apy, difference
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pools::mock_pools, yields::compare};

    #[test]
    fn test_params_for_eth_usdc() {
        let result = compare(&mock_pools(), "1").unwrap();
        let params = TemplateParams::from_comparison("user@example.com", &result);

        assert_eq!(params.email, "user@example.com");
        assert_eq!(params.current_pool, "ETH-USDC");
        assert_eq!(params.current_apy, "3.2%");
        assert_eq!(params.best_pool, "XLM-USDC");
        assert_eq!(params.best_apy, "5.1%");
        assert_eq!(params.yield_difference, "+1.9%");
        assert_eq!(
            params.message,
            "You're currently in ETH-USDC Pool (3.2% APY). The best pool is XLM-USDC Pool (5.1% APY). \
             You could earn 1.9% more by switching."
        );
    }

    #[test]
    fn test_params_when_already_best() {
        let result = compare(&mock_pools(), "2").unwrap();
        let params = TemplateParams::from_comparison("a@b.co", &result);
        assert_eq!(params.yield_difference, "+0.0%");
        assert!(params.message.ends_with("You could earn 0.0% more by switching."));
    }

    #[test]
    fn test_params_serialize_as_flat_strings() {
        let result = compare(&mock_pools(), "4").unwrap();
        let value = serde_json::to_value(TemplateParams::from_comparison("x@y.z", &result)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        assert!(object.values().all(|v| v.is_string()));
        assert_eq!(object["yield_difference"], "+0.4%");
    }
}
