use crate::{
    error::FeeLensError,
    format::{
        to_fixed, wei_to_gwei_string, wei_to_native_f64, DEFAULT_COST_PRECISION, NATIVE_DECIMALS,
    },
    models::{FeeData, GasEstimate},
};
use ethers::types::U256;

#[derive(Debug, Clone)]
pub struct CostCalculator {
    native_symbol: String,
    precision: usize,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new("ETH", DEFAULT_COST_PRECISION)
    }
}

impl CostCalculator {
    pub fn new(native_symbol: impl Into<String>, precision: usize) -> Self {
        Self {
            native_symbol: native_symbol.into(),
            // wei has no digits past 18 places
            precision: precision.min(NATIVE_DECIMALS as usize),
        }
    }

    pub fn compute(
        &self,
        gas_limit: U256,
        fee_data: &FeeData,
        native_price_usd: f64,
    ) -> Result<GasEstimate, FeeLensError> {
        let gas_price = fee_data.pricing()?.price();

        let total_cost_wei = gas_limit.saturating_mul(gas_price);
        let total_cost_usd = wei_to_native_f64(total_cost_wei) * native_price_usd;

        Ok(GasEstimate {
            gas_limit,
            gas_price_used: gas_price,
            gas_price_gwei: wei_to_gwei_string(gas_price),
            total_cost_native: to_fixed(total_cost_wei, NATIVE_DECIMALS, self.precision),
            total_cost_usd: format!("{:.2}", total_cost_usd),
            native_price_usd,
            native_symbol: self.native_symbol.clone(),
            max_fee_per_gas: fee_data.max_fee_per_gas,
            max_priority_fee_per_gas: fee_data.max_priority_fee_per_gas,
            max_fee_per_gas_gwei: fee_data.max_fee_per_gas.map(wei_to_gwei_string),
            max_priority_fee_per_gas_gwei: fee_data
                .max_priority_fee_per_gas
                .map(wei_to_gwei_string),
        })
    }
}
