use crate::{format::wei_to_gwei_string, models::RecommendedFee};
use ethers::types::U256;

pub const FAST_CONFIRMATION_PERCENT: u64 = 110;

// Truncating division, no rounding.
pub fn recommend(current_price: U256, block_number: u64) -> RecommendedFee {
    let recommended_price =
        current_price.saturating_mul(U256::from(FAST_CONFIRMATION_PERCENT)) / U256::from(100u64);

    RecommendedFee {
        current_price,
        recommended_price,
        current_gwei: wei_to_gwei_string(current_price),
        recommended_gwei: wei_to_gwei_string(recommended_price),
        observed_block_number: block_number,
    }
}
