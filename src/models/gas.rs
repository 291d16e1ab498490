use ethers::types::U256;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
    #[serde(serialize_with = "decimal")]
    pub gas_limit: U256,
    #[serde(serialize_with = "decimal")]
    pub gas_price_used: U256,
    pub gas_price_gwei: String,
    pub total_cost_native: String,
    #[serde(rename = "totalCostUSD")]
    pub total_cost_usd: String,
    #[serde(rename = "nativePriceUSD")]
    pub native_price_usd: f64,
    pub native_symbol: String,
    #[serde(serialize_with = "decimal_opt", skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    #[serde(serialize_with = "decimal_opt", skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas_gwei: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas_gwei: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedFee {
    #[serde(serialize_with = "decimal")]
    pub current_price: U256,
    #[serde(serialize_with = "decimal")]
    pub recommended_price: U256,
    pub current_gwei: String,
    pub recommended_gwei: String,
    pub observed_block_number: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GasPrediction {
    pub estimate: GasEstimate,
    pub recommended: RecommendedFee,
}

// U256 serializes as hex by default; callers expect base-10 strings.
fn decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

fn decimal_opt<S: Serializer>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => decimal(v, serializer),
        None => serializer.serialize_none(),
    }
}
