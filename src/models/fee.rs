use crate::error::FeeLensError;
use ethers::types::U256;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeData {
    pub gas_price: Option<U256>,
    pub max_fee_per_gas: Option<U256>,
    pub max_priority_fee_per_gas: Option<U256>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeePricing {
    Legacy {
        gas_price: U256,
    },
    Eip1559 {
        max_fee_per_gas: U256,
        max_priority_fee_per_gas: Option<U256>,
    },
}

impl FeeData {
    pub fn legacy(gas_price: U256) -> Self {
        Self {
            gas_price: Some(gas_price),
            ..Default::default()
        }
    }

    pub fn eip1559(max_fee_per_gas: U256, max_priority_fee_per_gas: U256) -> Self {
        Self {
            gas_price: None,
            max_fee_per_gas: Some(max_fee_per_gas),
            max_priority_fee_per_gas: Some(max_priority_fee_per_gas),
        }
    }

    // legacy price wins when both are present
    pub fn pricing(&self) -> Result<FeePricing, FeeLensError> {
        match (self.gas_price, self.max_fee_per_gas) {
            (Some(gas_price), _) => Ok(FeePricing::Legacy { gas_price }),
            (None, Some(max_fee_per_gas)) => Ok(FeePricing::Eip1559 {
                max_fee_per_gas,
                max_priority_fee_per_gas: self.max_priority_fee_per_gas,
            }),
            (None, None) => Err(FeeLensError::InsufficientFeeData),
        }
    }
}

impl FeePricing {
    pub fn price(&self) -> U256 {
        match self {
            FeePricing::Legacy { gas_price } => *gas_price,
            FeePricing::Eip1559 {
                max_fee_per_gas, ..
            } => *max_fee_per_gas,
        }
    }
}
