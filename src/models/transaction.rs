use crate::{error::FeeLensError, format::is_valid_address};
use ethers::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub to: String,
    // whole native-asset units, e.g. "0.5"
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GasSimulation {
    Transfer(TransferCall),
    ContractCall(ContractCall),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferCall {
    pub to: Address,
    pub value: U256,
    pub from: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
    pub from: Address,
}

impl TransactionRequest {
    pub fn new(to: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn validate_recipient(&self) -> Result<Address, FeeLensError> {
        parse_address(&self.to)
    }

    pub fn is_contract_call(&self) -> bool {
        !matches!(self.data.as_deref(), None | Some("") | Some("0x"))
    }

    pub fn to_simulation(&self) -> Result<GasSimulation, FeeLensError> {
        let to = self.validate_recipient()?;
        let from = parse_address(&self.from)?;
        let value = parse_value(self.value.as_deref())?;

        match payload_hex(self.data.as_deref())? {
            Some(hex_data) => {
                let data = hex::decode(hex_data)
                    .map_err(|e| FeeLensError::InvalidPayload(format!("{}: {}", hex_data, e)))?;
                Ok(GasSimulation::ContractCall(ContractCall {
                    to,
                    data: data.into(),
                    value,
                    from,
                }))
            }
            None => Ok(GasSimulation::Transfer(TransferCall { to, value, from })),
        }
    }
}

fn parse_address(raw: &str) -> Result<Address, FeeLensError> {
    if !is_valid_address(raw) {
        return Err(FeeLensError::InvalidAddress(raw.to_string()));
    }
    raw.parse::<Address>()
        .map_err(|_| FeeLensError::InvalidAddress(raw.to_string()))
}

fn parse_value(raw: Option<&str>) -> Result<U256, FeeLensError> {
    let value = match raw.map(str::trim) {
        None | Some("") => "0",
        Some(v) => v,
    };
    ethers::utils::parse_ether(value)
        .map_err(|e| FeeLensError::InvalidAmount(format!("{}: {}", value, e)))
}

// None for an absent, empty or bare "0x" payload.
fn payload_hex(raw: Option<&str>) -> Result<Option<&str>, FeeLensError> {
    let data = match raw {
        None | Some("") => return Ok(None),
        Some(data) => data,
    };
    match data.strip_prefix("0x") {
        Some("") => Ok(None),
        Some(digits) => Ok(Some(digits)),
        None => Err(FeeLensError::InvalidPayload(format!(
            "{}: missing 0x prefix",
            data
        ))),
    }
}
