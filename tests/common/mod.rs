#![allow(dead_code)]

use async_trait::async_trait;
use ethers::types::U256;
use fee_lens::{
    error::FeeLensError,
    models::{ContractCall, FeeData, TransferCall},
    services::NetworkConnection,
};
use std::sync::Mutex;

pub const TO: &str = "0x1111111111111111111111111111111111111111";
pub const FROM: &str = "0x2222222222222222222222222222222222222222";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FeeData,
    Transfer(TransferCall),
    ContractCall(ContractCall),
    BlockNumber,
}

// Scripted network that records every call it receives.
pub struct MockConnection {
    fee_data: Result<FeeData, FeeLensError>,
    gas_limit: Result<U256, FeeLensError>,
    block_number: Result<u64, FeeLensError>,
    calls: Mutex<Vec<Call>>,
}

impl MockConnection {
    pub fn new(fee_data: FeeData, gas_limit: u64) -> Self {
        Self {
            fee_data: Ok(fee_data),
            gas_limit: Ok(U256::from(gas_limit)),
            block_number: Ok(19_000_000),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn legacy(gas_price: u64, gas_limit: u64) -> Self {
        Self::new(FeeData::legacy(U256::from(gas_price)), gas_limit)
    }

    pub fn with_fee_error(mut self, err: FeeLensError) -> Self {
        self.fee_data = Err(err);
        self
    }

    pub fn with_simulation_error(mut self, err: FeeLensError) -> Self {
        self.gas_limit = Err(err);
        self
    }

    pub fn with_block_number(mut self, block: u64) -> Self {
        self.block_number = Ok(block);
        self
    }

    pub fn with_block_error(mut self, err: FeeLensError) -> Self {
        self.block_number = Err(err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn simulation_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Transfer(_) | Call::ContractCall(_)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl NetworkConnection for MockConnection {
    async fn fee_data(&self) -> Result<FeeData, FeeLensError> {
        self.record(Call::FeeData);
        self.fee_data.clone()
    }

    async fn simulate_transfer(&self, call: &TransferCall) -> Result<U256, FeeLensError> {
        self.record(Call::Transfer(call.clone()));
        self.gas_limit.clone()
    }

    async fn simulate_contract_call(&self, call: &ContractCall) -> Result<U256, FeeLensError> {
        self.record(Call::ContractCall(call.clone()));
        self.gas_limit.clone()
    }

    async fn latest_block_number(&self) -> Result<u64, FeeLensError> {
        self.record(Call::BlockNumber);
        self.block_number.clone()
    }
}
