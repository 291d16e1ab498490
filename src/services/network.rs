use crate::{
    error::FeeLensError,
    models::{ContractCall, FeeData, TransferCall},
};
use anyhow::Result;
use async_trait::async_trait;
use ethers::{
    providers::{Http, Middleware, Provider},
    types::{transaction::eip2718::TypedTransaction, BlockNumber, U256},
};
use std::sync::Arc;

// 1 gwei, used when eth_maxPriorityFeePerGas is unsupported
pub const DEFAULT_PRIORITY_FEE_WEI: u64 = 1_000_000_000;

#[async_trait]
pub trait NetworkConnection: Send + Sync {
    async fn fee_data(&self) -> Result<FeeData, FeeLensError>;

    async fn simulate_transfer(&self, call: &TransferCall) -> Result<U256, FeeLensError>;

    async fn simulate_contract_call(&self, call: &ContractCall) -> Result<U256, FeeLensError>;

    async fn latest_block_number(&self) -> Result<u64, FeeLensError>;
}

pub struct EthereumConnection {
    provider: Arc<Provider<Http>>,
}

impl EthereumConnection {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let provider = Arc::new(Provider::<Http>::try_from(rpc_url)?);
        Ok(Self { provider })
    }
}

#[async_trait]
impl NetworkConnection for EthereumConnection {
    async fn fee_data(&self) -> Result<FeeData, FeeLensError> {
        let (block, gas_price, priority_fee) = futures::join!(
            self.provider.get_block(BlockNumber::Latest),
            self.provider.get_gas_price(),
            self.provider
                .request::<_, U256>("eth_maxPriorityFeePerGas", ()),
        );

        // Only the block is mandatory; the price calls are allowed to fail.
        let block = block?;

        let gas_price = match gas_price {
            Ok(price) => Some(price),
            Err(e) => {
                tracing::debug!("eth_gasPrice unavailable: {}", e);
                None
            }
        };

        let (max_fee_per_gas, max_priority_fee_per_gas) =
            match block.and_then(|b| b.base_fee_per_gas) {
                Some(base_fee) => {
                    let priority = priority_fee
                        .unwrap_or_else(|_| U256::from(DEFAULT_PRIORITY_FEE_WEI));
                    (
                        Some(base_fee.saturating_mul(U256::from(2u8)).saturating_add(priority)),
                        Some(priority),
                    )
                }
                None => (None, None),
            };

        Ok(FeeData {
            gas_price,
            max_fee_per_gas,
            max_priority_fee_per_gas,
        })
    }

    async fn simulate_transfer(&self, call: &TransferCall) -> Result<U256, FeeLensError> {
        let tx: TypedTransaction = ethers::types::TransactionRequest::new()
            .to(call.to)
            .from(call.from)
            .value(call.value)
            .into();

        self.provider
            .estimate_gas(&tx, None)
            .await
            .map_err(FeeLensError::from_simulation)
    }

    async fn simulate_contract_call(&self, call: &ContractCall) -> Result<U256, FeeLensError> {
        let tx: TypedTransaction = ethers::types::TransactionRequest::new()
            .to(call.to)
            .from(call.from)
            .value(call.value)
            .data(call.data.clone())
            .into();

        self.provider
            .estimate_gas(&tx, None)
            .await
            .map_err(FeeLensError::from_simulation)
    }

    async fn latest_block_number(&self) -> Result<u64, FeeLensError> {
        Ok(self.provider.get_block_number().await?.as_u64())
    }
}
