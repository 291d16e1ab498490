use crate::{
    error::FeeLensError,
    format::short_address,
    models::{GasEstimate, GasPrediction, RecommendedFee, TransactionRequest},
    services::{
        gas_limit::run_simulation, recommend, CostCalculator, NetworkConnection, PriceOracle,
    },
};
use std::sync::Arc;

pub struct FeeEstimator {
    oracle: Arc<dyn PriceOracle>,
    calculator: CostCalculator,
}

impl FeeEstimator {
    pub fn new(oracle: Arc<dyn PriceOracle>, calculator: CostCalculator) -> Self {
        Self { oracle, calculator }
    }

    pub async fn estimate_transaction_fee<C>(
        &self,
        connection: &C,
        request: &TransactionRequest,
    ) -> Result<GasEstimate, FeeLensError>
    where
        C: NetworkConnection + ?Sized,
    {
        // Local validation happens before any network call.
        request.validate_recipient()?;
        let simulation = request.to_simulation()?;

        let chain = async {
            let fee_data = connection.fee_data().await?;
            tracing::debug!(?fee_data, "Fee data fetched");

            // No point simulating if the result can't be priced.
            fee_data.pricing()?;

            let gas_limit = run_simulation(connection, &simulation).await?;
            Ok::<_, FeeLensError>((fee_data, gas_limit))
        };

        // The USD quote doesn't depend on the chain calls.
        let (chain, native_price_usd) = futures::join!(chain, self.oracle.native_price_usd());
        let (fee_data, gas_limit) = chain?;

        let estimate = self.calculator.compute(gas_limit, &fee_data, native_price_usd)?;

        tracing::info!(
            "Gas estimate for {}: limit={}, price={} gwei, cost={} {} (${})",
            short_address(&request.to),
            estimate.gas_limit,
            estimate.gas_price_gwei,
            estimate.total_cost_native,
            estimate.native_symbol,
            estimate.total_cost_usd
        );

        Ok(estimate)
    }

    pub async fn recommended_gas_price<C>(
        &self,
        connection: &C,
    ) -> Result<RecommendedFee, FeeLensError>
    where
        C: NetworkConnection + ?Sized,
    {
        let (fee_data, block_number) =
            futures::join!(connection.fee_data(), connection.latest_block_number());

        let current_price = fee_data?.pricing()?.price();
        let recommended = recommend(current_price, block_number?);

        tracing::info!(
            "Recommended gas price at block {}: {} gwei (current {} gwei)",
            recommended.observed_block_number,
            recommended.recommended_gwei,
            recommended.current_gwei
        );

        Ok(recommended)
    }

    pub async fn predict<C>(
        &self,
        connection: &C,
        request: &TransactionRequest,
    ) -> Result<GasPrediction, FeeLensError>
    where
        C: NetworkConnection + ?Sized,
    {
        let estimate = self.estimate_transaction_fee(connection, request).await?;
        let recommended = self.recommended_gas_price(connection).await?;
        Ok(GasPrediction {
            estimate,
            recommended,
        })
    }
}
