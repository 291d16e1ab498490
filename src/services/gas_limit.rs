use crate::{
    error::FeeLensError,
    models::{GasSimulation, TransactionRequest},
    services::NetworkConnection,
};
use ethers::types::U256;

pub async fn estimate_gas_limit<C>(
    connection: &C,
    request: &TransactionRequest,
) -> Result<U256, FeeLensError>
where
    C: NetworkConnection + ?Sized,
{
    let simulation = request.to_simulation()?;
    run_simulation(connection, &simulation).await
}

pub async fn run_simulation<C>(
    connection: &C,
    simulation: &GasSimulation,
) -> Result<U256, FeeLensError>
where
    C: NetworkConnection + ?Sized,
{
    match simulation {
        GasSimulation::ContractCall(call) => {
            tracing::debug!(
                "Simulating contract call to {:?} ({} bytes of data)",
                call.to,
                call.data.len()
            );
            connection.simulate_contract_call(call).await
        }
        GasSimulation::Transfer(call) => {
            tracing::debug!("Simulating transfer to {:?}", call.to);
            connection.simulate_transfer(call).await
        }
    }
}
