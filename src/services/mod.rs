pub mod calculator;
pub mod estimator;
pub mod gas_limit;
pub mod network;
pub mod price;
pub mod recommendation;

pub use calculator::CostCalculator;
pub use estimator::FeeEstimator;
pub use gas_limit::estimate_gas_limit;
pub use network::{EthereumConnection, NetworkConnection};
pub use price::{CoinGeckoOracle, PriceOracle, StaticPriceOracle};
pub use recommendation::recommend;
