use crate::{format::NATIVE_DECIMALS, services::price::COINGECKO_API_URL};
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testnet,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub host: String,
    pub port: u16,

    // Network endpoint used for fee data and gas simulation
    pub rpc_url: String,

    // USD price feed
    pub price_feed_url: String,
    pub native_asset_id: String,
    pub native_symbol: String,

    // Display
    pub cost_precision: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let environment = Self::parse_environment()?;

        let config = Self {
            environment,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,

            rpc_url: std::env::var("RPC_URL").context("RPC_URL required")?,

            price_feed_url: std::env::var("PRICE_FEED_URL")
                .unwrap_or_else(|_| COINGECKO_API_URL.to_string()),
            native_asset_id: std::env::var("NATIVE_ASSET_ID")
                .unwrap_or_else(|_| "ethereum".to_string()),
            native_symbol: std::env::var("NATIVE_SYMBOL").unwrap_or_else(|_| "ETH".to_string()),

            cost_precision: std::env::var("COST_PRECISION")
                .unwrap_or_else(|_| "6".to_string())
                .parse()
                .context("Invalid COST_PRECISION")?,
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_environment() -> Result<Environment> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::environment_from_str(&env)
    }

    fn environment_from_str(env: &str) -> Result<Environment> {
        match env.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testnet" | "test" => Ok(Environment::Testnet),
            "production" | "prod" => Ok(Environment::Production),
            _ => bail!("Unknown environment: {}", env),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rpc_url.starts_with("http") {
            bail!("RPC_URL must be HTTP(S) URL");
        }
        if !self.price_feed_url.starts_with("http") {
            bail!("PRICE_FEED_URL must be HTTP(S) URL");
        }
        if self.native_asset_id.trim().is_empty() {
            bail!("NATIVE_ASSET_ID must not be empty");
        }
        if self.cost_precision > NATIVE_DECIMALS as usize {
            bail!(
                "COST_PRECISION must be at most {}, got {}",
                NATIVE_DECIMALS,
                self.cost_precision
            );
        }

        tracing::info!(
            "Configuration validated for {:?} environment",
            self.environment
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            environment: Environment::Development,
            host: "127.0.0.1".to_string(),
            port: 8080,
            rpc_url: "http://localhost:8545".to_string(),
            price_feed_url: COINGECKO_API_URL.to_string(),
            native_asset_id: "ethereum".to_string(),
            native_symbol: "ETH".to_string(),
            cost_precision: 6,
        }
    }

    #[test]
    fn accepts_defaults() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_endpoints() {
        let mut config = sample();
        config.rpc_url = "ws://localhost:8546".to_string();
        assert!(config.validate().is_err());

        let mut config = sample();
        config.price_feed_url = "ftp://prices".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_precision_beyond_wei() {
        let mut config = sample();
        config.cost_precision = 19;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_environment_aliases() {
        assert_eq!(
            Config::environment_from_str("PROD").unwrap(),
            Environment::Production
        );
        assert_eq!(
            Config::environment_from_str("test").unwrap(),
            Environment::Testnet
        );
        assert!(Config::environment_from_str("staging").is_err());
    }
}
