use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

// Never fails. An unavailable quote is reported as 0.0.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    async fn native_price_usd(&self) -> f64;
}

pub struct CoinGeckoOracle {
    client: reqwest::Client,
    base_url: String,
    asset_id: String,
}

impl CoinGeckoOracle {
    pub fn new(base_url: impl Into<String>, asset_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            asset_id: asset_id.into(),
        }
    }

    async fn fetch_price(&self) -> Result<f64> {
        let url = format!("{}/simple/price", self.base_url);

        let body: Value = self
            .client
            .get(&url)
            .query(&[("ids", self.asset_id.as_str()), ("vs_currencies", "usd")])
            .send()
            .await
            .context("price feed request failed")?
            .json()
            .await
            .context("price feed returned malformed JSON")?;

        let price = body
            .get(&self.asset_id)
            .and_then(|asset| asset.get("usd"))
            .and_then(Value::as_f64)
            .with_context(|| format!("price feed has no usd quote for {}", self.asset_id))?;

        if !price.is_finite() || price < 0.0 {
            anyhow::bail!("price feed returned invalid quote {}", price);
        }

        Ok(price)
    }
}

#[async_trait]
impl PriceOracle for CoinGeckoOracle {
    async fn native_price_usd(&self) -> f64 {
        match self.fetch_price().await {
            Ok(price) => {
                tracing::debug!("{} price: ${:.2}", self.asset_id, price);
                price
            }
            Err(e) => {
                tracing::warn!("Price feed unavailable, using 0: {:#}", e);
                0.0
            }
        }
    }
}

pub struct StaticPriceOracle(pub f64);

#[async_trait]
impl PriceOracle for StaticPriceOracle {
    async fn native_price_usd(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_nested_usd_quote() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/simple/price")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("ids".into(), "ethereum".into()),
                mockito::Matcher::UrlEncoded("vs_currencies".into(), "usd".into()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(r#"{"ethereum":{"usd":3000.5}}"#)
            .create_async()
            .await;

        let oracle = CoinGeckoOracle::new(server.url(), "ethereum");
        assert_eq!(oracle.native_price_usd().await, 3000.5);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_asset_degrades_to_zero() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/simple/price")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"bitcoin":{"usd":60000}}"#)
            .create_async()
            .await;

        let oracle = CoinGeckoOracle::new(server.url(), "ethereum");
        assert_eq!(oracle.native_price_usd().await, 0.0);
    }

    #[tokio::test]
    async fn malformed_body_degrades_to_zero() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/simple/price")
            .match_query(mockito::Matcher::Any)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let oracle = CoinGeckoOracle::new(server.url(), "ethereum");
        assert_eq!(oracle.native_price_usd().await, 0.0);
    }

    #[tokio::test]
    async fn non_numeric_quote_degrades_to_zero() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/simple/price")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"ethereum":{"usd":"3000"}}"#)
            .create_async()
            .await;

        let oracle = CoinGeckoOracle::new(server.url(), "ethereum");
        assert_eq!(oracle.native_price_usd().await, 0.0);
    }

    #[tokio::test]
    async fn unreachable_feed_degrades_to_zero() {
        let oracle = CoinGeckoOracle::new("http://127.0.0.1:1", "ethereum");
        assert_eq!(oracle.native_price_usd().await, 0.0);
    }

    #[test]
    fn static_oracle_returns_its_quote() {
        let oracle = StaticPriceOracle(1850.0);
        assert_eq!(tokio_test::block_on(oracle.native_price_usd()), 1850.0);
    }
}
