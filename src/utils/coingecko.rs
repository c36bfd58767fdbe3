use crate::config::Config;
use crate::models::markets_model::MarketsEntry;
use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue},
    Client,
};
use thiserror::Error;

pub const VS_CURRENCY: &str = "usd";
pub const MARKET_ORDER: &str = "market_cap_desc";
pub const PER_PAGE: u32 = 50;
pub const PAGE: u32 = 1;

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("invalid COINGECKO_API_KEY header value: {0}")]
    ApiKey(#[from] InvalidHeaderValue),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub struct CoinGecko {
    client: Client,
    base_url: String,
}

impl CoinGecko {
    pub fn init(config: &Config) -> Result<Self, ClientInitError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.coingecko_api_key {
            headers.insert("x-cg-demo-api-key", HeaderValue::from_str(api_key)?);
        }
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        // No request timeout: a hung endpoint leaves the table empty.
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.coingecko_base_url.clone(),
        })
    }

    pub fn markets_url(&self) -> String {
        format!(
            "{}/coins/markets?vs_currency={}&order={}&per_page={}&page={}&sparkline=false",
            self.base_url, VS_CURRENCY, MARKET_ORDER, PER_PAGE, PAGE
        )
    }

    // Fetch the top coins by market cap, in the order the API returns them
    pub async fn fetch_markets(&self) -> Result<Vec<MarketsEntry>, crate::fetcher::LoadError> {
        let url = self.markets_url();

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let entries: Vec<MarketsEntry> = serde_json::from_str(&body)?;

        Ok(entries)
    }
}
