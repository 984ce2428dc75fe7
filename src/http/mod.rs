pub mod error;
pub mod fetch;
pub mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use self::{
    error::ApiError,
    models::{ChartData, Content, Inspiration, Machine, Slide},
};

pub const MACHINES: &str = "/api/machines";
pub const CHART_DATA: &str = "/api/chart-data";
pub const INSPIRATIONS: &str = "/api/inspirations";
pub const SLIDES: &str = "/api/slides";
pub const CONTENT: &str = "/api/content";

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_machines(&self) -> Result<Vec<Machine>, ApiError>;
    async fn fetch_chart_data(&self, kod: &str, start_day: u32) -> Result<ChartData, ApiError>;
    async fn fetch_inspirations(&self) -> Result<Vec<Inspiration>, ApiError>;
    async fn fetch_slides(&self) -> Result<Vec<Slide>, ApiError>;
    async fn fetch_content(&self) -> Result<Content, ApiError>;
}

pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, endpoint);
        let parsed = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        parsed.map_err(|e| ApiError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint, params)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }

        response
            .json()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })
    }
}

#[async_trait]
impl ContentSource for ApiService {
    async fn fetch_machines(&self) -> Result<Vec<Machine>, ApiError> {
        self.get(MACHINES, &[]).await
    }

    async fn fetch_chart_data(&self, kod: &str, start_day: u32) -> Result<ChartData, ApiError> {
        let start_day = start_day.to_string();
        self.get(CHART_DATA, &[("kod", kod), ("start_day", &start_day)])
            .await
    }

    async fn fetch_inspirations(&self) -> Result<Vec<Inspiration>, ApiError> {
        self.get(INSPIRATIONS, &[]).await
    }

    async fn fetch_slides(&self) -> Result<Vec<Slide>, ApiError> {
        self.get(SLIDES, &[]).await
    }

    async fn fetch_content(&self) -> Result<Content, ApiError> {
        self.get(CONTENT, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_encodes_query() {
        let api = ApiService::new("http://kiosk.local:5000/").unwrap();
        let url = api
            .url(CHART_DATA, &[("kod", "13 10"), ("start_day", "8")])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://kiosk.local:5000/api/chart-data?kod=13+10&start_day=8"
        );
    }

    #[test]
    fn plain_endpoints_have_no_query() {
        let api = ApiService::new("http://kiosk.local:5000").unwrap();

        assert_eq!(
            api.url(SLIDES, &[]).unwrap().as_str(),
            "http://kiosk.local:5000/api/slides"
        );
    }

    #[test]
    fn malformed_base_url_is_reported() {
        let api = ApiService::new("not a url").unwrap();

        assert!(matches!(
            api.url(CONTENT, &[]),
            Err(ApiError::InvalidUrl { .. })
        ));
    }
}
