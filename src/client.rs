//! Storefront API client
//!
//! Thin `reqwest` wrapper over the three endpoints. The base URL comes from
//! `STORE_API_URL` and defaults to the local server address.

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::domain::{CartItem, Product};
use crate::routes::CheckoutResponse;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("product not found")]
    ProductNotFound,
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

/// Checkout submission body: the cart lines plus the precomputed total.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartItem>,
    pub total: Decimal,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client pointed at `STORE_API_URL`, or the local default.
    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/products", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn fetch_product(&self, id: &str) -> Result<Product, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/products/{id}", self.base_url))
            .send()
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::ProductNotFound),
            status if status.is_success() => Ok(response.json().await?),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }

    pub async fn submit_checkout(
        &self,
        items: Vec<CartItem>,
        total: Decimal,
    ) -> Result<CheckoutResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/checkout", self.base_url))
            .json(&CheckoutRequest { items, total })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");
    }
}
