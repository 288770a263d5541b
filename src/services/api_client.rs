use crate::error::ApiError;
use crate::models::{NewTransaction, Transaction, TransactionType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::time::Duration;

#[async_trait]
pub trait TransactionApi {
    async fn list_transactions(&self, query: Option<&str>) -> Result<Vec<Transaction>, ApiError>;

    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiError>;
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub type_: TransactionType,
    #[serde(serialize_with = "crate::models::serialize_datetime")]
    pub created_at: DateTime<Utc>,
}

impl CreateTransactionRequest {
    pub fn new(input: NewTransaction, created_at: DateTime<Utc>) -> Self {
        Self {
            description: input.description,
            price: input.price,
            category: input.category,
            type_: input.type_,
            created_at,
        }
    }
}

pub struct RemoteClient {
    client: reqwest::Client,
    transactions_url: reqwest::Url,
}

impl RemoteClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let transactions_url = transactions_url(api_url)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        info!("Remote API at {}", transactions_url);
        Ok(Self {
            client,
            transactions_url,
        })
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status,
                url: response.url().to_string(),
            })
        }
    }
}

fn transactions_url(api_url: &str) -> Result<reqwest::Url, ApiError> {
    let invalid = |reason: String| ApiError::InvalidUrl {
        url: api_url.to_string(),
        reason,
    };
    let base = format!("{}/", api_url.trim_end_matches('/'));
    reqwest::Url::parse(&base)
        .and_then(|url| url.join("transactions"))
        .map_err(|e| invalid(e.to_string()))
}

fn list_params(query: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("_sort", "createdAt".to_string()),
        ("_order", "desc".to_string()),
    ];
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        params.push(("q", q.to_string()));
    }
    params
}

#[async_trait]
impl TransactionApi for RemoteClient {
    async fn list_transactions(&self, query: Option<&str>) -> Result<Vec<Transaction>, ApiError> {
        info!("Fetching transactions from URL: {}", self.transactions_url);
        let response = self
            .client
            .get(self.transactions_url.clone())
            .query(&list_params(query))
            .send()
            .await?;
        let transactions: Vec<Transaction> = Self::check_status(response)?.json().await?;
        info!("Fetched {} transactions", transactions.len());
        Ok(transactions)
    }

    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        info!("Posting transaction to URL: {}", self.transactions_url);
        let response = self
            .client
            .post(self.transactions_url.clone())
            .json(request)
            .send()
            .await?;
        let created: Transaction = Self::check_status(response)?.json().await?;
        info!("Server created transaction {}", created.id);
        Ok(created)
    }
}
