//! Typed HTTP client for the external services.
//!
//! The gateway (schema, reports, query, filter values), the operational
//! database inspection endpoints, and the migration executor are all
//! external; this client is the single place that talks to them. One
//! request in, one result or one failure out — no retry, timeout beyond the
//! configured request timeout, or cancellation; a caller wanting those
//! wraps these functions.

pub mod error;
pub mod protocol;

pub use error::{ClientError, ClientResult};

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::chart::QueryResult;
use crate::config::Settings;
use crate::model::{MigrationPlan, ReportSpec, Schema};
use crate::sql::Granularity;
use protocol::{
    ErrorResponse, FilterValuesResponse, MessageResponse, QueryRequest, ReportsResponse,
    SourceColumnsResponse, SourceTablesResponse,
};

/// Client over the backend API under one base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client against a base URL like `http://localhost:8000/api`, with the
    /// default request timeout.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client configured from settings (base URL, timeout).
    pub fn from_settings(settings: &Settings) -> ClientResult<Self> {
        Self::with_timeout(
            settings.api.resolved_base_url(),
            Duration::from_secs(settings.api.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /schema` — the warehouse catalog.
    pub async fn schema(&self) -> ClientResult<Schema> {
        self.get_json("/schema").await
    }

    /// `GET /reports` — all persisted report specs.
    pub async fn reports(&self) -> ClientResult<Vec<ReportSpec>> {
        let resp: ReportsResponse = self.get_json("/reports").await?;
        Ok(resp.reports)
    }

    /// `POST /reports` — create or fully replace one report by id.
    pub async fn save_report(&self, report: &ReportSpec) -> ClientResult<()> {
        debug!(id = %report.id, "saving report");
        let response = self.http.post(self.url("/reports")).json(report).send().await?;
        self.check(response).await?;
        Ok(())
    }

    /// `DELETE /reports/{id}`.
    pub async fn delete_report(&self, id: &str) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/reports/{}", id)))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    /// `GET /filter-values/{table}/{column}` — distinct values for one
    /// slice dropdown.
    pub async fn filter_values(&self, table: &str, column: &str) -> ClientResult<Vec<Value>> {
        let resp: FilterValuesResponse = self
            .get_json(&format!("/filter-values/{}/{}", table, column))
            .await?;
        Ok(resp.values)
    }

    /// `GET /osaio/tables` — tables in the operational source database.
    pub async fn source_tables(&self) -> ClientResult<Vec<String>> {
        let resp: SourceTablesResponse = self.get_json("/osaio/tables").await?;
        Ok(resp.tables)
    }

    /// `GET /osaio/columns/{table}` — column names of one source table.
    pub async fn source_columns(&self, table: &str) -> ClientResult<Vec<String>> {
        let resp: SourceColumnsResponse = self.get_json(&format!("/osaio/columns/{}", table)).await?;
        Ok(resp.columns)
    }

    /// `POST /query` — run a report against the warehouse.
    ///
    /// Every failure mode, transport included, surfaces as
    /// [`ClientError::QueryFailed`] so the viewer renders one inline error
    /// state; there is no partial render.
    pub async fn run_query(
        &self,
        report_id: &str,
        filters: &BTreeMap<String, Value>,
        granularity: Option<Granularity>,
    ) -> ClientResult<QueryResult> {
        let body = QueryRequest {
            report_id: report_id.to_string(),
            filters: filters.clone(),
            granularity: granularity.map(|g| g.as_str().to_string()),
        };

        debug!(report_id, "running report query");
        let response = self
            .http
            .post(self.url("/query"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::query_failed(e.to_string()))?;

        if !response.status().is_success() {
            let detail = error_detail(response, "Query failed").await;
            return Err(ClientError::query_failed(detail));
        }

        response
            .json::<QueryResult>()
            .await
            .map_err(|e| ClientError::query_failed(format!("malformed query result: {}", e)))
    }

    /// `POST /etl/execute` — submit a compiled migration plan. Returns the
    /// executor's success message.
    pub async fn execute_migration(&self, plan: &MigrationPlan) -> ClientResult<String> {
        debug!(
            source = %plan.source_table,
            target = %plan.target_table,
            columns = plan.mappings.len(),
            "executing migration"
        );
        let response = self
            .http
            .post(self.url("/etl/execute"))
            .json(plan)
            .send()
            .await
            .map_err(|e| ClientError::migration_failed(e.to_string()))?;

        if !response.status().is_success() {
            let detail = error_detail(response, "Migration failed").await;
            return Err(ClientError::migration_failed(detail));
        }

        let resp: MessageResponse = response
            .json()
            .await
            .map_err(|e| ClientError::migration_failed(format!("malformed response: {}", e)))?;
        Ok(resp.message)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.http.get(self.url(path)).send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// Map a non-2xx response to `RequestFailed` with the server detail.
    async fn check(&self, response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = error_detail(response, "request failed").await;
        Err(ClientError::RequestFailed {
            status: status.as_u16(),
            detail,
        })
    }
}

/// Pull the `detail` field out of an error body, falling back to a generic
/// message when the body is missing or not the expected shape.
async fn error_detail(response: reqwest::Response, fallback: &str) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) if !body.detail.is_empty() => body.detail,
        _ => fallback.to_string(),
    }
}
