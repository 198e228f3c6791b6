//! REST implementation of [`PlanStore`].

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use super::{PlanStore, TokenProvider};
use crate::{
    error::{OverloadError, Result},
    models::{PlanId, WeekPlan, WeekPlanDraft, WireDraft},
};

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP client for the week plan endpoints.
///
/// # Example
///
/// ```rust,no_run
/// use overload_core::store::{HttpStoreBuilder, PlanStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = HttpStoreBuilder::new()
///     .with_base_url("http://localhost:8000/api")
///     .with_csrf_token("token")
///     .build()?;
///
/// let latest = store.fetch_latest().await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpPlanStore {
    client: Client,
    base_url: String,
    token: Arc<dyn TokenProvider>,
}

impl HttpPlanStore {
    pub(crate) fn new(client: Client, base_url: &str, token: Arc<dyn TokenProvider>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Base URL the endpoints are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/weekplans/", self.base_url)
    }

    fn plan_url(&self, id: PlanId) -> String {
        format!("{}/weekplans/{}/", self.base_url, id)
    }

    async fn request(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let token = self.token.token().await?;
        debug!("{method} {url}");
        Ok(self.client.request(method, url).header(CSRF_HEADER, token))
    }

    /// Maps non-success statuses to errors. A 404 on an id-addressed call is
    /// `NotFound`; every other failure is a transport error carrying the body.
    async fn check(response: Response, id: Option<PlanId>) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if let (StatusCode::NOT_FOUND, Some(id)) = (status, id) {
            return Err(OverloadError::NotFound { id });
        }
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body
        };
        Err(OverloadError::transport(Some(status.as_u16())).with_message(message))
    }

    async fn plan_from(response: Response) -> Result<WeekPlan> {
        let value: Value = response.json().await?;
        WeekPlan::from_wire_value(value)
    }
}

/// Pulls the plan array out of a list response, accepting both a bare array
/// and a paginated `{"results": [...]}` envelope.
fn list_items(body: Value) -> Result<Vec<Value>> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(OverloadError::invalid_response(
                "expected a list of plans".to_string(),
            )),
        },
        _ => Err(OverloadError::invalid_response(
            "expected a list of plans".to_string(),
        )),
    }
}

#[async_trait]
impl PlanStore for HttpPlanStore {
    async fn fetch_latest(&self) -> Result<Option<WeekPlan>> {
        let url = format!("{}/weekplans/latest/", self.base_url);
        let response = self.request(Method::GET, &url).await?.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("No latest plan on the server");
            return Ok(None);
        }

        let response = Self::check(response, None).await?;
        match response.json::<Value>().await? {
            Value::Null => Ok(None),
            value => WeekPlan::from_wire_value(value).map(Some),
        }
    }

    async fn fetch_all(&self) -> Result<Vec<WeekPlan>> {
        let url = self.collection_url();
        let response = self.request(Method::GET, &url).await?.send().await?;
        let response = Self::check(response, None).await?;

        let items = list_items(response.json().await?)?;
        let total = items.len();
        let plans: Vec<WeekPlan> = items
            .into_iter()
            .filter_map(|item| match WeekPlan::from_wire_value(item) {
                Ok(plan) => Some(plan),
                Err(e) => {
                    warn!("Skipping malformed plan in list response: {e}");
                    None
                }
            })
            .collect();

        debug!("Fetched {} of {} plans", plans.len(), total);
        Ok(plans)
    }

    async fn fetch_by_id(&self, id: PlanId) -> Result<WeekPlan> {
        let url = self.plan_url(id);
        let response = self.request(Method::GET, &url).await?.send().await?;
        let response = Self::check(response, Some(id)).await?;
        Self::plan_from(response).await
    }

    async fn create(&self, draft: &WeekPlanDraft) -> Result<WeekPlan> {
        let url = self.collection_url();
        let response = self
            .request(Method::POST, &url)
            .await?
            .json(&WireDraft::from(draft))
            .send()
            .await?;
        let response = Self::check(response, None).await?;
        Self::plan_from(response).await
    }

    async fn update(&self, id: PlanId, draft: &WeekPlanDraft) -> Result<WeekPlan> {
        let url = self.plan_url(id);
        let response = self
            .request(Method::PUT, &url)
            .await?
            .json(&WireDraft::from(draft))
            .send()
            .await?;
        let response = Self::check(response, Some(id)).await?;
        Self::plan_from(response).await
    }

    async fn delete(&self, id: PlanId) -> Result<()> {
        let url = self.plan_url(id);
        let response = self.request(Method::DELETE, &url).await?.send().await?;
        Self::check(response, Some(id)).await?;
        Ok(())
    }

    async fn activate(&self, id: PlanId) -> Result<WeekPlan> {
        let url = format!("{}/weekplans/{}/set_active/", self.base_url, id);
        let response = self.request(Method::POST, &url).await?.send().await?;
        let response = Self::check(response, Some(id)).await?;
        Self::plan_from(response).await
    }
}
