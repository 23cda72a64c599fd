//! # Hosted Backend REST Adapters
//!
//! The hosted backend exposes the `slots` table through a PostgREST-style
//! interface and sessions through its auth endpoint:
//!
//! - `GET    {endpoint}/rest/v1/slots?select=*&order=start_utc.asc[&teacher_id=eq.<id>]`
//! - `POST   {endpoint}/rest/v1/slots` with `Prefer: return=representation`
//! - `DELETE {endpoint}/rest/v1/slots?id=eq.<id>`
//! - `GET    {endpoint}/auth/v1/user` with the caller's access token
//!
//! Every request carries the configured API key in the `apikey` header.
//! Error responses are surfaced with the backend's own `message`.

use async_trait::async_trait;
use eagerbirds_core::{
    config::SchedulerConfig,
    errors::{SlotError, SlotResult},
    models::{
        principal::Principal,
        slot::{NewSlot, Slot, SlotScope},
    },
    session::TokenVerifier,
    store::SlotStore,
};
use eyre::{Result, WrapErr, eyre};
use reqwest::{
    Client, Response, StatusCode,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

/// Error body returned by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Uuid,
    email: Option<String>,
}

fn api_key_headers(api_key: &str, bearer: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("apikey"),
        HeaderValue::from_str(api_key).wrap_err("API key is not a valid header value")?,
    );
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", bearer))
            .wrap_err("Bearer token is not a valid header value")?,
    );
    Ok(headers)
}

/// Passes successful responses through and turns failures into their message.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message.or(body.msg).or(body.error_description))
        .unwrap_or_else(|| {
            if text.is_empty() {
                status.to_string()
            } else {
                text
            }
        });

    Err(eyre!(message))
}

/// `SlotStore` over the hosted backend's REST interface.
#[derive(Debug, Clone)]
pub struct RestSlotStore {
    client: Client,
    table_url: String,
}

impl RestSlotStore {
    pub fn new(config: &SchedulerConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(api_key_headers(&config.api_key, &config.api_key)?)
            .build()
            .wrap_err("Failed to build store client")?;

        Ok(Self {
            client,
            table_url: format!("{}/rest/v1/slots", config.store_endpoint),
        })
    }
}

#[async_trait]
impl SlotStore for RestSlotStore {
    async fn list_slots(&self, scope: SlotScope) -> Result<Vec<Slot>> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("order", "start_utc.asc".to_string()),
        ];
        if let SlotScope::Teacher(teacher_id) = scope {
            query.push(("teacher_id", format!("eq.{}", teacher_id)));
        }

        debug!("GET {} {:?}", self.table_url, query);
        let response = self.client.get(&self.table_url).query(&query).send().await?;
        let slots = check(response).await?.json::<Vec<Slot>>().await?;

        Ok(slots)
    }

    async fn get_slot(&self, id: Uuid) -> Result<Option<Slot>> {
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{}", id))])
            .send()
            .await?;
        let slots = check(response).await?.json::<Vec<Slot>>().await?;

        Ok(slots.into_iter().next())
    }

    async fn insert_slot(&self, slot: NewSlot) -> Result<Slot> {
        debug!("POST {} for teacher {}", self.table_url, slot.teacher_id);
        let response = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(&slot)
            .send()
            .await?;
        let created = check(response).await?.json::<Vec<Slot>>().await?;

        created
            .into_iter()
            .next()
            .ok_or_else(|| eyre!("Store returned no row for the inserted slot"))
    }

    async fn delete_slot(&self, id: Uuid) -> Result<()> {
        debug!("DELETE {} id={}", self.table_url, id);
        let response = self
            .client
            .delete(&self.table_url)
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        check(response).await?;

        Ok(())
    }
}

/// Resolves access tokens through the hosted auth service.
#[derive(Debug, Clone)]
pub struct RestAuthClient {
    client: Client,
    user_url: String,
    api_key: String,
}

impl RestAuthClient {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            client: Client::new(),
            user_url: format!("{}/auth/v1/user", config.store_endpoint),
            api_key: config.api_key.clone(),
        }
    }

    async fn fetch_user(&self, token: &str) -> Result<Option<AuthUser>> {
        let response = self
            .client
            .get(&self.user_url)
            .headers(api_key_headers(&self.api_key, token)?)
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            debug!("Access token rejected by auth service");
            return Ok(None);
        }

        Ok(Some(check(response).await?.json::<AuthUser>().await?))
    }
}

#[async_trait]
impl TokenVerifier for RestAuthClient {
    async fn principal_for_token(&self, token: &str) -> SlotResult<Option<Principal>> {
        let user = self.fetch_user(token).await.map_err(SlotError::Store)?;

        Ok(user.map(|user| Principal::new(user.id, user.email.unwrap_or_default())))
    }
}
