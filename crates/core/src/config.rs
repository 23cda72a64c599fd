//! # Scheduler Configuration
//!
//! Connection parameters for the hosted backend plus the admin address used for
//! role resolution. Built once at startup and handed to the access layer.
//!
//! ## Environment Variables
//!
//! - `STORE_URL`: Base URL of the hosted backend (required)
//! - `STORE_API_KEY`: API key sent with every backend request (required)
//! - `ADMIN_EMAIL`: Email address that resolves to the admin role
//!   (default: "lohit@eagerbirds.com")

use eyre::{Result, WrapErr};
use std::env;

pub const DEFAULT_ADMIN_EMAIL: &str = "lohit@eagerbirds.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Base URL of the hosted backend, without a trailing slash
    pub store_endpoint: String,

    /// API key for the hosted backend
    pub api_key: String,

    /// Email of the single admin principal
    pub admin_email: String,
}

impl SchedulerConfig {
    pub fn new(
        store_endpoint: impl Into<String>,
        api_key: impl Into<String>,
        admin_email: impl Into<String>,
    ) -> Self {
        Self {
            store_endpoint: store_endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            admin_email: admin_email.into(),
        }
    }

    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_URL` or `STORE_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let store_endpoint =
            env::var("STORE_URL").wrap_err("STORE_URL environment variable must be set")?;
        let api_key =
            env::var("STORE_API_KEY").wrap_err("STORE_API_KEY environment variable must be set")?;
        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());

        Ok(Self::new(store_endpoint, api_key, admin_email))
    }
}
