// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for OAuth token exchange/refresh and activity listing.
//!
//! Handles:
//! - Authorization code exchange
//! - Refresh token grants
//! - Paginated activity listing over a date window

use crate::error::AppError;
use serde::Deserialize;

/// Items per activities page (Strava's documented maximum).
const PER_PAGE: u32 = 200;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://www.strava.com/api/v3".to_string(),
            token_url: "https://www.strava.com/oauth/token".to_string(),
            client_id,
            client_secret,
        }
    }

    /// Override the API base and token endpoint, e.g. to target a local mock
    /// server in tests.
    pub fn with_endpoints(mut self, base_url: String, token_url: String) -> Self {
        self.base_url = base_url;
        self.token_url = token_url;
        self
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenExchangeResponse, AppError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Token exchange request failed: {}", e))?;

        self.check_response_json(response).await
    }

    /// Refresh an expired access token.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenRefreshResponse, AppError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Token refresh request failed: {}", e))?;

        self.check_response_json(response).await
    }

    /// List all activities in an epoch-second window, paging until a short
    /// or empty page.
    ///
    /// `after` and `before` are the half-open `[after, before)` bounds that
    /// Strava applies to activity start times.
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
        before: i64,
    ) -> Result<Vec<Activity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let mut all = Vec::new();
        let mut page = 1u32;
        loop {
            let response = self
                .http
                .get(&url)
                .bearer_auth(access_token)
                .query(&[
                    ("after", after.to_string()),
                    ("before", before.to_string()),
                    ("page", page.to_string()),
                    ("per_page", PER_PAGE.to_string()),
                ])
                .send()
                .await
                .map_err(|e| anyhow::anyhow!("Activity list request failed: {}", e))?;

            let batch: Vec<Activity> = self.check_response_json(response).await?;

            if batch.is_empty() {
                break;
            }
            let last_page = batch.len() < PER_PAGE as usize;
            all.extend(batch);
            if last_page {
                break;
            }
            page += 1;
        }

        tracing::debug!(count = all.len(), pages = page, "Fetched activities");
        Ok(all)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Strava request failed");
            return Err(AppError::upstream(status, body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("JSON parse error: {}", e)))
    }
}

/// Token exchange response from Strava OAuth (includes athlete info).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchangeResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub athlete: Option<AthleteSummary>,
}

impl TokenExchangeResponse {
    /// Athlete ID as the store key; `unknown` when Strava omits the athlete.
    pub fn athlete_id(&self) -> String {
        self.athlete
            .as_ref()
            .map(|a| a.id.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Token refresh response from Strava.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

/// Athlete info from OAuth token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct AthleteSummary {
    pub id: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
}

/// Summary activity from the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub name: String,
    pub sport_type: String,
    /// Start date/time (ISO 8601)
    pub start_date: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: u32,
}
