//! Mastodon API HTTP client.

use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::types::*;
use crate::error::{Error, Result};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("mastodon-backup/", env!("CARGO_PKG_VERSION"));

/// Longest response excerpt included in parse errors.
const ERROR_EXCERPT_LEN: usize = 500;

/// Mastodon REST client authenticated with a bearer token.
pub struct MastodonApi {
    client: Client,
    base_url: String,
    access_token: String,
}

impl MastodonApi {
    /// Create a new API client for the given instance.
    pub fn new(base_url: &str, access_token: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Make an authenticated GET request.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.access_token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited);
        }

        let body = response.text().await.unwrap_or_default();
        let message = describe_error(status, &body);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::error!("Auth error response: {}", body);
            return Err(Error::Authentication(message));
        }

        Err(Error::Api(message))
    }

    /// GET a JSON endpoint and deserialize the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.get(path, query).await?;
        let text = response.text().await?;
        tracing::debug!("{} response length: {} bytes", path, text.len());

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse {}: {} - Response: {}",
                path,
                e,
                &text[..floor_char_boundary(&text, ERROR_EXCERPT_LEN)]
            ))
        })
    }

    /// Get the authenticated account (validates the token).
    pub async fn verify_credentials(&self) -> Result<Account> {
        self.get_json("/api/v1/accounts/verify_credentials", &[])
            .await
            .map_err(|e| match e {
                Error::Api(msg) => Error::Authentication(msg),
                other => other,
            })
    }

    /// Get one page of an account's statuses, newest first.
    ///
    /// `max_id` is an exclusive upper bound on the returned ids.
    pub async fn account_statuses(
        &self,
        account_id: &str,
        max_id: Option<u64>,
        limit: u32,
    ) -> Result<Vec<Status>> {
        let path = format!("/api/v1/accounts/{}/statuses", account_id);
        let mut query = vec![("limit", limit.to_string())];
        if let Some(max_id) = max_id {
            query.push(("max_id", max_id.to_string()));
        }

        self.get_json(&path, &query).await
    }

    /// Get accounts following the given account.
    pub async fn followers(&self, account_id: &str, limit: u32) -> Result<Vec<Account>> {
        let path = format!("/api/v1/accounts/{}/followers", account_id);
        self.get_json(&path, &[("limit", limit.to_string())]).await
    }

    /// Get accounts the given account follows.
    pub async fn following(&self, account_id: &str, limit: u32) -> Result<Vec<Account>> {
        let path = format!("/api/v1/accounts/{}/following", account_id);
        self.get_json(&path, &[("limit", limit.to_string())]).await
    }

    /// Get the user's lists.
    pub async fn lists(&self) -> Result<Vec<List>> {
        self.get_json("/api/v1/lists", &[]).await
    }

    /// Get muted accounts.
    pub async fn mutes(&self, limit: u32) -> Result<Vec<Account>> {
        self.get_json("/api/v1/mutes", &[("limit", limit.to_string())])
            .await
    }

    /// Get blocked accounts.
    pub async fn blocks(&self, limit: u32) -> Result<Vec<Account>> {
        self.get_json("/api/v1/blocks", &[("limit", limit.to_string())])
            .await
    }

    /// Get blocked domains.
    pub async fn domain_blocks(&self, limit: u32) -> Result<Vec<String>> {
        self.get_json("/api/v1/domain_blocks", &[("limit", limit.to_string())])
            .await
    }

    /// Get bookmarked statuses.
    pub async fn bookmarks(&self, limit: u32) -> Result<Vec<Status>> {
        self.get_json("/api/v1/bookmarks", &[("limit", limit.to_string())])
            .await
    }

    /// Start downloading a file from a URL; the body is left for streaming.
    ///
    /// Attachment URLs are public, so no credentials are sent.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}

/// Build an error message from a failed response, preferring Mastodon's
/// `{"error": ...}` body.
fn describe_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => match err.error_description {
            Some(desc) => format!("HTTP {}: {} ({})", status, err.error, desc),
            None => format!("HTTP {}: {}", status, err.error),
        },
        Err(_) if body.is_empty() => format!("HTTP {}", status),
        Err(_) => format!(
            "HTTP {}: {}",
            status,
            &body[..floor_char_boundary(body, ERROR_EXCERPT_LEN)]
        ),
    }
}

/// Largest index `<= max` that falls on a char boundary of `s`.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
