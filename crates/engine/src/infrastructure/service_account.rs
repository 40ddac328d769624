//! OAuth2 access tokens for a Google service account.
//!
//! A JWT assertion signed with the account's RS256 key is traded at the
//! key's `token_uri` for a short-lived bearer token. Tokens are cached and
//! reused until shortly before they expire.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::infrastructure::config::ServiceAccountKey;
use crate::infrastructure::ports::ClockPort;

/// Scopes the Realtime Database REST API accepts for access tokens.
pub const FIREBASE_SCOPES: &str =
    "https://www.googleapis.com/auth/firebase.database https://www.googleapis.com/auth/userinfo.email";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed assertion (the maximum Google allows).
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Refresh this long before the token endpoint's stated expiry.
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Failed to sign token assertion: {0}")]
    Signing(String),

    #[error("Token exchange failed: {0}")]
    Exchange(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct AssertionClaims {
    iss: String,
    scope: String,
    aud: String,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Mints and caches access tokens for one service account.
pub struct ServiceAccountTokens {
    client: Client,
    key: ServiceAccountKey,
    clock: Arc<dyn ClockPort>,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokens {
    pub fn new(client: Client, key: ServiceAccountKey, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            client,
            key,
            clock,
            cached: Mutex::new(None),
        }
    }

    /// A token valid for at least the refresh margin.
    ///
    /// Concurrent callers wait on the same exchange rather than each
    /// starting their own.
    pub async fn access_token(&self) -> Result<String, TokenError> {
        let mut cached = self.cached.lock().await;
        let now = self.clock.now();

        if let Some(token) = cached.as_ref() {
            if token.expires_at - TimeDelta::seconds(REFRESH_MARGIN_SECS) > now {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.exchange(now).await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    fn assertion(&self, now: DateTime<Utc>) -> Result<String, TokenError> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key.private_key_id.clone();

        let iat = now.timestamp();
        let claims = AssertionClaims {
            iss: self.key.client_email.clone(),
            scope: FIREBASE_SCOPES.to_string(),
            aud: self.key.token_uri.clone(),
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        jsonwebtoken::encode(&header, &claims, self.key.signing_key())
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    async fn exchange(&self, now: DateTime<Utc>) -> Result<CachedToken, TokenError> {
        let assertion = self.assertion(now)?;
        tracing::debug!(
            client_email = %self.key.client_email,
            token_uri = %self.key.token_uri,
            "Requesting service account access token"
        );

        let response = self
            .client
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TokenError::Exchange(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TokenError::Exchange(format!("HTTP {status}: {error_text}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| TokenError::Exchange(format!("invalid response: {e}")))?;
        let lifetime = token.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS);

        Ok(CachedToken {
            value: token.access_token,
            expires_at: now + TimeDelta::seconds(lifetime),
        })
    }
}
