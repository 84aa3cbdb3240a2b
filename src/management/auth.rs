use chrono::Utc;
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    Res, ScanError,
    config::Credentials,
    types::{Token, TokenResponse},
    utils,
};

/// Seconds before expiry at which a token is requested anew.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Holds the bearer token of the client-credentials flow.
///
/// Client-credentials tokens come without a refresh token, so an expiring
/// token is replaced by running the exchange again with the stored credentials.
pub struct TokenManager {
    credentials: Credentials,
    token_url: String,
    token: Token,
}

impl TokenManager {
    pub fn new(credentials: Credentials, token_url: String, token: Token) -> Self {
        TokenManager {
            credentials,
            token_url,
            token,
        }
    }

    /// Exchanges the credentials for a first token.
    pub async fn authorize(
        http: &Client,
        credentials: Credentials,
        token_url: String,
    ) -> Res<Self> {
        let token = request_token(http, &credentials, &token_url).await?;
        Ok(Self::new(credentials, token_url, token))
    }

    pub async fn get_valid_token(&mut self, http: &Client) -> Res<String> {
        if self.is_expired() {
            self.token = request_token(http, &self.credentials, &self.token_url).await?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }
}

/// Runs the client-credentials exchange against `token_url`.
pub async fn request_token(http: &Client, credentials: &Credentials, token_url: &str) -> Res<Token> {
    let response = http
        .post(token_url)
        .header(
            AUTHORIZATION,
            utils::basic_credentials(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ScanError::remote(format!(
            "token request failed with {}: {}",
            status, body
        )));
    }

    let json = response.json::<TokenResponse>().await?;
    Ok(Token {
        access_token: json.access_token,
        token_type: json.token_type,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
