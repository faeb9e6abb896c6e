//! Identity API operations

use log::debug;
use serde_json::Value;

use crate::config::api;
use crate::error::{Result, VraError};
use crate::vra::client::{decode_body, read_body};
use crate::vra::VraClient;

use super::models::{Credentials, IssuedToken};

impl VraClient {
    /// Issue a bearer token for the given credentials
    ///
    /// Meant for a client built without a token. On refusal the server's
    /// `errors[0].systemMessage` becomes the [`VraError::Authentication`]
    /// message, falling back to the raw body.
    pub async fn issue_token(&self, credentials: &Credentials) -> Result<IssuedToken> {
        let url = self.url(api::TOKENS);

        debug!(
            "Requesting token for {}@{} from: {}",
            credentials.username, credentials.tenant, url
        );

        let response = self.post(&url).json(credentials).send().await?;

        match response.status().as_u16() {
            200 => {
                let token: IssuedToken = decode_body(response).await?;
                debug!("Token issued, expires {:?}", token.expires);
                Ok(token)
            }
            status => {
                let body = read_body(response).await;
                debug!("Token request refused (status {})", status);
                Err(VraError::Authentication(system_message(&body).unwrap_or(body)))
            }
        }
    }

    /// Check whether a token is still accepted (`204 No Content`)
    pub async fn is_token_authorized(&self, token: &str) -> Result<bool> {
        let url = format!("{}/{}", self.url(api::TOKENS), urlencoding::encode(token));

        debug!("Validating token at: {}", self.url(api::TOKENS));

        let response = self.head_with_token(&url, token).send().await?;
        let status = response.status().as_u16();

        debug!("Token validation returned status {}", status);
        Ok(status == 204)
    }
}

/// Extract `errors[0].systemMessage` from an identity error payload
fn system_message(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    payload["errors"][0]["systemMessage"]
        .as_str()
        .map(str::to_string)
}
