//! Request template API operations

use log::debug;
use serde_json::Value;

use crate::error::{Result, VraError};
use crate::vra::client::{decode_body, read_body};
use crate::vra::VraClient;

impl VraClient {
    /// Fetch the request template of a catalog item
    ///
    /// `url` is the template link discovered on the catalog item. Any status
    /// other than `200 OK` becomes [`VraError::TemplateFetch`] with the raw body.
    pub async fn fetch_template(&self, url: &str) -> Result<Value> {
        debug!("Fetching request template from: {}", url);

        let response = self.get(url).send().await?;
        let status = response.status().as_u16();

        if status != 200 {
            let body = read_body(response).await;
            return Err(VraError::TemplateFetch { status, body });
        }

        decode_body(response).await
    }
}
