//! Request API operations

use log::{debug, info};
use serde_json::Value;

use crate::config::api;
use crate::error::{Result, VraError};
use crate::vra::client::{decode_body, read_body};
use crate::vra::helpers::eq_filter_query;
use crate::vra::templates::apply_overrides;
use crate::vra::{ContentResponse, VraClient};

use super::models::{DeploymentOptions, SubmittedRequest};
use super::status::{RequestStatus, StatusQuery};

impl VraClient {
    /// Submit a request template to a catalog item's submission link
    ///
    /// Only `201 Created` is a success; anything else is returned as
    /// [`VraError::SubmissionRejected`] with the server's body untouched.
    pub async fn submit_request(&self, url: &str, template: &Value) -> Result<SubmittedRequest> {
        debug!("Submitting request to: {}", url);

        let response = self.post(url).json(template).send().await?;

        match response.status().as_u16() {
            201 => {
                let request: SubmittedRequest = decode_body(response).await?;
                debug!("Request created with id {}", request.id);
                Ok(request)
            }
            status => {
                let body = read_body(response).await;
                Err(VraError::SubmissionRejected { status, body })
            }
        }
    }

    /// Request a catalog item with caller overrides
    ///
    /// Resolves the item, fetches its template, merges the overrides and
    /// submits. Steps run one after another; the first failure is returned
    /// as is and nothing after it is sent.
    pub async fn submit_deployment(&self, options: &DeploymentOptions) -> Result<SubmittedRequest> {
        let item = self.resolve_catalog_item(&options.blueprint_name).await?;
        debug!(
            "Resolved catalog item '{}' to id {}",
            item.name, item.id
        );

        let mut template = self.fetch_template(&item.template_url).await?;
        apply_overrides(&mut template, &options.template_data)?;

        let request = self.submit_request(&item.submit_url, &template).await?;
        info!(
            "Submitted request {} for catalog item '{}'",
            request.id, options.blueprint_name
        );
        Ok(request)
    }

    /// Get a request's status by id
    pub async fn get_request_status(&self, query: &StatusQuery) -> Result<RequestStatus> {
        let url = format!(
            "{}/{}",
            self.url(api::REQUESTS),
            urlencoding::encode(&query.id)
        );

        debug!("Fetching request status from: {}", url);

        let response = self.get(&url).send().await?;
        let record: Value = self
            .parse_api_response(response, &format!("request '{}'", query.id))
            .await?;

        Ok(RequestStatus::from_record(record, query.raw))
    }

    /// List requests visible to the caller (one server page)
    pub async fn get_all_requests(&self) -> Result<Vec<SubmittedRequest>> {
        let url = format!("{}/", self.url(api::REQUESTS));

        debug!("Fetching all requests from: {}", url);

        let response = self.get(&url).send().await?;
        let page: ContentResponse<SubmittedRequest> =
            self.parse_api_response(response, "requests").await?;

        debug!("Fetched {} requests", page.content.len());
        Ok(page.content)
    }

    /// Find requests of a catalog item whose request data holds `key == value`
    ///
    /// Up to one page of requests is fetched by catalog item name; the
    /// key/value match is done locally.
    pub async fn find_requests_by_field(
        &self,
        catalog_item: &str,
        key: &str,
        value: &str,
    ) -> Result<Vec<SubmittedRequest>> {
        let url = format!(
            "{}?{}",
            self.url(api::REQUESTS),
            eq_filter_query("catalogItem/name", catalog_item)
        );

        debug!(
            "Searching requests of '{}' for {}={} from: {}",
            catalog_item, key, value, url
        );

        let response = self.get(&url).send().await?;
        let page: Option<ContentResponse<SubmittedRequest>> = self
            .parse_api_response(response, &format!("requests of '{}'", catalog_item))
            .await?;

        let requests = page.map(|p| p.content).unwrap_or_default();
        let scanned = requests.len();

        let matches: Vec<SubmittedRequest> = requests
            .into_iter()
            .filter(|r| r.has_field(key, value))
            .collect();

        debug!("{} of {} requests matched", matches.len(), scanned);
        Ok(matches)
    }
}
