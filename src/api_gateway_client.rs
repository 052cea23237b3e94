use async_trait::async_trait;
use rusoto_apigateway::GetApiKeysError;
use rusoto_core::signature::SignedRequest;
use rusoto_core::{Client, Region, RusotoError};
use serde::Deserialize;

use crate::discovery::Discover;
use crate::error::DiscoveryError;
use crate::record::DiscoveryRecord;

/// GetApiKeys lists its keys under `item`, which `rusoto_apigateway::ApiKeys`
/// does not read, so the response is decoded here.
#[derive(Debug, Default, Deserialize)]
struct ApiKeyPage {
    #[serde(rename = "item", default)]
    items: Vec<ApiKeyItem>,
}

#[derive(Debug, Deserialize)]
struct ApiKeyItem {
    name: Option<String>,
}

pub struct ApiKeyClient {
    client: Client,
    region: Region,
}

#[async_trait]
impl Discover for ApiKeyClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        let page = self.get_api_keys().await?;

        Ok(page
            .items
            .into_iter()
            .map(|api_key| DiscoveryRecord::new().with("APINAME", api_key.name.unwrap_or_default()))
            .collect())
    }
}

impl ApiKeyClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(Client::shared(), region)
    }

    fn new_with_client(client: Client, region: Region) -> Self {
        ApiKeyClient { client, region }
    }

    async fn get_api_keys(&self) -> Result<ApiKeyPage, RusotoError<GetApiKeysError>> {
        let mut request = SignedRequest::new("GET", "apigateway", &self.region, "/apikeys");
        request.set_content_type("application/x-amz-json-1.1".to_owned());

        let mut response = self
            .client
            .sign_and_dispatch(request)
            .await
            .map_err(RusotoError::from)?;
        let success = response.status.is_success();
        let response = response.buffer().await.map_err(RusotoError::HttpDispatch)?;
        if !success {
            return Err(GetApiKeysError::from_response(response));
        }

        if response.body.is_empty() {
            return Ok(ApiKeyPage::default());
        }
        serde_json::from_slice(&response.body)
            .map_err(|error| RusotoError::ParseError(error.to_string()))
    }
}
