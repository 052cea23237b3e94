use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_lambda::{Lambda, LambdaClient, ListFunctionsRequest};

use crate::discovery::Discover;
use crate::error::DiscoveryError;
use crate::record::DiscoveryRecord;

pub struct FunctionClient {
    client: LambdaClient,
}

#[async_trait]
impl Discover for FunctionClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        let result = self
            .client
            .list_functions(ListFunctionsRequest::default())
            .await?;

        Ok(result
            .functions
            .unwrap_or_default()
            .into_iter()
            .map(|function| {
                DiscoveryRecord::new()
                    .with("FUNCTIONNAME", function.function_name.unwrap_or_default())
            })
            .collect())
    }
}

impl FunctionClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(LambdaClient::new(region))
    }

    fn new_with_client(client: LambdaClient) -> Self {
        FunctionClient { client }
    }
}
