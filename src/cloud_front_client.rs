use async_trait::async_trait;
use rusoto_cloudfront::{CloudFront, CloudFrontClient, DistributionSummary, ListDistributionsRequest};
use rusoto_core::Region;

use crate::discovery::Discover;
use crate::error::DiscoveryError;
use crate::record::DiscoveryRecord;

pub struct DistributionClient {
    client: CloudFrontClient,
}

#[async_trait]
impl Discover for DistributionClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        let result = self
            .client
            .list_distributions(ListDistributionsRequest::default())
            .await?;

        Ok(result
            .distribution_list
            .and_then(|list| list.items)
            .unwrap_or_default()
            .into_iter()
            .map(|distribution| {
                let alias = first_alias(&distribution);
                DiscoveryRecord::new()
                    .with("DISTID", distribution.id)
                    .with("DISTALIAS", alias)
            })
            .collect())
    }
}

impl DistributionClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(CloudFrontClient::new(signing_region(region)))
    }

    fn new_with_client(client: CloudFrontClient) -> Self {
        DistributionClient { client }
    }
}

/// CloudFront is global and only accepts requests signed for us-east-1.
/// Custom endpoints keep their own region.
fn signing_region(region: Region) -> Region {
    match region {
        Region::Custom { .. } => region,
        _ => Region::UsEast1,
    }
}

fn first_alias(distribution: &DistributionSummary) -> String {
    distribution
        .aliases
        .items
        .as_ref()
        .and_then(|items| items.first())
        .cloned()
        .unwrap_or_default()
}
