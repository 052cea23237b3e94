use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ecs::{Ecs, EcsClient, ListClustersRequest, ListServicesRequest};

use crate::discovery::Discover;
use crate::error::DiscoveryError;
use crate::identifier::parse_resource_name;
use crate::record::DiscoveryRecord;

pub struct EcsClusterClient {
    client: EcsClient,
}

pub struct EcsServiceClient {
    client: EcsClient,
}

async fn list_cluster_arns(client: &EcsClient) -> Result<Vec<String>, DiscoveryError> {
    let result = client
        .list_clusters(ListClustersRequest::default())
        .await?;
    Ok(result.cluster_arns.unwrap_or_default())
}

#[async_trait]
impl Discover for EcsClusterClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        list_cluster_arns(&self.client)
            .await?
            .iter()
            .map(|arn| {
                parse_resource_name(arn).map(|name| DiscoveryRecord::new().with("CLUSTERNAME", name))
            })
            .collect()
    }
}

#[async_trait]
impl Discover for EcsServiceClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        let mut records = Vec::<DiscoveryRecord>::new();
        for cluster_arn in list_cluster_arns(&self.client).await? {
            let cluster_name = parse_resource_name(&cluster_arn)?;
            let result = self
                .client
                .list_services(ListServicesRequest {
                    cluster: Some(cluster_arn),
                    ..ListServicesRequest::default()
                })
                .await?;

            for service_arn in result.service_arns.unwrap_or_default() {
                records.push(
                    DiscoveryRecord::new()
                        .with("CLUSTERNAME", cluster_name.as_str())
                        .with("SERVICENAME", parse_resource_name(&service_arn)?),
                );
            }
        }
        Ok(records)
    }
}

impl EcsClusterClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(EcsClient::new(region))
    }

    fn new_with_client(client: EcsClient) -> Self {
        EcsClusterClient { client }
    }
}

impl EcsServiceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(EcsClient::new(region))
    }

    fn new_with_client(client: EcsClient) -> Self {
        EcsServiceClient { client }
    }
}
