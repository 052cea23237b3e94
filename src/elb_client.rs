use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_elb::{DescribeAccessPointsInput, Elb, ElbClient};

use crate::discovery::Discover;
use crate::error::DiscoveryError;
use crate::record::DiscoveryRecord;

/// Classic load balancers.
pub struct LoadBalancerClient {
    client: ElbClient,
}

#[async_trait]
impl Discover for LoadBalancerClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        let result = self
            .client
            .describe_load_balancers(DescribeAccessPointsInput::default())
            .await?;

        Ok(result
            .load_balancer_descriptions
            .unwrap_or_default()
            .into_iter()
            .map(|description| {
                DiscoveryRecord::new().with(
                    "LOADBALANCERNAME",
                    description.load_balancer_name.unwrap_or_default(),
                )
            })
            .collect())
    }
}

impl LoadBalancerClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(ElbClient::new(region))
    }

    fn new_with_client(client: ElbClient) -> Self {
        LoadBalancerClient { client }
    }
}

#[cfg(test)]
mod tests {
    use crate::discovery::Discover;
    use crate::elb_client::LoadBalancerClient;
    use rusoto_elb::ElbClient;
    use rusoto_mock::{
        MockCredentialsProvider, MockRequestDispatcher, MockResponseReader, ReadMockResponse,
    };

    #[tokio::test]
    async fn test_discover_load_balancers() {
        let mock = ElbClient::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "describe_load_balancers.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = LoadBalancerClient::new_with_client(mock);
        let records = client.discover().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("LOADBALANCERNAME"), Some("public-web"));
        assert_eq!(records[1].get("LOADBALANCERNAME"), Some("internal-api"));
    }

    #[tokio::test]
    async fn test_discover_no_load_balancers() {
        let mock = ElbClient::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "describe_load_balancers_empty.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let records = LoadBalancerClient::new_with_client(mock)
            .discover()
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_discover_load_balancers_error() {
        let mock = ElbClient::new_with(
            MockRequestDispatcher::with_status(403).with_body(&*MockResponseReader::read_response(
                "test_resources/error",
                "query_access_denied.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = LoadBalancerClient::new_with_client(mock);
        let result = client.discover().await;

        assert!(result.is_err());
    }
}
