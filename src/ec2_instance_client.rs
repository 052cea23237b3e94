use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ec2::{Ec2, Ec2Client, Instance};

use crate::discovery::Discover;
use crate::error::DiscoveryError;
use crate::record::DiscoveryRecord;
use rusoto_ec2::DescribeInstancesRequest;

pub struct Ec2InstanceClient {
    client: Ec2Client,
}

#[async_trait]
impl Discover for Ec2InstanceClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        let result = self
            .client
            .describe_instances(DescribeInstancesRequest::default())
            .await?;

        let mut records = Vec::<DiscoveryRecord>::new();
        for reservation in result.reservations.unwrap_or_default() {
            for instance in reservation.instances.unwrap_or_default() {
                let name = instance_name(&instance);
                records.push(
                    DiscoveryRecord::new()
                        .with("INSTANCEID", instance.instance_id.unwrap_or_default())
                        .with("INSTANCENAME", name),
                );
            }
        }
        Ok(records)
    }
}

impl Ec2InstanceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(Ec2Client::new(region))
    }

    fn new_with_client(client: Ec2Client) -> Self {
        Ec2InstanceClient { client }
    }
}

/// Value of the first `Name` tag.
fn instance_name(instance: &Instance) -> String {
    instance
        .tags
        .iter()
        .flatten()
        .find(|tag| tag.key.as_deref() == Some("Name"))
        .and_then(|tag| tag.value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::discovery::Discover;
    use crate::ec2_instance_client::Ec2InstanceClient;
    use rusoto_ec2::Ec2Client;
    use rusoto_mock::{
        MockCredentialsProvider, MockRequestDispatcher, MockResponseReader, ReadMockResponse,
    };

    #[tokio::test]
    async fn test_discover_instances() {
        let mock = Ec2Client::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "describe_instances.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = Ec2InstanceClient::new_with_client(mock);
        let records = client.discover().await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].get("INSTANCEID"), Some("i-1234567890abcdef0"));
        assert_eq!(records[0].get("INSTANCENAME"), Some("web-1"));
        assert_eq!(records[1].get("INSTANCEID"), Some("i-0598c7d356eba48d7"));
        assert_eq!(records[1].get("INSTANCENAME"), Some("worker"));
        assert_eq!(records[2].get("INSTANCEID"), Some("i-0b22a22eec53b9321"));
    }

    #[tokio::test]
    async fn test_discover_instance_without_name_tag() {
        let mock = Ec2Client::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "describe_instances.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = Ec2InstanceClient::new_with_client(mock);
        let records = client.discover().await.unwrap();

        assert_eq!(records[2].get("INSTANCENAME"), Some(""));
    }

    #[tokio::test]
    async fn test_discover_no_instances() {
        let mock = Ec2Client::new_with(
            MockRequestDispatcher::default().with_body(&*MockResponseReader::read_response(
                "test_resources/valid",
                "describe_instances_empty.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = Ec2InstanceClient::new_with_client(mock);
        let records = client.discover().await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_discover_instances_error() {
        let mock = Ec2Client::new_with(
            MockRequestDispatcher::with_status(400).with_body(&*MockResponseReader::read_response(
                "test_resources/error",
                "describe_instances.xml",
            )),
            MockCredentialsProvider,
            Default::default(),
        );

        let client = Ec2InstanceClient::new_with_client(mock);
        let result = client.discover().await;

        assert!(result.is_err());
    }
}
