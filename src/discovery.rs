use crate::api_gateway_client::ApiKeyClient;
use crate::cloud_front_client::DistributionClient;
use crate::ec2_instance_client::Ec2InstanceClient;
use crate::ecs_client::{EcsClusterClient, EcsServiceClient};
use crate::elb_client::LoadBalancerClient;
use crate::error::DiscoveryError;
use crate::lambda_client::FunctionClient;
use crate::rds_instance_client::DbInstanceClient;
use crate::record::DiscoveryRecord;
use crate::sqs_queue_client::QueueClient;
use async_trait::async_trait;
use rusoto_core::Region;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[async_trait]
pub trait Discover: Send + Sync {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscoveryType {
    Ec2,
    Elb,
    Sqs,
    Rds,
    CloudFront,
    Lambda,
    EcsClusters,
    EcsServices,
    Api,
}

impl DiscoveryType {
    pub const ALL: [DiscoveryType; 9] = [
        DiscoveryType::Ec2,
        DiscoveryType::Elb,
        DiscoveryType::Sqs,
        DiscoveryType::Rds,
        DiscoveryType::CloudFront,
        DiscoveryType::Lambda,
        DiscoveryType::EcsClusters,
        DiscoveryType::EcsServices,
        DiscoveryType::Api,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DiscoveryType::Ec2 => "EC2",
            DiscoveryType::Elb => "ELB",
            DiscoveryType::Sqs => "SQS",
            DiscoveryType::Rds => "RDS",
            DiscoveryType::CloudFront => "CloudFront",
            DiscoveryType::Lambda => "Lambda",
            DiscoveryType::EcsClusters => "ECSClusters",
            DiscoveryType::EcsServices => "ECSServices",
            DiscoveryType::Api => "API",
        }
    }
}

impl Display for DiscoveryType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiscoveryType {
    type Err = DiscoveryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        DiscoveryType::ALL
            .iter()
            .copied()
            .find(|discovery_type| discovery_type.name() == name)
            .ok_or_else(|| DiscoveryError::UnsupportedType(name.to_string()))
    }
}

/// Builds the client for `discovery_type`. Clients resolve credentials
/// through the default provider chain.
pub fn discoverer(discovery_type: DiscoveryType, region: Region) -> Box<dyn Discover> {
    match discovery_type {
        DiscoveryType::Ec2 => Box::new(Ec2InstanceClient::new(region)),
        DiscoveryType::Elb => Box::new(LoadBalancerClient::new(region)),
        DiscoveryType::Sqs => Box::new(QueueClient::new(region)),
        DiscoveryType::Rds => Box::new(DbInstanceClient::new(region)),
        DiscoveryType::CloudFront => Box::new(DistributionClient::new(region)),
        DiscoveryType::Lambda => Box::new(FunctionClient::new(region)),
        DiscoveryType::EcsClusters => Box::new(EcsClusterClient::new(region)),
        DiscoveryType::EcsServices => Box::new(EcsServiceClient::new(region)),
        DiscoveryType::Api => Box::new(ApiKeyClient::new(region)),
    }
}

pub async fn discover(
    discovery_type: DiscoveryType,
    region: Region,
) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
    log::debug!("discovering {} in {}", discovery_type, region.name());
    let records = discoverer(discovery_type, region).discover().await?;
    log::debug!("discovered {} {} resources", records.len(), discovery_type);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use crate::discovery::DiscoveryType;
    use crate::error::DiscoveryError;

    #[test]
    fn test_from_str() {
        assert_eq!("EC2".parse::<DiscoveryType>().unwrap(), DiscoveryType::Ec2);
        assert_eq!(
            "ECSServices".parse::<DiscoveryType>().unwrap(),
            DiscoveryType::EcsServices
        );
        assert_eq!("API".parse::<DiscoveryType>().unwrap(), DiscoveryType::Api);
    }

    #[test]
    fn test_names_round_trip() {
        for discovery_type in DiscoveryType::ALL.iter() {
            assert_eq!(
                discovery_type.name().parse::<DiscoveryType>().unwrap(),
                *discovery_type
            );
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        let result = "ec2".parse::<DiscoveryType>();
        assert!(matches!(
            result.err().unwrap(),
            DiscoveryError::UnsupportedType(ref name) if name == "ec2"
        ));
    }

    #[test]
    fn test_unknown_type() {
        let result = "Foo".parse::<DiscoveryType>();
        assert_eq!(
            result.err().unwrap().to_string(),
            "discovery type Foo not supported"
        );
    }
}
