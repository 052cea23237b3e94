use std::error::Error;

use rusoto_apigateway::GetApiKeysError;
use rusoto_cloudfront::ListDistributionsError;
use rusoto_core::RusotoError;
use rusoto_ec2::DescribeInstancesError;
use rusoto_ecs::{ListClustersError, ListServicesError};
use rusoto_elb::DescribeLoadBalancersError;
use rusoto_lambda::ListFunctionsError;
use rusoto_rds::DescribeDBInstancesError;
use rusoto_sqs::ListQueuesError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum DiscoveryError {
    UnsupportedType(String),
    MalformedIdentifier(String),
    Encode(serde_json::Error),
    Write(std::io::Error),
    DescribeInstancesError(RusotoError<DescribeInstancesError>),
    DescribeDBInstancesError(RusotoError<DescribeDBInstancesError>),
    ListDistributionsError(RusotoError<ListDistributionsError>),
    DescribeLoadBalancersError(RusotoError<DescribeLoadBalancersError>),
    ListClustersError(RusotoError<ListClustersError>),
    ListServicesError(RusotoError<ListServicesError>),
    ListFunctionsError(RusotoError<ListFunctionsError>),
    ListQueuesError(RusotoError<ListQueuesError>),
    GetApiKeysError(RusotoError<GetApiKeysError>),
}

impl Display for DiscoveryError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            DiscoveryError::UnsupportedType(ref name) => {
                write!(f, "discovery type {} not supported", name)
            }
            DiscoveryError::MalformedIdentifier(ref identifier) => {
                write!(f, "could not parse a resource name from {:?}", identifier)
            }
            DiscoveryError::Encode(_) => write!(f, "could not encode result"),
            DiscoveryError::Write(_) => write!(f, "could not write result"),
            DiscoveryError::DescribeInstancesError(_) => write!(f, "could not get ec2 instances"),
            DiscoveryError::DescribeDBInstancesError(_) => {
                write!(f, "could not describe db instances")
            }
            DiscoveryError::ListDistributionsError(_) => write!(f, "could not list distributions"),
            DiscoveryError::DescribeLoadBalancersError(_) => {
                write!(f, "could not describe load balancers")
            }
            DiscoveryError::ListClustersError(_) => write!(f, "could not list ECS clusters"),
            DiscoveryError::ListServicesError(_) => write!(f, "could not list ECS services"),
            DiscoveryError::ListFunctionsError(_) => write!(f, "could not list lambdas"),
            DiscoveryError::ListQueuesError(_) => write!(f, "could not get queues"),
            DiscoveryError::GetApiKeysError(_) => write!(f, "could not get API keys"),
        }
    }
}

impl Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            DiscoveryError::Encode(ref error) => Some(error),
            DiscoveryError::Write(ref error) => Some(error),
            DiscoveryError::DescribeInstancesError(ref error) => Some(error),
            DiscoveryError::DescribeDBInstancesError(ref error) => Some(error),
            DiscoveryError::ListDistributionsError(ref error) => Some(error),
            DiscoveryError::DescribeLoadBalancersError(ref error) => Some(error),
            DiscoveryError::ListClustersError(ref error) => Some(error),
            DiscoveryError::ListServicesError(ref error) => Some(error),
            DiscoveryError::ListFunctionsError(ref error) => Some(error),
            DiscoveryError::ListQueuesError(ref error) => Some(error),
            DiscoveryError::GetApiKeysError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DiscoveryError {
    fn from(e: serde_json::Error) -> DiscoveryError {
        DiscoveryError::Encode(e)
    }
}

impl From<std::io::Error> for DiscoveryError {
    fn from(e: std::io::Error) -> DiscoveryError {
        DiscoveryError::Write(e)
    }
}

impl From<RusotoError<DescribeInstancesError>> for DiscoveryError {
    fn from(e: RusotoError<DescribeInstancesError>) -> DiscoveryError {
        DiscoveryError::DescribeInstancesError(e)
    }
}

impl From<RusotoError<DescribeDBInstancesError>> for DiscoveryError {
    fn from(e: RusotoError<DescribeDBInstancesError>) -> DiscoveryError {
        DiscoveryError::DescribeDBInstancesError(e)
    }
}

impl From<RusotoError<ListDistributionsError>> for DiscoveryError {
    fn from(e: RusotoError<ListDistributionsError>) -> DiscoveryError {
        DiscoveryError::ListDistributionsError(e)
    }
}

impl From<RusotoError<DescribeLoadBalancersError>> for DiscoveryError {
    fn from(e: RusotoError<DescribeLoadBalancersError>) -> DiscoveryError {
        DiscoveryError::DescribeLoadBalancersError(e)
    }
}

impl From<RusotoError<ListClustersError>> for DiscoveryError {
    fn from(e: RusotoError<ListClustersError>) -> DiscoveryError {
        DiscoveryError::ListClustersError(e)
    }
}

impl From<RusotoError<ListServicesError>> for DiscoveryError {
    fn from(e: RusotoError<ListServicesError>) -> DiscoveryError {
        DiscoveryError::ListServicesError(e)
    }
}

impl From<RusotoError<ListFunctionsError>> for DiscoveryError {
    fn from(e: RusotoError<ListFunctionsError>) -> DiscoveryError {
        DiscoveryError::ListFunctionsError(e)
    }
}

impl From<RusotoError<ListQueuesError>> for DiscoveryError {
    fn from(e: RusotoError<ListQueuesError>) -> DiscoveryError {
        DiscoveryError::ListQueuesError(e)
    }
}

impl From<RusotoError<GetApiKeysError>> for DiscoveryError {
    fn from(e: RusotoError<GetApiKeysError>) -> DiscoveryError {
        DiscoveryError::GetApiKeysError(e)
    }
}
