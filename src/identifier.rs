use crate::error::DiscoveryError;

/// Name after the last `/` of an ARN, e.g.
/// `arn:aws:ecs:eu-central-1:1245:cluster/my-cluster` gives `my-cluster`.
pub fn parse_resource_name(arn: &str) -> Result<String, DiscoveryError> {
    match arn.rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(DiscoveryError::MalformedIdentifier(arn.to_string())),
    }
}

/// Fifth `/`-separated segment of a queue url, e.g.
/// `https://sqs.eu-central-1.amazonaws.com/1245/video-rendering` gives `video-rendering`.
pub fn parse_queue_name(queue_url: &str) -> Result<String, DiscoveryError> {
    match queue_url.split('/').nth(4) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(DiscoveryError::MalformedIdentifier(queue_url.to_string())),
    }
}
