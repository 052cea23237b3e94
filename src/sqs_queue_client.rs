use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_sqs::{ListQueuesRequest, Sqs, SqsClient};

use crate::discovery::Discover;
use crate::error::DiscoveryError;
use crate::identifier::parse_queue_name;
use crate::record::DiscoveryRecord;

pub struct QueueClient {
    client: SqsClient,
}

#[async_trait]
impl Discover for QueueClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        let result = self
            .client
            .list_queues(ListQueuesRequest::default())
            .await?;

        result
            .queue_urls
            .unwrap_or_default()
            .iter()
            .map(|queue_url| {
                parse_queue_name(queue_url).map(|name| DiscoveryRecord::new().with("SQSNAME", name))
            })
            .collect()
    }
}

impl QueueClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(SqsClient::new(region))
    }

    fn new_with_client(client: SqsClient) -> Self {
        QueueClient { client }
    }
}
