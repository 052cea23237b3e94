use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_rds::{DescribeDBInstancesMessage, Rds, RdsClient};

use crate::discovery::Discover;
use crate::error::DiscoveryError;
use crate::record::DiscoveryRecord;

pub struct DbInstanceClient {
    client: RdsClient,
}

#[async_trait]
impl Discover for DbInstanceClient {
    async fn discover(&self) -> Result<Vec<DiscoveryRecord>, DiscoveryError> {
        let result = self
            .client
            .describe_db_instances(DescribeDBInstancesMessage::default())
            .await?;

        Ok(result
            .db_instances
            .unwrap_or_default()
            .into_iter()
            .map(|instance| {
                DiscoveryRecord::new()
                    .with(
                        "RDSIDENTIFIER",
                        instance.db_instance_identifier.unwrap_or_default(),
                    )
                    // engines such as sqlserver never report a DBName
                    .with("RDSDBNAME", instance.db_name.unwrap_or_default())
            })
            .collect())
    }
}

impl DbInstanceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(RdsClient::new(region))
    }

    fn new_with_client(client: RdsClient) -> Self {
        DbInstanceClient { client }
    }
}
