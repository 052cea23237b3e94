use crate::error::DiscoveryError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// One discovered resource, keyed by low-level discovery macro names
/// such as `{#INSTANCEID}`.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DiscoveryRecord(BTreeMap<String, String>);

impl DiscoveryRecord {
    pub fn new() -> Self {
        DiscoveryRecord::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(macro_name(key), value.into());
        self
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&macro_name(key)).map(String::as_str)
    }
}

fn macro_name(key: &str) -> String {
    format!("{{#{}}}", key)
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DiscoveryResult {
    data: Vec<DiscoveryRecord>,
}

impl DiscoveryResult {
    pub fn new(data: Vec<DiscoveryRecord>) -> Self {
        DiscoveryResult { data }
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), DiscoveryError> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
