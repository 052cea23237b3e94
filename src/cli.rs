use anyhow::Context;
use clap::Parser;
use rusoto_core::Region;
use std::ffi::OsString;
use std::str::FromStr;

const LONG_FLAGS: [&str; 2] = ["type", "aws.region"];

/// Prints AWS resources as low-level discovery JSON.
#[derive(Debug, Parser)]
#[command(name = "aws-discovery", version)]
pub struct Options {
    /// Type of discovery. EC2, ELB, SQS, RDS, CloudFront, Lambda, ECSClusters, ECSServices or API
    #[arg(long = "type", value_name = "TYPE")]
    pub discovery_type: String,

    /// AWS region
    #[arg(long = "aws.region", value_name = "REGION", default_value = "eu-central-1")]
    pub aws_region: String,
}

impl Options {
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Options::parse_from(normalize_args(args))
    }

    pub fn region(&self) -> anyhow::Result<Region> {
        Region::from_str(&self.aws_region)
            .with_context(|| format!("invalid AWS region {}", self.aws_region))
    }
}

/// Rewrites single-dash long flags such as `-type EC2` or `-aws.region=eu-west-1`
/// to their double-dash form.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|value| {
                let flag = value.strip_prefix('-')?;
                let name = flag.split('=').next()?;
                if flag.starts_with('-') || !LONG_FLAGS.contains(&name) {
                    return None;
                }
                Some(OsString::from(format!("-{}", value)))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}
