mod api_gateway_client;
mod cli;
mod cloud_front_client;
mod discovery;
mod ec2_instance_client;
mod ecs_client;
mod elb_client;
mod error;
mod identifier;
mod lambda_client;
mod rds_instance_client;
mod record;
mod sqs_queue_client;

use cli::Options;
use discovery::DiscoveryType;
use record::DiscoveryResult;
use std::io;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::from_args(std::env::args_os());
    if let Err(error) = run(options).await {
        log::error!("{:#}", error);
        std::process::exit(1);
    }
}

async fn run(options: Options) -> anyhow::Result<()> {
    let discovery_type: DiscoveryType = options.discovery_type.parse()?;
    let region = options.region()?;

    let records = discovery::discover(discovery_type, region).await?;

    let stdout = io::stdout();
    DiscoveryResult::new(records).write_to(stdout.lock())?;
    Ok(())
}
