use crate::cli::commands::{Cli, Commands};
use anyhow::Result;
use cmdrunner::Config;
use cmdrunner::gateway;
use cmdrunner::runner::CommandRunner;
use std::sync::Arc;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let config = Arc::new(config);
    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            gateway::run_gateway(&host, port, config).await
        }
        Commands::Run { command } => {
            let runner = CommandRunner::from_config(&config.runner);
            let output = runner.run(&command.join(" ")).await;
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
