use crate::{
    pkg::{conf::Settings, server::listen},
    prelude::Result,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(about = "mock of the ceh create-signal endpoint")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    Listen(ListenArgs),
}

#[derive(Args, Debug, Default)]
struct ListenArgs {
    /// Overrides HTTP_HOST
    #[arg(long)]
    host: Option<String>,
    /// Overrides HTTP_PORT
    #[arg(long, short)]
    port: Option<u16>,
}

impl ListenArgs {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(host) = self.host {
            settings.http_host = host;
        }
        if let Some(port) = self.port {
            settings.http_port = port;
        }
        settings
    }
}

pub async fn run(settings: Settings) -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen(listen_args)) => {
            listen(&listen_args.apply(settings)).await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
