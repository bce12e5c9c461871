use clap::{Parser, Subcommand};
use shelfql::error::Result;

mod cli;

#[derive(Parser)]
#[command(name = "shelfql")]
#[command(version = "0.1.0")]
#[command(about = "Serve an in-memory book catalog as a GraphQL API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an example configuration and seed data set
    Init {
        /// Seed data file path to write
        #[arg(long, default_value = "seed.json")]
        seed: String,

        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path
        #[arg(long, default_value = "shelfql.toml")]
        config: String,

        /// Server port (overrides the configured port)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { seed, output } => {
            cli::init::run(seed, output).await?;
        }
        Commands::Serve { config, port } => {
            cli::serve::run(config, port).await?;
        }
    }

    Ok(())
}
