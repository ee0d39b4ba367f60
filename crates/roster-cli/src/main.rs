//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `RosterService`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use roster_cli::handlers::serve::ServeArgs;
use roster_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads ROSTER_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::from_db_path(cli.db_path);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            host,
            port,
            static_dir,
            allow_origins,
        } => {
            let args = ServeArgs {
                host,
                port,
                static_dir,
                allow_origins,
            };
            handlers::serve::execute(config.store, args).await?;
        }
        Commands::Init => {
            handlers::init::execute(&config.store).await?;
        }
        Commands::List => {
            let ctx = bootstrap(config).await?;
            handlers::list::execute(&ctx).await?;
        }
        Commands::Stats => {
            let ctx = bootstrap(config).await?;
            handlers::stats::execute(&ctx).await?;
        }
        Commands::Import { file } => {
            let ctx = bootstrap(config).await?;
            handlers::import::execute(&ctx, &file).await?;
        }
    }

    Ok(())
}
