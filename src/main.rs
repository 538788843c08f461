//! Parampool CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parampool::cli::{commands, handle_error, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    // RUST_LOG wins over the configured level; logs go to stderr so stdout
    // stays clean for captured values.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args, cli.json).await,
        Commands::Allocate(args) => commands::allocate::execute(args, &config, cli.json).await,
        Commands::Start(args) => commands::start::execute(args, &config, cli.json).await,
        Commands::Finish(args) => commands::finish::execute(args, &config, cli.json).await,
        Commands::History(args) => commands::history::execute(args, &config, cli.json).await,
        Commands::Expand(args) => commands::expand::execute(args, cli.json),
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
