use clap::Parser;
use miette::Result;
use touchup::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_tracing(enabled: bool) {
    if !enabled && std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("touchup=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log);
    let printer = cli.printer();

    match cli.command {
        Commands::Crop(args) => touchup::cli::crop::run(args, &printer)?,
        Commands::Logo(args) => touchup::cli::logo::run(args, &printer)?,
        Commands::Trim(args) => touchup::cli::trim::run(args, &printer)?,
        Commands::Headroom(args) => touchup::cli::headroom::run(args, &printer)?,
        Commands::Pad(args) => touchup::cli::pad::run(args, &printer)?,
        Commands::RemoveBg(args) => touchup::cli::remove_bg::run(args, &printer)?,
        Commands::Composite(args) => touchup::cli::composite::run(args, &printer)?,
        Commands::Variants(args) => touchup::cli::variants::run(args, &printer)?,
        Commands::Shrink(args) => touchup::cli::shrink::run(args, &printer)?,
        Commands::Completions(args) => touchup::cli::completions::run(args)?,
    }

    Ok(())
}
