use async_content::cli::Cli;
use async_content::config::Config;
use async_content::logging::init_tracing;
use async_content::ui::runtime;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    cli.apply(&mut config);

    runtime::run(config)
}
