use clap::Parser;

mod cli;
mod commands;

fn setup_logger(verbose: bool) -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = if verbose { Level::DEBUG } else { Level::WARN };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(true)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    setup_logger(args.verbose)?;

    commands::generate(&args);
    Ok(())
}
