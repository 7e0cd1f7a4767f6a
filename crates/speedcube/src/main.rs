//! Rubik's cube state and move engine.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;

    // Initialize logging.
    env_logger::builder().init();

    let prefs = speedcube_prefs::Preferences::load(args.prefs.as_deref());
    cli::exec(args.subcommand, &prefs)
}
