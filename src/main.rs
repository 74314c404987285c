//! Lumen - interactive command-line task manager

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use lumen::cli::{Cli, Commands};
use lumen::config::Config;
use lumen::repl::Session;

const BANNER: &str = r"
 _
| |_   _ _ __ ___   ___ _ __
| | | | | '_ ` _ \ / _ \ '_ \
| | |_| | | | | | |  __/ | | |
|_|\__,_|_| |_| |_|\___|_| |_|
";

fn main() -> Result<()> {
    if std::env::var("LUMEN_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("lumen=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "lumen", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load().unwrap_or_default();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    if config.show_banner {
        println!("{}", BANNER);
    }

    let mut session = Session::new();
    session.greet(&mut output)?;
    session.run(stdin.lock(), &mut output)?;

    Ok(())
}
