use std::io::Write as _;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

use know_your_enemy::cli::{Cli, Command};
use know_your_enemy::content::ContentStore;
use know_your_enemy::report;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    know_your_enemy::logging::init("warn").context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let store = ContentStore::embedded().context("load content")?;
    let out = match &cli.command {
        Command::Books(args) => report::books(&store, args).context("books")?,
        Command::Book(args) => report::book(&store, args).context("book")?,
        Command::Scripts(args) => report::scripts(&store, args).context("scripts")?,
        Command::Classify(args) => report::classification(args).context("classify")?,
        Command::Views(args) => report::views(args).context("views")?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes()).context("write stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
