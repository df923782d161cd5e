use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List training books in catalog order.
    Books(BooksArgs),
    /// Show one training book.
    Book(BookArgs),
    /// List scripts by category, optionally searching their text.
    Scripts(ScriptsArgs),
    /// Show what a phrase is for and what to say back.
    Classify(ClassifyArgs),
    /// List the views in navigation order.
    Views(OutputArgs),
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct BooksArgs {
    /// "All", "EXPOSED" or "COMING SOON" (also accepts `coming_soon`).
    #[arg(long, default_value = "All")]
    pub status: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct BookArgs {
    /// Book id, e.g. `customer_centered_selling`.
    pub id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ScriptsArgs {
    /// "All", a category title ("False Urgency") or name (`false_urgency`).
    #[arg(long, default_value = "All")]
    pub category: String,

    /// Case-insensitive text the script must contain.
    #[arg(long)]
    pub query: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// The phrase as you heard it.
    pub script: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Serve the Know Your Enemy web app")]
pub struct AppArgs {
    #[arg(long, default_value = "127.0.0.1:8501")]
    pub addr: SocketAddr,
}
