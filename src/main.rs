use std::path::PathBuf;

use clap::Parser;

use hg_szz::commands;
use hg_szz::hg::repository::Repository;

#[derive(Parser)]
#[command(name = "hg-szz")]
#[command(
    about = "Counts prior commits of the contributors a bug's fixing patches blame",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Keyword identifying the bug's fixing revisions in the log
    keyword: String,

    /// Restrict the analysis to files ending in `.rs`
    #[arg(long)]
    rust_only: bool,

    /// Repository to operate on (defaults to the current directory's)
    #[arg(short = 'R', long = "repository", value_name = "PATH")]
    repository: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let repo = Repository::new(cli.repository);
    commands::attribute::handle_attribute(&repo, &cli.keyword, cli.rust_only);
}
