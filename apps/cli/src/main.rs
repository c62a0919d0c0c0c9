//! titlepatch CLI — give Markdown API pages a standard title header.
//!
//! Scans a documentation directory and prepends `title:` front matter taken
//! from each page's first second-level heading.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
