use std::io;

use clap::Parser;
use leaper_cli::{Args, init_logging, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level())?;

    let config = args.into_config()?;
    let stdout = io::stdout();
    run(&config, &mut stdout.lock())
}
