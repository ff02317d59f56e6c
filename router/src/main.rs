use cityroute::{
    cli::{run, Args},
    logging::init_logging,
};

use clap::Parser;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args);
    let output = run(&args)?;
    println!("{}", output);
    Ok(())
}
