use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use mongo_txn_patcher::{run, Mode, CONNECTION_PATH, TRANSACTION_PATCH};
use std::path::Path;

#[derive(Parser)]
#[command(name = "mongo-txn-patcher")]
#[command(
    about = "Add MongoDB transaction functions to jenssegers/mongodb's Connection.php",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Rollback the transaction function
    #[arg(long)]
    rollback: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mode = Mode::from_rollback(cli.rollback);

    run(Path::new(CONNECTION_PATH), &TRANSACTION_PATCH, mode)?;

    let message = match mode {
        Mode::Apply => "MongoDB transaction function added",
        Mode::Revert => "MongoDB transaction function rolled back",
    };
    println!("{}", message.green());

    Ok(())
}
