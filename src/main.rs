use std::process::ExitCode;

use clap::Parser;
use northwindDemo::cli::{dispatch, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dispatch(Cli::parse()).await
}
