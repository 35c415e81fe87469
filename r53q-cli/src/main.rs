//! r53q: query Route 53 hosted zones and record sets

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    r53q_cli::logging::init();
    r53q_cli::run().await
}
