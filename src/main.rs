use std::process::ExitCode;

use clap::Parser;
use tweaker_assembler::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    tweaker_assembler::init_logging();

    let cli = Cli::parse();
    match tweaker_assembler::run(cli).await {
        Ok(report) => {
            tracing::info!(
                "Tweaker json ready at {:?} ({} libraries)",
                report.output,
                report.libraries
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Assembling tweaker json failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
