mod cli;
pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::cli::Cli;
use crate::core::assembler::{AssemblyReport, ManifestAssembler};
use crate::core::error::AssemblerResult;
use crate::core::http::build_http_client;
use crate::core::project::BuildSnapshot;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tweaker_assembler=debug")),
        )
        .init();
}

/// Load inputs named by `cli`, assemble the manifest and write it.
pub async fn run(cli: Cli) -> AssemblerResult<AssemblyReport> {
    let settings = cli.settings()?;
    let client = build_http_client(&settings.user_agent)?;
    let snapshot = BuildSnapshot::load(&cli.snapshot).await?;

    ManifestAssembler::new(settings, client)
        .run(&snapshot, &cli.out)
        .await
}
