//! Kubernetes string finder
//!
//! Lists every Secret and ConfigMap in the cluster of the current kubeconfig
//! context and reports where the search string occurs. Exits 1 when
//! anything matched, 0 when nothing did and 2 on a fatal error.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kube_string_finder::{
    adapters::{kubeconfig, resources},
    cli::Args,
    matcher::Matcher,
    scanner::{self, ScanReport},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let outcome = run(&args).await;
    match &outcome {
        Ok(report) if report.found_any() => info!("{}", report.summary()),
        Ok(report) => info!(
            "No matches for >>{}<< in {} secrets and {} config maps",
            args.pattern, report.secrets_scanned, report.config_maps_scanned
        ),
        Err(e) => error!("{}", e),
    }

    ExitCode::from(scanner::exit_status(&outcome))
}

async fn run(args: &Args) -> anyhow::Result<ScanReport> {
    let matcher = Matcher::new(&args.pattern, args.case_sensitive);
    info!("Searching >>{}<<", matcher.pattern());

    let kubeconfig_path = kubeconfig::default_kubeconfig_path()?;
    let client = kubeconfig::build_client(&kubeconfig_path).await?;

    let mut report = ScanReport::default();

    let secrets = resources::list_secrets(&client).await?;
    scanner::scan_secrets(&secrets, &matcher, &mut report);

    let config_maps = resources::list_config_maps(&client).await?;
    scanner::scan_config_maps(&config_maps, &matcher, &mut report);

    Ok(report)
}

/// Initialize tracing subscriber
///
/// Verbose output carries timestamps, levels and source locations; otherwise
/// only the message is printed.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,kube_string_finder=debug,kube=warn,hyper=warn"
    } else {
        "info,kube=warn,hyper=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    if verbose {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .without_time()
                    .with_level(false)
                    .with_target(false),
            )
            .init();
    }
}
