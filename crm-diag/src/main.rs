use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crm_diag=info,mapping_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let fixture = args
        .next()
        .or_else(|| std::env::var("CRMDIAG_FIXTURE").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crm-diag/fixtures/demo.yaml"));
    let tenant_uuid = args
        .next()
        .or_else(|| std::env::var("CRMDIAG_TENANT").ok())
        .unwrap_or_else(|| "a-cx-d8bf4".to_string());

    let (tenants, store) = crm_diag::load_environment(&fixture)?;
    let report = crm_diag::run_diagnostic(&tenants, &store, &tenant_uuid)?;
    print!("{report}");
    Ok(())
}
