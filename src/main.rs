use anyhow::{Context, Result};
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use userreport::{load, serve};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(level)
    });
    fmt::Subscriber::builder().with_env_filter(env_filter).init();
    info!("startup");

    // ─── 2) configure from environment ───────────────────────────────
    let csv_path = env::var("REPORT_CSV").unwrap_or_else(|_| "UserReport.csv".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .context("PORT must be a valid port number")?;

    // ─── 3) one-time fail-fast load ──────────────────────────────────
    let table = load::init(&csv_path)
        .with_context(|| format!("loading assignment report from {csv_path}"))?;
    info!(
        rows = table.len(),
        roles = table.roles().len(),
        agents = table.agent_names().len(),
        users = table.user_names().len(),
        "report loaded"
    );

    // ─── 4) serve ────────────────────────────────────────────────────
    info!("listening on port {}", port);
    info!("health check: http://localhost:{}/health", port);
    warp::serve(serve::routes()).run(([0, 0, 0, 0], port)).await;

    Ok(())
}
