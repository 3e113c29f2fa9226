//! cbcast configuration service
//!
//! - Loads a strict YAML device profile (first argument, default `cbcast.yaml`)
//! - Configures cell broadcast channels on startup
//! - Re-runs on SIGHUP (radio reset / airplane-mode exit), exits on Ctrl-C
//! - Prints enabled ranges per radio as JSON after each pass

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use cbcast_service::host::ProfileHost;
use cbcast_service::{config, ChannelConfigService, ACTION_ENABLE_CHANNELS};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "cbcast.yaml".to_string());
    let profile = match config::load_from_file(&path) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), error = %e, "profile load failed");
            std::process::exit(2);
        }
    };

    let host = Arc::new(ProfileHost::from_profile(&profile));
    let service = Arc::new(ChannelConfigService::new(host.clone(), host.clone(), host.clone()));

    tracing::info!(%path, "cbcast-service starting");
    run_pass(&service, &host).await;

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::hangup()) {
            Ok(mut hup) => loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    _ = hup.recv() => {
                        tracing::info!("SIGHUP: re-enabling channels");
                        run_pass(&service, &host).await;
                    }
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "SIGHUP handler unavailable");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    print!("{}", service.metrics().render());
    tracing::info!("cbcast-service stopped");
}

/// Run one trigger on the blocking pool; radio calls may block.
async fn run_pass(service: &Arc<ChannelConfigService>, host: &Arc<ProfileHost>) {
    let svc = Arc::clone(service);
    match tokio::task::spawn_blocking(move || svc.handle_action(ACTION_ENABLE_CHANNELS)).await {
        Ok(Some(report)) => {
            for sub in &report.subs {
                tracing::info!(
                    sub_id = ?sub.sub_id,
                    role = sub.role.as_str(),
                    attempted = sub.attempted,
                    failed = sub.failed,
                    "sub configured"
                );
            }
        }
        Ok(None) => {}
        Err(e) => tracing::error!(error = %e, "configuration pass aborted"),
    }

    match serde_json::to_string_pretty(&host.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::warn!(error = %e, "snapshot encode failed"),
    }
}
