use std::sync::Arc;

use jobportal::config::AppConfig;
use jobportal::dashboard::{
    ApplicationId, DashboardStore, DashboardView, HttpApplicationsGateway, PortalRoutes,
};
use jobportal::error::AppError;
use jobportal::telemetry;
use tracing::info;

use crate::cli::{DashboardArgs, WithdrawArgs};
use crate::infra::TerminalNotifier;
use crate::render::render_dashboard;

pub(crate) async fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let store = connect(args.api_url, args.token).await?;
    let view = DashboardView::from_store(&store, &PortalRoutes);

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("dashboard view unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    render_dashboard(&view);
    Ok(())
}

pub(crate) async fn run_withdraw(args: WithdrawArgs) -> Result<(), AppError> {
    let mut store = connect(args.api_url, args.token).await?;

    let id = ApplicationId(args.application_id);
    let Some(job_title) = store.job_title(&id).map(str::to_string) else {
        println!("Application {id} is not on your dashboard; nothing to withdraw.");
        return Ok(());
    };

    store.withdraw(&id, &job_title).await?;
    render_dashboard(&DashboardView::from_store(&store, &PortalRoutes));
    Ok(())
}

/// Load configuration, wire the HTTP gateway, and run the initial fetch.
async fn connect(
    api_url: Option<String>,
    token: Option<String>,
) -> Result<DashboardStore<HttpApplicationsGateway, TerminalNotifier>, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(api_url) = api_url {
        config.api.base_url = api_url;
    }
    if let Some(token) = token {
        config.api.token = Some(token);
    }

    telemetry::init(&config.telemetry)?;
    info!(base_url = %config.api.base_url, "connecting to portal API");

    let gateway = Arc::new(HttpApplicationsGateway::from_config(&config.api));
    let notifier = Arc::new(TerminalNotifier);
    let mut store = DashboardStore::new(gateway, notifier);
    store.load().await?;
    Ok(store)
}
