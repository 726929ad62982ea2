use std::sync::Arc;

use clap::Args;
use jobportal::dashboard::{DashboardStore, DashboardView, PortalRoutes};
use jobportal::error::AppError;

use crate::infra::{InMemoryApplicationsGateway, TerminalNotifier};
use crate::render::render_dashboard;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Start from an empty dashboard instead of the seeded fixtures
    #[arg(long)]
    pub(crate) empty: bool,
    /// Make the fetch fail so the error notification path shows
    #[arg(long)]
    pub(crate) fail_fetch: bool,
    /// Make the withdrawal fail so the error notification path shows
    #[arg(long)]
    pub(crate) fail_withdraw: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Applicant dashboard walkthrough (fixture data, no portal required)");

    let gateway = Arc::new(if args.empty {
        InMemoryApplicationsGateway::empty()
    } else {
        InMemoryApplicationsGateway::seeded()
    });
    gateway.fail_fetches(args.fail_fetch);
    gateway.fail_withdrawals(args.fail_withdraw);

    let notifier = Arc::new(TerminalNotifier);
    let mut store = DashboardStore::new(gateway, notifier);

    render_dashboard(&DashboardView::from_store(&store, &PortalRoutes));

    if store.load().await.is_err() {
        return Ok(());
    }
    render_dashboard(&DashboardView::from_store(&store, &PortalRoutes));

    let candidate = store
        .applications()
        .iter()
        .find(|application| application.status.is_withdrawable())
        .map(|application| (application.id.clone(), application.job.title.clone()));

    match candidate {
        None => println!("\nNo withdrawable applications to demonstrate."),
        Some((id, job_title)) => {
            println!("\nWithdrawing application {id} ({job_title})");
            store.withdraw(&id, &job_title).await.ok();
            render_dashboard(&DashboardView::from_store(&store, &PortalRoutes));
        }
    }

    Ok(())
}
