use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::ApplicationId;
use super::gateway::{ApplicationsGateway, JobRouter, Notifier};
use super::store::DashboardStore;

/// Presentation projection of the dashboard for one render pass.
///
/// Renderers branch on `loading`, then on `rows` being empty, mirroring the
/// three states of the portal's dashboard card.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub loading: bool,
    pub rows: Vec<ApplicationRowView>,
    pub browse_link: String,
}

/// One application row, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRowView {
    pub application_id: ApplicationId,
    pub job_title: String,
    pub company: String,
    pub applied_on: String,
    pub status_label: &'static str,
    pub status_symbol: &'static str,
    pub withdrawable: bool,
    pub withdrawing: bool,
    pub job_link: String,
}

impl DashboardView {
    pub fn from_store<G, N, R>(store: &DashboardStore<G, N>, router: &R) -> Self
    where
        G: ApplicationsGateway,
        N: Notifier,
        R: JobRouter,
    {
        let rows = store
            .applications()
            .iter()
            .map(|application| ApplicationRowView {
                application_id: application.id.clone(),
                job_title: application.job.title.clone(),
                company: application.job.company.name.clone(),
                applied_on: format_applied_on(application.applied_at),
                status_label: application.status.label(),
                status_symbol: application.status.icon().glyph.symbol(),
                withdrawable: application.status.is_withdrawable(),
                withdrawing: store.withdrawing_id() == Some(&application.id),
                job_link: router.job_path(&application.job.id),
            })
            .collect();

        Self {
            loading: store.is_loading(),
            rows,
            browse_link: router.jobs_path(),
        }
    }

    /// True once a completed load produced nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.rows.is_empty()
    }
}

/// Display form of the submission timestamp, e.g. "September 24, 2025".
pub fn format_applied_on(applied_at: DateTime<Utc>) -> String {
    applied_at.format("%B %-d, %Y").to_string()
}
