use std::sync::Arc;

use tracing::warn;

use super::domain::{Application, ApplicationId};
use super::gateway::{ApplicationsGateway, GatewayError, Notification, Notifier};

/// In-memory holder of the dashboard state for one view session.
///
/// The store is the only mutation path for the application list and the two
/// request flags. Each operation awaits its gateway call to completion and
/// applies the resulting transition synchronously, so overlapping requests
/// cannot interleave through this API; `withdrawing_id` stays an advisory
/// flag for the presentation layer, not a lock.
pub struct DashboardStore<G, N> {
    gateway: Arc<G>,
    notifier: Arc<N>,
    applications: Vec<Application>,
    is_loading: bool,
    withdrawing_id: Option<ApplicationId>,
}

impl<G, N> DashboardStore<G, N>
where
    G: ApplicationsGateway,
    N: Notifier,
{
    /// A fresh store reports as loading until the first `load` resolves.
    pub fn new(gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self {
            gateway,
            notifier,
            applications: Vec::new(),
            is_loading: true,
            withdrawing_id: None,
        }
    }

    /// Fetch the signed-in user's applications and replace the list.
    ///
    /// On failure the list is left untouched and a destructive notification
    /// is emitted. The error is returned for callers that want it, but the
    /// store stays fully usable either way.
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        self.is_loading = true;
        let outcome = self.gateway.fetch_applications().await;
        self.is_loading = false;

        match outcome {
            Ok(applications) => {
                self.applications = applications;
                Ok(())
            }
            Err(source) => {
                warn!(error = %source, "failed to fetch applications");
                self.notifier.notify(Notification::destructive(
                    "Error",
                    "Failed to fetch applications. Please try again.",
                ));
                Err(DashboardError::FetchFailed { source })
            }
        }
    }

    /// Withdraw one application by id. `job_title` only feeds the success
    /// notification text.
    ///
    /// An id that is not in the list is a no-op: no remote call and no
    /// notification. Removal happens only after the service confirms.
    pub async fn withdraw(
        &mut self,
        id: &ApplicationId,
        job_title: &str,
    ) -> Result<(), DashboardError> {
        if !self.applications.iter().any(|application| &application.id == id) {
            return Ok(());
        }

        self.withdrawing_id = Some(id.clone());
        let outcome = self.gateway.withdraw_application(id).await;
        self.withdrawing_id = None;

        match outcome {
            Ok(()) => {
                self.applications.retain(|application| &application.id != id);
                self.notifier.notify(Notification::standard(
                    "Application Withdrawn",
                    format!("Your application for {job_title} has been withdrawn successfully."),
                ));
                Ok(())
            }
            Err(source) => {
                warn!(application_id = %id, error = %source, "failed to withdraw application");
                self.notifier.notify(Notification::destructive(
                    "Error",
                    "Failed to withdraw application. Please try again.",
                ));
                Err(DashboardError::WithdrawFailed {
                    id: id.clone(),
                    source,
                })
            }
        }
    }

    /// Applications in the order the service returned them.
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn withdrawing_id(&self) -> Option<&ApplicationId> {
        self.withdrawing_id.as_ref()
    }

    /// Job title for an application currently in the list.
    pub fn job_title(&self, id: &ApplicationId) -> Option<&str> {
        self.applications
            .iter()
            .find(|application| &application.id == id)
            .map(|application| application.job.title.as_str())
    }
}

/// Errors surfaced by the store. Both are recovered locally: the user-facing
/// notification has already been emitted when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to fetch applications")]
    FetchFailed { source: GatewayError },
    #[error("failed to withdraw application {id}")]
    WithdrawFailed {
        id: ApplicationId,
        source: GatewayError,
    },
}
