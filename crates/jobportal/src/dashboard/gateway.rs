use std::future::Future;

use serde::Serialize;

use super::domain::{Application, ApplicationId, JobId};

/// Client-side port to the remote portal service.
///
/// Implementations own transport and authentication; the store only relies
/// on the two calls resolving with either the payload or an opaque failure.
pub trait ApplicationsGateway: Send + Sync {
    /// Fetch the signed-in user's applications, in service order.
    fn fetch_applications(
        &self,
    ) -> impl Future<Output = Result<Vec<Application>, GatewayError>> + Send;

    /// Ask the service to withdraw one application.
    fn withdraw_application(
        &self,
        id: &ApplicationId,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}

/// Failure surfaced by a gateway call. The store treats every variant the
/// same; the split exists for logs and operator-facing messages.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("service unreachable: {0}")]
    Unavailable(String),
    #[error("service rejected the request with status {0}")]
    Status(u16),
    #[error("malformed service response: {0}")]
    Malformed(String),
}

/// Transient user-facing notification, mirroring the portal's toast payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

impl Notification {
    pub fn standard(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Displays transient notifications. Fire-and-forget: no acknowledgment and
/// no failure channel back into the store.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Produces navigation targets for the jobs surface; routing itself stays
/// opaque to the store.
pub trait JobRouter: Send + Sync {
    fn jobs_path(&self) -> String;
    fn job_path(&self, job_id: &JobId) -> String;
}

/// Default portal routing scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortalRoutes;

impl JobRouter for PortalRoutes {
    fn jobs_path(&self) -> String {
        "/jobs".to_string()
    }

    fn job_path(&self, job_id: &JobId) -> String {
        format!("/jobs/{job_id}")
    }
}
