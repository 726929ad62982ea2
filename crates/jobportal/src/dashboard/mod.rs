//! Applicant dashboard view-model.
//!
//! One store instance owns the dashboard state for one view session:
//! fetch-on-mount, the rendered application list, and the withdrawal flow.
//! Everything the portal owns elsewhere (transport, toasts, routing) enters
//! through the collaborator traits in [`gateway`], which keeps the store
//! testable in isolation.

pub mod domain;
pub mod gateway;
pub mod http;
pub mod presentation;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, CompanySnapshot, IconGlyph, IconTone, JobId,
    JobSnapshot, StatusIcon,
};
pub use gateway::{
    ApplicationsGateway, GatewayError, JobRouter, Notification, NotificationVariant, Notifier,
    PortalRoutes,
};
pub use http::HttpApplicationsGateway;
pub use presentation::{ApplicationRowView, DashboardView};
pub use store::{DashboardError, DashboardStore};
