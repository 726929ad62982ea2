use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use jobportal::dashboard::{
    Application, ApplicationId, ApplicationStatus, ApplicationsGateway, CompanySnapshot,
    GatewayError, JobId, JobSnapshot, Notification, NotificationVariant, Notifier,
};

/// Prints toast payloads to the terminal in place of the portal's toast tray.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let marker = match notification.variant {
            NotificationVariant::Default => "[*]",
            NotificationVariant::Destructive => "[!]",
        };
        println!(
            "{marker} {}: {}",
            notification.title, notification.description
        );
    }
}

/// Gateway backed by a mutable fixture list, standing in for the portal API
/// during demos.
#[derive(Default)]
pub(crate) struct InMemoryApplicationsGateway {
    applications: Mutex<Vec<Application>>,
    fail_fetch: AtomicBool,
    fail_withdraw: AtomicBool,
}

impl InMemoryApplicationsGateway {
    pub(crate) fn seeded() -> Self {
        Self {
            applications: Mutex::new(sample_applications()),
            ..Self::default()
        }
    }

    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn fail_fetches(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::Relaxed);
    }

    pub(crate) fn fail_withdrawals(&self, fail: bool) {
        self.fail_withdraw.store(fail, Ordering::Relaxed);
    }
}

impl ApplicationsGateway for InMemoryApplicationsGateway {
    async fn fetch_applications(&self) -> Result<Vec<Application>, GatewayError> {
        if self.fail_fetch.load(Ordering::Relaxed) {
            return Err(GatewayError::Unavailable("portal offline".to_string()));
        }
        Ok(self
            .applications
            .lock()
            .expect("gateway mutex poisoned")
            .clone())
    }

    async fn withdraw_application(&self, id: &ApplicationId) -> Result<(), GatewayError> {
        if self.fail_withdraw.load(Ordering::Relaxed) {
            return Err(GatewayError::Status(502));
        }
        let mut guard = self.applications.lock().expect("gateway mutex poisoned");
        let before = guard.len();
        guard.retain(|application| &application.id != id);
        if guard.len() == before {
            return Err(GatewayError::Status(404));
        }
        Ok(())
    }
}

fn application(
    id: &str,
    job_id: &str,
    title: &str,
    company: &str,
    status: ApplicationStatus,
    applied: (i32, u32, u32),
) -> Application {
    let (year, month, day) = applied;
    Application {
        id: ApplicationId(id.to_string()),
        job: JobSnapshot {
            id: JobId(job_id.to_string()),
            title: title.to_string(),
            company: CompanySnapshot {
                name: company.to_string(),
            },
        },
        status,
        applied_at: Utc
            .with_ymd_and_hms(year, month, day, 15, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(crate) fn sample_applications() -> Vec<Application> {
    vec![
        application(
            "app-101",
            "job-1",
            "Senior Backend Engineer",
            "Prairie Analytics",
            ApplicationStatus::Pending,
            (2025, 9, 2),
        ),
        application(
            "app-102",
            "job-2",
            "Platform Engineer",
            "Riverbend Systems",
            ApplicationStatus::Reviewing,
            (2025, 8, 27),
        ),
        application(
            "app-103",
            "job-3",
            "Data Engineer",
            "Maple Grove Software",
            ApplicationStatus::Accepted,
            (2025, 8, 12),
        ),
        application(
            "app-104",
            "job-4",
            "QA Analyst",
            "Capitol Square Labs",
            ApplicationStatus::Rejected,
            (2025, 7, 30),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_gateway_serves_the_fixture_list() {
        let gateway = InMemoryApplicationsGateway::seeded();
        let applications = gateway.fetch_applications().await.expect("fetch succeeds");
        assert_eq!(applications.len(), 4);
        assert_eq!(applications[0].job.title, "Senior Backend Engineer");
    }

    #[tokio::test]
    async fn withdrawal_deletes_from_the_backing_list() {
        let gateway = InMemoryApplicationsGateway::seeded();
        let id = ApplicationId("app-101".to_string());

        gateway
            .withdraw_application(&id)
            .await
            .expect("withdraw succeeds");

        let applications = gateway.fetch_applications().await.expect("fetch succeeds");
        assert_eq!(applications.len(), 3);
        assert!(applications.iter().all(|application| application.id != id));
    }

    #[tokio::test]
    async fn withdrawal_of_unknown_id_reports_not_found() {
        let gateway = InMemoryApplicationsGateway::seeded();
        let id = ApplicationId("app-999".to_string());

        match gateway.withdraw_application(&id).await {
            Err(GatewayError::Status(404)) => {}
            other => panic!("expected 404, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn outages_surface_as_unavailable() {
        let gateway = InMemoryApplicationsGateway::seeded();
        gateway.fail_fetches(true);

        match gateway.fetch_applications().await {
            Err(GatewayError::Unavailable(_)) => {}
            other => panic!("expected unavailable, got {other:?}"),
        }
    }
}
