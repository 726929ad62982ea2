use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use crate::dashboard::domain::{
    Application, ApplicationId, ApplicationStatus, CompanySnapshot, JobId, JobSnapshot,
};
use crate::dashboard::gateway::{
    ApplicationsGateway, GatewayError, Notification, Notifier,
};
use crate::dashboard::store::DashboardStore;

pub(super) fn application(
    id: &str,
    job_id: &str,
    title: &str,
    company: &str,
    status: ApplicationStatus,
) -> Application {
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
            .with_ymd_and_hms(2025, 9, 24, 10, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) fn sample_applications() -> Vec<Application> {
    vec![
        application(
            "app-101",
            "job-1",
            "Senior Backend Engineer",
            "Prairie Analytics",
            ApplicationStatus::Pending,
        ),
        application(
            "app-102",
            "job-2",
            "Platform Engineer",
            "Riverbend Systems",
            ApplicationStatus::Reviewing,
        ),
        application(
            "app-103",
            "job-3",
            "Data Engineer",
            "Maple Grove Software",
            ApplicationStatus::Accepted,
        ),
        application(
            "app-104",
            "job-4",
            "QA Analyst",
            "Capitol Square Labs",
            ApplicationStatus::Rejected,
        ),
    ]
}

/// Gateway double returning canned data, with switchable outages and a log
/// of every withdraw request it saw.
#[derive(Default)]
pub(super) struct ScriptedGateway {
    applications: Mutex<Vec<Application>>,
    fail_fetch: AtomicBool,
    fail_withdraw: AtomicBool,
    withdraw_requests: Mutex<Vec<ApplicationId>>,
}

impl ScriptedGateway {
    pub(super) fn with_applications(applications: Vec<Application>) -> Self {
        Self {
            applications: Mutex::new(applications),
            ..Self::default()
        }
    }

    pub(super) fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::Relaxed);
    }

    pub(super) fn fail_withdraw(&self, fail: bool) {
        self.fail_withdraw.store(fail, Ordering::Relaxed);
    }

    pub(super) fn withdraw_requests(&self) -> Vec<ApplicationId> {
        self.withdraw_requests
            .lock()
            .expect("gateway mutex poisoned")
            .clone()
    }
}

impl ApplicationsGateway for ScriptedGateway {
    async fn fetch_applications(&self) -> Result<Vec<Application>, GatewayError> {
        if self.fail_fetch.load(Ordering::Relaxed) {
            return Err(GatewayError::Unavailable("scripted outage".to_string()));
        }
        Ok(self
            .applications
            .lock()
            .expect("gateway mutex poisoned")
            .clone())
    }

    async fn withdraw_application(&self, id: &ApplicationId) -> Result<(), GatewayError> {
        self.withdraw_requests
            .lock()
            .expect("gateway mutex poisoned")
            .push(id.clone());
        if self.fail_withdraw.load(Ordering::Relaxed) {
            return Err(GatewayError::Status(502));
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct RecordingNotifier {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
    }
}

pub(super) fn build_store() -> (
    DashboardStore<ScriptedGateway, RecordingNotifier>,
    Arc<ScriptedGateway>,
    Arc<RecordingNotifier>,
) {
    let gateway = Arc::new(ScriptedGateway::with_applications(sample_applications()));
    let notifier = Arc::new(RecordingNotifier::default());
    let store = DashboardStore::new(gateway.clone(), notifier.clone());
    (store, gateway, notifier)
}
