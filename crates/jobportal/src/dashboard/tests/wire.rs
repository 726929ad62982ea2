use serde_json::json;

use crate::dashboard::domain::{Application, ApplicationStatus};
use crate::dashboard::http::ApplicationsEnvelope;

#[test]
fn deserializes_the_portal_list_envelope() {
    let payload = json!({
        "status": "success",
        "message": "Applications retrieved successfully",
        "data": [
            {
                "id": "42",
                "job": {
                    "id": "7",
                    "title": "Senior Backend Engineer",
                    "company": { "name": "Prairie Analytics" }
                },
                "status": "REVIEWING",
                "appliedAt": "2025-09-24T10:00:00Z"
            }
        ],
        "count": 1,
        "userId": 3,
        "timestamp": "2025-09-24T10:00:01Z"
    });

    let envelope: ApplicationsEnvelope =
        serde_json::from_value(payload).expect("envelope deserializes");

    assert_eq!(envelope.data.len(), 1);
    let application = &envelope.data[0];
    assert_eq!(application.id.0, "42");
    assert_eq!(application.job.id.0, "7");
    assert_eq!(application.job.company.name, "Prairie Analytics");
    assert_eq!(application.status, ApplicationStatus::Reviewing);
    assert_eq!(application.applied_at.to_rfc3339(), "2025-09-24T10:00:00+00:00");
}

#[test]
fn status_round_trips_in_wire_form() {
    for (status, wire) in [
        (ApplicationStatus::Pending, "\"PENDING\""),
        (ApplicationStatus::Reviewing, "\"REVIEWING\""),
        (ApplicationStatus::Accepted, "\"ACCEPTED\""),
        (ApplicationStatus::Rejected, "\"REJECTED\""),
    ] {
        assert_eq!(serde_json::to_string(&status).expect("serializes"), wire);
        let parsed: ApplicationStatus = serde_json::from_str(wire).expect("deserializes");
        assert_eq!(parsed, status);
    }
}

#[test]
fn rejects_statuses_outside_the_enum() {
    let result: Result<ApplicationStatus, _> = serde_json::from_str("\"ARCHIVED\"");
    assert!(result.is_err());
}

#[test]
fn applications_serialize_back_to_camel_case() {
    let application = Application {
        id: crate::dashboard::domain::ApplicationId("42".to_string()),
        job: crate::dashboard::domain::JobSnapshot {
            id: crate::dashboard::domain::JobId("7".to_string()),
            title: "Senior Backend Engineer".to_string(),
            company: crate::dashboard::domain::CompanySnapshot {
                name: "Prairie Analytics".to_string(),
            },
        },
        status: ApplicationStatus::Pending,
        applied_at: chrono::DateTime::parse_from_rfc3339("2025-09-24T10:00:00Z")
            .expect("valid timestamp")
            .with_timezone(&chrono::Utc),
    };

    let value = serde_json::to_value(&application).expect("serializes");
    assert!(value.get("appliedAt").is_some());
    assert!(value.get("applied_at").is_none());
}
