use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for advertised jobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Company details carried on a job snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    pub name: String,
}

/// Job details captured when the applications were fetched; not live-synced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub id: JobId,
    pub title: String,
    pub company: CompanySnapshot,
}

/// Lifecycle status of an application, as reported by the portal service.
///
/// The enum is closed: `Accepted` and `Rejected` are terminal for the
/// applicant, and the mapping methods below match exhaustively so a future
/// variant cannot slip through unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Reviewing => "Under Review",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Icon shown next to the status label.
    pub const fn icon(self) -> StatusIcon {
        match self {
            ApplicationStatus::Pending => StatusIcon {
                glyph: IconGlyph::Clock,
                tone: IconTone::Amber,
            },
            ApplicationStatus::Reviewing => StatusIcon {
                glyph: IconGlyph::Clock,
                tone: IconTone::Blue,
            },
            ApplicationStatus::Accepted => StatusIcon {
                glyph: IconGlyph::CheckCircle,
                tone: IconTone::Green,
            },
            ApplicationStatus::Rejected => StatusIcon {
                glyph: IconGlyph::XCircle,
                tone: IconTone::Red,
            },
        }
    }

    /// Withdrawal is only offered while the application is still open.
    pub const fn is_withdrawable(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Pending | ApplicationStatus::Reviewing
        )
    }
}

/// Glyph and tone pair backing a status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusIcon {
    pub glyph: IconGlyph,
    pub tone: IconTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconGlyph {
    Clock,
    CheckCircle,
    XCircle,
}

impl IconGlyph {
    /// Terminal-friendly stand-in for the icon set used by the web client.
    pub const fn symbol(self) -> &'static str {
        match self {
            IconGlyph::Clock => "◷",
            IconGlyph::CheckCircle => "✓",
            IconGlyph::XCircle => "✗",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTone {
    Amber,
    Blue,
    Green,
    Red,
}

/// A user's submitted candidacy for a job, as returned by the portal service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub job: JobSnapshot,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}
