use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::photo::Photo;

/// Summary used when an incident could not be classified.
pub const FALLBACK_SUMMARY: &str = "Could not analyze incident. Please review.";

/// A string did not name a member of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// How serious a reported incident is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    /// Not classified. Only ever produced by the fallback path.
    Unknown,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Unknown,
    ];

    /// Values a successful classification may produce.
    pub const CLASSIFIED: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "severity",
                value: s.to_string(),
            })
    }
}

/// Topic of a reported incident.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Suspicious Activity")]
    SuspiciousActivity,
    Theft,
    Vandalism,
    #[serde(rename = "Traffic Violation")]
    TrafficViolation,
    #[serde(rename = "Lost Pet")]
    LostPet,
    /// Catch-all, also used when classification fails.
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::SuspiciousActivity,
        Category::Theft,
        Category::Vandalism,
        Category::TrafficViolation,
        Category::LostPet,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::SuspiciousActivity => "Suspicious Activity",
            Category::Theft => "Theft",
            Category::Vandalism => "Vandalism",
            Category::TrafficViolation => "Traffic Violation",
            Category::LostPet => "Lost Pet",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Identifier of an [`Incident`], time-ordered and unique.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(Uuid);

impl IncidentId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Result of classifying a description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub category: Category,
    pub severity: Severity,
    pub summary: String,
}

impl Analysis {
    /// The value substituted whenever classification fails.
    pub fn fallback() -> Self {
        Self {
            category: Category::Other,
            severity: Severity::Unknown,
            summary: FALLBACK_SUMMARY.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

/// Validated user input for a new incident.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub description: String,
    pub photo: Option<Photo>,
    pub location: Option<Location>,
}

/// A reported event together with its classification.
///
/// Fields are private; an incident never changes once recorded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Incident {
    id: IncidentId,
    description: String,
    category: Category,
    severity: Severity,
    summary: String,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo: Option<Photo>,
}

impl Incident {
    /// Record `report` with `analysis` at the current instant.
    pub fn record(report: Report, analysis: Analysis) -> Self {
        Self::recorded_at(report, analysis, Utc::now())
    }

    /// Record `report` with `analysis` at `timestamp`.
    pub fn recorded_at(report: Report, analysis: Analysis, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: IncidentId::generate(),
            description: report.description,
            category: analysis.category,
            severity: analysis.severity,
            summary: analysis.summary,
            timestamp,
            location: report.location,
            photo: report.photo,
        }
    }

    pub fn id(&self) -> IncidentId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }
}
