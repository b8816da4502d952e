//! In-memory incident feed and its filtered views.

use serde::{Serialize, Serializer};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::types::{Incident, IncidentId, ParseEnumError, Severity};

/// Restricts a feed view to one severity, or shows everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Filters offered to users. `Unknown` stays reachable by parsing.
    pub fn choices() -> Vec<SeverityFilter> {
        std::iter::once(SeverityFilter::All)
            .chain(Severity::CLASSIFIED.into_iter().map(SeverityFilter::Only))
            .collect()
    }

    pub fn matches(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(s) => s == severity,
        }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityFilter::All => f.write_str("all"),
            SeverityFilter::Only(s) => f.write_str(s.as_str()),
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(SeverityFilter::All);
        }
        s.parse::<Severity>()
            .map(SeverityFilter::Only)
            .map_err(|_| ParseEnumError {
                kind: "severity filter",
                value: s.to_string(),
            })
    }
}

impl Serialize for SeverityFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Why a view has nothing to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Nobody has reported anything yet.
    AllClear,
    /// Incidents exist but the filter hides all of them.
    NoMatches,
}

impl EmptyState {
    pub fn title(self) -> &'static str {
        match self {
            EmptyState::AllClear => "All Clear!",
            EmptyState::NoMatches => "No Matching Incidents",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EmptyState::AllClear => "There are no incidents to show. Report one to get started.",
            EmptyState::NoMatches => "Try adjusting your filters to see more reports.",
        }
    }
}

/// A filtered snapshot of the feed, most recent first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeedView {
    pub filter: SeverityFilter,
    pub incidents: Vec<Incident>,
    /// Number of incidents in the feed regardless of filter.
    pub total: usize,
}

impl FeedView {
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.total == 0 {
            Some(EmptyState::AllClear)
        } else if self.incidents.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }
}

/// Every incident reported during this session.
#[derive(Debug, Default)]
pub struct Feed {
    incidents: VecDeque<Incident>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the head. No deduplication, no size bound.
    pub fn append(&mut self, incident: Incident) {
        self.incidents.push_front(incident);
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id() == id)
    }

    /// Matching incidents sorted newest first.
    ///
    /// The sort is stable, so incidents sharing a timestamp keep their
    /// head-first insertion order.
    pub fn view(&self, filter: SeverityFilter) -> FeedView {
        let mut incidents: Vec<Incident> = self
            .incidents
            .iter()
            .filter(|i| filter.matches(i.severity()))
            .cloned()
            .collect();
        incidents.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        FeedView {
            filter,
            incidents,
            total: self.incidents.len(),
        }
    }
}
