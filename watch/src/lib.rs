//! Neighborhood watch incident board.
//!
//! Reports are classified by a generative model through
//! [`IncidentClassifier`], recorded by [`Intake`] into a [`Feed`], and read
//! back as filtered [`FeedView`]s. [`TipBoard`] keeps a safety tip on display.

pub mod busy;
pub mod classify;
pub mod feed;
pub mod geo;
pub mod intake;
pub mod photo;
pub mod tip;
pub mod types;

pub use busy::{BusyFlag, BusyGuard};
pub use classify::IncidentClassifier;
pub use feed::{EmptyState, Feed, FeedView, SeverityFilter};
pub use geo::{GeoError, Geolocator, ReportedPosition};
pub use intake::{Intake, IntakeError, IntakeForm};
pub use photo::{Photo, PhotoError};
pub use tip::{SafetyTips, TipBoard, FALLBACK_TIP};
pub use types::{
    Analysis, Category, Incident, IncidentId, Location, ParseEnumError, Report, Severity,
    FALLBACK_SUMMARY,
};
