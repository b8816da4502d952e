//! Turning raw user input into a recorded incident.

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::busy::BusyFlag;
use crate::classify::IncidentClassifier;
use crate::feed::Feed;
use crate::geo::Geolocator;
use crate::photo::Photo;
use crate::types::{Incident, Location, Report};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Please provide a description of the incident.")]
    EmptyDescription,
    #[error("a report is already being submitted")]
    AlreadySubmitting,
}

/// Input gathered from the reporter before submission.
#[derive(Clone, Debug, Default)]
pub struct IntakeForm {
    description: String,
    photo: Option<Photo>,
    location: Option<Location>,
    location_error: Option<String>,
}

impl IntakeForm {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn attach_photo(&mut self, photo: Photo) {
        self.photo = Some(photo);
    }

    /// Ask `geo` for the current position.
    ///
    /// Failure only records a message for display; the form stays
    /// submittable and any earlier position is kept.
    pub async fn capture_location(&mut self, geo: &dyn Geolocator) {
        match geo.current_position().await {
            Ok(loc) => {
                self.location = Some(loc);
                self.location_error = None;
            }
            Err(e) => {
                warn!("location unavailable: {e}");
                self.location_error = Some(e.to_string());
            }
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn location_error(&self) -> Option<&str> {
        self.location_error.as_deref()
    }

    /// Check the form and produce the report to classify.
    pub fn validate(&self) -> Result<Report, IntakeError> {
        if self.description.trim().is_empty() {
            return Err(IntakeError::EmptyDescription);
        }
        Ok(Report {
            description: self.description.clone(),
            photo: self.photo.clone(),
            location: self.location,
        })
    }
}

/// Classifies submitted forms and records them in a feed.
pub struct Intake {
    classifier: IncidentClassifier,
    submitting: BusyFlag,
}

impl Intake {
    pub fn new(classifier: IncidentClassifier) -> Self {
        Self {
            classifier,
            submitting: BusyFlag::new(),
        }
    }

    /// Whether a submission is awaiting classification.
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    /// Validate, classify and append `form` to `feed`.
    ///
    /// Classification problems never surface here; the incident is recorded
    /// with fallback values instead.
    pub async fn submit(&self, form: &IntakeForm, feed: &Mutex<Feed>) -> Result<Incident, IntakeError> {
        let report = form.validate()?;
        let _submitting = self
            .submitting
            .try_begin()
            .ok_or(IntakeError::AlreadySubmitting)?;

        debug!("classifying report");
        let analysis = self.classifier.classify(&report.description).await;
        let incident = Incident::record(report, analysis);
        feed.lock().await.append(incident.clone());
        info!(id = %incident.id(), severity = %incident.severity(), "incident recorded");
        Ok(incident)
    }
}
