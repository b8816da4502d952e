//! Best-effort device position lookup.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Location;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("Geolocation is not supported by this browser.")]
    Unsupported,
    #[error("Error: {0}")]
    Failed(String),
}

/// Something able to report where the reporter currently is.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Location, GeoError>;
}

/// Position outcome already obtained by the browser and posted with a report.
#[derive(Clone, Debug, Default)]
pub struct ReportedPosition {
    pub location: Option<Location>,
    pub error: Option<String>,
}

#[async_trait]
impl Geolocator for ReportedPosition {
    async fn current_position(&self) -> Result<Location, GeoError> {
        match (self.location, &self.error) {
            (Some(loc), _) => Ok(loc),
            (None, Some(msg)) => Err(GeoError::Failed(msg.clone())),
            (None, None) => Err(GeoError::Unsupported),
        }
    }
}
