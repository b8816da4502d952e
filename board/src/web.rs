use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use llm::LLMClient;
use watch::{
    EmptyState, Feed, FeedView, Incident, IncidentClassifier, Intake, IntakeError, IntakeForm,
    Location, ParseEnumError, Photo, PhotoError, ReportedPosition, SafetyTips, SeverityFilter,
    TipBoard,
};

/// Largest accepted request body. Reports carry photos inline as data URLs.
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<Mutex<Feed>>,
    pub intake: Arc<Intake>,
    pub tips: Arc<TipBoard>,
}

impl AppState {
    /// Wire the board to `client`, using `model` for every call.
    pub fn new(client: Arc<dyn LLMClient>, model: &str) -> Self {
        Self {
            feed: Arc::new(Mutex::new(Feed::new())),
            intake: Arc::new(Intake::new(IncidentClassifier::new(client.clone(), model))),
            tips: Arc::new(TipBoard::new(SafetyTips::new(client, model))),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Filter(#[from] ParseEnumError),
    #[error("invalid photo: {0}")]
    Photo(#[from] PhotoError),
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error("a safety tip is already loading")]
    TipLoading,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Filter(_) | ApiError::Photo(_) => StatusCode::BAD_REQUEST,
            ApiError::Intake(IntakeError::EmptyDescription) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Intake(IntakeError::AlreadySubmitting) | ApiError::TipLoading => {
                StatusCode::CONFLICT
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Deserialize)]
pub struct FeedQuery {
    severity: Option<String>,
}

#[derive(Serialize)]
struct EmptyNotice {
    kind: EmptyState,
    title: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct FeedResponse {
    #[serde(flatten)]
    view: FeedView,
    empty_state: Option<EmptyNotice>,
}

/// Body of a report submission.
#[derive(Deserialize)]
pub struct NewReport {
    pub description: String,
    pub photo: Option<String>,
    pub location: Option<Location>,
    /// Message from a failed browser geolocation attempt.
    pub location_error: Option<String>,
}

#[derive(Serialize)]
struct Submitted {
    incident: Incident,
    location_error: Option<String>,
}

#[derive(Serialize)]
struct TipResponse {
    tip: String,
    loading: bool,
}

#[derive(Serialize)]
struct Status {
    submitting: bool,
    tip_loading: bool,
    incidents: usize,
}

#[derive(Serialize)]
struct FilterChoice {
    value: SeverityFilter,
    label: String,
}

pub async fn index() -> Html<&'static str> {
    static INDEX: &str = include_str!("../index.html");
    Html(INDEX)
}

pub async fn list_incidents(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = match query.severity.as_deref() {
        Some(s) => s.parse::<SeverityFilter>()?,
        None => SeverityFilter::All,
    };
    let view = state.feed.lock().await.view(filter);
    let empty_state = view.empty_state().map(|kind| EmptyNotice {
        kind,
        title: kind.title(),
        message: kind.message(),
    });
    Ok(Json(FeedResponse { view, empty_state }))
}

pub async fn submit_incident(
    State(state): State<AppState>,
    Json(report): Json<NewReport>,
) -> Result<impl IntoResponse, ApiError> {
    let mut form = IntakeForm::new(report.description);
    // A missing description is reported ahead of a bad photo.
    form.validate()?;
    if let Some(url) = report.photo.as_deref() {
        form.attach_photo(Photo::from_data_url(url)?);
    }
    if report.location.is_some() || report.location_error.is_some() {
        let position = ReportedPosition {
            location: report.location,
            error: report.location_error,
        };
        form.capture_location(&position).await;
    }
    debug!("report received");
    let incident = state.intake.submit(&form, &state.feed).await?;
    let body = Submitted {
        incident,
        location_error: form.location_error().map(str::to_string),
    };
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn current_tip(State(state): State<AppState>) -> impl IntoResponse {
    Json(TipResponse {
        tip: state.tips.current(),
        loading: state.tips.is_loading(),
    })
}

pub async fn refresh_tip(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let tip = state.tips.refresh().await.ok_or(ApiError::TipLoading)?;
    Ok(Json(TipResponse {
        tip,
        loading: false,
    }))
}

pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let incidents = state.feed.lock().await.len();
    Json(Status {
        submitting: state.intake.is_submitting(),
        tip_loading: state.tips.is_loading(),
        incidents,
    })
}

pub async fn filters() -> impl IntoResponse {
    let choices: Vec<FilterChoice> = SeverityFilter::choices()
        .into_iter()
        .map(|value| FilterChoice {
            label: capitalize(&value.to_string()),
            value,
        })
        .collect();
    Json(choices)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Load a first safety tip in the background.
pub fn spawn_initial_tip(state: &AppState) {
    let tips = state.tips.clone();
    tokio::spawn(async move {
        if tips.refresh().await.is_some() {
            info!("initial safety tip loaded");
        }
    });
}

/// Build the application router with the provided state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/incidents", get(list_incidents).post(submit_incident))
        .route("/api/tip", get(current_tip))
        .route("/api/tip/refresh", post(refresh_tip))
        .route("/api/status", get(status))
        .route("/api/filters", get(filters))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalizes_filter_labels() {
        assert_eq!(capitalize("all"), "All");
        assert_eq!(capitalize("High"), "High");
        assert_eq!(capitalize(""), "");
    }
}
