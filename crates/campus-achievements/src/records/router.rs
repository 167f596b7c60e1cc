use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AchievementId, AchievementStatus, NewAchievement, StudentId};
use super::filter::RecordFilter;
use super::repository::{AchievementRepository, RepositoryError};
use super::review::ReviewError;
use super::service::{AchievementService, AchievementServiceError};
use crate::analytics::{leaderboard, AnalyticsSummary, DashboardSummary, StudentPortfolio};
use crate::notifications::NotificationFilter;

/// Router exposing submission, review, reporting and notification endpoints.
pub fn achievement_router<R>(service: Arc<AchievementService<R>>) -> Router
where
    R: AchievementRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/achievements",
            get(list_handler::<R>).post(submit_handler::<R>),
        )
        .route("/api/v1/achievements/:id", get(detail_handler::<R>))
        .route(
            "/api/v1/achievements/:id/approve",
            post(approve_handler::<R>),
        )
        .route("/api/v1/achievements/:id/reject", post(reject_handler::<R>))
        .route("/api/v1/leaderboard", get(leaderboard_handler::<R>))
        .route("/api/v1/dashboard", get(dashboard_handler::<R>))
        .route("/api/v1/analytics", get(analytics_handler::<R>))
        .route(
            "/api/v1/students/:student_id/portfolio",
            get(portfolio_handler::<R>),
        )
        .route("/api/v1/notifications", get(notifications_handler::<R>))
        .route(
            "/api/v1/notifications/read-all",
            post(mark_all_read_handler::<R>),
        )
        .route(
            "/api/v1/notifications/:id/read",
            post(mark_read_handler::<R>),
        )
        .route(
            "/api/v1/notifications/:id",
            delete(dismiss_handler::<R>),
        )
        .with_state(service)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    let payload = json!({ "error": message.into() });
    (status, axum::Json(payload)).into_response()
}

/// HTTP status for a workflow failure, shared with [`crate::error::AppError`].
pub(crate) fn service_error_status(error: &AchievementServiceError) -> StatusCode {
    match error {
        AchievementServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AchievementServiceError::Review(ReviewError::AlreadyFinalized { .. }) => {
            StatusCode::CONFLICT
        }
        AchievementServiceError::Review(ReviewError::InvalidTarget(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AchievementServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AchievementServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AchievementServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn service_error_response(error: AchievementServiceError) -> Response {
    error_body(service_error_status(&error), error.to_string())
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Query(filter): Query<RecordFilter>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    match service.list(&filter) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    axum::Json(submission): axum::Json<NewAchievement>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    match service.submit(submission, today()) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    match service.get(&AchievementId(id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
struct ApprovalRequest {
    #[serde(default)]
    reviewer: Option<String>,
}

pub(crate) async fn approve_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response
where
    R: AchievementRepository + 'static,
{
    // The body is optional; an empty request approves as the default reviewer.
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        ApprovalRequest::default()
    } else {
        match serde_json::from_slice::<ApprovalRequest>(&body) {
            Ok(request) => request,
            Err(error) => return error_body(StatusCode::BAD_REQUEST, error.to_string()),
        }
    };

    match service.transition(
        &AchievementId(id),
        AchievementStatus::Approved,
        request.reviewer.as_deref(),
        today(),
    ) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn reject_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    match service.transition(
        &AchievementId(id),
        AchievementStatus::Rejected,
        None,
        today(),
    ) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LeaderboardQuery {
    #[serde(default)]
    limit: Option<usize>,
}

pub(crate) async fn leaderboard_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Query(query): Query<LeaderboardQuery>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    let limit = query
        .limit
        .unwrap_or(service.config().leaderboard_limit);
    match service.snapshot() {
        Ok(records) => (StatusCode::OK, axum::Json(leaderboard(&records, limit))).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    match service.snapshot() {
        Ok(records) => {
            let summary = DashboardSummary::build(&records);
            (StatusCode::OK, axum::Json(summary)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyticsQuery {
    #[serde(default)]
    year: Option<i32>,
}

pub(crate) async fn analytics_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Query(query): Query<AnalyticsQuery>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    let year = query.year.unwrap_or_else(|| today().year());
    match service.snapshot() {
        Ok(records) => {
            let summary = AnalyticsSummary::build(&records, year);
            (StatusCode::OK, axum::Json(summary)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn portfolio_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    let records = match service.snapshot() {
        Ok(records) => records,
        Err(error) => return service_error_response(error),
    };

    match StudentPortfolio::build(&records, &StudentId(student_id.clone())) {
        Some(portfolio) => (StatusCode::OK, axum::Json(portfolio)).into_response(),
        None => error_body(
            StatusCode::NOT_FOUND,
            format!("no achievements recorded for student {student_id}"),
        ),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NotificationQuery {
    #[serde(default)]
    filter: Option<String>,
}

pub(crate) async fn notifications_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Query(query): Query<NotificationQuery>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    let raw = query.filter.unwrap_or_default();
    let Some(filter) = NotificationFilter::parse(&raw) else {
        return error_body(
            StatusCode::BAD_REQUEST,
            format!("unknown notification filter '{raw}'"),
        );
    };

    match service.notifications() {
        Ok(feed) => {
            let payload = json!({
                "unreadCount": feed.unread_count(),
                "items": feed.filter(filter),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn mark_read_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    match service.mark_notification_read(&id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_body(
            StatusCode::NOT_FOUND,
            format!("notification {id} not found"),
        ),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn mark_all_read_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    match service.mark_all_notifications_read() {
        Ok(marked) => (StatusCode::OK, axum::Json(json!({ "marked": marked }))).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn dismiss_handler<R>(
    State(service): State<Arc<AchievementService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: AchievementRepository + 'static,
{
    match service.dismiss_notification(&id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_body(
            StatusCode::NOT_FOUND,
            format!("notification {id} not found"),
        ),
        Err(error) => service_error_response(error),
    }
}
