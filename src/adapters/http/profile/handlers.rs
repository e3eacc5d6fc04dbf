//! HTTP handlers for profile endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::{GetProfileHandler, GetProfileQuery};
use crate::domain::foundation::UserId;
use crate::domain::intake::Locale;

use super::dto::{ProfileQueryParams, ProfileResponse};

#[derive(Clone)]
pub struct ProfileHandlers {
    get_handler: Arc<GetProfileHandler>,
}

impl ProfileHandlers {
    pub fn new(get_handler: Arc<GetProfileHandler>) -> Self {
        Self { get_handler }
    }
}

/// GET /api/profiles/:user_id - Last known slots and full history
pub async fn get_profile(
    State(handlers): State<ProfileHandlers>,
    Path(user_id): Path<String>,
    Query(params): Query<ProfileQueryParams>,
) -> Response {
    let locale = Locale::from_tag(params.locale.as_deref());

    let Ok(user_id) = UserId::new(user_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::profile_not_found(locale)),
        )
            .into_response();
    };

    match handlers.get_handler.handle(GetProfileQuery { user_id }).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => domain_error_response(&e, locale),
    }
}
