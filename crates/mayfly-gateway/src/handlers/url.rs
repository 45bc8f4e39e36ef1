use crate::error::Result;
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use crate::validate;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use mayfly_shortener::CreateParams;

pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    // The store assumes validated input; reject malformed requests here.
    validate::validate_request(&request)?;

    let link = state
        .store()
        .create(CreateParams {
            original_url: request.url,
            expire_at: request.custom_expiry,
        })
        .await?;

    Ok(Json(ShortenResponse {
        short_url: link.code.to_url(state.base_url()),
        short_code: link.code.to_string(),
        original_url: link.original_url,
        created_at: link.created_at,
        expire_at: link.expire_at,
    }))
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let url = state.store().resolve(&code).await?;

    // 301 by hand: axum's `Redirect` only offers 303/307/308.
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, url)]).into_response())
}
