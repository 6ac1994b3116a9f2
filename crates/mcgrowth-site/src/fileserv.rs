//! Static file fallback for the axum server.
//!
//! Requests that miss every Leptos route are tried against the site root
//! (the cargo-leptos output directory); anything else renders the error
//! template with a 404.

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use leptos::*;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::error::{AppError, ErrorTemplate};

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();
    match get_static_file(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        _ => {
            let mut errors = Errors::default();
            errors.insert_with_default_key(AppError::NotFound);
            let handler = leptos_axum::render_app_to_stream(
                options.to_owned(),
                move || view! { <ErrorTemplate outside_errors=errors.clone()/> },
            );
            handler(req).await.into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("error serving files: {err}"),
        )),
    }
}
