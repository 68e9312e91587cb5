use axum::{
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use router::{View, ROUTES};

use crate::ApiError;

/// Paths the table resolves but axum did not match (trailing slash)
/// redirect to their canonical form; everything else is a 404.
pub(super) async fn fallback(uri: Uri) -> Response {
    let resolved = ROUTES.resolve(uri.path());
    if resolved.view != View::NotFound {
        let params: Vec<_> = resolved.params.iter().collect();
        if let Ok(href) = ROUTES.href(resolved.view, &params) {
            if href != uri.path() {
                let location = match uri.query() {
                    Some(query) => format!("{href}?{query}"),
                    None => href,
                };
                return Redirect::permanent(&location).into_response();
            }
        }
    }

    ApiError::NotFound(format!("no page at {}", uri.path())).into_response()
}
