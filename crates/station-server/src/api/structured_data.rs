use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension,
};
use station_seo::{to_json, JsonStyle, KindResolution, PageKind, Resolved};

use super::{map_seo_error, ApiError, AppState};
use crate::middleware::RequestId;

pub(super) const FALLBACK_HEADER: &str = "x-structured-data-fallback";
pub(super) const JSON_LD_CONTENT_TYPE: &str = "application/ld+json";

pub(super) async fn get_structured_data(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(kind): Path<String>,
) -> Response {
    let resolved = if state.strict_page_kinds {
        match kind.parse::<PageKind>() {
            Ok(kind) => Resolved {
                value: state.builder.build(kind),
                resolution: KindResolution::Exact(kind),
            },
            Err(e) => {
                tracing::info!(requested = %kind, "rejecting unknown page kind in strict mode");
                return ApiError::new(req_id.0, "not_found", e.to_string()).into_response();
            }
        }
    } else {
        state.builder.build_for_tag(&kind)
    };

    let body = match to_json(&resolved.value, JsonStyle::Pretty) {
        Ok(body) => body,
        Err(e) => return map_seo_error(req_id.0, &e).into_response(),
    };

    let mut res = (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_LD_CONTENT_TYPE),
        )],
        body,
    )
        .into_response();

    if resolved.resolution.is_fallback() {
        res.headers_mut()
            .insert(FALLBACK_HEADER, HeaderValue::from_static("true"));
    }

    res
}
