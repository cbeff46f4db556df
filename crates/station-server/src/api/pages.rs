use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;
use station_seo::{PageHead, PageKind};

use super::{map_seo_error, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub struct PageSummaryItem {
    pub slug: String,
    pub path: String,
    pub kind: String,
    /// True when the configured structured-data tag was not recognized.
    pub fallback: bool,
}

pub(super) async fn list_pages(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let items: Vec<PageSummaryItem> = state
        .builder
        .site()
        .pages
        .iter()
        .map(|page| {
            let resolution = PageKind::resolve(&page.structured_data);
            PageSummaryItem {
                slug: page.slug.clone(),
                path: page.path.clone(),
                kind: resolution.kind().to_string(),
                fallback: resolution.is_fallback(),
            }
        })
        .collect();

    Json(ApiResponse {
        data: items,
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn get_page_head(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Response {
    let head = match PageHead::for_slug(&state.builder, &state.settings, &slug) {
        Ok(head) => head,
        Err(e) => return map_seo_error(req_id.0, &e).into_response(),
    };
    let html = match head.render() {
        Ok(html) => html,
        Err(e) => return map_seo_error(req_id.0, &e).into_response(),
    };

    let mut res = (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        )],
        html,
    )
        .into_response();
    if let Ok(language) = HeaderValue::from_str(&head.metadata.language) {
        res.headers_mut().insert(header::CONTENT_LANGUAGE, language);
    }
    res
}
