use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use crate::{
    error::ApiError,
    models::{
        BrowseQuery, BrowseResponse, LookupQuery, RelationshipsQuery, ResolveRequest,
        ResolveResponse, SearchQuery,
    },
    query::{
        by_generation, find_by_english, generation_tabs, grouped_buttons, record_view, search,
    },
    resolver::PathResolution,
    view::{CalculatorMsg, CalculatorView, SearchMsg, SearchView},
    AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/relationships", get(list_relationships))
        .route("/v1/relationships/search", get(search_relationships))
        .route("/v1/relationships/lookup", get(lookup_relationship))
        .route("/v1/browse", get(browse))
        .route("/v1/generations", get(list_generations))
        .route("/v1/calculator/buttons", get(calculator_buttons))
        .route("/v1/resolve", post(resolve))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn healthz(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "timestamp": Utc::now(),
        "records": state.catalog.len(),
    }))
}

pub async fn list_relationships(
    State(state): State<AppState>,
    Query(params): Query<RelationshipsQuery>,
) -> impl IntoResponse {
    let records = match params.generation {
        Some(generation) => by_generation(&state.catalog, generation),
        None => state.catalog.iter().collect(),
    };
    debug!(generation = ?params.generation, hits = records.len(), "Listed relationships");
    let views: Vec<_> = records.into_iter().map(record_view).collect();
    Json(views)
}

fn check_query_len(state: &AppState, query: &str) -> Result<(), ApiError> {
    let len = query.chars().count();
    if len > state.config.max_query_len {
        return Err(ApiError::InvalidArgument(format!(
            "Query is {len} characters, limit is {}",
            state.config.max_query_len
        )));
    }
    Ok(())
}

pub async fn search_relationships(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    check_query_len(&state, &params.q)?;
    let hits = search(&state.catalog, &params.q);
    debug!(query = %params.q, hits = hits.len(), "Searched relationships");
    let views: Vec<_> = hits.into_iter().map(record_view).collect();
    Ok(Json(views))
}

pub async fn lookup_relationship(
    State(state): State<AppState>,
    Query(params): Query<LookupQuery>,
) -> Result<impl IntoResponse, ApiError> {
    check_query_len(&state, &params.english)?;
    let Some(record) = find_by_english(&state.catalog, &params.english) else {
        return Err(ApiError::NotFound(format!(
            "No relationship label contains \"{}\"",
            params.english
        )));
    };
    Ok(Json(record_view(record)))
}

pub async fn browse(
    State(state): State<AppState>,
    Query(params): Query<BrowseQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let mut view = SearchView::new(state.config.default_generation);
    if let Some(generation) = params.generation {
        view = view.update(SearchMsg::SelectGeneration(generation));
    }
    if let Some(query) = params.q {
        check_query_len(&state, &query)?;
        view = view.update(SearchMsg::SetQuery(query));
    }

    let results: Vec<_> = view
        .results(&state.catalog)
        .into_iter()
        .map(record_view)
        .collect();

    Ok(Json(BrowseResponse {
        query: view.query().to_string(),
        selected_generation: view.selected_generation(),
        results,
    }))
}

pub async fn list_generations(State(state): State<AppState>) -> impl IntoResponse {
    Json(generation_tabs(&state.catalog))
}

pub async fn calculator_buttons(State(state): State<AppState>) -> impl IntoResponse {
    let groups = grouped_buttons(&state.catalog);
    for group in &groups {
        debug!(
            category = group.category.as_str(),
            buttons = group.buttons.len(),
            "Calculator group"
        );
    }
    Json(groups)
}

pub async fn resolve(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.path.len() > state.config.max_path_len {
        return Err(ApiError::InvalidArgument(format!(
            "Path has {} relations, limit is {}",
            payload.path.len(),
            state.config.max_path_len
        )));
    }

    let view = payload
        .path
        .into_iter()
        .fold(CalculatorView::default(), |view, label| {
            view.update(CalculatorMsg::AddRelation(label))
        });

    let response = match view.resolution(&state.catalog) {
        PathResolution::NoSelection => (StatusCode::OK, Json(ResolveResponse::NoSelection)),
        PathResolution::Found {
            search_term,
            tier,
            record,
        } => {
            debug!(search_term = %search_term, tier = ?tier, "Resolved relationship path");
            (
                StatusCode::OK,
                Json(ResolveResponse::Found {
                    search_term,
                    tier,
                    record: record_view(record),
                }),
            )
        }
        PathResolution::NotFound { search_term } => {
            debug!(search_term = %search_term, "No term for relationship path");
            let message = view
                .message(&state.catalog)
                .unwrap_or_else(|| PathResolution::not_found_message(&search_term));
            (
                StatusCode::NOT_FOUND,
                Json(ResolveResponse::NotFound {
                    search_term,
                    message,
                }),
            )
        }
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::{catalog::Catalog, config::Config, resolver::resolve_path};

    fn app() -> Router {
        router(AppState {
            config: Config::default(),
            catalog: Catalog::builtin(),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_resolve(body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method("POST")
                .uri("/v1/resolve")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn healthz_reports_catalog_size() {
        let (status, body) = get_json("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        assert_eq!(body["records"], 96);
    }

    #[tokio::test]
    async fn lists_by_generation_with_categories() {
        let (status, body) = get_json("/v1/relationships?generation=2").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["englishLabel"], "Paternal grandfather");
        assert_eq!(items[0]["standardTerm"], "爺爺");
        assert_eq!(items[0]["romanization"], "ye4 ye4");
        assert_eq!(items[0]["generationOffset"], 2);
        assert_eq!(items[0]["category"], "Extended Family");
        assert_eq!(items[0]["generationCaption"], "2 generations above you");
        assert!(items[0].get("colloquialTerm").is_none());
    }

    #[tokio::test]
    async fn lists_full_catalog_without_generation() {
        let (_, body) = get_json("/v1/relationships").await;
        assert_eq!(body.as_array().unwrap().len(), 96);
    }

    #[tokio::test]
    async fn rejects_unparsable_generation() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/v1/relationships?generation=up")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_endpoint_matches_substrings() {
        let (status, body) = get_json("/v1/relationships/search?q=biu2%20hing1").await;
        assert_eq!(status, StatusCode::OK);
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item["category"] == "Cousins"));
    }

    #[tokio::test]
    async fn search_endpoint_limits_query_length() {
        let long = "a".repeat(300);
        let (status, body) = get_json(&format!("/v1/relationships/search?q={long}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
        assert!(body["error"]["traceId"].is_string());
    }

    #[tokio::test]
    async fn lookup_finds_first_containing_label() {
        let (status, body) = get_json("/v1/relationships/lookup?english=son-in").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["englishLabel"], "Son-in-law");
        assert_eq!(body["standardTerm"], "女婿");

        let (status, body) = get_json("/v1/relationships/lookup?english=godmother").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn browse_applies_view_policy() {
        let (_, body) = get_json("/v1/browse").await;
        assert_eq!(body["selectedGeneration"], 1);
        assert_eq!(body["results"].as_array().unwrap().len(), 16);

        let (_, body) = get_json("/v1/browse?generation=-1&q=niece").await;
        assert_eq!(body["selectedGeneration"], Value::Null);
        assert_eq!(body["query"], "niece");
        assert_eq!(body["results"].as_array().unwrap().len(), 2);

        let (_, body) = get_json("/v1/browse?generation=0&q=%20").await;
        assert_eq!(body["selectedGeneration"], 0);
        assert_eq!(body["results"].as_array().unwrap().len(), 44);
    }

    #[tokio::test]
    async fn generations_endpoint_lists_tabs() {
        let (_, body) = get_json("/v1/generations").await;
        let tabs = body.as_array().unwrap();
        assert_eq!(tabs.len(), 7);
        assert_eq!(tabs[6]["label"], "+3 Generations Above");
        assert_eq!(tabs[3]["recordCount"], 44);
    }

    #[tokio::test]
    async fn calculator_buttons_are_grouped() {
        let (_, body) = get_json("/v1/calculator/buttons").await;
        let groups = body.as_array().unwrap();
        assert_eq!(groups[0]["category"], "Immediate Family");
        assert_eq!(groups[0]["buttons"][0]["label"], "Father (爸爸)");
        assert_eq!(groups[0]["buttons"][0]["key"], "father");
        assert_eq!(groups[3]["category"], "Cousins");
    }

    #[tokio::test]
    async fn resolve_empty_path_is_no_selection() {
        let (status, body) = post_resolve(json!({ "path": [] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "no_selection" }));
    }

    #[tokio::test]
    async fn resolve_reports_tier_and_record() {
        let (status, body) = post_resolve(json!({ "path": ["Father", "Father"] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "found");
        assert_eq!(body["searchTerm"], "Father's Father");
        assert_eq!(body["tier"], "exact_notes");
        assert_eq!(body["record"]["standardTerm"], "爺爺");

        let (_, body) = post_resolve(json!({ "path": ["Father", "Brother"] })).await;
        assert_eq!(body["tier"], "first_substring_hit");
        assert_eq!(
            body["record"]["englishLabel"],
            "Elder male cousin (father's brother's son)"
        );
    }

    #[tokio::test]
    async fn resolve_not_found_carries_search_term() {
        let (status, body) = post_resolve(json!({ "path": ["NonexistentRelation"] })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "not_found");
        assert_eq!(body["searchTerm"], "NonexistentRelation");
        assert_eq!(
            body["message"],
            "No term found for this relationship: NonexistentRelation"
        );
    }

    #[tokio::test]
    async fn resolve_rejects_oversized_paths() {
        let path: Vec<&str> = std::iter::repeat("Father").take(17).collect();
        let (status, body) = post_resolve(json!({ "path": path })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn resolve_blank_label_matches_core_resolution() {
        let expected = match resolve_path(&Catalog::builtin(), &[" "]) {
            PathResolution::Found { record, .. } => record.english_label,
            other => panic!("unexpected {other:?}"),
        };

        let (status, body) = post_resolve(json!({ "path": [" "] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "found");
        assert_eq!(body["searchTerm"], " ");
        assert_eq!(body["tier"], "first_substring_hit");
        assert_eq!(body["record"]["englishLabel"], expected);
        assert_eq!(expected, "Paternal grandfather");
    }
}
