use axum::{
    routing::post,
    Router,
    extract::{Json, State},
};
use tower_http::cors::{CorsLayer, Any};
use tracing::{info, warn};

use crate::error::Result;
use crate::api::models::{VerifyRequest, VerifyResponse};
use crate::extract::looks_like_url;
use crate::prompt::build_prompt;
use crate::search::{dedup_by_url, SourceItem};
use crate::AppState;

const DIRECT_SOURCE_TITLE: &str = "Fuente directa proporcionada por el usuario";

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/verify", post(verify_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn verify_handler(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>> {
    process_verify_request(&state, &req).await.map(Json)
}

/// Orchestrates a single verification: classify the input, derive the claim
/// text, gather candidate sources, and ask the model for a verdict.
pub async fn process_verify_request(
    state: &AppState,
    req: &VerifyRequest,
) -> Result<VerifyResponse> {
    let query = req.text.trim().to_string();
    info!(chars = query.len(), "processing verification request");

    let mut sources: Vec<SourceItem> = Vec::new();
    let claim_text: String;

    if looks_like_url(&query) {
        // The link itself always counts as a source, whether or not the
        // page yields usable text.
        sources.push(SourceItem {
            title: DIRECT_SOURCE_TITLE.to_string(),
            url: query.clone(),
        });

        match state.extractor.extract(&query).await {
            Some(text) => {
                info!(chars = text.len(), "extracted article text from link");
                claim_text = text;
            }
            None => {
                warn!(url = %query, "extraction yielded nothing, using the raw link as claim text");
                claim_text = query.clone();
            }
        }
    } else {
        claim_text = query.clone();
    }

    // Sequential, GNews before NewsAPI; a failed provider contributes an
    // empty list instead of failing the request.
    for provider in &state.search_providers {
        match provider.search(&claim_text).await {
            Ok(items) => {
                info!(provider = provider.name(), count = items.len(), "search results");
                sources.extend(items);
            }
            Err(e) => {
                warn!(provider = provider.name(), error = %e, "search provider failed, continuing without it");
            }
        }
    }

    let sources = dedup_by_url(sources);

    let prompt = build_prompt(&claim_text, &sources);
    let analysis = state.judge.judge(&prompt).await?;

    info!(sources = sources.len(), "verification complete");
    Ok(VerifyResponse {
        sources,
        openai_analysis: analysis,
    })
}
