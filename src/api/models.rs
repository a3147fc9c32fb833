use serde::{Deserialize, Serialize};

use crate::search::SourceItem;

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub sources: Vec<SourceItem>,
    pub openai_analysis: String,
}
