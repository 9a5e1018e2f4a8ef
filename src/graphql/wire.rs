//! Wire shapes returned inside the GraphQL `data` field

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

// == Problem By Slug ==
#[derive(Debug, Deserialize)]
pub struct ProblemDataWrapper {
    #[serde(rename = "questionData")]
    pub question: Option<ProblemData>,
}

/// A problem as the catalog encodes it.
///
/// `metaData`, `stats` and `envInfo` arrive as JSON documents inside
/// strings; [`ProblemData::decode_embedded`] runs the second pass.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemData {
    #[serde(rename = "questionId")]
    pub id: String,
    pub title: String,
    pub title_slug: String,
    pub content: Option<String>,
    pub example_testcases: Option<String>,
    pub code_snippets: Option<Vec<CodeSnippet>>,
    pub is_paid_only: bool,
    pub can_see_question: bool,
    pub difficulty: Option<String>,
    pub category_title: Option<String>,
    pub hints: Option<Vec<String>>,

    #[serde(rename = "metaData")]
    pub meta_data_raw: Option<String>,
    #[serde(rename = "stats")]
    pub stats_raw: Option<String>,
    #[serde(rename = "envInfo")]
    pub env_info_raw: Option<String>,

    #[serde(skip)]
    pub meta_data: WireMetaData,
    #[serde(skip)]
    pub stats: WireStats,
    #[serde(skip)]
    pub env_info: EnvInfo,
}

impl ProblemData {
    /// Decodes the string-embedded sub-documents into their typed fields.
    ///
    /// Absent or empty raw strings leave the defaults in place. A document
    /// that does not decode is a validation error naming its field.
    pub fn decode_embedded(&mut self) -> Result<(), ApiError> {
        if let Some(raw) = non_empty(&self.meta_data_raw) {
            self.meta_data = decode_field("metaData", raw)?;
        }
        if let Some(raw) = non_empty(&self.stats_raw) {
            self.stats = decode_field("stats", raw)?;
        }
        if let Some(raw) = non_empty(&self.env_info_raw) {
            self.env_info = decode_field("envInfo", raw)?;
        }
        Ok(())
    }
}

fn decode_field<T: DeserializeOwned>(field: &str, raw: &str) -> Result<T, ApiError> {
    serde_json::from_str(raw)
        .map_err(|e| ApiError::Validation(format!("invalid {}: {}", field, e)))
}

fn non_empty(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeSnippet {
    pub lang_slug: String,
    pub code: String,
}

/// Function signature data
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireMetaData {
    pub name: String,
    pub params: Vec<WireParameter>,
    #[serde(rename = "return")]
    pub return_param: WireParameter,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireStats {
    #[serde(rename = "totalAcceptedRaw")]
    pub total_accepted_raw: u64,
    #[serde(rename = "totalSubmissionRaw")]
    pub total_submission_raw: u64,
}

/// Language slug to `[display name, environment description]`.
pub type EnvInfo = HashMap<String, Vec<String>>;

// == Catalog Size ==
#[derive(Debug, Deserialize)]
pub struct TotalProblemsData {
    #[serde(rename = "problemsetQuestionList")]
    pub question_list: TotalNum,
}

#[derive(Debug, Deserialize)]
pub struct TotalNum {
    pub total: usize,
}

// == Problem List ==
#[derive(Debug, Deserialize)]
pub struct ProblemListData {
    #[serde(rename = "problemsetQuestionList")]
    pub question_list: ProblemReferenceList,
}

#[derive(Debug, Deserialize)]
pub struct ProblemReferenceList {
    #[serde(default)]
    pub questions: Vec<ProblemReference>,
}

/// One row of the catalog listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemReference {
    pub title: String,
    #[serde(rename = "titleSlug")]
    pub title_slug: String,
    #[serde(rename = "frontendQuestionId", alias = "questionFrontendId")]
    pub id: String,
}

// == Daily Problem ==
#[derive(Debug, Deserialize)]
pub struct DailyChallengeData {
    #[serde(rename = "activeDailyCodingChallengeQuestion")]
    pub challenge: Option<DailyChallenge>,
}

#[derive(Debug, Deserialize)]
pub struct DailyChallenge {
    pub question: DailyQuestion,
}

#[derive(Debug, Deserialize)]
pub struct DailyQuestion {
    #[serde(rename = "titleSlug")]
    pub title_slug: String,
}
