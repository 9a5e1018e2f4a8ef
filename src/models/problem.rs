//! Resolved problem model
//!
//! The immutable snapshot handed to callers and stored in the cache.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ApiError;
use crate::graphql::wire::ProblemData;

/// A catalog problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Problem {
    /// Frontend (display) ID
    pub id: u32,
    pub title: String,
    pub title_slug: String,

    pub meta_data: MetaData,
    /// Language slug to code template
    pub code_snippets: HashMap<String, String>,
    pub stats: Stats,
    /// Language slug to environment description
    pub env_info: HashMap<String, String>,
    /// Problem statement (HTML)
    pub content: String,
    pub example_testcases: String,

    pub is_paid_only: bool,
    pub can_see_question: bool,
    pub difficulty: String,
    pub category_title: String,
    pub hints: Vec<String>,
}

/// Signature of the function a solution implements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetaData {
    pub function_name: String,
    pub input_parameters: Vec<Parameter>,
    pub return_parameter: Parameter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total_accepted: u64,
    pub total_submissions: u64,
}

impl TryFrom<ProblemData> for Problem {
    type Error = ApiError;

    /// Converts a decoded wire problem, rejecting malformed IDs and
    /// environment entries.
    fn try_from(data: ProblemData) -> Result<Self, Self::Error> {
        let id = data
            .id
            .trim()
            .parse::<u32>()
            .map_err(|_| ApiError::Validation(format!("invalid id string: {}", data.id)))?;

        // Each entry is [display name, description]
        let mut env_info = HashMap::with_capacity(data.env_info.len());
        for (lang_slug, mut env) in data.env_info {
            if env.len() < 2 {
                return Err(ApiError::Validation(format!(
                    "invalid env info for {}: {:?}",
                    lang_slug, env
                )));
            }
            env_info.insert(lang_slug, env.swap_remove(1));
        }

        let code_snippets = data
            .code_snippets
            .unwrap_or_default()
            .into_iter()
            .map(|snippet| (snippet.lang_slug, snippet.code))
            .collect();

        let meta_data = MetaData {
            function_name: data.meta_data.name,
            input_parameters: data
                .meta_data
                .params
                .into_iter()
                .map(|p| Parameter {
                    name: p.name,
                    kind: p.kind,
                })
                .collect(),
            return_parameter: Parameter {
                name: data.meta_data.return_param.name,
                kind: data.meta_data.return_param.kind,
            },
        };

        Ok(Problem {
            id,
            title: data.title,
            title_slug: data.title_slug,
            meta_data,
            code_snippets,
            stats: Stats {
                total_accepted: data.stats.total_accepted_raw,
                total_submissions: data.stats.total_submission_raw,
            },
            env_info,
            content: data.content.unwrap_or_default(),
            example_testcases: data.example_testcases.unwrap_or_default(),
            is_paid_only: data.is_paid_only,
            can_see_question: data.can_see_question,
            difficulty: data.difficulty.unwrap_or_default(),
            category_title: data.category_title.unwrap_or_default(),
            hints: data.hints.unwrap_or_default(),
        })
    }
}
