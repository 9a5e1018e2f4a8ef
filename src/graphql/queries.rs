//! GraphQL documents sent to the catalog

use serde::Serialize;
use serde_json::{json, Value};

pub const PROBLEM_BY_SLUG_QUERY: &str = r#"query questionData($titleSlug: String!) {
  questionData: question(titleSlug: $titleSlug) {
    questionId
    title
    titleSlug
    content
    exampleTestcases
    codeSnippets {
      langSlug
      code
    }
    isPaidOnly
    canSeeQuestion
    difficulty
    categoryTitle
    hints
    metaData
    stats
    envInfo
  }
}
"#;

pub const TOTAL_PROBLEMS_QUERY: &str = r#"query problemsetQuestionList($categorySlug: String, $filters: QuestionListFilterInput) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    filters: $filters
  ) {
    total: totalNum
  }
}
"#;

pub const PROBLEM_LIST_QUERY: &str = r#"query problemsetQuestionList($categorySlug: String, $filters: QuestionListFilterInput, $limit: Int) {
  problemsetQuestionList: questionList(
    categorySlug: $categorySlug
    filters: $filters
    limit: $limit
  ) {
    questions: data {
      title
      titleSlug
      frontendQuestionId: questionFrontendId
    }
  }
}
"#;

pub const DAILY_PROBLEM_QUERY: &str = r#"query questionOfToday {
  activeDailyCodingChallengeQuestion {
    question {
      titleSlug
    }
  }
}
"#;

// == Query Body ==
/// JSON body of a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn problem_by_slug(slug: &str) -> Self {
        Self {
            query: PROBLEM_BY_SLUG_QUERY,
            variables: json!({ "titleSlug": slug }),
        }
    }

    pub fn total_problems() -> Self {
        Self {
            query: TOTAL_PROBLEMS_QUERY,
            variables: json!({ "categorySlug": "", "filters": {} }),
        }
    }

    pub fn problem_list(limit: usize) -> Self {
        Self {
            query: PROBLEM_LIST_QUERY,
            variables: json!({ "categorySlug": "", "filters": {}, "limit": limit }),
        }
    }

    pub fn daily_problem() -> Self {
        Self {
            query: DAILY_PROBLEM_QUERY,
            variables: json!({}),
        }
    }
}
