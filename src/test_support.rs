//! Scripted transport and canned catalog responses for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Which catalog call a request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Route {
    Landing,
    ProblemBySlug,
    TotalCount,
    ProblemList,
    Daily,
}

impl Route {
    fn of(request: &ApiRequest) -> Route {
        if request.method == Method::Get {
            return Route::Landing;
        }
        let body = request
            .body
            .as_deref()
            .map(String::from_utf8_lossy)
            .unwrap_or_default();

        if body.contains("questionOfToday") {
            Route::Daily
        } else if body.contains("questionData") {
            Route::ProblemBySlug
        } else if body.contains("totalNum") {
            Route::TotalCount
        } else {
            Route::ProblemList
        }
    }
}

/// Answers each route with a fixed response and records every request.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    routes: Mutex<HashMap<Route, Result<ApiResponse, String>>>,
    calls: Mutex<Vec<(Route, ApiRequest)>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, route: Route, response: ApiResponse) {
        self.routes.lock().unwrap().insert(route, Ok(response));
    }

    pub(crate) fn fail(&self, route: Route, message: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(route, Err(message.to_string()));
    }

    pub(crate) fn count(&self, route: Route) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == route)
            .count()
    }

    pub(crate) fn last(&self, route: Route) -> Option<ApiRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(r, _)| *r == route)
            .map(|(_, req)| req.clone())
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let route = Route::of(&request);
        self.calls.lock().unwrap().push((route, request));

        match self.routes.lock().unwrap().get(&route) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(ApiError::Transport(message.clone())),
            None => Err(ApiError::Transport(format!("no response scripted for {:?}", route))),
        }
    }
}

fn data(value: serde_json::Value) -> ApiResponse {
    ApiResponse::new(200, json!({ "data": value }).to_string())
        .with_header("content-type", "application/json")
}

pub(crate) fn landing_response(token: &str) -> ApiResponse {
    ApiResponse::new(200, "<html></html>").with_header(
        "set-cookie",
        format!("csrftoken={}; Max-Age=31449600; Path=/; SameSite=Lax", token),
    )
}

pub(crate) fn problem_response(id: u32, title: &str, slug: &str) -> ApiResponse {
    data(json!({
        "questionData": {
            "questionId": id.to_string(),
            "title": title,
            "titleSlug": slug,
            "content": "<p>statement</p>",
            "codeSnippets": [{ "langSlug": "golang", "code": "func solve() {}" }],
            "isPaidOnly": false,
            "canSeeQuestion": true,
            "difficulty": "Easy",
            "categoryTitle": "Algorithms",
            "hints": [],
            "metaData": "{\"name\":\"solve\",\"params\":[],\"return\":{\"type\":\"integer\"}}",
            "stats": "{\"totalAcceptedRaw\":10,\"totalSubmissionRaw\":20}",
            "envInfo": "{\"golang\":[\"Go\",\"Go 1.21\"]}"
        }
    }))
}

pub(crate) fn total_response(total: usize) -> ApiResponse {
    data(json!({ "problemsetQuestionList": { "total": total } }))
}

pub(crate) fn list_response(problems: &[(u32, &str, &str)]) -> ApiResponse {
    let questions: Vec<_> = problems
        .iter()
        .map(|(id, title, slug)| {
            json!({ "title": title, "titleSlug": slug, "frontendQuestionId": id.to_string() })
        })
        .collect();
    data(json!({ "problemsetQuestionList": { "questions": questions } }))
}

pub(crate) fn daily_response(slug: &str) -> ApiResponse {
    data(json!({
        "activeDailyCodingChallengeQuestion": { "question": { "titleSlug": slug } }
    }))
}
