//! Shared wiremock fixtures standing in for the remote catalog.

#![allow(dead_code)]

use problem_catalog::{CatalogClient, Config};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "integration-token";

pub fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(Config::default().with_base_url(server.uri()))
        .expect("client should build")
}

pub fn problem_json(id: u32, title: &str, slug: &str) -> Value {
    json!({
        "data": {
            "questionData": {
                "questionId": id.to_string(),
                "title": title,
                "titleSlug": slug,
                "content": "<p>statement</p>",
                "exampleTestcases": "[2,7,11,15]\n9",
                "codeSnippets": [{ "langSlug": "rust", "code": "impl Solution {}" }],
                "isPaidOnly": false,
                "canSeeQuestion": true,
                "difficulty": "Easy",
                "categoryTitle": "Algorithms",
                "hints": ["Use a map."],
                "metaData": "{\"name\":\"twoSum\",\"params\":[{\"name\":\"nums\",\"type\":\"integer[]\"},{\"name\":\"target\",\"type\":\"integer\"}],\"return\":{\"type\":\"integer[]\"}}",
                "stats": "{\"totalAcceptedRaw\":100,\"totalSubmissionRaw\":200}",
                "envInfo": "{\"rust\":[\"Rust\",\"Rust 1.79\"]}"
            }
        }
    })
}

/// Landing page that sets the csrf cookie.
pub async fn mount_landing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).insert_header(
            "set-cookie",
            format!("csrftoken={}; Max-Age=31449600; Path=/; SameSite=Lax", TOKEN).as_str(),
        ))
        .mount(server)
        .await;
}

pub async fn mount_problem(server: &MockServer, id: u32, title: &str, slug: &str) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("questionData"))
        .and(body_partial_json(json!({ "variables": { "titleSlug": slug } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(problem_json(id, title, slug)))
        .mount(server)
        .await;
}

/// Catalog index with the given `(id, title, slug)` rows.
pub async fn mount_index(server: &MockServer, problems: &[(u32, &str, &str)]) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("totalNum"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "problemsetQuestionList": { "total": problems.len() } }
        })))
        .mount(server)
        .await;

    let questions: Vec<Value> = problems
        .iter()
        .map(|(id, title, slug)| {
            json!({ "title": title, "titleSlug": slug, "frontendQuestionId": id.to_string() })
        })
        .collect();
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("questions: data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "problemsetQuestionList": { "questions": questions } }
        })))
        .mount(server)
        .await;
}

pub async fn mount_daily(server: &MockServer, slug: &str) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("questionOfToday"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "activeDailyCodingChallengeQuestion": { "question": { "titleSlug": slug } } }
        })))
        .mount(server)
        .await;
}

/// A catalog with two indexed problems and a daily pick.
pub async fn standard_catalog() -> MockServer {
    let server = MockServer::start().await;
    mount_landing(&server).await;
    mount_index(
        &server,
        &[(1, "Two Sum", "two-sum"), (2, "Add Two Numbers", "add-two-numbers")],
    )
    .await;
    mount_problem(&server, 1, "Two Sum", "two-sum").await;
    mount_problem(&server, 2, "Add Two Numbers", "add-two-numbers").await;
    mount_daily(&server, "add-two-numbers").await;
    server
}
