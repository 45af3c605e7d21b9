//! HTTP-level integration tests for `POST /verify` and `GET /rules`.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_legacy_app, build_test_app, get, post_json, post_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: failing rule still returns 200 with the verdict
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_reports_failed_rule() {
    let response = post_json(
        build_test_app(),
        "/verify",
        json!({"password": "12345", "rules": [{"rule": "minSize", "value": 7}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({"verify": false, "noMatch": ["minSize"]}));
}

// ---------------------------------------------------------------------------
// Test: passing request returns verify=true and an empty noMatch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_all_rules_pass() {
    let response = post_json(
        build_test_app(),
        "/verify",
        json!({
            "password": "Portal 2!",
            "rules": [
                {"rule": "minUpperCase", "value": 1},
                {"rule": "minLowerCase", "value": 5},
                {"rule": "minDigit", "value": 1},
                {"rule": "minSpecialChars", "value": 1},
                {"rule": "noRepeated", "value": 0},
                {"rule": "minSize", "value": 9}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({"verify": true, "noMatch": []}));
}

// ---------------------------------------------------------------------------
// Test: failures are listed in input order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_all_rules_fail_in_order() {
    let response = post_json(
        build_test_app(),
        "/verify",
        json!({
            "password": "StrongPassword@!#123",
            "rules": [
                {"rule": "minUpperCase", "value": 3},
                {"rule": "minLowerCase", "value": 14},
                {"rule": "minDigit", "value": 4},
                {"rule": "minSpecialChars", "value": 4},
                {"rule": "noRepeated", "value": 0},
                {"rule": "minSize", "value": 22}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["verify"], false);
    assert_eq!(
        json["noMatch"],
        json!([
            "minUpperCase",
            "minLowerCase",
            "minDigit",
            "minSpecialChars",
            "noRepeated",
            "minSize"
        ])
    );
}

// ---------------------------------------------------------------------------
// Test: missing password returns 400 naming the field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_missing_password() {
    let response = post_json(
        build_test_app(),
        "/verify",
        json!({"rules": [{"rule": "minSize", "value": 7}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing key: password");
    assert_eq!(json["code"], "MISSING_FIELD");
}

// ---------------------------------------------------------------------------
// Test: empty rule list returns 400 naming `rules`
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_empty_rules() {
    let response = post_json(
        build_test_app(),
        "/verify",
        json!({"password": "hunter2", "rules": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing key: rules");
}

// ---------------------------------------------------------------------------
// Test: each shape error maps to its code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_shape_errors() {
    let cases = [
        (
            json!({"password": "x", "rules": ["minSize"]}),
            "MALFORMED_RULE",
            "\"minSize\" is not a dictionary",
        ),
        (
            json!({"password": "x", "rules": [{"value": 1}]}),
            "MALFORMED_RULE",
            "Rule in wrong format. Missing 'rule' key",
        ),
        (
            json!({"password": "x", "rules": [{"rule": "minSize"}]}),
            "MALFORMED_RULE",
            "Rule in wrong format. Missing 'value' key",
        ),
        (
            json!({"password": "x", "rules": [{"rule": "minSize", "value": true}]}),
            "INVALID_VALUE_TYPE",
            "Value must be an integer",
        ),
        (
            json!({"password": "x", "rules": [{"rule": "minSize", "value": 7.5}]}),
            "INVALID_VALUE_TYPE",
            "Value must be an integer",
        ),
        (
            json!({"password": "x", "rules": [{"rule": "maxSize", "value": 7}]}),
            "UNKNOWN_RULE",
            "rule: maxSize is not an allowed rule",
        ),
    ];

    for (body, code, message) in cases {
        let response = post_json(build_test_app(), "/verify", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let json = body_json(response).await;
        assert_eq!(json["code"], code, "body: {body}");
        assert_eq!(json["message"], message, "body: {body}");
    }
}

// ---------------------------------------------------------------------------
// Test: zero is a valid value, not a missing one
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_zero_value_accepted() {
    let response = post_json(
        build_test_app(),
        "/verify",
        json!({"password": "abc", "rules": [{"rule": "minDigit", "value": 0}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["verify"], true);
}

// ---------------------------------------------------------------------------
// Test: body that is not JSON returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_invalid_json_body() {
    let response = post_raw(build_test_app(), "/verify", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].is_string());
}

// ---------------------------------------------------------------------------
// Test: legacy spelling only accepted when enabled
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_verify_legacy_rule_name() {
    let body = json!({"password": "coolPassword", "rules": [{"rule": "noRepeted", "value": 0}]});

    let response = post_json(build_test_app(), "/verify", body.clone()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "UNKNOWN_RULE");

    let response = post_json(build_legacy_app(), "/verify", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"verify": false, "noMatch": ["noRepeted"]})
    );
}

// ---------------------------------------------------------------------------
// Test: GET /rules lists the registered rule names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_rules() {
    let response = get(build_test_app(), "/rules").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!([
            "minSize",
            "minUpperCase",
            "minLowerCase",
            "minDigit",
            "minSpecialChars",
            "noRepeated"
        ])
    );

    let json = body_json(get(build_legacy_app(), "/rules").await).await;
    let data = json["data"].as_array().expect("data should be an array");
    assert!(data.iter().any(|r| r == "noRepeted"));
}
