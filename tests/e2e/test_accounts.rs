use crate::e2e::helpers;

use helpers::assertions::{assert_problem_response, problem_pointers};
use helpers::{generate_test_jwt, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_a_valid_account_update(ctx: &TestContext) {
    let body = json!({
        "accountNumber": "ES91 2100 0418 4502 0005 1332",
        "balance": 250.75,
        "currency": "EUR",
        "status": "ACTIVE"
    });

    let response = ctx.client.put("/api/accounts", &body).await.unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response.body_bytes.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_every_invalid_account_field(ctx: &TestContext) {
    let body = json!({ "accountNumber": " ", "balance": -10, "currency": "" });

    let response = ctx.client.put("/api/accounts", &body).await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_header("content-type", "application/problem+json");
    response.assert_problem_detail("La validación de uno o más campos ha fallado.");

    let problem = response.body.as_ref().unwrap();
    assert_problem_response(problem, 400);
    assert_eq!(
        problem_pointers(problem),
        vec!["accountNumber", "balance", "currency"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_unreadable_body_without_pointer(ctx: &TestContext) {
    let response = ctx
        .client
        .put_raw("/api/accounts", "{\"accountNumber\": ")
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);

    let problem = response.body.as_ref().unwrap();
    let errors = problem.get("errors").and_then(|v| v.as_array()).unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].get("pointer").is_none());
    assert!(errors[0].get("reason").and_then(|v| v.as_str()).is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_authentication_to_delete(ctx: &TestContext) {
    let response = ctx.client.delete("/api/accounts/ES91").await.unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_problem_detail("Es necesario autenticarse para acceder a este recurso.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_deny_deletion_without_admin_role(ctx: &TestContext) {
    let token = generate_test_jwt("ana", &["USER"], &ctx.config.jwt_secret);

    let response = ctx
        .client
        .delete_with_auth("/api/accounts/ES91", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_problem_detail("No tienes permiso para realizar esta acción.");

    let problem = response.body.as_ref().unwrap();
    assert_problem_response(problem, 403);
    assert!(problem.get("errors").is_none());
    assert!(!problem.to_string().contains("ana"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_let_admins_delete(ctx: &TestContext) {
    let token = generate_test_jwt("root", &["ADMIN"], &ctx.config.jwt_secret);

    let response = ctx
        .client
        .delete_with_auth("/api/accounts/ES91", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_forged_tokens(ctx: &TestContext) {
    let token = generate_test_jwt("root", &["ADMIN"], "some-other-secret");

    let response = ctx
        .client
        .delete_with_auth("/api/accounts/ES91", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_problem_detail("Las credenciales proporcionadas no son válidas.");
}
