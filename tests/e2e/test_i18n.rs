use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

const NOT_FOUND_EN: &str = "The requested record was not found.";
const NOT_FOUND_ES: &str = "No se ha encontrado el registro solicitado.";
const NOT_FOUND_CA: &str = "No s'ha trobat el registre sol·licitat.";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_to_spanish(ctx: &TestContext) {
    let response = ctx.client.get("/no/such/route").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_header("content-type", "application/problem+json");
    response.assert_problem_detail(NOT_FOUND_ES);
    assert_eq!(
        response.body.as_ref().unwrap().get("instance").and_then(|v| v.as_str()),
        Some("/no/such/route")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_follow_accept_language(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/no/such/route", &[("Accept-Language", "ca,en;q=0.8")])
        .await
        .unwrap();

    response.assert_problem_detail(NOT_FOUND_CA);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_prefer_cookie_over_accept_language(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers(
            "/no/such/route",
            &[("Cookie", "lang=en"), ("Accept-Language", "ca")],
        )
        .await
        .unwrap();

    response.assert_problem_detail(NOT_FOUND_EN);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_prefer_query_parameter_over_cookie(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/no/such/route?lang=ca", &[("Cookie", "lang=en")])
        .await
        .unwrap();

    response.assert_problem_detail(NOT_FOUND_CA);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_remember_the_chosen_language(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/internal/changeLanguage?lang=en")
        .await
        .unwrap();

    response.assert_status(StatusCode::SEE_OTHER);
    response.assert_header("location", "/");
    response.assert_header("set-cookie", "lang=en; Path=/; HttpOnly; SameSite=Lax");
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unparseable_languages(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/internal/changeLanguage?lang=123")
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    let problem = response.body.as_ref().unwrap();
    assert_eq!(problem["errors"][0]["pointer"], "lang");
}
