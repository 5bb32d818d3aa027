use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use user_portal::client::{
    FormField, HttpRegistrationApi, RegistrationApi, RegistrationForm, RegistrationPayload,
    SessionContext, SubmitError, SubmitOutcome,
};
use user_portal::config::ClientConfig;

fn payload() -> RegistrationPayload {
    RegistrationPayload {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "Abcdefg1!".to_string(),
    }
}

#[tokio::test]
async fn posts_camel_case_body_to_register_endpoint() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/register"))
        .and(body_json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "Abcdefg1!"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": "success",
            "data": { "user": { "token": "T" } }
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let api = HttpRegistrationApi::new(&ClientConfig::new(backend.uri()));
    let response = api.register(&payload()).await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.token(), Some("T"));
}

#[tokio::test]
async fn error_status_carries_server_message() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Email already exists" })),
        )
        .mount(&backend)
        .await;

    let api = HttpRegistrationApi::new(&ClientConfig::new(backend.uri()));
    let err = api.register(&payload()).await.unwrap_err();

    assert_eq!(
        err,
        SubmitError::Server {
            status: 400,
            message: Some("Email already exists".to_string())
        }
    );
}

#[tokio::test]
async fn error_status_without_body_has_no_message() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;

    let api = HttpRegistrationApi::new(&ClientConfig::new(backend.uri()));
    let err = api.register(&payload()).await.unwrap_err();

    assert_eq!(err, SubmitError::Server { status: 500, message: None });
    assert_eq!(err.user_message(), "Something went wrong!");
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    // nothing listens on port 1
    let api = HttpRegistrationApi::new(&ClientConfig::new("http://127.0.0.1:1"));
    let err = api.register(&payload()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
}

#[tokio::test]
async fn form_submits_through_http_backend() {
    let backend = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": { "user": { "token": "session-token" } }
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let api = HttpRegistrationApi::new(&ClientConfig::new(backend.uri()));
    let mut form = RegistrationForm::new();
    form.set_field(FormField::FirstName, "Ada");
    form.set_field(FormField::LastName, "Lovelace");
    form.set_field(FormField::Email, "ada@example.com");
    form.set_field(FormField::Password, "Abcdefg1!");
    let mut auth = SessionContext::new();

    let outcome = form.submit(&api, &mut auth).await;

    assert_eq!(outcome, SubmitOutcome::Registered);
    assert_eq!(auth.token(), Some("session-token"));
}
