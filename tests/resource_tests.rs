//! Integration tests for the App and config var resources.

use heroku_api::resources::{App, AppCreateOpts, AppUpdateOpts, ConfigVarUpdate, ConfigVars};
use heroku_api::{ApiToken, BaseUrl, ClientConfig, ListRange, MaybeUndefined, RestClient};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> RestClient {
    let config = ClientConfig::builder()
        .basic_auth("email@me.com", ApiToken::new("my-api-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn app_json(name: &str, region: &str) -> Value {
    json!({
        "archived_at": null,
        "buildpack_provided_description": null,
        "build_stack": {"id": "stack-id", "name": "heroku-22"},
        "created_at": "2014-05-01T12:00:00Z",
        "git_url": format!("https://git.heroku.com/{name}.git"),
        "id": "01234567-89ab-cdef-0123-456789abcdef",
        "maintenance": false,
        "name": name,
        "owner": {"email": "email@me.com", "id": "owner-id"},
        "region": {"id": "region-id", "name": region},
        "released_at": null,
        "repo_size": null,
        "slug_size": null,
        "stack": {"id": "stack-id", "name": "heroku-22"},
        "updated_at": "2014-05-01T12:00:00Z",
        "web_url": format!("https://{name}.herokuapp.com/")
    })
}

// ============================================================================
// App
// ============================================================================

#[tokio::test]
async fn test_app_create_without_options() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apps"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_json(app_json("dodging-samurai-42", "us")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let app = assert_ok!(App::create(&client, None).await);
    assert_eq!(app.name, "dodging-samurai-42");
}

#[tokio::test]
async fn test_app_create_with_options() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apps"))
        .and(body_json(json!({"name": "myapp", "region": "eu"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(app_json("myapp", "eu")))
        .expect(1)
        .mount(&server)
        .await;

    let opts = AppCreateOpts {
        name: "myapp".to_string().into(),
        region: "eu".to_string().into(),
        ..Default::default()
    };

    let client = create_client(&server);
    let app = assert_ok!(App::create(&client, Some(&opts)).await);
    assert_eq!(app.name, "myapp");
    assert_eq!(app.region.name, "eu");
}

#[tokio::test]
async fn test_app_create_name_taken_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "id": "invalid_params",
            "message": "Name is already taken"
        })))
        .mount(&server)
        .await;

    let opts = AppCreateOpts {
        name: "taken".to_string().into(),
        ..Default::default()
    };

    let client = create_client(&server);
    let error = assert_err!(App::create(&client, Some(&opts)).await);
    assert_eq!(error.as_api_error().map(|e| e.id.as_str()), Some("invalid_params"));
}

#[tokio::test]
async fn test_app_info_encodes_identity() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps/my%20app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_json("my app", "us")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let app = assert_ok!(App::info(&client, "my app").await);
    assert_eq!(app.name, "my app");
    assert!(app.released_at.is_none());
}

#[tokio::test]
async fn test_app_list_with_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .and(header("Range", "name ..; max=1"))
        .respond_with(
            ResponseTemplate::new(206)
                .insert_header("Next-Range", "name ]alpha..; max=1")
                .set_body_json(json!([app_json("alpha", "us")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let apps = assert_ok!(App::list(&client, Some(ListRange::new().field("name").max(1))).await);

    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].name, "alpha");
    assert!(apps.has_next_page());
}

#[tokio::test]
async fn test_app_update_sends_maintenance_flag() {
    let server = MockServer::start().await;

    let mut updated = app_json("example", "us");
    updated["maintenance"] = json!(true);

    Mock::given(method("PATCH"))
        .and(path("/apps/example"))
        .and(body_json(json!({"maintenance": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let opts = AppUpdateOpts {
        maintenance: true.into(),
        ..Default::default()
    };

    let client = create_client(&server);
    let app = assert_ok!(App::update(&client, "example", Some(&opts)).await);
    assert!(app.maintenance);
}

#[tokio::test]
async fn test_app_update_can_send_explicit_null() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/apps/example"))
        .and(body_json(json!({"build_stack": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_json("example", "us")))
        .expect(1)
        .mount(&server)
        .await;

    let opts = AppUpdateOpts {
        build_stack: MaybeUndefined::Null,
        ..Default::default()
    };

    let client = create_client(&server);
    assert_ok!(App::update(&client, "example", Some(&opts)).await);
}

#[tokio::test]
async fn test_app_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/apps/example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_json("example", "us")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let app = assert_ok!(App::delete(&client, "example").await);
    assert_eq!(app.name, "example");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

// ============================================================================
// Config Vars
// ============================================================================

#[tokio::test]
async fn test_config_vars_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apps/example/config-vars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"FOO": "bar"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let vars = assert_ok!(ConfigVars::info(&client, "example").await);
    assert_eq!(vars.get("FOO").map(String::as_str), Some("bar"));
}

#[tokio::test]
async fn test_config_vars_update_unsets_with_null() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/apps/example/config-vars"))
        .and(body_json(json!({"RAILS_ENV": "production", "DEBUG": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"RAILS_ENV": "production"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut changes = ConfigVarUpdate::new();
    changes.insert("RAILS_ENV".to_string(), Some("production".to_string()));
    changes.insert("DEBUG".to_string(), None);

    let client = create_client(&server);
    let vars = assert_ok!(ConfigVars::update(&client, "example", &changes).await);
    assert!(!vars.contains_key("DEBUG"));
    assert_eq!(vars.into_inner().into_inner().len(), 1);
}
