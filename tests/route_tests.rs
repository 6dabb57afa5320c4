// HTTP route tests for Gender Guesser

use actix_web::{test, web, App};
use gender_guesser::models::{ErrorResponse, GenderiseResponse, HealthResponse, Title, TitleResponse};
use gender_guesser::routes::{configure_routes, json_config, AppState};
use gender_guesser::services::GenderizeClient;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::sync::Arc;

fn state_for(server: &ServerGuard) -> AppState {
    AppState {
        genderize: Arc::new(GenderizeClient::new(server.url(), None).unwrap()),
    }
}

#[actix_web::test]
async fn test_health() {
    let server = Server::new_async().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.status, "healthy");
    assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_genderise_route_passes_results_through() {
    let mut server = Server::new_async().await;
    let body = json!([{"name": "Jamie", "gender": "male", "probability": 0.61}]);
    let _mock = server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name[0]".into(), "Jamie".into()),
            Matcher::UrlEncoded("country_id".into(), "GB".into()),
        ]))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/genderise")
        .set_json(json!({"names": ["Jamie"], "countryId": "GB"}))
        .to_request();
    let resp: GenderiseResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(serde_json::to_value(&resp.results).unwrap(), body);
}

#[actix_web::test]
async fn test_genderise_route_too_many_names_is_empty() {
    let server = Server::new_async().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server)))
            .configure(configure_routes),
    )
    .await;

    let names = vec!["Bob"; 10];
    let req = test::TestRequest::post()
        .uri("/api/v1/genderise")
        .set_json(json!({ "names": names }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    let body: GenderiseResponse = test::read_body_json(resp).await;
    assert!(body.results.is_empty());
}

#[actix_web::test]
async fn test_title_route() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("name[0]".into(), "Lily".into()))
        .with_status(200)
        .with_body(json!([{"name": "Lily", "gender": "female"}]).to_string())
        .create_async()
        .await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/title")
        .set_json(json!({"firstName": "Lily"}))
        .to_request();
    let resp: TitleResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.first_name, "Lily");
    assert_eq!(resp.title, Title::Ms);
}

#[actix_web::test]
async fn test_title_route_rejects_empty_name() {
    let server = Server::new_async().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/title")
        .set_json(json!({"firstName": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_malformed_json_returns_error_response() {
    let server = Server::new_async().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_for(&server)))
            .app_data(json_config())
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/genderise")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"names\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
    assert_eq!(body.status_code, 400);
    assert!(body.message.starts_with("Invalid JSON"));
}
