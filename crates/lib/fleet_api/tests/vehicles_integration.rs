//! Integration tests: vehicle endpoints.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::*;
use fleet_core::models::VehicleDraft;
use fleet_core::query::PageBounds;
use fleet_core::store::VehicleStore;
use serde_json::json;

fn names(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v["name"].as_str().expect("name").to_string())
        .collect()
}

#[tokio::test]
async fn create_and_fetch_vehicle() {
    let (app, _) = test_app();
    let token = login_token(&app).await;

    let resp = send(
        &app,
        json_request(
            "POST",
            "/vehicles",
            Some(&token),
            &json!({ "name": "Uno", "brand": "Fiat", "year": 2004 }),
        ),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    assert_eq!(
        resp.json(),
        json!({ "id": 1, "name": "Uno", "brand": "Fiat", "year": 2004 })
    );
    assert_eq!(resp.location.as_deref(), Some("/vehicles/1"));

    let resp = send(&app, empty_request("GET", "/vehicles/1", Some(&token))).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["name"], "Uno");
}

#[tokio::test]
async fn create_vehicle_reports_all_validation_messages() {
    let (app, store) = test_app();
    let token = login_token(&app).await;

    let resp = send(
        &app,
        json_request(
            "POST",
            "/vehicles",
            Some(&token),
            &json!({ "name": "", "brand": "", "year": 1850 }),
        ),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json()["messages"],
        json!([
            "Name is required",
            "Brand is required",
            "Vehicle year must be greater than or equal to 1900"
        ])
    );
    assert_eq!(store.vehicle_count().await, 0);
}

#[tokio::test]
async fn wrong_content_type_is_bad_request() {
    let (app, _) = test_app();
    let token = login_token(&app).await;

    let req = Request::builder()
        .method("POST")
        .uri("/vehicles")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("Uno"))
        .unwrap();
    let resp = send(&app, req).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_vehicle_is_not_found() {
    let (app, _) = test_app();
    let token = login_token(&app).await;

    let resp = send(&app, empty_request("GET", "/vehicles/42", Some(&token))).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.json(), json!("Vehicle not found"));

    let resp = send(
        &app,
        json_request(
            "PUT",
            "/vehicles/42",
            Some(&token),
            &json!({ "name": "", "brand": "", "year": 0 }),
        ),
    )
    .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND, "existence is checked first");

    let resp = send(&app, empty_request("DELETE", "/vehicles/42", Some(&token))).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_vehicle_id_or_page_is_bad_request() {
    let (app, store) = test_app();
    let token = login_token(&app).await;

    for (method, uri) in [
        ("GET", "/vehicles/abc"),
        ("DELETE", "/vehicles/abc"),
        ("GET", "/vehicles?page=x"),
    ] {
        let resp = send(&app, empty_request(method, uri, Some(&token))).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{method} {uri}");
        let body = resp.json();
        assert_eq!(body["error"], "malformed_input", "{method} {uri}");
        assert!(body["message"].is_string());
    }

    let resp = send(
        &app,
        json_request(
            "PUT",
            "/vehicles/abc",
            Some(&token),
            &json!({ "name": "Uno", "brand": "Fiat", "year": 1995 }),
        ),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(store.vehicle_count().await, 0);
}

#[tokio::test]
async fn update_replaces_fields() {
    let (app, store) = test_app();
    store
        .insert_vehicle(VehicleDraft::new("Carro Original", "Marca A", 2000))
        .await
        .unwrap();
    let token = login_token(&app).await;

    let resp = send(
        &app,
        json_request(
            "PUT",
            "/vehicles/1",
            Some(&token),
            &json!({ "name": "Carro Novo", "brand": "Marca B", "year": 2021 }),
        ),
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json(),
        json!({ "id": 1, "name": "Carro Novo", "brand": "Marca B", "year": 2021 })
    );

    let resp = send(
        &app,
        json_request(
            "PUT",
            "/vehicles/1",
            Some(&token),
            &json!({ "name": "Carro Novo", "brand": "Marca B", "year": 1899 }),
        ),
    )
    .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let stored = store.find_vehicle(1).await.unwrap().unwrap();
    assert_eq!(stored.year, 2021, "rejected update leaves record unchanged");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (app, store) = test_app();
    store
        .insert_vehicle(VehicleDraft::new("Uno", "Fiat", 2000))
        .await
        .unwrap();
    let token = login_token(&app).await;

    let resp = send(&app, empty_request("DELETE", "/vehicles/1", Some(&token))).await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);
    assert!(resp.body.is_empty());

    let resp = send(&app, empty_request("GET", "/vehicles/1", Some(&token))).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_vehicles_pages_by_five_in_insertion_order() {
    let (app, store) = test_app();
    for i in 1..=12 {
        store
            .insert_vehicle(VehicleDraft::new(format!("Carro {i}"), "Marca", 2000))
            .await
            .unwrap();
    }
    let token = login_token(&app).await;

    let resp = send(&app, empty_request("GET", "/vehicles?page=2", Some(&token))).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        names(&resp.json()),
        vec!["Carro 6", "Carro 7", "Carro 8", "Carro 9", "Carro 10"]
    );

    let resp = send(&app, empty_request("GET", "/vehicles?page=3", Some(&token))).await;
    assert_eq!(names(&resp.json()), vec!["Carro 11", "Carro 12"]);

    let resp = send(&app, empty_request("GET", "/vehicles?page=4", Some(&token))).await;
    assert_eq!(resp.json(), json!([]));
}

#[tokio::test]
async fn list_vehicles_filters_by_name_and_brand() {
    let (app, store) = test_app();
    for (name, brand) in [("Uno", "Fiat"), ("Palio", "Fiat"), ("Gol", "VW"), ("Uno Way", "Fiat")] {
        store
            .insert_vehicle(VehicleDraft::new(name, brand, 2010))
            .await
            .unwrap();
    }
    let token = login_token(&app).await;

    let resp = send(&app, empty_request("GET", "/vehicles?name=uno", Some(&token))).await;
    assert_eq!(names(&resp.json()), vec!["Uno", "Uno Way"]);

    let resp = send(
        &app,
        empty_request("GET", "/vehicles?page=1&name=uno&brand=FIAT", Some(&token)),
    )
    .await;
    assert_eq!(names(&resp.json()), vec!["Uno", "Uno Way"]);

    let resp = send(&app, empty_request("GET", "/vehicles?brand=vw", Some(&token))).await;
    assert_eq!(names(&resp.json()), vec!["Gol"]);

    let resp = send(&app, empty_request("GET", "/vehicles?name=", Some(&token))).await;
    assert_eq!(resp.json().as_array().unwrap().len(), 4, "blank filter is a no-op");
}

#[tokio::test]
async fn page_zero_follows_configured_bounds() {
    let mut config = test_config(SECRET);
    config.page_bounds = PageBounds::PassThrough;
    let (pass_through, store) = test_app_with(config.clone());
    for i in 1..=7 {
        store
            .insert_vehicle(VehicleDraft::new(format!("Carro {i}"), "Marca", 2000))
            .await
            .unwrap();
    }
    let token = login_token(&pass_through).await;
    let resp = send(&pass_through, empty_request("GET", "/vehicles?page=-1", Some(&token))).await;
    // skip of -10 skips nothing
    assert_eq!(resp.json().as_array().unwrap().len(), 5);

    config.page_bounds = PageBounds::Clamp;
    let (clamped, store) = test_app_with(config);
    for i in 1..=7 {
        store
            .insert_vehicle(VehicleDraft::new(format!("Carro {i}"), "Marca", 2000))
            .await
            .unwrap();
    }
    let token = login_token(&clamped).await;
    let resp = send(&clamped, empty_request("GET", "/vehicles?page=0", Some(&token))).await;
    assert_eq!(names(&resp.json())[0], "Carro 1");
}

#[tokio::test]
async fn home_reports_store_status() {
    let (app, _) = test_app();

    let resp = send(&app, empty_request("GET", "/", None)).await;
    assert_eq!(resp.status, StatusCode::OK);
    let json = resp.json();
    assert_eq!(json["storeConnected"], true);
    assert!(
        json["greeting"]
            .as_str()
            .unwrap()
            .starts_with("Fleet API v")
    );
}
