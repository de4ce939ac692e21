use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use server::backend::BackendClient;
use std::collections::HashMap;
use std::time::Duration;

pub const VALID_ACCESS: &str = "access-ok";
pub const FRESH_ACCESS: &str = "access-fresh";
pub const ADMIN_ACCESS: &str = "access-admin";
pub const GOOD_REFRESH: &str = "refresh-ok";

/// Start an in-process stand-in for the RideShare REST API on an ephemeral
/// port and return a client pointed at it.
pub async fn mock_backend() -> BackendClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("mock API has no address");

    tokio::spawn(async move {
        axum::serve(listener, mock_router())
            .await
            .expect("mock API crashed");
    });

    BackendClient::new(format!("http://{addr}/api/v1/"), Duration::from_secs(5))
        .expect("Failed to build backend client")
}

/// Client pointed at a port nothing listens on.
pub fn unreachable_backend() -> BackendClient {
    BackendClient::new("http://127.0.0.1:9/api/v1", Duration::from_millis(500))
        .expect("Failed to build backend client")
}

fn mock_router() -> Router {
    Router::new()
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/refresh-token", post(refresh))
        .route("/api/v1/users/me", get(me))
        .route("/api/v1/users/register", post(register))
        .route("/api/v1/users/all", get(all_users))
        .route("/api/v1/users/{id}/block", patch(block_user))
        .route("/api/v1/rides/me", get(my_rides))
        .route("/api/v1/rides/available", get(available_rides))
        .route("/api/v1/rides/{id}/accept", patch(accept_ride))
        .route("/api/v1/rides/{id}/status", patch(update_status))
        .route("/api/v1/stats/overview", get(overview))
        .route("/api/v1/drivers/earnings", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
}

fn ok(data: Value) -> Response {
    Json(json!({ "success": true, "statusCode": 200, "message": "ok", "data": data })).into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "success": false, "statusCode": status.as_u16(), "message": message })),
    )
        .into_response()
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

pub fn rider_json() -> Value {
    json!({
        "_id": "u-rider",
        "name": "Riley Rider",
        "email": "riley@example.com",
        "role": "RIDER",
        "phone": "555-0100"
    })
}

pub fn ride_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "pickup": { "address": "1 Main St", "lat": 40.7128, "lng": -74.006 },
        "destination": { "address": "9 Side Ave", "lat": 40.7306, "lng": -73.9352 },
        "status": status,
        "vehicleType": "comfort",
        "fare": 18.4,
        "distanceKm": 6.2,
        "rider": { "_id": "u-rider", "name": "Riley Rider" }
    })
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == "riley@example.com" && body["password"] == "secret123" {
        ok(json!({
            "accessToken": VALID_ACCESS,
            "refreshToken": GOOD_REFRESH,
            "user": rider_json()
        }))
    } else {
        fail(StatusCode::UNAUTHORIZED, "Invalid email or password")
    }
}

async fn logout() -> Response {
    ok(Value::Null)
}

async fn refresh(Json(body): Json<Value>) -> Response {
    if body["refreshToken"] == GOOD_REFRESH {
        ok(json!({ "accessToken": FRESH_ACCESS }))
    } else {
        fail(StatusCode::UNAUTHORIZED, "Refresh token expired")
    }
}

async fn me(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(VALID_ACCESS) | Some(FRESH_ACCESS) => ok(rider_json()),
        Some("access-broken") => fail(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable"),
        _ => fail(StatusCode::UNAUTHORIZED, "You are not authorized"),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": "Validation Error",
                "errorSources": [
                    { "path": "email", "message": "Email already exists" },
                    { "path": "", "message": "ignored" }
                ]
            })),
        )
            .into_response();
    }
    ok(json!({
        "_id": "u-new",
        "name": body["name"],
        "email": body["email"],
        "role": body["role"],
        "isApproved": false
    }))
}

async fn my_rides(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if bearer(&headers).is_none() {
        return fail(StatusCode::UNAUTHORIZED, "You are not authorized");
    }
    let page: u32 = q.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let status = q.get("status").cloned().unwrap_or_else(|| "completed".into());
    Json(json!({
        "success": true,
        "statusCode": 200,
        "message": "ok",
        "data": [ride_json(&format!("r-{page}"), &status)],
        "meta": { "page": page, "limit": 10, "total": 21, "totalPage": 3 }
    }))
    .into_response()
}

async fn available_rides() -> Response {
    ok(json!([ride_json("r-open", "requested")]))
}

async fn accept_ride(Path(id): Path<String>) -> Response {
    if id == "r-taken" {
        fail(StatusCode::CONFLICT, "Ride already accepted")
    } else {
        ok(ride_json(&id, "accepted"))
    }
}

async fn update_status(Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let status = body["status"].as_str().unwrap_or_default().to_string();
    ok(ride_json(&id, &status))
}

async fn all_users(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if bearer(&headers) != Some(ADMIN_ACCESS) {
        return fail(StatusCode::FORBIDDEN, "Admins only");
    }
    let mut users = vec![rider_json()];
    if q.get("searchTerm").map(String::as_str) == Some("nobody") {
        users.clear();
    }
    // No meta: the client should wrap this as a single page.
    ok(Value::Array(users))
}

async fn block_user(Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let mut user = rider_json();
    user["_id"] = json!(id);
    user["isBlocked"] = body["isBlocked"].clone();
    ok(user)
}

async fn overview() -> Response {
    ok(json!({
        "totalUsers": 12,
        "totalRiders": 8,
        "totalDrivers": 3,
        "pendingDrivers": 1,
        "totalRides": 40,
        "completedRides": 30,
        "totalRevenue": 612.5
    }))
}
