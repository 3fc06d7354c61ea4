//! HTTP-level tests driving the router directly.
//!
//! The router runs against in-memory stores and an in-memory session store,
//! so no database is needed. Requests go through `tower::ServiceExt::oneshot`
//! with session cookies carried by hand between calls.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use tower::ServiceExt;
use tower_sessions::MemoryStore;

use shopfloor_core::{AdminRole, Email};
use shopfloor_server::db::memory::{
    MemoryAdminStore, MemoryOrderStore, MemoryProductStore, MemoryUserStore,
};
use shopfloor_server::db::{AdminStore, ProductStore, UserStore};
use shopfloor_server::models::{NewAdmin, NewProduct, NewUser};
use shopfloor_server::services::auth::hash_password;
use shopfloor_server::state::AppState;

/// Seeded credentials used across the tests.
const USER_EMAIL: &str = "alice@example.com";
const USER_PASSWORD: &str = "correct horse battery";
const ADMIN_EMAIL: &str = "boss@example.com";
const ADMIN_PASSWORD: &str = "super secret pw";

/// Build an app with one user, one admin, and one product seeded.
async fn test_app() -> Router {
    let users = Arc::new(MemoryUserStore::default());
    let admins = Arc::new(MemoryAdminStore::default());
    let products = Arc::new(MemoryProductStore::default());
    let orders = Arc::new(MemoryOrderStore::default());

    users
        .create(NewUser {
            email: Email::parse(USER_EMAIL).unwrap(),
            name: "Alice".to_owned(),
            password_hash: hash_password(USER_PASSWORD).unwrap(),
        })
        .await
        .unwrap();
    admins
        .create(NewAdmin {
            email: Email::parse(ADMIN_EMAIL).unwrap(),
            name: "Boss".to_owned(),
            role: AdminRole::Admin,
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
        })
        .await
        .unwrap();
    products
        .create(NewProduct {
            name: "Widget".to_owned(),
            price: Decimal::new(1999, 2),
            description: "A widget".to_owned(),
        })
        .await
        .unwrap();

    let state = AppState::with_stores(users, admins, products, orders);
    shopfloor_server::app(state, MemoryStore::default(), false)
}

/// Extract the session cookie from a response, if one was set.
fn session_cookie(response: &axum::http::Response<Body>) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    Some(raw.split(';').next().unwrap().to_owned())
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, cookie: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

/// Log the seeded user in and return the session cookie.
async fn login_user(app: &Router) -> String {
    let uri = format!("/userlogin?userEmail={USER_EMAIL}&userPassword=correct%20horse%20battery");
    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response).expect("user login should set a session cookie")
}

/// Log the seeded admin in and return the session cookie.
async fn login_admin(app: &Router) -> String {
    let uri = format!("/adminLogin?email={ADMIN_EMAIL}&password=super%20secret%20pw");
    let response = app.clone().oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    session_cookie(&response).expect("admin login should set a session cookie")
}

#[tokio::test]
async fn health_check_works() {
    let app = test_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn login_page_shows_both_forms() {
    let app = test_app().await;
    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("/adminLogin"));
    assert!(body.contains("/userlogin"));
}

#[tokio::test]
async fn admin_login_success_redirects_to_dashboard() {
    let app = test_app().await;
    let uri = format!("/adminLogin?email={ADMIN_EMAIL}&password=super%20secret%20pw");
    let response = app.oneshot(get(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin/services");
}

#[tokio::test]
async fn admin_login_wrong_password_rerenders_with_message() {
    let app = test_app().await;
    let uri = format!("/adminLogin?email={ADMIN_EMAIL}&password=wrong");
    let response = app.oneshot(get(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());
    let body = body_string(response).await;
    assert!(body.contains("Invalid email or password"));
}

#[tokio::test]
async fn unknown_email_and_wrong_password_look_identical() {
    let app = test_app().await;

    let wrong_password = app
        .clone()
        .oneshot(get(&format!("/adminLogin?email={ADMIN_EMAIL}&password=no")))
        .await
        .unwrap();
    let unknown_email = app
        .oneshot(get("/adminLogin?email=ghost@example.com&password=no"))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::OK);
    assert_eq!(unknown_email.status(), StatusCode::OK);
    let a = body_string(wrong_password).await;
    let b = body_string(unknown_email).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn user_login_renders_shop_view() {
    let app = test_app().await;
    let uri = format!("/userlogin?userEmail={USER_EMAIL}&userPassword=correct%20horse%20battery");
    let response = app.oneshot(get(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Alice"));
    assert!(body.contains("/product/search"));
}

#[tokio::test]
async fn anonymous_shop_request_redirects_to_login() {
    let app = test_app().await;
    let response = app.oneshot(get("/product/back")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn anonymous_dashboard_request_redirects_to_login() {
    let app = test_app().await;
    let response = app.oneshot(get("/admin/services")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn user_session_does_not_open_the_dashboard() {
    let app = test_app().await;
    let cookie = login_user(&app).await;

    let response = app
        .oneshot(get_with_cookie("/admin/services", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn search_finds_product_by_exact_name() {
    let app = test_app().await;
    let cookie = login_user(&app).await;

    let response = app
        .oneshot(post_form("/product/search", &cookie, "productName=Widget"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Widget"));
    assert!(body.contains("19.99"));
    assert!(body.contains("/product/order"));
}

#[tokio::test]
async fn search_miss_shows_unavailable_message() {
    let app = test_app().await;
    let cookie = login_user(&app).await;

    let response = app
        .oneshot(post_form("/product/search", &cookie, "productName=widget"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("SORRY...! Product Unavailable"));
}

#[tokio::test]
async fn placing_an_order_shows_the_exact_total() {
    let app = test_app().await;
    let cookie = login_user(&app).await;

    let response = app
        .oneshot(post_form(
            "/product/order",
            &cookie,
            "productName=Widget&price=19.99&quantity=3",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("59.97"));
}

#[tokio::test]
async fn zero_quantity_order_is_rejected_inline() {
    let app = test_app().await;
    let cookie = login_user(&app).await;

    let response = app
        .oneshot(post_form(
            "/product/order",
            &cookie,
            "productName=Widget&price=19.99&quantity=0",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("quantity"));
}

#[tokio::test]
async fn order_history_appears_on_the_shop_view() {
    let app = test_app().await;
    let cookie = login_user(&app).await;

    let order = app
        .clone()
        .oneshot(post_form(
            "/product/order",
            &cookie,
            "productName=Widget&price=19.99&quantity=2",
        ))
        .await
        .unwrap();
    assert_eq!(order.status(), StatusCode::OK);

    let response = app
        .oneshot(get_with_cookie("/product/back", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Widget"));
    assert!(body.contains("39.98"));
}

#[tokio::test]
async fn dashboard_lists_all_entities() {
    let app = test_app().await;
    let cookie = login_admin(&app).await;

    let response = app
        .oneshot(get_with_cookie("/admin/services", &cookie))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(USER_EMAIL));
    assert!(body.contains(ADMIN_EMAIL));
    assert!(body.contains("Widget"));
}

#[tokio::test]
async fn admin_can_create_a_product() {
    let app = test_app().await;
    let cookie = login_admin(&app).await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/addingProduct",
            &cookie,
            "name=Gadget&price=5.00&description=A+gadget",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin/services");

    let dashboard = app
        .oneshot(get_with_cookie("/admin/services", &cookie))
        .await
        .unwrap();
    let body = body_string(dashboard).await;
    assert!(body.contains("Gadget"));
}

#[tokio::test]
async fn duplicate_product_name_rerenders_the_form() {
    let app = test_app().await;
    let cookie = login_admin(&app).await;

    let response = app
        .oneshot(post_form(
            "/addingProduct",
            &cookie,
            "name=Widget&price=5.00&description=",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("already exists"));
}

#[tokio::test]
async fn dashboard_is_idempotent_across_fetches() {
    let app = test_app().await;
    let cookie = login_admin(&app).await;

    let first = app
        .clone()
        .oneshot(get_with_cookie("/admin/services", &cookie))
        .await
        .unwrap();
    let second = app
        .oneshot(get_with_cookie("/admin/services", &cookie))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_string(first).await, body_string(second).await);
}

#[tokio::test]
async fn created_admin_can_log_in() {
    let app = test_app().await;
    let cookie = login_admin(&app).await;

    let created = app
        .clone()
        .oneshot(post_form(
            "/addingAdmin",
            &cookie,
            "email=second@example.com&name=Second&password=long%20enough%20pw&role=admin",
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::SEE_OTHER);
    assert_eq!(created.headers()[header::LOCATION], "/admin/services");

    let login = app
        .clone()
        .oneshot(get(
            "/adminLogin?email=second@example.com&password=long%20enough%20pw",
        ))
        .await
        .unwrap();
    assert_eq!(login.status(), StatusCode::SEE_OTHER);
    let new_cookie = session_cookie(&login).expect("login should set a session cookie");

    let dashboard = app
        .oneshot(get_with_cookie("/admin/services", &new_cookie))
        .await
        .unwrap();
    assert_eq!(dashboard.status(), StatusCode::OK);
    let body = body_string(dashboard).await;
    assert!(body.contains("second@example.com"));
}

#[tokio::test]
async fn weak_password_rerenders_the_admin_form() {
    let app = test_app().await;
    let cookie = login_admin(&app).await;

    let response = app
        .oneshot(post_form(
            "/addingAdmin",
            &cookie,
            "email=second@example.com&name=Second&password=short&role=admin",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("at least"));
}

#[tokio::test]
async fn deleting_a_missing_user_still_redirects() {
    let app = test_app().await;
    let cookie = login_admin(&app).await;

    let response = app
        .oneshot(get_with_cookie("/deleteUser/999", &cookie))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin/services");
}

#[tokio::test]
async fn update_form_for_missing_product_is_not_found() {
    let app = test_app().await;
    let cookie = login_admin(&app).await;

    let response = app
        .oneshot(get_with_cookie("/updateProduct/999", &cookie))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let app = test_app().await;
    let cookie = login_user(&app).await;

    let logout = app
        .clone()
        .oneshot(post_form("/logout", &cookie, ""))
        .await
        .unwrap();
    assert_eq!(logout.status(), StatusCode::SEE_OTHER);

    let response = app
        .oneshot(get_with_cookie("/product/back", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}
