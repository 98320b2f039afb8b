#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderName, Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::prelude::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use tempfile::TempDir;
use tower::ServiceExt;

use ride_sharing::db::queries::ride::{self as ride_queries, RideInput};
use ride_sharing::entities::{driver, ride, user};
use ride_sharing::utils::jwt::create_token;
use ride_sharing::{routes, AppState, Config};

pub const JWT_SECRET: &str = "test-secret";

pub struct TestApp {
    pub db: DatabaseConnection,
    pub router: Router,
    pub driver_id: i32,
    pub rider_id: i32,
}

/// A fresh, migrated in-memory database
pub async fn empty_db() -> DatabaseConnection {
    migrated_db(ConnectOptions::new("sqlite::memory:"), 1).await
}

/// A migrated database file inside `dir`, shared by a pool of several
/// connections so transactions can overlap
pub async fn file_db(dir: &TempDir, pool_size: u32) -> DatabaseConnection {
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("rides.db").display());
    migrated_db(ConnectOptions::new(url), pool_size).await
}

async fn migrated_db(mut options: ConnectOptions, pool_size: u32) -> DatabaseConnection {
    options.max_connections(pool_size).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration_hours: 1,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        seed_defaults: false,
        rate_limit_per_minute: 100,
        rate_limit_burst: 100,
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_db(empty_db().await).await
    }

    /// Seed one driver and one rider into `db` and build the router over it
    pub async fn with_db(db: DatabaseConnection) -> Self {

        let driver = driver::ActiveModel {
            name: Set("Grace Hopper".to_string()),
            phone_number: Set(Some("+15550100".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let rider = user::ActiveModel {
            name: Set("Ada Lovelace".to_string()),
            email: Set("ada@example.com".to_string()),
            phone_number: Set(None),
            role: Set("Rider".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let router = routes::create_router(AppState {
            db: db.clone(),
            config: test_config(),
        });

        Self {
            db,
            router,
            driver_id: driver.id,
            rider_id: rider.id,
        }
    }

    pub fn rider_token(&self) -> String {
        token_for(self.rider_id)
    }

    pub async fn add_ride(&self, start: &str, end: &str, seats: i32) -> ride::Model {
        ride_queries::create_ride(
            &self.db,
            RideInput {
                start_location: start.to_string(),
                end_location: end.to_string(),
                driver_id: self.driver_id,
                available_seats: seats,
                price: Decimal::new(1250, 2),
            },
        )
        .await
        .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        let request = Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        self.send_form(uri, body, None).await
    }

    pub async fn post_form_as_rider(&self, uri: &str, body: &str) -> Response {
        let token = self.rider_token();
        self.post_form_with_token(uri, body, &token).await
    }

    pub async fn post_form_with_token(&self, uri: &str, body: &str, token: &str) -> Response {
        let bearer = format!("Bearer {}", token);
        self.send_form(uri, body, Some((header::AUTHORIZATION, &bearer))).await
    }

    /// Submit a form the way a browser does, with the session cookie
    pub async fn post_form_with_cookie(&self, uri: &str, body: &str, cookie: &str) -> Response {
        self.send_form(uri, body, Some((header::COOKIE, cookie))).await
    }

    async fn send_form(
        &self,
        uri: &str,
        body: &str,
        extra: Option<(HeaderName, &str)>,
    ) -> Response {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some((name, value)) = extra {
            builder = builder.header(name, value);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn token_for(user_id: i32) -> String {
    create_token(user_id, "ada@example.com", "Rider", JWT_SECRET, 1).unwrap()
}

/// The `name=value` pair of the session cookie set by `response`, if any
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("ride_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub fn assert_redirect(response: &Response, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), to);
}
