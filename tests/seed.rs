mod common;

use sea_orm::{EntityTrait, PaginatorTrait};

use ride_sharing::db::queries::seed::seed_defaults;
use ride_sharing::entities::{driver, user};

#[tokio::test]
async fn test_seed_defaults_is_idempotent() {
    let db = common::empty_db().await;

    seed_defaults(&db).await.unwrap();
    seed_defaults(&db).await.unwrap();

    assert_eq!(driver::Entity::find().count(&db).await.unwrap(), 1);
    let users = user::Entity::find().all(&db).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, "Rider");
}

#[tokio::test]
async fn test_seed_leaves_existing_data_alone() {
    let app = common::TestApp::new().await;

    seed_defaults(&app.db).await.unwrap();

    let drivers = driver::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].name, "Grace Hopper");
}
