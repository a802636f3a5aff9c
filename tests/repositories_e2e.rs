//! Constraint handling of the PostgreSQL repositories
//!
//! The use cases check for duplicates and references before writing; these
//! tests go straight to the repositories to show the database constraints
//! come back as typed errors when such a check is bypassed.

mod common;

use axum::http::Method;
use rust_decimal_macros::dec;

use crm_backend::domain::gateways::{CustomerRepository, ProductRepository, UserRepository};
use crm_backend::domain::models::customer::CustomerData;
use crm_backend::domain::models::product::ProductData;
use crm_backend::domain::models::user::UserId;
use crm_backend::infrastructure::driven_adapters::{
    PostgresCustomerRepository, PostgresProductRepository, PostgresUserRepository,
};
use crm_backend::shared::errors::RepositoryError;

use common::{contract_body, TestApp};

fn customer(name: &str) -> CustomerData {
    CustomerData {
        name: name.to_string(),
        source: String::new(),
        phone: String::new(),
        email: String::new(),
        industry: String::new(),
        level: String::new(),
        remarks: String::new(),
        region: String::new(),
        address: String::new(),
        status: 1,
    }
}

#[tokio::test]
async fn test_duplicate_email_is_reported_as_duplicate() {
    let app = TestApp::new().await;
    let users = PostgresUserRepository::new(app.pool.clone());

    users.create("ana@example.com", "hash").await.unwrap();
    let result = users.create("ana@example.com", "hash").await;

    assert!(matches!(result, Err(RepositoryError::Duplicate(_))), "{result:?}");
}

#[tokio::test]
async fn test_duplicate_customer_and_product_names_are_reported_as_duplicate() {
    let app = TestApp::new().await;
    let (uid, _) = app.register_and_login("ana@example.com").await;
    let uid = UserId::new(uid);

    let customers = PostgresCustomerRepository::new(app.pool.clone());
    customers.create(uid, &customer("Acme")).await.unwrap();
    let other = customers.create(uid, &customer("Beta")).await.unwrap();

    let result = customers.create(uid, &customer("Acme")).await;
    assert!(matches!(result, Err(RepositoryError::Duplicate(_))), "{result:?}");

    // renaming onto an existing name hits the same constraint
    let result = customers.update(uid, other.id, &customer("Acme")).await;
    assert!(matches!(result, Err(RepositoryError::Duplicate(_))), "{result:?}");

    let products = PostgresProductRepository::new(app.pool.clone());
    let seat = ProductData {
        name: "Seat".to_string(),
        kind: 1,
        unit: "seat".to_string(),
        code: "S-1".to_string(),
        price: dec!(10.00),
        description: String::new(),
        status: 1,
    };
    products.create(uid, &seat).await.unwrap();
    let result = products.create(uid, &seat).await;
    assert!(matches!(result, Err(RepositoryError::Duplicate(_))), "{result:?}");
}

#[tokio::test]
async fn test_deleting_referenced_customer_is_reported_as_referenced() {
    let app = TestApp::new().await;
    let (uid, token) = app.register_and_login("ana@example.com").await;
    let cid = app.create_customer(&token, "Acme").await;
    let body = app
        .call(
            Method::POST,
            "/contract/create",
            Some(&token),
            Some(contract_body(cid, "Deal", 1)),
        )
        .await;
    assert_eq!(body["code"], 0);

    let customers = PostgresCustomerRepository::new(app.pool.clone());
    let result = customers.delete(UserId::new(uid), &[cid]).await;

    assert!(matches!(result, Err(RepositoryError::Referenced(_))), "{result:?}");
}
