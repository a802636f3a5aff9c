//! Fixtures shared by the use case unit tests.

use chrono::{NaiveDate, Utc};
use rust_decimal_macros::dec;

use crate::domain::models::contract::{Contract, ContractData, ContractProduct, ContractStatus};
use crate::domain::models::customer::{Customer, CustomerData};
use crate::domain::models::notice::{Notice, NoticeStatus};
use crate::domain::models::product::{Product, ProductData, PRODUCT_ON_SALE};
use crate::domain::models::user::{User, UserId};

pub(crate) const UID: i64 = 42;

pub(crate) fn uid() -> UserId {
    UserId::new(UID)
}

pub(crate) fn test_user(id: i64, email: &str) -> User {
    let now = Utc::now();
    User::restore(
        UserId::new(id),
        email.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        String::new(),
        now,
        now,
    )
}

pub(crate) fn test_notice(creator: UserId, content: &str) -> Notice {
    Notice {
        id: 1,
        content: content.to_string(),
        status: NoticeStatus::Unread,
        creator,
        created_at: Utc::now(),
    }
}

pub(crate) fn test_customer_data(name: &str) -> CustomerData {
    CustomerData {
        name: name.to_string(),
        source: "referral".to_string(),
        phone: "13800000000".to_string(),
        email: "buyer@example.com".to_string(),
        industry: "retail".to_string(),
        level: "A".to_string(),
        remarks: String::new(),
        region: "East".to_string(),
        address: "1 Main Street".to_string(),
        status: 1,
    }
}

pub(crate) fn test_customer(id: i64, name: &str) -> Customer {
    let now = Utc::now();
    Customer {
        id,
        data: test_customer_data(name),
        creator: uid(),
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn test_product_data(name: &str) -> ProductData {
    ProductData {
        name: name.to_string(),
        kind: 1,
        unit: "seat".to_string(),
        code: "SKU-1".to_string(),
        price: dec!(49.90),
        description: String::new(),
        status: PRODUCT_ON_SALE,
    }
}

pub(crate) fn test_product(id: i64, name: &str) -> Product {
    let now = Utc::now();
    Product {
        id,
        data: test_product_data(name),
        creator: uid(),
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn test_contract_data(cid: i64) -> ContractData {
    ContractData {
        name: "Support plan".to_string(),
        amount: dec!(2400),
        begin_time: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        over_time: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        remarks: String::new(),
        cid,
        product_list: vec![ContractProduct {
            id: 1,
            name: "Seat".to_string(),
            kind: 1,
            unit: "seat".to_string(),
            code: "SKU-1".to_string(),
            price: dec!(200),
            count: 12,
            total: dec!(2400),
        }],
        status: ContractStatus::Signed,
    }
}

pub(crate) fn test_contract(id: i64, cid: i64) -> Contract {
    let now = Utc::now();
    Contract::restore(id, test_contract_data(cid), uid(), now, now)
}
