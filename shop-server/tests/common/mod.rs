//! Test helpers: every test gets its own in-memory store

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use shared::models::{CreditCard, CustomerCreate, ProductCreate};
use shop_server::{Config, ServerState};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

pub async fn memory_state() -> ServerState {
    let database = format!("test_{}", NEXT_DB.fetch_add(1, Ordering::SeqCst));
    let config = Config::with_store("mem://", "test", database);
    ServerState::initialize(&config)
        .await
        .expect("in-memory store should open")
}

pub fn card(number: &str) -> CreditCard {
    CreditCard {
        brand: "Visa".into(),
        number: number.into(),
        expiration: "12/30".into(),
    }
}

pub fn customer(firstname: &str, lastname: &str) -> CustomerCreate {
    CustomerCreate {
        firstname: firstname.into(),
        lastname: lastname.into(),
        creditcards: vec![],
    }
}

pub fn product(name: &str, price: f64) -> ProductCreate {
    ProductCreate {
        name: name.into(),
        price,
    }
}
