//! Request handlers

pub mod customers;
pub mod health;

pub use customers::{
    create_customer, delete_customer, get_customer, list_cities, list_customers, update_customer,
};
pub use health::health_check;
