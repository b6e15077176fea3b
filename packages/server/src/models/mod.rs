pub mod auth;
pub mod customer;
pub mod deletion;
pub mod employee;
pub mod settings;
pub mod shared;
