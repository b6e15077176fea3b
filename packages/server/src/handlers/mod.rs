pub mod auth;
pub mod customer;
pub mod employee;
pub mod settings;

mod deletion;
