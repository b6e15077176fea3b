mod common;
mod customer;
mod settings;
