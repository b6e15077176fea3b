pub mod customer;
pub mod employee;
pub mod principal;
pub mod role;
pub mod role_permission;
pub mod web_setting;
