pub mod auth;
pub mod pages;
pub mod session;
pub mod site_config;
