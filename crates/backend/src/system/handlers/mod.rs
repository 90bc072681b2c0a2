pub mod auth;
pub mod site_config;
