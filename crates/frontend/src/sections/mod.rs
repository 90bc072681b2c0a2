//! Static content sections of the site

pub mod about;
pub mod hero;
pub mod services;

pub use about::AboutSection;
pub use hero::HeroSection;
pub use services::ServicesSection;
