pub mod aggregate;
pub mod mirror;
pub mod query;

pub use aggregate::{NewPortfolioItem, PortfolioItem, PortfolioValidationError};
pub use mirror::PortfolioMirror;
pub use query::{displayed, filter_by_category, search};
