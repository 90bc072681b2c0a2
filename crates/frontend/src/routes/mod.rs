pub mod routes;
pub mod section;

pub use section::Section;
