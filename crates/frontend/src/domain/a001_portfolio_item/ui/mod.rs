pub mod admin_panel;
pub mod card;
pub mod section;

pub use admin_panel::AdminPanel;
pub use card::PortfolioCard;
pub use section::PortfolioSection;
