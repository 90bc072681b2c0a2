use std::sync::Arc;

use crate::shared::config::Config;
use crate::system::auth::gate::AdminGate;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub admin: Arc<AdminGate>,
}

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let admin = AdminGate::from_config(&config.admin)?;
        Ok(Self {
            config: Arc::new(config),
            admin: Arc::new(admin),
        })
    }
}
