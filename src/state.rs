use std::sync::Arc;

use crate::auth::AccessGuard;
use crate::config::Config;
use crate::error::Result;
use crate::provider::RoomProvisioner;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub guard: Arc<AccessGuard>,
    pub provisioner: Arc<RoomProvisioner>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let guard = AccessGuard::new(&config);
        let provisioner = RoomProvisioner::new(&config)?;

        Ok(Self {
            config: Arc::new(config),
            guard: Arc::new(guard),
            provisioner: Arc::new(provisioner),
        })
    }
}
