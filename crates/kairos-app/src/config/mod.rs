use std::sync::Arc;

pub use kairos_core::config::*;
use salvo::async_trait;

use crate::error::{AppError, AppResult};

pub struct ConfigHandler {
    pub settings: Settings,
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let settings: Arc<Settings> = Arc::new(self.settings.clone());
        depot.inject(settings);
    }
}

/// ## Summary
/// Retrieves the application configuration from the depot.
///
/// ## Errors
/// Returns an error if the configuration is not found in the depot.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot.obtain::<Arc<Settings>>().cloned().map_err(|_err| {
        AppError::CoreError(kairos_core::error::CoreError::StateUnavailable(
            "Configuration not found in depot",
        ))
    })
}
