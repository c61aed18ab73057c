use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use kairos_core::error::CoreError;
use kairos_service::calendar::CalendarService;

pub struct CalendarServiceHandler {
    pub service: Arc<CalendarService>,
}

#[async_trait]
impl salvo::Handler for CalendarServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.service));
    }
}

/// ## Summary
/// Retrieves the calendar service from the depot.
///
/// ## Errors
/// Returns an error if the calendar service is not found in the depot.
pub fn get_service_from_depot(depot: &salvo::Depot) -> AppResult<Arc<CalendarService>> {
    depot
        .obtain::<Arc<CalendarService>>()
        .cloned()
        .map_err(|_err| CoreError::StateUnavailable("Calendar service not found in depot").into())
}
