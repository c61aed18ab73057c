//! `/api/notifications` handler.

use std::collections::HashSet;

use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Serialize;

use kairos_core::constants::NOTIFICATIONS_ROUTE_COMPONENT;
use kairos_core::util::date::parse_datetime;
use kairos_service::calendar::Reminder;

use super::response::render_error;
use crate::service_handler::get_service_from_depot;

#[derive(Debug, Serialize)]
pub struct RemindersResponse {
    pub reminders: Vec<Reminder>,
}

/// ## Summary
/// GET /notifications - Lists the reminders due at `at`.
///
/// `at` is a local `YYYY-MM-DDTHH:MM` and defaults to the server's local
/// time. `notified` is a comma-separated list of occurrence ids the client
/// has already shown; they are left out.
///
/// ## Errors
/// Returns HTTP 400 if `at` is malformed
/// Returns HTTP 500 if the store cannot be read
#[handler]
async fn due_notifications(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let now = match req.query::<String>("at") {
        Some(at) => match parse_datetime(&at) {
            Ok(now) => now,
            Err(e) => return render_error(res, &e.into()),
        },
        None => chrono::Local::now().naive_local(),
    };
    let notified: HashSet<String> = req
        .query::<String>("notified")
        .map(|ids| {
            ids.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let service = match get_service_from_depot(depot) {
        Ok(s) => s,
        Err(e) => return render_error(res, &e),
    };

    match service.reminders(now, &notified).await {
        Ok(reminders) => {
            res.status_code(StatusCode::OK);
            res.render(Json(RemindersResponse { reminders }));
        }
        Err(e) => render_error(res, &e.into()),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NOTIFICATIONS_ROUTE_COMPONENT).get(due_notifications)
}
