use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use kairos_core::types::{DateRange, ViewMode};
use kairos_core::util::date::parse_date;

use super::types::{EventsResponse, OccurrencesResponse};
use crate::app::api::response::render_error;
use crate::error::{AppError, AppResult};
use crate::service_handler::get_service_from_depot;

/// ## Summary
/// GET /events - Lists every stored event, series anchors included.
///
/// ## Errors
/// Returns HTTP 500 if the store cannot be read
#[handler]
pub async fn list_events(depot: &mut Depot, res: &mut Response) {
    let service = match get_service_from_depot(depot) {
        Ok(s) => s,
        Err(e) => return render_error(res, &e),
    };

    match service.list().await {
        Ok(events) => {
            res.status_code(StatusCode::OK);
            res.render(Json(EventsResponse { events }));
        }
        Err(e) => render_error(res, &e.into()),
    }
}

/// ## Summary
/// GET /events/view - Materializes the occurrences of a date range.
///
/// The range is either `start` and `end`, or the `week`/`month` `view`
/// around `date`. An optional `q` keeps only occurrences whose title,
/// description or location contains it.
///
/// ## Errors
/// Returns HTTP 400 if the range parameters are missing or malformed
/// Returns HTTP 500 if the store cannot be read
#[handler]
pub async fn view_events(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let range = match view_range(req) {
        Ok(r) => r,
        Err(e) => return render_error(res, &e),
    };
    let term = req.query::<String>("q");

    let service = match get_service_from_depot(depot) {
        Ok(s) => s,
        Err(e) => return render_error(res, &e),
    };

    match service.view(range, term.as_deref()).await {
        Ok(occurrences) => {
            tracing::debug!(count = occurrences.len(), "Rendering view");
            res.status_code(StatusCode::OK);
            res.render(Json(OccurrencesResponse { occurrences }));
        }
        Err(e) => render_error(res, &e.into()),
    }
}

fn view_range(req: &Request) -> AppResult<DateRange> {
    if let Some(date) = req.query::<String>("date") {
        let date = parse_date(&date)?;
        let mode: ViewMode = req
            .query::<String>("view")
            .as_deref()
            .unwrap_or("week")
            .parse()?;
        return Ok(DateRange::around(mode, date));
    }

    let (Some(start), Some(end)) = (req.query::<String>("start"), req.query::<String>("end"))
    else {
        return Err(AppError::BadRequest(
            "either date or both start and end are required".to_string(),
        ));
    };
    Ok(DateRange::new(parse_date(&start)?, parse_date(&end)?)?)
}
