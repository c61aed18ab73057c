use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use kairos_service::calendar::SubmitOutcome;
use kairos_store::model::OccurrenceRef;

use super::types::{OverlapRequest, OverlapsResponse, SubmitRequest};
use crate::app::api::response::render_error;
use crate::error::AppError;
use crate::service_handler::get_service_from_depot;

/// ## Summary
/// POST /events/overlaps - Lists the stored events a form would overlap.
///
/// ## Errors
/// Returns HTTP 400 if the request body is invalid
/// Returns HTTP 500 if the store cannot be read
#[handler]
pub async fn check_overlaps(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let overlap_req: OverlapRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse overlap request");
            return render_error(res, &AppError::BadRequest("Invalid request body".to_string()));
        }
    };
    let target = overlap_req.target_id.as_deref().map(OccurrenceRef::parse);

    let service = match get_service_from_depot(depot) {
        Ok(s) => s,
        Err(e) => return render_error(res, &e),
    };

    match service.overlaps(&overlap_req.event, target.as_ref()).await {
        Ok(overlaps) => {
            res.status_code(StatusCode::OK);
            res.render(Json(OverlapsResponse { overlaps }));
        }
        Err(e) => render_error(res, &e.into()),
    }
}

/// ## Summary
/// POST /events - Creates an event.
///
/// ## Side Effects
/// - Stores the event unless it overlaps others and `confirmOverlap` is unset
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid or fails validation
/// Returns HTTP 409 with the overlapping events if confirmation is required
#[handler]
pub async fn create_event(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    submit(req, depot, res, None, StatusCode::CREATED).await;
}

/// ## Summary
/// PUT /events/{id} - Replaces an event, or detaches a virtual occurrence.
///
/// For an id of the form `{series}-recurring-{date}` the submitted fields
/// become a standalone event on that date and the series skips the date.
///
/// ## Side Effects
/// - Updates the stored event, or updates the series and stores a new event
///
/// ## Errors
/// Returns HTTP 400 if the body is invalid or fails validation
/// Returns HTTP 404 if the event or series does not exist
/// Returns HTTP 409 with the overlapping events if confirmation is required
#[handler]
pub async fn update_event(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(id) = req.param::<String>("id") else {
        return render_error(res, &AppError::BadRequest("Event ID required".to_string()));
    };
    submit(req, depot, res, Some(OccurrenceRef::parse(&id)), StatusCode::OK).await;
}

async fn submit(
    req: &mut Request,
    depot: &Depot,
    res: &mut Response,
    target: Option<OccurrenceRef>,
    saved_status: StatusCode,
) {
    let submit_req: SubmitRequest = match req.parse_json().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse submit request");
            return render_error(res, &AppError::BadRequest("Invalid request body".to_string()));
        }
    };

    let service = match get_service_from_depot(depot) {
        Ok(s) => s,
        Err(e) => return render_error(res, &e),
    };

    match service
        .submit(submit_req.event, target, submit_req.confirm_overlap)
        .await
    {
        Ok(SubmitOutcome::Saved(event)) => {
            res.status_code(saved_status);
            res.render(Json(event));
        }
        Ok(SubmitOutcome::Conflicts(overlaps)) => {
            res.status_code(StatusCode::CONFLICT);
            res.render(Json(OverlapsResponse { overlaps }));
        }
        Err(e) => render_error(res, &e.into()),
    }
}

/// ## Summary
/// DELETE /events/{id} - Deletes an event, or one occurrence of a series.
///
/// ## Side Effects
/// - Removes the stored event, or adds the date to the series' exceptions
///
/// ## Errors
/// Returns HTTP 404 if the event or series does not exist
#[handler]
pub async fn delete_event(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(id) = req.param::<String>("id") else {
        return render_error(res, &AppError::BadRequest("Event ID required".to_string()));
    };
    let target = OccurrenceRef::parse(&id);

    let service = match get_service_from_depot(depot) {
        Ok(s) => s,
        Err(e) => return render_error(res, &e),
    };

    match service.delete(&target).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_error(res, &e.into()),
    }
}
