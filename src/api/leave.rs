use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::auth::AuthUser;
use crate::error::LeaveError;
use crate::model::leave::{CreateLeave, LeaveRequest, UpdateLeave};
use crate::service::leave::LeaveService;
use crate::store::LeaveStore;
use crate::utils::request_id::RequestId;

/* =========================
Submit leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request submitted", body = LeaveRequest),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn create_leave<S: LeaveStore + Send + Sync + 'static>(
    auth: AuthUser,
    request_id: RequestId,
    service: web::Data<LeaveService<S>>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    let req = payload.into_inner();

    // Caller-side date validation; the engine still guards against a
    // non-positive day count on its own
    if req.start_date > req.end_date {
        return Err(LeaveError::invalid("start date must be before end date").into());
    }
    let today = Utc::now().date_naive();
    if req.start_date < today {
        return Err(LeaveError::invalid("start date cannot be in the past").into());
    }

    let leave = service
        .create(req, &auth.employee_id, &auth.name, &auth.email)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, employee_id = %auth.employee_id, error = %e, "Failed to create leave request");
        })?;

    tracing::info!(
        request_id = %request_id,
        leave_id = %leave.id,
        employee_id = %auth.employee_id,
        days = leave.days,
        "Leave request created"
    );
    Ok(HttpResponse::Created().json(leave))
}

/* =========================
List own leave requests
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    responses(
        (status = 200, description = "Caller's leave requests, newest first", body = [LeaveRequest]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn list_leaves<S: LeaveStore + Send + Sync + 'static>(
    auth: AuthUser,
    request_id: RequestId,
    service: web::Data<LeaveService<S>>,
) -> actix_web::Result<impl Responder> {
    let leaves = service.list_by_owner(&auth.employee_id).await?;

    tracing::debug!(
        request_id = %request_id,
        employee_id = %auth.employee_id,
        count = leaves.len(),
        "Listed leave requests"
    );
    Ok(HttpResponse::Ok().json(leaves))
}

/* =========================
Get a single leave request
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/{id}",
    params(
        ("id" = Uuid, Path, description = "Leave request id")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Leave request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn get_leave<S: LeaveStore + Send + Sync + 'static>(
    auth: AuthUser,
    request_id: RequestId,
    service: web::Data<LeaveService<S>>,
    path: web::Path<Uuid>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let leave = service.get(id).await?;

    // Read access is owner-only; the review queue has its own endpoint
    if !leave.is_owned_by(&auth.employee_id) {
        tracing::warn!(
            request_id = %request_id,
            leave_id = %id,
            requester = %auth.employee_id,
            "Denied access to another owner's leave request"
        );
        return Err(LeaveError::Unauthorized.into());
    }

    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Update a pending leave request
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{id}",
    params(
        ("id" = Uuid, Path, description = "Leave request id")
    ),
    request_body = UpdateLeave,
    responses(
        (status = 200, description = "Leave request updated", body = LeaveRequest),
        (status = 400, description = "Invalid fields or status"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Leave request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn update_leave<S: LeaveStore + Send + Sync + 'static>(
    auth: AuthUser,
    request_id: RequestId,
    service: web::Data<LeaveService<S>>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateLeave>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let req = payload.into_inner();

    if let (Some(start), Some(end)) = (req.start_date, req.end_date) {
        if start > end {
            return Err(LeaveError::invalid("start date must be before end date").into());
        }
    } else if let Some(start) = req.start_date {
        let today = Utc::now().date_naive();
        if start < today {
            return Err(LeaveError::invalid("start date cannot be in the past").into());
        }
    }

    let leave = service
        .update(id, &auth.employee_id, req)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, leave_id = %id, employee_id = %auth.employee_id, error = %e, "Failed to update leave request");
        })?;

    tracing::info!(request_id = %request_id, leave_id = %id, "Leave request updated");
    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Cancel a pending leave request
========================= */
#[utoipa::path(
    delete,
    path = "/api/v1/leave/{id}",
    params(
        ("id" = Uuid, Path, description = "Leave request id")
    ),
    responses(
        (status = 204, description = "Leave request cancelled"),
        (status = 400, description = "Request already settled"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Leave request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn cancel_leave<S: LeaveStore + Send + Sync + 'static>(
    auth: AuthUser,
    request_id: RequestId,
    service: web::Data<LeaveService<S>>,
    path: web::Path<Uuid>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    service
        .cancel(id, &auth.employee_id)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, leave_id = %id, employee_id = %auth.employee_id, error = %e, "Failed to cancel leave request");
        })?;

    tracing::info!(request_id = %request_id, leave_id = %id, "Leave request cancelled");
    Ok(HttpResponse::NoContent().finish())
}
