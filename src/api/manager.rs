use actix_web::{HttpResponse, Responder, web};
use uuid::Uuid;

use crate::auth::auth::AuthUser;
use crate::model::leave::{ApproveLeave, LeaveRequest, RejectLeave};
use crate::service::email::EmailService;
use crate::service::leave::LeaveService;
use crate::store::LeaveStore;
use crate::utils::request_id::RequestId;

/* =========================
Pending review queue
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/manager/leave",
    responses(
        (status = 200, description = "Pending leave requests, oldest first", body = [LeaveRequest]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Manager"
)]
pub async fn pending_leaves<S: LeaveStore + Send + Sync + 'static>(
    auth: AuthUser,
    request_id: RequestId,
    service: web::Data<LeaveService<S>>,
) -> actix_web::Result<impl Responder> {
    auth.require_manager()?;

    let leaves = service.list_pending().await?;

    tracing::debug!(request_id = %request_id, count = leaves.len(), "Listed pending leave requests");
    Ok(HttpResponse::Ok().json(leaves))
}

/* =========================
Approve leave request
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/manager/leave/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Leave request id")
    ),
    request_body = ApproveLeave,
    responses(
        (status = 200, description = "Leave request approved", body = LeaveRequest),
        (status = 400, description = "Request already settled"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Manager"
)]
pub async fn approve_leave<S: LeaveStore + Send + Sync + 'static>(
    auth: AuthUser,
    request_id: RequestId,
    service: web::Data<LeaveService<S>>,
    email: web::Data<EmailService>,
    path: web::Path<Uuid>,
    payload: web::Json<ApproveLeave>,
) -> actix_web::Result<impl Responder> {
    auth.require_manager()?;

    let id = path.into_inner();
    let leave = service
        .approve(id, &payload.comment)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, leave_id = %id, reviewer = %auth.employee_id, error = %e, "Failed to approve leave request");
        })?;

    tracing::info!(request_id = %request_id, leave_id = %id, reviewer = %auth.employee_id, "Leave request approved");

    notify(email.get_ref().clone(), leave.clone(), Outcome::Approved);

    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Reject leave request
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/manager/leave/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Leave request id")
    ),
    request_body = RejectLeave,
    responses(
        (status = 200, description = "Leave request rejected", body = LeaveRequest),
        (status = 400, description = "Missing/short comment or request already settled"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Manager"
)]
pub async fn reject_leave<S: LeaveStore + Send + Sync + 'static>(
    auth: AuthUser,
    request_id: RequestId,
    service: web::Data<LeaveService<S>>,
    email: web::Data<EmailService>,
    path: web::Path<Uuid>,
    payload: web::Json<RejectLeave>,
) -> actix_web::Result<impl Responder> {
    auth.require_manager()?;

    let id = path.into_inner();
    let leave = service
        .reject(id, &payload.comment)
        .await
        .inspect_err(|e| {
            tracing::warn!(request_id = %request_id, leave_id = %id, reviewer = %auth.employee_id, error = %e, "Failed to reject leave request");
        })?;

    tracing::info!(request_id = %request_id, leave_id = %id, reviewer = %auth.employee_id, "Leave request rejected");

    notify(email.get_ref().clone(), leave.clone(), Outcome::Rejected);

    Ok(HttpResponse::Ok().json(leave))
}

enum Outcome {
    Approved,
    Rejected,
}

/// Dispatches the outcome email as a detached background task. The SMTP
/// transport is blocking, so the send runs on the blocking pool; failures
/// are logged and never rejoined to the request that triggered them.
fn notify(email: EmailService, leave: LeaveRequest, outcome: Outcome) {
    let leave_id = leave.id;

    actix_web::rt::spawn(async move {
        let result = web::block(move || match outcome {
            Outcome::Approved => email.send_approval(&leave),
            Outcome::Rejected => email.send_rejection(&leave),
        })
        .await;

        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!(error = %e, leave_id = %leave_id, "Failed to send outcome email");
            }
            Err(e) => {
                tracing::error!(error = %e, leave_id = %leave_id, "Outcome email task failed");
            }
        }
    });
}
