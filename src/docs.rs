use crate::model::leave::{
    ApproveLeave, CreateLeave, LeaveRequest, LeaveStatus, LeaveType, RejectLeave, UpdateLeave,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management System API",
        version = "1.0.0",
        description = r#"
## Leave Management System

This API powers a **leave-request management** backend.

### 🔹 Key Features
- **Employee Self-Service**
  - Submit, view, edit, and cancel time-off requests
- **Manager Review**
  - FIFO pending queue, approve/reject with comments
- **Email Notifications**
  - Outcome emails sent to the employee, fire-and-forget

### 🔐 Security
All endpoints are protected using **JWT Bearer authentication**.
Manager endpoints additionally require the **manager** or **admin** role.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave::create_leave,
        crate::api::leave::list_leaves,
        crate::api::leave::get_leave,
        crate::api::leave::update_leave,
        crate::api::leave::cancel_leave,

        crate::api::manager::pending_leaves,
        crate::api::manager::approve_leave,
        crate::api::manager::reject_leave,
    ),
    components(
        schemas(
            LeaveRequest,
            LeaveType,
            LeaveStatus,
            CreateLeave,
            UpdateLeave,
            ApproveLeave,
            RejectLeave
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Leave", description = "Employee leave APIs"),
        (name = "Manager", description = "Manager review APIs"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
