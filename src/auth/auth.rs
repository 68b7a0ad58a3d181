use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

use crate::model::role::Role;
use crate::models::Claims;

/// The authenticated actor, resolved by the auth middleware and stored in
/// request extensions.
#[derive(Clone)]
pub struct AuthUser {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl AuthUser {
    pub fn from_claims(claims: Claims) -> Self {
        let roles = claims
            .roles
            .iter()
            .filter_map(|r| Role::from_name(r))
            .collect();

        AuthUser {
            employee_id: claims.sub,
            name: claims.name,
            email: claims.email,
            roles,
        }
    }

    pub fn is_manager(&self) -> bool {
        self.roles
            .iter()
            .any(|r| matches!(r, Role::Manager | Role::Admin))
    }

    pub fn require_manager(&self) -> actix_web::Result<()> {
        if self.is_manager() {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("Manager/Admin only"))
        }
    }
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(ErrorUnauthorized("Missing authentication"))),
        }
    }
}
