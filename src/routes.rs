use crate::{
    api::{leave, manager},
    auth::middleware::auth_middleware,
    config::Config,
    store::LeaveStore,
    utils::request_id::request_id_middleware,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};

pub fn configure<S: LeaveStore + Send + Sync + 'static>(
    cfg: &mut web::ServiceConfig,
    config: Config,
) {
    // Helper to build per-scope limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            .wrap(from_fn(request_id_middleware))
            .service(
                web::scope("/leave")
                    .wrap(build_limiter(config.rate_protected_per_min))
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::post().to(leave::create_leave::<S>))
                            .route(web::get().to(leave::list_leaves::<S>)),
                    )
                    // /leave/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(leave::get_leave::<S>))
                            .route(web::put().to(leave::update_leave::<S>))
                            .route(web::delete().to(leave::cancel_leave::<S>)),
                    ),
            )
            .service(
                web::scope("/manager/leave")
                    .wrap(build_limiter(config.rate_manager_per_min))
                    // /manager/leave
                    .service(
                        web::resource("").route(web::get().to(manager::pending_leaves::<S>)),
                    )
                    // /manager/leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(manager::approve_leave::<S>)),
                    )
                    // /manager/leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject")
                            .route(web::put().to(manager::reject_leave::<S>)),
                    ),
            ),
    );
}
