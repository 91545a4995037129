//! HTTP 路由

mod health;
mod proxy;

use actix_web::web;

pub use health::health_check;

/// Register the `/api/{resource}[/{id}]` passthrough routes.
///
/// 所有方法都进入 handler，由 handler 决定转发还是返回 405
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/{resource}", web::route().to(proxy::forward_collection))
            .route("/{resource}/{id}", web::route().to(proxy::forward_item)),
    );
}
