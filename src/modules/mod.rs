use actix_web::web;

pub mod health;
pub mod offers;

/// Register every route plus the JSON body error handling shared by them
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(crate::middleware::json_config())
        .configure(health::configure)
        .configure(offers::configure);
}
