pub mod redirect;
pub mod shorten;

use actix_web::http::{Method, header};
use actix_web::{HttpResponse, ResponseError, web};

use crate::errors::ShortenerError;

pub use redirect::{RedirectService, redirect_routes};
pub use shorten::{ShortenService, ShortenSettings, shorten_routes};

/// Register every public route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(shorten_routes()).service(redirect_routes());
}

/// 405 for a bound path hit with the wrong method
pub(crate) fn method_not_allowed(allowed: Method) -> HttpResponse {
    let mut response =
        ShortenerError::method_not_allowed(format!("Only {} is allowed here", allowed))
            .error_response();
    if let Ok(value) = header::HeaderValue::from_str(allowed.as_str()) {
        response.headers_mut().insert(header::ALLOW, value);
    }
    response
}
