use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, web};
use tracing::{debug, error, trace};

use crate::errors::{Result, ShortenerError};
use crate::services::LinkService;
use crate::utils::is_valid_alias;

pub struct RedirectService;

impl RedirectService {
    pub async fn handle_redirect(
        path: web::Path<String>,
        links: web::Data<Arc<LinkService>>,
    ) -> Result<HttpResponse> {
        // `/{id}` never matches an empty segment; `GET /` is answered by the
        // shorten resource with 405
        let alias = path.into_inner();

        // 非法短码直接 404，不加锁查询
        if !is_valid_alias(&alias) {
            trace!("Invalid alias rejected: {}", alias);
            return Err(Self::not_found());
        }

        match links.resolve(&alias) {
            Some(url) => Self::finish_redirect(&alias, &url),
            None => {
                debug!("Alias not found: {}", alias);
                Err(Self::not_found())
            }
        }
    }

    #[inline]
    fn not_found() -> ShortenerError {
        ShortenerError::alias_not_found("Non-existing url-shorthand")
    }

    /// `Location` carries the stored bytes unchanged
    fn finish_redirect(alias: &str, url: &[u8]) -> Result<HttpResponse> {
        let location = HeaderValue::from_bytes(url).map_err(|_| {
            // Only reachable when the index was filled without the shorten handler
            error!("Stored URL for '{}' is not a valid header value", alias);
            Self::not_found()
        })?;

        Ok(HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
            .insert_header((header::LOCATION, location))
            .finish())
    }
}

pub fn redirect_routes() -> actix_web::Resource {
    web::resource("/{id}")
        .route(web::get().to(RedirectService::handle_redirect))
        .default_service(web::to(|| async {
            super::method_not_allowed(actix_web::http::Method::GET)
        }))
}
