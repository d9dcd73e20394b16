use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{Error, HttpRequest, HttpResponse, web};
use tracing::{debug, trace};

use crate::config::{ServerConfig, default_max_body_size, default_strict_content_type};
use crate::errors::{Result, ShortenerError};
use crate::services::LinkService;

/// Request handling knobs for `POST /`
#[derive(Debug, Clone)]
pub struct ShortenSettings {
    /// Reject bodies not declared as exactly `text/plain`
    pub strict_content_type: bool,
    pub max_body_size: usize,
}

impl Default for ShortenSettings {
    fn default() -> Self {
        Self {
            strict_content_type: default_strict_content_type(),
            max_body_size: default_max_body_size(),
        }
    }
}

impl From<&ServerConfig> for ShortenSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            strict_content_type: config.strict_content_type,
            max_body_size: config.max_body_size,
        }
    }
}

impl ShortenSettings {
    /// Body extractor limit; register next to the settings
    pub fn payload_config(&self) -> web::PayloadConfig {
        web::PayloadConfig::new(self.max_body_size)
    }
}

pub struct ShortenService;

impl ShortenService {
    pub async fn handle_shorten(
        req: HttpRequest,
        body: std::result::Result<web::Bytes, Error>,
        links: web::Data<Arc<LinkService>>,
        settings: Option<web::Data<ShortenSettings>>,
    ) -> Result<HttpResponse> {
        let strict = settings.map_or_else(default_strict_content_type, |s| s.strict_content_type);

        // 415 takes precedence over any body error
        if strict && !Self::is_plain_text(&req) {
            trace!(
                "Rejected content type {:?}",
                req.headers().get(header::CONTENT_TYPE)
            );
            return Err(ShortenerError::unsupported_media_type(
                "Content-Type must be text/plain",
            ));
        }

        let url = Self::parse_url(body.map_err(Self::body_error)?)?;

        let outcome = links.shorten(url)?;
        if !outcome.created {
            debug!("Returning existing alias '{}'", outcome.alias);
        }

        let body = outcome.short_url;
        Ok(HttpResponse::Created()
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .insert_header((header::CONTENT_LENGTH, body.len()))
            .body(body))
    }

    /// Declared content type is exactly `text/plain`
    fn is_plain_text(req: &HttpRequest) -> bool {
        req.headers()
            .get(header::CONTENT_TYPE)
            .is_some_and(|value| value == "text/plain")
    }

    fn body_error(err: Error) -> ShortenerError {
        if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
            ShortenerError::payload_too_large(format!("Request body is too large: {}", err))
        } else {
            ShortenerError::invalid_body(format!("Cannot read request body: {}", err))
        }
    }

    /// The URL is opaque; it only has to fit in a `Location` header
    fn parse_url(body: web::Bytes) -> Result<web::Bytes> {
        if HeaderValue::from_bytes(&body).is_err() {
            return Err(ShortenerError::invalid_body(
                "URL contains control characters and cannot be redirected to",
            ));
        }
        Ok(body)
    }
}

pub fn shorten_routes() -> actix_web::Resource {
    web::resource("/")
        .route(web::post().to(ShortenService::handle_shorten))
        .default_service(web::to(|| async {
            super::method_not_allowed(actix_web::http::Method::POST)
        }))
}
