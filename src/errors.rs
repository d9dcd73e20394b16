use std::fmt;

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};

#[derive(Debug, Clone)]
pub enum ShortenerError {
    MethodNotAllowed(String),
    UnsupportedMediaType(String),
    InvalidBody(String),
    PayloadTooLarge(String),
    AliasNotFound(String),
    AliasSpaceExhausted(String),
    Config(String),
    FileOperation(String),
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::MethodNotAllowed(_) => "E001",
            ShortenerError::UnsupportedMediaType(_) => "E002",
            ShortenerError::InvalidBody(_) => "E003",
            ShortenerError::PayloadTooLarge(_) => "E004",
            ShortenerError::AliasNotFound(_) => "E005",
            ShortenerError::AliasSpaceExhausted(_) => "E006",
            ShortenerError::Config(_) => "E007",
            ShortenerError::FileOperation(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::MethodNotAllowed(_) => "Method Not Allowed",
            ShortenerError::UnsupportedMediaType(_) => "Unsupported Media Type",
            ShortenerError::InvalidBody(_) => "Invalid Request Body",
            ShortenerError::PayloadTooLarge(_) => "Payload Too Large",
            ShortenerError::AliasNotFound(_) => "Alias Not Found",
            ShortenerError::AliasSpaceExhausted(_) => "Alias Space Exhausted",
            ShortenerError::Config(_) => "Configuration Error",
            ShortenerError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenerError::MethodNotAllowed(msg)
            | ShortenerError::UnsupportedMediaType(msg)
            | ShortenerError::InvalidBody(msg)
            | ShortenerError::PayloadTooLarge(msg)
            | ShortenerError::AliasNotFound(msg)
            | ShortenerError::AliasSpaceExhausted(msg)
            | ShortenerError::Config(msg)
            | ShortenerError::FileOperation(msg) => msg,
        }
    }

    /// HTTP status used when the error reaches a client
    pub fn status(&self) -> StatusCode {
        match self {
            ShortenerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ShortenerError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ShortenerError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ShortenerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ShortenerError::AliasNotFound(_) => StatusCode::NOT_FOUND,
            ShortenerError::AliasSpaceExhausted(_)
            | ShortenerError::Config(_)
            | ShortenerError::FileOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于启动失败）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

impl ResponseError for ShortenerError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        // 内部错误不向客户端暴露细节
        let body = if self.status().is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.message().to_string()
        };

        HttpResponse::build(self.status())
            .insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"))
            .insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
            .body(format!("{}\n", body))
    }
}

// 便捷的构造函数
impl ShortenerError {
    pub fn method_not_allowed<T: Into<String>>(msg: T) -> Self {
        ShortenerError::MethodNotAllowed(msg.into())
    }

    pub fn unsupported_media_type<T: Into<String>>(msg: T) -> Self {
        ShortenerError::UnsupportedMediaType(msg.into())
    }

    pub fn invalid_body<T: Into<String>>(msg: T) -> Self {
        ShortenerError::InvalidBody(msg.into())
    }

    pub fn payload_too_large<T: Into<String>>(msg: T) -> Self {
        ShortenerError::PayloadTooLarge(msg.into())
    }

    pub fn alias_not_found<T: Into<String>>(msg: T) -> Self {
        ShortenerError::AliasNotFound(msg.into())
    }

    pub fn alias_space_exhausted<T: Into<String>>(msg: T) -> Self {
        ShortenerError::AliasSpaceExhausted(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::FileOperation(msg.into())
    }
}

impl From<std::io::Error> for ShortenerError {
    fn from(err: std::io::Error) -> Self {
        ShortenerError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for ShortenerError {
    fn from(err: config::ConfigError) -> Self {
        ShortenerError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ShortenerError::method_not_allowed("x").status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ShortenerError::unsupported_media_type("x").status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ShortenerError::invalid_body("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShortenerError::alias_not_found("x").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShortenerError::alias_space_exhausted("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            ShortenerError::method_not_allowed(""),
            ShortenerError::unsupported_media_type(""),
            ShortenerError::invalid_body(""),
            ShortenerError::payload_too_large(""),
            ShortenerError::alias_not_found(""),
            ShortenerError::alias_space_exhausted(""),
            ShortenerError::config(""),
            ShortenerError::file_operation(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = ShortenerError::config("server.address must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration Error: server.address must not be empty"
        );
    }

    #[actix_web::test]
    async fn test_error_response_is_plain_text() {
        let resp = ShortenerError::alias_not_found("Non-existing url-shorthand").error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert!(resp.headers().get(header::LOCATION).is_none());

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"Non-existing url-shorthand\n");
    }

    #[actix_web::test]
    async fn test_server_errors_hide_details() {
        let resp = ShortenerError::alias_space_exhausted("gave up after 16 attempts")
            .error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"Internal Server Error\n");
    }
}
