use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Apache combined log format plus the time taken, in milliseconds.
pub const COMBINED_LOG_FORMAT: &str =
    r#"%a - - %t "%r" %s %b "%{Referer}i" "%{User-Agent}i" %Dms"#;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
     base-uri 'self'; \
     font-src 'self' https: data:; \
     form-action 'self'; \
     frame-ancestors 'self'; \
     img-src 'self' data:; \
     object-src 'none'; \
     script-src 'self'; \
     script-src-attr 'none'; \
     style-src 'self' https: 'unsafe-inline'";

/// Security headers added to every response that does not already set them.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY))
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "SAMEORIGIN"))
        .add((header::REFERRER_POLICY, "no-referrer"))
        .add((header::X_DNS_PREFETCH_CONTROL, "off"))
}

/// Any origin, method and header; preflight requests are answered before
/// routing.
pub fn cors() -> Cors {
    Cors::permissive()
}
