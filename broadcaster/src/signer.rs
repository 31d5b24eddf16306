//! HMAC request signing for the Mekari API.
//!
//! Mekari authenticates requests with an `hmac` Authorization scheme: the
//! client signs the string `date: <RFC 1123 date>\n<METHOD> <path> HTTP/1.1`
//! with HMAC-SHA256 under its client secret and sends the Base64 digest
//! alongside the same `Date` header.  The server recomputes the digest from
//! the received headers, so the signature is only valid for the exact
//! second it was produced.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Content type attached to every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// API credentials for the `hmac` Authorization scheme.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Header set for one signed request.
///
/// Built fresh per request and never reused: the signature binds the `Date`
/// value, so a cached set goes stale as soon as the clock moves past the
/// signed second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub authorization: String,
    pub date: String,
    pub content_type: &'static str,
}

/// Sign `method` + `path` at the current UTC instant.
pub fn sign(method: &Method, path: &str, creds: &Credentials) -> SignedHeaders {
    sign_at(method, path, creds, Utc::now())
}

/// Deterministic variant of [`sign`] for a fixed instant.
///
/// The signing payload is exactly two lines joined by a single `\n` with no
/// trailing newline: `date: <date>` followed by the request line
/// `<METHOD> <path> HTTP/1.1`.  Inputs are not validated; an empty path or
/// secret still yields a well-formed header and the server rejects it.
pub fn sign_at(
    method: &Method,
    path: &str,
    creds: &Credentials,
    at: DateTime<Utc>,
) -> SignedHeaders {
    let date = http_date(at);
    let request_line = format!("{} {} HTTP/1.1", method.as_str().to_uppercase(), path);
    let payload = format!("date: {date}\n{request_line}");

    let mut mac = HmacSha256::new_from_slice(creds.client_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    let authorization = format!(
        "hmac username=\"{}\", algorithm=\"hmac-sha256\", headers=\"date request-line\", signature=\"{}\"",
        creds.client_id, signature
    );

    SignedHeaders {
        authorization,
        date,
        content_type: CONTENT_TYPE_JSON,
    }
}

/// RFC 1123 date with second precision, always `GMT`.
fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn http_date_is_rfc1123_gmt() {
        let at = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();
        assert_eq!(http_date(at), "Wed, 21 Oct 2015 07:28:00 GMT");
    }

    #[test]
    fn method_is_uppercased_in_request_line() {
        let creds = Credentials {
            client_id: "id".into(),
            client_secret: "secret".into(),
        };
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let lower = Method::from_bytes(b"post").unwrap();
        assert_eq!(
            sign_at(&lower, "/x", &creds, at),
            sign_at(&Method::POST, "/x", &creds, at)
        );
    }
}
