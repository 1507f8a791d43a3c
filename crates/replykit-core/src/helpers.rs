// Rust guideline compliant 2026-10-17

//! Named envelope helpers, one per catalog status code.
//!
//! Each helper fixes its status code and forwards to [`build_envelope`].
//! Most take a single message; a handful fix the message, take a payload,
//! or fill a `key` field in the payload with a default.

use crate::envelope::{build_envelope, ResponseEnvelope};
use serde_json::{json, Value};
use std::fmt::Debug;

/// Message returned by [`unauthorized`].
pub const NOT_AUTHORIZED_MESSAGE: &str = "Not Authorized";

/// Message returned by [`error`]. The underlying error is never exposed.
pub const SERVER_ERROR_MESSAGE: &str = "Oops something went wrong";

/// Signature shared by the message-passthrough helpers.
pub type PassthroughHelper = fn(Value) -> ResponseEnvelope;

/// Signature shared by the keyed-payload helpers.
pub type KeyedHelper = fn(Option<&str>) -> ResponseEnvelope;

macro_rules! passthrough {
    ($( $(#[$meta:meta])* $name:ident => $code:literal; )*) => {
        $(
            $(#[$meta])*
            pub fn $name<M: Into<Value>>(message: M) -> ResponseEnvelope {
                build_envelope($code, message, Value::Null, Value::Null)
            }
        )*

        /// Every message-passthrough helper as `(code, name, helper)`.
        pub const PASSTHROUGH: &[(u16, &str, PassthroughHelper)] = &[
            $( ($code, stringify!($name), $name::<Value>), )*
        ];
    };
}

macro_rules! keyed {
    ($( $(#[$meta:meta])* $name:ident => $code:literal, $default:literal; )*) => {
        $(
            $(#[$meta])*
            #[doc = ""]
            #[doc = concat!("`key` defaults to `", $default, "` when `None` or empty.")]
            pub fn $name(key: Option<&str>) -> ResponseEnvelope {
                build_envelope($code, Value::Null, keyed_data(key, $default), Value::Null)
            }
        )*

        /// Every keyed-payload helper as `(code, default key, helper)`.
        pub const KEYED: &[(u16, &str, KeyedHelper)] = &[
            $( ($code, $default, $name), )*
        ];
    };
}

fn keyed_data(key: Option<&str>, default: &str) -> Value {
    let key = key.filter(|key| !key.is_empty()).unwrap_or(default);
    json!({ "key": key })
}

passthrough! {
    /// 100 Continue.
    continue_ => 100;
    /// 101 Switching Protocols.
    switching_protocols => 101;
    /// 102 Processing.
    processing => 102;

    /// 203 Non-Authoritative Information.
    non_authoritative_information => 203;
    /// 205 Reset Content.
    reset_content => 205;
    /// 206 Partial Content.
    partial_content => 206;
    /// 207 Multi-Status.
    multi_status => 207;
    /// 208 Already Reported.
    already_reported => 208;
    /// 226 IM Used.
    im_used => 226;

    /// 300 Multiple Choices.
    multiple_choices => 300;
    /// 301 Moved Permanently.
    moved_permanently => 301;
    /// 302 Found.
    found => 302;
    /// 303 See Other.
    see_other => 303;
    /// 304 Not Modified.
    not_modified => 304;
    /// 307 Temporary Redirect.
    temporary_redirect => 307;
    /// 308 Permanent Redirect.
    permanent_redirect => 308;

    /// 400 Bad Request.
    bad_request => 400;
    /// 405 Method Not Allowed.
    method_not_allowed => 405;
    /// 407 Proxy Authentication Required.
    proxy_authentication_required => 407;
    /// 408 Request Timeout.
    request_timeout => 408;
    /// 409 Conflict.
    conflict => 409;
    /// 410 Gone.
    gone => 410;
    /// 411 Length Required.
    length_required => 411;
    /// 412 Precondition Failed.
    precondition_failed => 412;
    /// 413 Payload Too Large.
    payload_too_large => 413;
    /// 414 URI Too Long.
    uri_too_long => 414;
    /// 415 Unsupported Media Type.
    unsupported_media_type => 415;
    /// 416 Range Not Satisfiable.
    range_not_satisfiable => 416;
    /// 417 Expectation Failed.
    expectation_failed => 417;
    /// 418 I'm a teapot.
    im_a_teapot => 418;
    /// 421 Misdirected Request.
    misdirected_request => 421;
    /// 422 Unprocessable Entity.
    unprocessable_entity => 422;
    /// 423 Locked.
    locked => 423;
    /// 424 Failed Dependency.
    failed_dependency => 424;
    /// 426 Upgrade Required.
    upgrade_required => 426;
    /// 428 Precondition Required.
    precondition_required => 428;
    /// 429 Too Many Requests.
    too_many_requests => 429;
    /// 431 Request Header Fields Too Large.
    request_header_fields_too_large => 431;
    /// 451 Unavailable For Legal Reasons.
    unavailable_for_legal_reasons => 451;

    /// 460: the client closed the connection before the load balancer's
    /// idle timeout elapsed.
    client_closed_connection => 460;
    /// 463: the load balancer received an `X-Forwarded-For` header with
    /// more than 30 addresses.
    too_many_forwarded_addresses => 463;
    /// 464: the request protocol does not match the target group's
    /// protocol version.
    incompatible_protocol_versions => 464;

    /// 501 Not Implemented.
    not_implemented => 501;
    /// 502 Bad Gateway.
    bad_gateway => 502;
    /// 503 Service Unavailable.
    service_unavailable => 503;
    /// 504 Gateway Timeout.
    gateway_timeout => 504;
    /// 505 HTTP Version Not Supported.
    http_version_not_supported => 505;
    /// 506 Variant Also Negotiates.
    variant_also_negotiates => 506;
    /// 507 Insufficient Storage.
    insufficient_storage => 507;
    /// 508 Loop Detected.
    loop_detected => 508;
    /// 510 Not Extended.
    not_extended => 510;
    /// 511 Network Authentication Required.
    network_authentication_required => 511;

    /// 561: the identity provider rejected the load balancer's
    /// authentication request.
    load_balancer_unauthorized => 561;
}

keyed! {
    /// 201 Created.
    created => 201, "PENDING";
    /// 202 Accepted.
    accepted => 202, "ACCEPTED";
    /// 204 No Content.
    no_content => 204, "NO_CONTENT";
    /// 404 Not Found.
    not_found => 404, "ERR_NOT_FOUND";
    /// 406 Not Acceptable.
    not_acceptable => 406, "NOT_ACCEPTABLE";
}

/// 200 OK with a payload and no message.
///
/// `key` is stored in the envelope's `stack` slot, where callers use it for
/// trace or correlation identifiers.
pub fn success(data: impl Into<Value>, key: impl Into<Value>) -> ResponseEnvelope {
    build_envelope(200, "", data, key)
}

/// 200 OK with a payload and a message.
pub fn success_message(data: impl Into<Value>, message: impl Into<Value>) -> ResponseEnvelope {
    build_envelope(200, message, data, Value::Null)
}

/// 401 Unauthorized with the fixed message "Not Authorized".
#[must_use]
pub fn unauthorized() -> ResponseEnvelope {
    build_envelope(401, NOT_AUTHORIZED_MESSAGE, Value::Null, Value::Null)
}

/// 403 Forbidden with a message and a payload.
pub fn forbidden(message: impl Into<Value>, data: impl Into<Value>) -> ResponseEnvelope {
    build_envelope(403, message, data, Value::Null)
}

/// 500 Internal Server Error.
///
/// Logs `err` at error level, then returns a fixed envelope. The error is
/// never copied into the envelope.
pub fn error<E: Debug + ?Sized>(err: &E) -> ResponseEnvelope {
    tracing::error!(error = ?err, "unhandled error, responding with 500");
    build_envelope(500, SERVER_ERROR_MESSAGE, Value::Null, Value::Null)
}
