// Rust guideline compliant 2026-10-17

//! Static catalog of supported status codes.
//!
//! Standard codes follow the IANA HTTP status code registry. The vendor
//! entries (460, 463, 464, 561) are AWS Elastic Load Balancer extensions and
//! are not registered with IANA.

use crate::{Error, Result};
use serde::Serialize;

/// Status class derived from the hundreds digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
}

impl Category {
    /// Classifies a status code by range.
    ///
    /// # Returns
    ///
    /// The category, or `None` for codes outside 100-599.
    #[must_use]
    pub fn of(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(Self::Informational),
            200..=299 => Some(Self::Success),
            300..=399 => Some(Self::Redirection),
            400..=499 => Some(Self::ClientError),
            500..=599 => Some(Self::ServerError),
            _ => None,
        }
    }
}

/// A catalog entry for one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    /// Numeric status code.
    pub code: u16,
    /// Reason phrase.
    pub reason: &'static str,
    /// Status class.
    pub category: Category,
    /// Whether the code is a load-balancer extension outside the IANA registry.
    pub vendor: bool,
    /// Name of the helper in [`crate::helpers`] that produces this code.
    pub helper: &'static str,
}

macro_rules! catalog {
    ($( $code:literal, $reason:literal, $category:ident, $vendor:literal, $helper:literal; )*) => {
        static CATALOG: &[StatusInfo] = &[
            $(
                StatusInfo {
                    code: $code,
                    reason: $reason,
                    category: Category::$category,
                    vendor: $vendor,
                    helper: $helper,
                },
            )*
        ];
    };
}

catalog! {
    100, "Continue", Informational, false, "continue_";
    101, "Switching Protocols", Informational, false, "switching_protocols";
    102, "Processing", Informational, false, "processing";

    200, "OK", Success, false, "success";
    201, "Created", Success, false, "created";
    202, "Accepted", Success, false, "accepted";
    203, "Non-Authoritative Information", Success, false, "non_authoritative_information";
    204, "No Content", Success, false, "no_content";
    205, "Reset Content", Success, false, "reset_content";
    206, "Partial Content", Success, false, "partial_content";
    207, "Multi-Status", Success, false, "multi_status";
    208, "Already Reported", Success, false, "already_reported";
    226, "IM Used", Success, false, "im_used";

    300, "Multiple Choices", Redirection, false, "multiple_choices";
    301, "Moved Permanently", Redirection, false, "moved_permanently";
    302, "Found", Redirection, false, "found";
    303, "See Other", Redirection, false, "see_other";
    304, "Not Modified", Redirection, false, "not_modified";
    307, "Temporary Redirect", Redirection, false, "temporary_redirect";
    308, "Permanent Redirect", Redirection, false, "permanent_redirect";

    400, "Bad Request", ClientError, false, "bad_request";
    401, "Unauthorized", ClientError, false, "unauthorized";
    403, "Forbidden", ClientError, false, "forbidden";
    404, "Not Found", ClientError, false, "not_found";
    405, "Method Not Allowed", ClientError, false, "method_not_allowed";
    406, "Not Acceptable", ClientError, false, "not_acceptable";
    407, "Proxy Authentication Required", ClientError, false, "proxy_authentication_required";
    408, "Request Timeout", ClientError, false, "request_timeout";
    409, "Conflict", ClientError, false, "conflict";
    410, "Gone", ClientError, false, "gone";
    411, "Length Required", ClientError, false, "length_required";
    412, "Precondition Failed", ClientError, false, "precondition_failed";
    413, "Payload Too Large", ClientError, false, "payload_too_large";
    414, "URI Too Long", ClientError, false, "uri_too_long";
    415, "Unsupported Media Type", ClientError, false, "unsupported_media_type";
    416, "Range Not Satisfiable", ClientError, false, "range_not_satisfiable";
    417, "Expectation Failed", ClientError, false, "expectation_failed";
    418, "I'm a teapot", ClientError, false, "im_a_teapot";
    421, "Misdirected Request", ClientError, false, "misdirected_request";
    422, "Unprocessable Entity", ClientError, false, "unprocessable_entity";
    423, "Locked", ClientError, false, "locked";
    424, "Failed Dependency", ClientError, false, "failed_dependency";
    426, "Upgrade Required", ClientError, false, "upgrade_required";
    428, "Precondition Required", ClientError, false, "precondition_required";
    429, "Too Many Requests", ClientError, false, "too_many_requests";
    431, "Request Header Fields Too Large", ClientError, false, "request_header_fields_too_large";
    451, "Unavailable For Legal Reasons", ClientError, false, "unavailable_for_legal_reasons";
    460, "Client Closed Connection", ClientError, true, "client_closed_connection";
    463, "Too Many Forwarded Addresses", ClientError, true, "too_many_forwarded_addresses";
    464, "Incompatible Protocol Versions", ClientError, true, "incompatible_protocol_versions";

    500, "Internal Server Error", ServerError, false, "error";
    501, "Not Implemented", ServerError, false, "not_implemented";
    502, "Bad Gateway", ServerError, false, "bad_gateway";
    503, "Service Unavailable", ServerError, false, "service_unavailable";
    504, "Gateway Timeout", ServerError, false, "gateway_timeout";
    505, "HTTP Version Not Supported", ServerError, false, "http_version_not_supported";
    506, "Variant Also Negotiates", ServerError, false, "variant_also_negotiates";
    507, "Insufficient Storage", ServerError, false, "insufficient_storage";
    508, "Loop Detected", ServerError, false, "loop_detected";
    510, "Not Extended", ServerError, false, "not_extended";
    511, "Network Authentication Required", ServerError, false, "network_authentication_required";
    561, "Load Balancer Unauthorized", ServerError, true, "load_balancer_unauthorized";
}

/// Returns every catalog entry in ascending code order.
#[must_use]
pub fn all() -> &'static [StatusInfo] {
    CATALOG
}

/// Looks up a status code.
#[must_use]
pub fn lookup(code: u16) -> Option<&'static StatusInfo> {
    CATALOG
        .binary_search_by_key(&code, |info| info.code)
        .ok()
        .map(|index| &CATALOG[index])
}

/// Looks up a status code, failing for codes outside the catalog.
///
/// # Errors
///
/// Returns [`Error::UnknownStatus`] if the code has no catalog entry.
pub fn require(code: u16) -> Result<&'static StatusInfo> {
    lookup(code).ok_or(Error::UnknownStatus(code))
}

/// Returns the reason phrase for a status code.
#[must_use]
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    lookup(code).map(|info| info.reason)
}

/// Returns the vendor extension entries.
pub fn vendor_codes() -> impl Iterator<Item = &'static StatusInfo> {
    CATALOG.iter().filter(|info| info.vendor)
}
