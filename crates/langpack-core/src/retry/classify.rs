//! Map discovery failures to retry error kinds.

use super::policy::ErrorKind;
use crate::discovery::DiscoveryError;

pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

pub fn classify(e: &DiscoveryError) -> ErrorKind {
    match e {
        DiscoveryError::Curl(ce) => classify_curl_error(ce),
        DiscoveryError::Http(code) => classify_http_status(*code),
        DiscoveryError::EmptyVersion
        | DiscoveryError::InvalidLocator { .. }
        | DiscoveryError::Io { .. }
        | DiscoveryError::Decode(_)
        | DiscoveryError::NotAnObject(_) => ErrorKind::Other,
    }
}
