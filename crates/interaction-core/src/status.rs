//! # Status Taxonomy
//!
//! Transition outcomes are reported as named statuses grouped into a closed
//! set of families. Response shaping branches on [`StatusFamily`] with
//! exhaustive matches, never on numeric ranges.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The five standard status families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFamily {
    Informational,
    Successful,
    Redirection,
    ClientError,
    ServerError,
}

/// A named status a command or resource can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Continue,
    SwitchingProtocols,
    Ok,
    Created,
    Accepted,
    NonAuthoritativeInformation,
    NoContent,
    ResetContent,
    PartialContent,
    MovedPermanently,
    Found,
    SeeOther,
    NotModified,
    TemporaryRedirect,
    PermanentRedirect,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    RequestTimeout,
    Conflict,
    Gone,
    LengthRequired,
    PreconditionFailed,
    PayloadTooLarge,
    UnsupportedMediaType,
    UnprocessableEntity,
    Locked,
    PreconditionRequired,
    TooManyRequests,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
}

impl Status {
    /// The numeric status code.
    pub fn code(&self) -> u16 {
        match self {
            Status::Continue => 100,
            Status::SwitchingProtocols => 101,
            Status::Ok => 200,
            Status::Created => 201,
            Status::Accepted => 202,
            Status::NonAuthoritativeInformation => 203,
            Status::NoContent => 204,
            Status::ResetContent => 205,
            Status::PartialContent => 206,
            Status::MovedPermanently => 301,
            Status::Found => 302,
            Status::SeeOther => 303,
            Status::NotModified => 304,
            Status::TemporaryRedirect => 307,
            Status::PermanentRedirect => 308,
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::NotAcceptable => 406,
            Status::RequestTimeout => 408,
            Status::Conflict => 409,
            Status::Gone => 410,
            Status::LengthRequired => 411,
            Status::PreconditionFailed => 412,
            Status::PayloadTooLarge => 413,
            Status::UnsupportedMediaType => 415,
            Status::UnprocessableEntity => 422,
            Status::Locked => 423,
            Status::PreconditionRequired => 428,
            Status::TooManyRequests => 429,
            Status::InternalServerError => 500,
            Status::NotImplemented => 501,
            Status::BadGateway => 502,
            Status::ServiceUnavailable => 503,
            Status::GatewayTimeout => 504,
        }
    }

    pub fn family(&self) -> StatusFamily {
        match self {
            Status::Continue
            | Status::SwitchingProtocols => StatusFamily::Informational,
            Status::Ok
            | Status::Created
            | Status::Accepted
            | Status::NonAuthoritativeInformation
            | Status::NoContent
            | Status::ResetContent
            | Status::PartialContent => StatusFamily::Successful,
            Status::MovedPermanently
            | Status::Found
            | Status::SeeOther
            | Status::NotModified
            | Status::TemporaryRedirect
            | Status::PermanentRedirect => StatusFamily::Redirection,
            Status::BadRequest
            | Status::Unauthorized
            | Status::Forbidden
            | Status::NotFound
            | Status::MethodNotAllowed
            | Status::NotAcceptable
            | Status::RequestTimeout
            | Status::Conflict
            | Status::Gone
            | Status::LengthRequired
            | Status::PreconditionFailed
            | Status::PayloadTooLarge
            | Status::UnsupportedMediaType
            | Status::UnprocessableEntity
            | Status::Locked
            | Status::PreconditionRequired
            | Status::TooManyRequests => StatusFamily::ClientError,
            Status::InternalServerError
            | Status::NotImplemented
            | Status::BadGateway
            | Status::ServiceUnavailable
            | Status::GatewayTimeout => StatusFamily::ServerError,
        }
    }

    pub fn is_successful(&self) -> bool {
        self.family() == StatusFamily::Successful
    }

    /// The standard reason phrase.
    pub fn reason(&self) -> &'static str {
        match self {
            Status::Continue => "Continue",
            Status::SwitchingProtocols => "Switching Protocols",
            Status::Ok => "OK",
            Status::Created => "Created",
            Status::Accepted => "Accepted",
            Status::NonAuthoritativeInformation => "Non-Authoritative Information",
            Status::NoContent => "No Content",
            Status::ResetContent => "Reset Content",
            Status::PartialContent => "Partial Content",
            Status::MovedPermanently => "Moved Permanently",
            Status::Found => "Found",
            Status::SeeOther => "See Other",
            Status::NotModified => "Not Modified",
            Status::TemporaryRedirect => "Temporary Redirect",
            Status::PermanentRedirect => "Permanent Redirect",
            Status::BadRequest => "Bad Request",
            Status::Unauthorized => "Unauthorized",
            Status::Forbidden => "Forbidden",
            Status::NotFound => "Not Found",
            Status::MethodNotAllowed => "Method Not Allowed",
            Status::NotAcceptable => "Not Acceptable",
            Status::RequestTimeout => "Request Timeout",
            Status::Conflict => "Conflict",
            Status::Gone => "Gone",
            Status::LengthRequired => "Length Required",
            Status::PreconditionFailed => "Precondition Failed",
            Status::PayloadTooLarge => "Payload Too Large",
            Status::UnsupportedMediaType => "Unsupported Media Type",
            Status::UnprocessableEntity => "Unprocessable Entity",
            Status::Locked => "Locked",
            Status::PreconditionRequired => "Precondition Required",
            Status::TooManyRequests => "Too Many Requests",
            Status::InternalServerError => "Internal Server Error",
            Status::NotImplemented => "Not Implemented",
            Status::BadGateway => "Bad Gateway",
            Status::ServiceUnavailable => "Service Unavailable",
            Status::GatewayTimeout => "Gateway Timeout",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_follow_code_classes() {
        assert_eq!(Status::Continue.family(), StatusFamily::Informational);
        assert_eq!(Status::Created.family(), StatusFamily::Successful);
        assert_eq!(Status::SeeOther.family(), StatusFamily::Redirection);
        assert_eq!(Status::NotFound.family(), StatusFamily::ClientError);
        assert_eq!(Status::NotImplemented.family(), StatusFamily::ServerError);
    }

    #[test]
    fn display_includes_code_and_reason() {
        assert_eq!(Status::NotImplemented.to_string(), "501 Not Implemented");
        assert_eq!(Status::Ok.to_string(), "200 OK");
    }

    #[test]
    fn common_command_outcomes_are_named() {
        assert_eq!(Status::PartialContent.code(), 206);
        assert!(Status::PartialContent.is_successful());
        assert_eq!(Status::UnprocessableEntity.code(), 422);
        assert_eq!(Status::UnprocessableEntity.family(), StatusFamily::ClientError);
        assert_eq!(Status::TooManyRequests.to_string(), "429 Too Many Requests");
        assert_eq!(Status::GatewayTimeout.family(), StatusFamily::ServerError);
    }
}
