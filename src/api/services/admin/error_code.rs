//! Numeric API error codes

use serde_repr::{Deserialize_repr, Serialize_repr};
use ts_rs::TS;

use crate::errors::DotPlaceError;

use super::types::TS_EXPORT_PATH;

/// API error code
///
/// Serialized as a number. Grouped by thousands:
/// - 0: success
/// - 1000-1099: general
/// - 2000-2099: session
/// - 3000-3099: place listing
/// - 4000-4099: failed-login records
/// - 5000-5099: edit dialog files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, TS)]
#[ts(export, export_to = TS_EXPORT_PATH)]
#[ts(rename = "ErrorCode")]
#[ts(repr(enum))]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // General 1000-1099
    BadRequest = 1000,
    Unauthorized = 1001,
    NotFound = 1004,
    InternalServerError = 1005,
    InvalidDateFormat = 1012,
    ServiceUnavailable = 1030,

    // Session 2000-2099
    LoginRequired = 2000,
    LoginFieldsMissing = 2001,

    // Places 3000-3099
    PlaceNotFound = 3000,
    PlaceAlreadyExists = 3001,
    PlaceInvalid = 3002,

    // Failed logins 4000-4099
    FailAccountNotFound = 4000,
    FailAccountBatchEmpty = 4001,

    // Files 5000-5099
    FileNotFound = 5000,
    FileKindUnknown = 5001,
}

impl From<DotPlaceError> for ErrorCode {
    fn from(err: DotPlaceError) -> Self {
        match err {
            DotPlaceError::Validation(_) => ErrorCode::BadRequest,
            DotPlaceError::NotFound(_) => ErrorCode::NotFound,
            DotPlaceError::Conflict(_) => ErrorCode::BadRequest,
            DotPlaceError::Unauthorized(_) => ErrorCode::Unauthorized,
            DotPlaceError::DateParse(_) => ErrorCode::InvalidDateFormat,
            DotPlaceError::Config(_)
            | DotPlaceError::FileOperation(_)
            | DotPlaceError::Serialization(_) => ErrorCode::InternalServerError,
        }
    }
}
