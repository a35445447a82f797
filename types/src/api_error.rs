//! Home of [`ApiError`], the error taxonomy surfaced to callers when a
//! transaction reverts.

use core::fmt::{self, Debug, Formatter};
use core::{u16, u8};

use crate::{bytesrepr, system_contract_errors::pos, CLValueError};

/// All `ApiError` variants defined in this library other than
/// `ApiError::User` will convert to a `u32` value less than or equal to
/// `RESERVED_ERROR_MAX`.
const RESERVED_ERROR_MAX: u32 = u16::MAX as u32; // 0..=65535

/// Proof of Stake errors (defined in
/// "types/src/system_contract_errors/pos.rs") will have this value added to
/// them when being converted to a `u32`.
const POS_ERROR_OFFSET: u32 = RESERVED_ERROR_MAX - u8::MAX as u32; // 65280..=65535

/// Variants to be surfaced by `revert()`.
///
/// Variants other than `ApiError::User` represent a `u32` in the range
/// `(0, u16::MAX]`, while `ApiError::User` represents a `u32` in the range
/// `(u16::MAX, 2 * u16::MAX + 1]`.
///
/// Users can specify a C-style enum and implement `From` to ease revert
/// usage, e.g.
/// ```
/// use bonding_types::ApiError;
///
/// #[repr(u16)]
/// enum FailureCode {
///     Zero = 0,  // 65,536 as an ApiError::User
///     One,       // 65,537 as an ApiError::User
///     Two        // 65,538 as an ApiError::User
/// }
///
/// impl From<FailureCode> for ApiError {
///     fn from(code: FailureCode) -> Self {
///         ApiError::User(code as u16)
///     }
/// }
///
/// assert_eq!(ApiError::User(1), FailureCode::One.into());
/// assert_eq!(65_536, u32::from(ApiError::from(FailureCode::Zero)));
/// assert_eq!(65_538, u32::from(ApiError::from(FailureCode::Two)));
/// ```
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Optional data was unexpectedly `None`.
    None,
    /// Specified argument not provided.
    MissingArgument,
    /// Argument not of correct type.
    InvalidArgument,
    /// Failed to deserialize a value.
    Deserialize,
    /// Failed to transfer motes.
    Transfer,
    /// Returned when a contract tries to obtain a reference to a system
    /// contract that does not exist.
    InvalidSystemContract,
    /// Failed to create a new purse.
    PurseNotCreated,
    /// A given type could not be derived from a `CLValue`.
    CLTypeMismatch,
    /// Early end of stream when deserializing.
    EarlyEndOfStream,
    /// Formatting error.
    FormattingError,
    /// Leftover bytes.
    LeftOverBytes,
    /// Out of memory error.
    OutOfMemoryError,
    /// An unhandled value, likely representing a bug in the code.
    Unhandled,
    /// Error specific to the Proof of Stake contract.
    ProofOfStake(u8),
    /// User-specified value.  The internal `u16` value is added to
    /// `u16::MAX as u32 + 1` when an `ApiError::User` is converted to a
    /// `u32`.
    User(u16),
}

impl From<bytesrepr::Error> for ApiError {
    fn from(error: bytesrepr::Error) -> Self {
        match error {
            bytesrepr::Error::EarlyEndOfStream => ApiError::EarlyEndOfStream,
            bytesrepr::Error::FormattingError => ApiError::FormattingError,
            bytesrepr::Error::LeftOverBytes => ApiError::LeftOverBytes,
            bytesrepr::Error::OutOfMemoryError => ApiError::OutOfMemoryError,
        }
    }
}

impl From<CLValueError> for ApiError {
    fn from(error: CLValueError) -> Self {
        match error {
            CLValueError::Serialization(bytesrepr_error) => bytesrepr_error.into(),
            CLValueError::Type(_) => ApiError::CLTypeMismatch,
        }
    }
}

impl From<pos::Error> for ApiError {
    fn from(error: pos::Error) -> Self {
        ApiError::ProofOfStake(error as u8)
    }
}

impl From<ApiError> for u32 {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::None => 1,
            ApiError::MissingArgument => 2,
            ApiError::InvalidArgument => 3,
            ApiError::Deserialize => 4,
            ApiError::Transfer => 5,
            ApiError::InvalidSystemContract => 6,
            ApiError::PurseNotCreated => 7,
            ApiError::CLTypeMismatch => 8,
            ApiError::EarlyEndOfStream => 9,
            ApiError::FormattingError => 10,
            ApiError::LeftOverBytes => 11,
            ApiError::OutOfMemoryError => 12,
            ApiError::Unhandled => 13,
            ApiError::ProofOfStake(value) => POS_ERROR_OFFSET + u32::from(value),
            ApiError::User(value) => RESERVED_ERROR_MAX + 1 + u32::from(value),
        }
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ApiError::None => write!(f, "ApiError::None")?,
            ApiError::MissingArgument => write!(f, "ApiError::MissingArgument")?,
            ApiError::InvalidArgument => write!(f, "ApiError::InvalidArgument")?,
            ApiError::Deserialize => write!(f, "ApiError::Deserialize")?,
            ApiError::Transfer => write!(f, "ApiError::Transfer")?,
            ApiError::InvalidSystemContract => write!(f, "ApiError::InvalidSystemContract")?,
            ApiError::PurseNotCreated => write!(f, "ApiError::PurseNotCreated")?,
            ApiError::CLTypeMismatch => write!(f, "ApiError::CLTypeMismatch")?,
            ApiError::EarlyEndOfStream => write!(f, "ApiError::EarlyEndOfStream")?,
            ApiError::FormattingError => write!(f, "ApiError::FormattingError")?,
            ApiError::LeftOverBytes => write!(f, "ApiError::LeftOverBytes")?,
            ApiError::OutOfMemoryError => write!(f, "ApiError::OutOfMemoryError")?,
            ApiError::Unhandled => write!(f, "ApiError::Unhandled")?,
            ApiError::ProofOfStake(value) => write!(f, "ApiError::ProofOfStake({})", value)?,
            ApiError::User(value) => write!(f, "ApiError::User({})", value)?,
        }
        write!(f, " [{}]", u32::from(*self))
    }
}

/// Converts the outcome of a host operation into the `i32` status code the
/// host surfaces to callers.
pub fn i32_from(result: Result<(), ApiError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => u32::from(error) as i32,
    }
}

/// Converts an `i32` status code back into the outcome it encodes.
pub fn result_from(value: i32) -> Result<(), ApiError> {
    match value {
        0 => Ok(()),
        1 => Err(ApiError::None),
        2 => Err(ApiError::MissingArgument),
        3 => Err(ApiError::InvalidArgument),
        4 => Err(ApiError::Deserialize),
        5 => Err(ApiError::Transfer),
        6 => Err(ApiError::InvalidSystemContract),
        7 => Err(ApiError::PurseNotCreated),
        8 => Err(ApiError::CLTypeMismatch),
        9 => Err(ApiError::EarlyEndOfStream),
        10 => Err(ApiError::FormattingError),
        11 => Err(ApiError::LeftOverBytes),
        12 => Err(ApiError::OutOfMemoryError),
        13 => Err(ApiError::Unhandled),
        _ => {
            if value > RESERVED_ERROR_MAX as i32 && value <= (2 * RESERVED_ERROR_MAX + 1) as i32 {
                Err(ApiError::User(value as u16))
            } else if value >= POS_ERROR_OFFSET as i32 && value <= RESERVED_ERROR_MAX as i32 {
                Err(ApiError::ProofOfStake(value as u8))
            } else {
                Err(ApiError::Unhandled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::{u16, u8};

    use super::*;

    fn round_trip(result: Result<(), ApiError>) {
        let code = i32_from(result);
        assert_eq!(result, result_from(code));
    }

    #[test]
    fn error_values() {
        assert_eq!(65_280_u32, ApiError::ProofOfStake(0).into()); // POS_ERROR_OFFSET == 65,280
        assert_eq!(65_535_u32, ApiError::ProofOfStake(u8::MAX).into());
        assert_eq!(65_536_u32, ApiError::User(0).into()); // u16::MAX + 1
        assert_eq!(131_071_u32, ApiError::User(u16::MAX).into()); // 2 * u16::MAX + 1

        assert_eq!(
            65_284_u32,
            u32::from(ApiError::from(pos::Error::BondTransferFailed))
        );

        assert_eq!("ApiError::Transfer [5]", &std::format!("{:?}", ApiError::Transfer));
        assert_eq!(
            "ApiError::ProofOfStake(4) [65284]",
            &std::format!("{:?}", ApiError::from(pos::Error::BondTransferFailed))
        );
        assert_eq!(
            "ApiError::User(65535) [131071]",
            &std::format!("{:?}", ApiError::User(u16::MAX))
        );
    }

    #[test]
    fn error_round_trips() {
        round_trip(Ok(()));
        round_trip(Err(ApiError::None));
        round_trip(Err(ApiError::MissingArgument));
        round_trip(Err(ApiError::InvalidArgument));
        round_trip(Err(ApiError::Deserialize));
        round_trip(Err(ApiError::Transfer));
        round_trip(Err(ApiError::InvalidSystemContract));
        round_trip(Err(ApiError::PurseNotCreated));
        round_trip(Err(ApiError::CLTypeMismatch));
        round_trip(Err(ApiError::EarlyEndOfStream));
        round_trip(Err(ApiError::FormattingError));
        round_trip(Err(ApiError::LeftOverBytes));
        round_trip(Err(ApiError::OutOfMemoryError));
        round_trip(Err(ApiError::Unhandled));
        round_trip(Err(ApiError::ProofOfStake(0)));
        round_trip(Err(ApiError::ProofOfStake(u8::MAX)));
        round_trip(Err(ApiError::User(0)));
        round_trip(Err(ApiError::User(u16::MAX)));
    }

    #[test]
    fn unknown_codes_map_to_unhandled() {
        assert_eq!(result_from(14), Err(ApiError::Unhandled));
        assert_eq!(result_from(-1), Err(ApiError::Unhandled));
        assert_eq!(result_from(i32::max_value()), Err(ApiError::Unhandled));
    }
}
