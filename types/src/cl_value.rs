use alloc::vec::Vec;

use crate::{
    bytesrepr::{self, FromBytes, ToBytes},
    CLType, CLTyped,
};

/// The type expected by a conversion, paired with the type actually found.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CLTypeMismatch {
    pub expected: CLType,
    pub found: CLType,
}

/// Error relating to [`CLValue`] operations.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum CLValueError {
    /// An error while serializing or deserializing the underlying data.
    Serialization(bytesrepr::Error),
    /// A type mismatch while trying to convert a [`CLValue`] into a given
    /// type.
    Type(CLTypeMismatch),
}

/// A self-describing value: serialized data along with the [`CLType`] it
/// decodes to.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CLValue {
    cl_type: CLType,
    bytes: Vec<u8>,
}

impl CLValue {
    /// Constructs a `CLValue` from `t`.
    pub fn from_t<T: CLTyped + ToBytes>(t: T) -> Result<CLValue, CLValueError> {
        let bytes = t.into_bytes().map_err(CLValueError::Serialization)?;

        Ok(CLValue {
            cl_type: T::cl_type(),
            bytes,
        })
    }

    /// Consumes and converts `self` back into its underlying type.
    pub fn into_t<T: CLTyped + FromBytes>(self) -> Result<T, CLValueError> {
        let expected = T::cl_type();

        if self.cl_type == expected {
            bytesrepr::deserialize(self.bytes).map_err(CLValueError::Serialization)
        } else {
            Err(CLValueError::Type(CLTypeMismatch {
                expected,
                found: self.cl_type,
            }))
        }
    }

    /// The [`CLType`] of the underlying data.
    pub fn cl_type(&self) -> &CLType {
        &self.cl_type
    }

    /// Returns a reference to the serialized form of the underlying value.
    pub fn inner_bytes(&self) -> &Vec<u8> {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;
    use crate::{AccessRights, Key, URef, U512};

    #[test]
    fn string_round_trip() {
        let cl_value = CLValue::from_t("bond").expect("should create CLValue");
        assert_eq!(cl_value.cl_type(), &CLType::String);
        assert_eq!(cl_value.into_t::<String>(), Ok("bond".to_string()));
    }

    #[test]
    fn u512_round_trip() {
        let value = U512::from(123_456_789u64);
        let cl_value = CLValue::from_t(value).expect("should create CLValue");
        assert_eq!(cl_value.into_t::<U512>(), Ok(value));
    }

    #[test]
    fn key_round_trip() {
        let key = Key::URef(URef::new([9u8; 32], AccessRights::READ_ADD_WRITE));
        let cl_value = CLValue::from_t(key).expect("should create CLValue");
        assert_eq!(cl_value.into_t::<Key>(), Ok(key));
    }

    #[test]
    fn type_mismatch_is_reported() {
        let cl_value = CLValue::from_t(1u32).expect("should create CLValue");
        let result = cl_value.into_t::<U512>();
        assert_eq!(
            result,
            Err(CLValueError::Type(CLTypeMismatch {
                expected: CLType::U512,
                found: CLType::U32,
            }))
        );
    }
}
