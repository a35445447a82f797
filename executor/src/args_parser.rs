//! Home of [`ArgsParser`], a trait used for parsing contract arguments from
//! n-ary tuples.

// Can be removed once https://github.com/rust-lang/rustfmt/issues/3362 is resolved.
#[rustfmt::skip]
use alloc::vec;
use alloc::vec::Vec;

use types::{bytesrepr::ToBytes, CLTyped, CLValue, CLValueError};

/// Types which implement [`ArgsParser`] can be converted into the ordered
/// [`CLValue`] sequence passed to a contract call.
///
/// It is primarily implemented for n-ary tuples of values which themselves
/// implement [`ToBytes`] and [`CLTyped`].
pub trait ArgsParser {
    /// Parses the arguments into a `Vec` of [`CLValue`]s.
    fn parse(self) -> Result<Vec<CLValue>, CLValueError>;
}

impl ArgsParser for () {
    fn parse(self) -> Result<Vec<CLValue>, CLValueError> {
        Ok(Vec::new())
    }
}

macro_rules! impl_argsparser_tuple {
    ( $($name:ident)+ ) => (
        impl<$($name: CLTyped + ToBytes),*> ArgsParser for ($($name,)*) {
            #[allow(non_snake_case)]
            fn parse(self) -> Result<Vec<CLValue>, CLValueError> {
                let ($($name,)+) = self;
                Ok(vec![$(CLValue::from_t($name)?,)+])
            }
        }
    );
}

impl_argsparser_tuple! { T1 }
impl_argsparser_tuple! { T1 T2 }
impl_argsparser_tuple! { T1 T2 T3 }
impl_argsparser_tuple! { T1 T2 T3 T4 }
impl_argsparser_tuple! { T1 T2 T3 T4 T5 }
impl_argsparser_tuple! { T1 T2 T3 T4 T5 T6 }

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use types::{CLType, U512};

    use super::*;

    #[test]
    fn unit_parses_to_no_args() {
        assert_eq!(().parse(), Ok(Vec::new()));
    }

    #[test]
    fn tuple_parses_in_order() {
        let args = ("bond", U512::from(100u64))
            .parse()
            .expect("should parse args");
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].cl_type(), &CLType::String);
        assert_eq!(args[1].cl_type(), &CLType::U512);
        assert_eq!(args[0].clone().into_t::<String>().expect("should be a string"), "bond");
        assert_eq!(
            args[1].clone().into_t::<U512>().expect("should be a U512"),
            U512::from(100u64)
        );
    }
}
