use core::convert::TryFrom;
use core::fmt::{self, Display, Formatter};

use crate::ApiError;

/// System contract indices used to query the host for a system contract
/// reference.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SystemContractType {
    /// The mint, which holds and transfers all motes on the network.
    Mint,
    /// The proof-of-stake contract, which tracks bonded stakes.
    ProofOfStake,
}

impl From<SystemContractType> for u32 {
    fn from(system_contract_type: SystemContractType) -> u32 {
        match system_contract_type {
            SystemContractType::Mint => 0,
            SystemContractType::ProofOfStake => 1,
        }
    }
}

impl TryFrom<u32> for SystemContractType {
    type Error = ApiError;

    fn try_from(value: u32) -> Result<SystemContractType, Self::Error> {
        match value {
            0 => Ok(SystemContractType::Mint),
            1 => Ok(SystemContractType::ProofOfStake),
            _ => Err(ApiError::InvalidSystemContract),
        }
    }
}

impl Display for SystemContractType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            SystemContractType::Mint => write!(f, "mint"),
            SystemContractType::ProofOfStake => write!(f, "pos"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn get_index_of_mint_contract() {
        let index: u32 = SystemContractType::Mint.into();
        assert_eq!(index, 0u32);
        assert_eq!(SystemContractType::Mint.to_string(), "mint");
    }

    #[test]
    fn get_index_of_pos_contract() {
        let index: u32 = SystemContractType::ProofOfStake.into();
        assert_eq!(index, 1u32);
        assert_eq!(SystemContractType::ProofOfStake.to_string(), "pos");
    }

    #[test]
    fn create_mint_variant_from_int() {
        let mint = SystemContractType::try_from(0).ok().unwrap();
        assert_eq!(mint, SystemContractType::Mint);
    }

    #[test]
    fn create_pos_variant_from_int() {
        let pos = SystemContractType::try_from(1).ok().unwrap();
        assert_eq!(pos, SystemContractType::ProofOfStake);
    }

    #[test]
    fn create_unknown_system_contract_variant() {
        assert!(SystemContractType::try_from(2).is_err());
        assert!(SystemContractType::try_from(3).is_err());
        assert!(SystemContractType::try_from(10).is_err());
        assert!(SystemContractType::try_from(u32::max_value()).is_err());
    }
}
