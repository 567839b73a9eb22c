use core::fmt;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidQuantity = 3,
    InviteNotStarted = 4,
    InvalidProof = 5,
    LimitExceeded = 6,
    SoldOut = 7,
    WrongAmount = 8,
    TokenNotFound = 9,
    InvalidPrice = 10,
    ArithmeticOverflow = 11,
    NothingToWithdraw = 12,
}

impl ContractError {
    /// Human readable reason. `SoldOut`, `WrongAmount` and `TokenNotFound`
    /// carry the exact strings clients match on.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "not initialized",
            ContractError::AlreadyInitialized => "already initialized",
            ContractError::InvalidQuantity => "quantity must be positive",
            ContractError::InviteNotStarted => "invite not started",
            ContractError::InvalidProof => "invalid proof",
            ContractError::LimitExceeded => "limit exceeded",
            ContractError::SoldOut => "sold out",
            ContractError::WrongAmount => "wrong amount",
            ContractError::TokenNotFound => "owner query for nonexistent token",
            ContractError::InvalidPrice => "price must not be negative",
            ContractError::ArithmeticOverflow => "arithmetic overflow",
            ContractError::NothingToWithdraw => "nothing to withdraw",
        }
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
