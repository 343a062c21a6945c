use soroban_sdk::contracterror;

/// Typed errors returned by library helpers. Contract entry points translate
/// these into stable panic messages at the call boundary.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    InvalidInput = 3,
    NotFound = 4,
    /// Whole part of a daily price exceeds 4 digits.
    PriceTooLarge = 5,
    /// Fractional part of a daily price exceeds 4 digits.
    PriceTooPrecise = 6,
}
