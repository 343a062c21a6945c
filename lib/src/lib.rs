#![no_std]
pub mod errors;
pub mod nft;
pub mod price;
pub mod resolver;
pub mod rights;
pub mod types;
pub mod validation;

pub use errors::*;
pub use nft::*;
pub use price::*;
pub use resolver::*;
pub use types::*;

// Time
pub const SECONDS_PER_DAY: u64 = 86400;
pub const SECONDS_PER_MONTH: u64 = 30 * 86400; // staking intervals count 30-day months

// Token scale: all whole-token amounts (stake principals, unpacked daily
// prices) are multiplied by this at transfer time. 7 decimals, the Soroban
// asset convention.
pub const TOKEN_UNIT: i128 = 10_000_000;

// Fixed-point price scale: 4 fractional digits.
pub const PRICE_SCALE: i128 = 10_000;
pub const MAX_PRICE_WHOLE: u32 = 9999;
pub const MAX_PRICE_FRAC_DIGITS: u32 = 4;

// Fees and rewards
pub const MAX_FEE_BPS: u32 = 10_000;
pub const BASE_BOOST_COEFFICIENT: u32 = 100;
// 12 months x bps scale; divisor of the max-APR reward cap.
pub const APR_DENOMINATOR: i128 = 120_000;

// Storage key for the admin-rights set kept by every contract.
pub const RIGHTS_KEY: &str = "rights";
