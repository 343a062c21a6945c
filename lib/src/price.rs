//! Fixed-point daily rent price codec.
//!
//! A price with up to 4 integer and 4 fractional digits is packed into a
//! 4-byte big-endian value: high 16 bits hold the whole part (0-9999), low
//! 16 bits the fractional part scaled to 4 digits. The fractional digits are
//! right-padded, so `11.22` packs as whole `11`, fraction `2200`:
//! `0x000B0898`.

use crate::{errors::ContractError, PRICE_SCALE, MAX_PRICE_FRAC_DIGITS, MAX_PRICE_WHOLE};

const POW10: [u32; 5] = [1, 10, 100, 1000, 10000];

/// Pack a daily price from its whole part and `frac_digits` fractional
/// digits. `frac` is the literal digit sequence read as an integer, so
/// `(11, 5, 1)` means 11.5 and packs the fraction as `5000`.
pub fn pack_price(whole: u32, frac: u32, frac_digits: u32) -> Result<u32, ContractError> {
    if whole > MAX_PRICE_WHOLE {
        return Err(ContractError::PriceTooLarge);
    }
    if frac_digits > MAX_PRICE_FRAC_DIGITS {
        return Err(ContractError::PriceTooPrecise);
    }
    if frac >= POW10[frac_digits as usize] {
        // more digits supplied than declared
        return Err(ContractError::PriceTooPrecise);
    }
    let scaled = frac * POW10[(MAX_PRICE_FRAC_DIGITS - frac_digits) as usize];
    Ok((whole << 16) | scaled)
}

/// Unpack a price into `(whole, frac)` where `frac` is the 4-digit
/// fractional value. Total: any 32-bit input decodes.
pub fn unpack_price(packed: u32) -> (u32, u32) {
    (packed >> 16, packed & 0xFFFF)
}

/// Gross rent in payment-token smallest units for `day_count` whole days.
/// `token_unit` must be a multiple of the 4-digit price scale so the
/// conversion is exact and repeated claims cannot drift.
pub fn rent_in_units(packed: u32, day_count: u32, token_unit: i128) -> i128 {
    let (whole, frac) = unpack_price(packed);
    let raw = (whole as i128) * PRICE_SCALE + (frac as i128);
    raw * (token_unit / PRICE_SCALE) * (day_count as i128)
}
