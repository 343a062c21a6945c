use crate::{errors::ContractError, MAX_FEE_BPS};

pub fn validate_fee_bps(bps: u32) -> Result<(), ContractError> {
    if bps > MAX_FEE_BPS {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_nonzero_u32(value: u32) -> Result<(), ContractError> {
    if value == 0 {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_positive_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_bounds() {
        assert!(validate_fee_bps(0).is_ok());
        assert!(validate_fee_bps(10_000).is_ok());
        assert!(validate_fee_bps(10_001).is_err());
    }

    #[test]
    fn amount_bounds() {
        assert!(validate_positive_amount(1).is_ok());
        assert!(validate_positive_amount(0).is_err());
        assert!(validate_positive_amount(-5).is_err());
        assert!(validate_nonzero_u32(1).is_ok());
        assert!(validate_nonzero_u32(0).is_err());
    }
}
