use anchor_lang::prelude::*;

use crate::errors::OracleError;

/// Returns true if `caller` is the stored owner
#[inline(always)]
pub fn is_owner(owner: &Pubkey, caller: &Pubkey) -> bool {
    owner == caller
}

/// Fails with `Unauthorized` unless `caller` is the stored owner
/// # Arguments
/// * `owner` - The owner recorded on the oracle
/// * `caller` - The signer of the instruction
/// # Returns
/// * `Result<()>` - Ok if the caller owns the oracle
#[inline(always)]
pub fn require_owner(owner: &Pubkey, caller: &Pubkey) -> Result<()> {
    require!(is_owner(owner, caller), OracleError::Unauthorized);

    Ok(())
}
