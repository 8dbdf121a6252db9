use anchor_lang::prelude::*;

use crate::{
    constants::PRICE_ORACLE_SEED,
    events::{OraclePaused, PolicyCleared, PolicySet},
    state::{OraclePolicy, PriceOracle},
};

/// Publish a new price to a `PriceOracle`
/// Signer must be the oracle owner
#[event_cpi]
#[derive(Accounts)]
pub struct UpdatePrice<'info> {
    /// The account publishing the price
    pub authority: Signer<'info>,

    /// The `PriceOracle` account to update
    /// # PDA Seeds
    /// - `PRICE_ORACLE_SEED`
    /// - The oracle owner's address
    /// - The oracle symbol
    #[account(
        mut,
        seeds = [PRICE_ORACLE_SEED, oracle.owner.as_ref(), oracle.symbol.as_bytes()],
        bump = oracle.bump,
    )]
    pub oracle: Account<'info, PriceOracle>,
}

impl<'info> UpdatePrice<'info> {
    /// Overwrite the price and confidence at the current slot
    /// # Arguments
    /// * `price` - The new price
    /// * `confidence` - The new confidence width
    /// # Returns
    /// * `Result<()>` - Err(Unauthorized) if the signer is not the owner,
    ///   Err(SlotNotAdvanced) if a price was already written in this slot
    pub fn update_price(&mut self, price: i64, confidence: u64) -> Result<()> {
        let slot = Clock::get()?.slot;

        self.oracle
            .update_price(&self.authority.key(), price, confidence, slot)
    }
}

/// Owner-only configuration of a `PriceOracle`: stored policy and pause state
#[derive(Accounts)]
pub struct OracleOwnerAdmin<'info> {
    /// The account executing the operation
    pub authority: Signer<'info>,

    /// The `PriceOracle` account to configure
    /// # PDA Seeds
    /// - `PRICE_ORACLE_SEED`
    /// - The oracle owner's address
    /// - The oracle symbol
    #[account(
        mut,
        seeds = [PRICE_ORACLE_SEED, oracle.owner.as_ref(), oracle.symbol.as_bytes()],
        bump = oracle.bump,
    )]
    pub oracle: Account<'info, PriceOracle>,
}

impl<'info> OracleOwnerAdmin<'info> {
    /// Replace the stored policy used by `check_price_stored`
    /// # Arguments
    /// * `max_staleness` - The maximum price age in slots
    /// * `max_confidence` - The maximum confidence width
    /// # Returns
    /// * `Result<()>` - Ok if the policy is set, Err(Unauthorized) otherwise
    pub fn set_policy(&mut self, max_staleness: u64, max_confidence: u64) -> Result<()> {
        self.oracle.set_policy(
            &self.authority.key(),
            OraclePolicy {
                max_staleness,
                max_confidence,
            },
        )?;

        emit!(PolicySet {
            oracle: self.oracle.key(),
            max_staleness,
            max_confidence,
        });

        Ok(())
    }

    /// Remove the stored policy so `check_price_stored` only enforces the pause flag
    pub fn clear_policy(&mut self) -> Result<()> {
        self.oracle.clear_policy(&self.authority.key())?;

        emit!(PolicyCleared {
            oracle: self.oracle.key(),
        });

        Ok(())
    }

    /// Pause the oracle so every price check rejects
    /// # Returns
    /// * `Result<()>` - Ok if the oracle is paused, Err(Unauthorized) otherwise
    pub fn pause(&mut self) -> Result<()> {
        self.oracle.set_paused(&self.authority.key(), true)?;

        emit!(OraclePaused {
            oracle: self.oracle.key(),
            is_paused: true,
            pauser: self.authority.key(),
        });

        Ok(())
    }

    /// Resume the oracle so price checks apply their thresholds again
    /// # Returns
    /// * `Result<()>` - Ok if the oracle is resumed, Err(Unauthorized) otherwise
    pub fn resume(&mut self) -> Result<()> {
        self.oracle.set_paused(&self.authority.key(), false)?;

        emit!(OraclePaused {
            oracle: self.oracle.key(),
            is_paused: false,
            pauser: self.authority.key(),
        });

        Ok(())
    }
}
