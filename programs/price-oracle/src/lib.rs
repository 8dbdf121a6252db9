#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
mod state;
mod utils;

use events::PriceUpdated;
use instructions::*;
use state::{OraclePolicy, PriceSnapshot};

#[cfg(feature = "devnet")]
declare_id!("4pKQn7JbUGvJ5kGyuKXLBxCsbqRrsAzMBXrpZKzXAh2h");
#[cfg(feature = "mainnet")]
declare_id!("9vTrxS3ZbWpXoVgU2QBxH1rU6u3qG3Gv8ZtJm3wJb8Eq");
#[cfg(not(any(feature = "mainnet", feature = "devnet")))]
declare_id!("MwUYTnAbCSUKDvNFBdT3kNv7JpKhauKpRgc2DV2LFKX");

#[program]
pub mod price_oracle {
    use super::*;

    /// Create the oracle for the signing owner and `symbol`
    ///
    /// Stores the initial price, exponent and confidence at the current slot.
    /// `policy` is optional; without one `check_price_stored` only enforces the pause flag.
    /// Fails with `AlreadyExists` if the owner already has an oracle for `symbol`
    pub fn initialize(
        ctx: Context<InitializeOracle>,
        symbol: String,
        price: i64,
        expo: i32,
        confidence: u64,
        policy: Option<OraclePolicy>,
    ) -> Result<()> {
        ctx.accounts
            .initialize_oracle(symbol, price, expo, confidence, policy, &ctx.bumps)
    }

    /// Publish a new price and confidence at the current slot
    /// Signer must be the oracle owner
    pub fn update(ctx: Context<UpdatePrice>, new_price: i64, new_confidence: u64) -> Result<()> {
        ctx.accounts.update_price(new_price, new_confidence)?;

        emit_cpi!(PriceUpdated {
            oracle: ctx.accounts.oracle.key(),
            price: new_price,
            confidence: new_confidence,
            slot: ctx.accounts.oracle.last_update_slot,
        });

        Ok(())
    }

    /// Set the thresholds used by `check_price_stored`
    /// Signer must be the oracle owner
    pub fn set_policy(
        ctx: Context<OracleOwnerAdmin>,
        max_staleness: u64,
        max_confidence: u64,
    ) -> Result<()> {
        ctx.accounts.set_policy(max_staleness, max_confidence)
    }

    /// Remove the stored thresholds
    /// Signer must be the oracle owner
    pub fn clear_policy(ctx: Context<OracleOwnerAdmin>) -> Result<()> {
        ctx.accounts.clear_policy()
    }

    // Pause Controls
    // --------------------------------------------------------------------------------

    /// Pause the oracle. Every check rejects while paused; updates are still accepted
    /// Signer must be the oracle owner
    pub fn pause(ctx: Context<OracleOwnerAdmin>) -> Result<()> {
        ctx.accounts.pause()
    }

    /// Resume the oracle
    /// Signer must be the oracle owner
    pub fn resume(ctx: Context<OracleOwnerAdmin>) -> Result<()> {
        ctx.accounts.resume()
    }

    // Consumer Checks
    // --------------------------------------------------------------------------------

    /// Validate the price against caller supplied staleness (slots) and confidence limits
    pub fn check_price(
        ctx: Context<CheckPrice>,
        max_staleness: u64,
        max_confidence: u64,
    ) -> Result<()> {
        ctx.accounts.check_price(max_staleness, max_confidence)
    }

    /// Validate the price against the oracle's stored policy
    pub fn check_price_stored(ctx: Context<CheckPrice>) -> Result<()> {
        ctx.accounts.check_price_stored()
    }

    /// Return the current price fields without validating them
    pub fn get_price(ctx: Context<CheckPrice>) -> Result<PriceSnapshot> {
        ctx.accounts.get_price()
    }
}
