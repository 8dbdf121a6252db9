use anchor_lang::prelude::*;

use crate::{
    constants::PRICE_ORACLE_SEED,
    state::{PriceOracle, PriceSnapshot},
    utils::Verdict,
};

/// Read-only access to a `PriceOracle`, open to any caller
#[derive(Accounts)]
pub struct CheckPrice<'info> {
    /// The `PriceOracle` account to read
    /// # PDA Seeds
    /// - `PRICE_ORACLE_SEED`
    /// - The oracle owner's address
    /// - The oracle symbol
    #[account(
        seeds = [PRICE_ORACLE_SEED, oracle.owner.as_ref(), oracle.symbol.as_bytes()],
        bump = oracle.bump,
    )]
    pub oracle: Account<'info, PriceOracle>,
}

impl<'info> CheckPrice<'info> {
    /// Validate the price against thresholds supplied by the caller
    /// # Arguments
    /// * `max_staleness` - The maximum price age in slots
    /// * `max_confidence` - The maximum confidence width
    /// # Returns
    /// * `Result<()>` - Err(Paused), Err(Stale) or Err(ConfidenceTooWide) on rejection
    pub fn check_price(&self, max_staleness: u64, max_confidence: u64) -> Result<()> {
        let verdict = self
            .oracle
            .check_price(Clock::get()?.slot, max_staleness, max_confidence);

        self.log_rejection(verdict);
        verdict.into_result()
    }

    /// Validate the price against the oracle's stored policy
    /// # Returns
    /// * `Result<()>` - Err(Paused), Err(Stale) or Err(ConfidenceTooWide) on rejection
    pub fn check_price_stored(&self) -> Result<()> {
        let verdict = self.oracle.check_price_stored(Clock::get()?.slot);

        self.log_rejection(verdict);
        verdict.into_result()
    }

    /// Read the current price fields without validating them
    /// # Returns
    /// * `Result<PriceSnapshot>` - The price, exponent, confidence and last update slot
    pub fn get_price(&self) -> Result<PriceSnapshot> {
        Ok(self.oracle.snapshot())
    }

    fn log_rejection(&self, verdict: Verdict) {
        if let Verdict::Reject(reason) = verdict {
            msg!(
                "Price check rejected for {}: {:?}",
                self.oracle.symbol,
                reason
            );
        }
    }
}
