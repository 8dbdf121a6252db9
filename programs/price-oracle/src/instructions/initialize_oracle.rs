use anchor_lang::prelude::*;

use crate::{
    constants::PRICE_ORACLE_SEED,
    events::OracleInitialized,
    state::{OraclePolicy, PriceOracle},
};

/// Create a `PriceOracle` account for an owner and symbol pair
#[derive(Accounts)]
#[instruction(symbol: String)]
pub struct InitializeOracle<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The account that will own the oracle and be the only one able to write to it
    pub owner: Signer<'info>,

    /// The `PriceOracle` account to be created
    /// `init_if_needed` lets an occupied address surface as `AlreadyExists`
    /// # PDA Seeds
    /// - `PRICE_ORACLE_SEED`
    /// - The owner's address
    /// - The symbol bytes
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + PriceOracle::INIT_SPACE,
        seeds = [PRICE_ORACLE_SEED, owner.key().as_ref(), symbol.as_bytes()],
        bump
    )]
    pub oracle: Account<'info, PriceOracle>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeOracle<'info> {
    /// Initialize the oracle with its first price
    /// # Arguments
    /// * `symbol` - The oracle symbol (1 to 32 bytes)
    /// * `price` - The initial price
    /// * `expo` - The exponent applied to the price and confidence
    /// * `confidence` - The initial confidence width
    /// * `policy` - Optional stored thresholds, None leaves `check_price_stored` unconstrained
    /// * `bumps` - Bumps for PDA derivation
    /// # Returns
    /// * `Result<()>` - Err(AlreadyExists) if an oracle is already stored at this address
    pub fn initialize_oracle(
        &mut self,
        symbol: String,
        price: i64,
        expo: i32,
        confidence: u64,
        policy: Option<OraclePolicy>,
        bumps: &InitializeOracleBumps,
    ) -> Result<()> {
        let slot = Clock::get()?.slot;

        self.oracle.initialize(
            self.owner.key(),
            symbol,
            price,
            expo,
            confidence,
            policy,
            slot,
            bumps.oracle,
        )?;

        msg!(
            "Initialized oracle {} for owner {}",
            self.oracle.symbol,
            self.owner.key()
        );

        emit!(OracleInitialized {
            oracle: self.oracle.key(),
            owner: self.owner.key(),
            symbol: self.oracle.symbol.clone(),
            price,
            expo,
            confidence,
            slot,
        });

        Ok(())
    }
}
