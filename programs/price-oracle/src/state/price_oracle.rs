use anchor_lang::prelude::*;

use crate::{
    constants::SYMBOL_MAX_LENGTH,
    errors::OracleError,
    utils::{evaluate, require_owner, Verdict},
};

/// PriceOracle state account - the latest observed price for one `(owner, symbol)` pair
#[account]
#[derive(InitSpace)]
pub struct PriceOracle {
    // The only address allowed to write to this oracle
    pub owner: Pubkey,

    // Short label such as "SOL/USD", part of the PDA seeds
    #[max_len(32)]
    pub symbol: String,

    // Price magnitude, scaled by 10^expo
    pub price: i64,

    // Power-of-ten exponent applied to `price` and `confidence`
    pub expo: i32,

    // Reported uncertainty width of `price`, in the same scale
    pub confidence: u64,

    // Slot of the most recent accepted price write
    pub last_update_slot: u64,

    // Thresholds used by `check_price_stored`. None means no policy configured
    pub policy: Option<OraclePolicy>,

    // True if consumers must not trust the price
    pub paused: bool,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

/// Risk thresholds a price must satisfy to be accepted
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct OraclePolicy {
    /// Maximum number of slots since the last update
    pub max_staleness: u64,
    /// Maximum confidence width, in the price's own scale
    pub max_confidence: u64,
}

/// Read-only view of the price fields returned to consumers
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceSnapshot {
    pub price: i64,
    pub expo: i32,
    pub confidence: u64,
    pub last_update_slot: u64,
}

impl PriceOracle {
    /// A freshly allocated account is zeroed, so a default owner means nothing was written yet.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn validate_symbol(symbol: &str) -> Result<()> {
        require!(!symbol.is_empty(), OracleError::EmptySymbol);
        require!(
            symbol.len() <= SYMBOL_MAX_LENGTH,
            OracleError::SymbolTooLong
        );

        Ok(())
    }

    /// Write every field of a new oracle
    /// # Arguments
    /// * `owner` - The address that will own the oracle
    /// * `symbol` - The oracle symbol
    /// * `price` - The initial price
    /// * `expo` - The exponent applied to `price` and `confidence`
    /// * `confidence` - The initial confidence width
    /// * `policy` - Optional initial thresholds, None leaves the oracle unconstrained
    /// * `current_slot` - The slot the initial price is observed at
    /// * `bump` - The PDA bump
    /// # Returns
    /// * `Result<()>` - Err(AlreadyExists) if the account already holds an oracle
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        symbol: String,
        price: i64,
        expo: i32,
        confidence: u64,
        policy: Option<OraclePolicy>,
        current_slot: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), OracleError::AlreadyExists);
        Self::validate_symbol(&symbol)?;

        *self = PriceOracle {
            owner,
            symbol,
            price,
            expo,
            confidence,
            last_update_slot: current_slot,
            policy,
            paused: false,
            bump,
        };

        Ok(())
    }

    /// Replace the price and confidence
    /// # Arguments
    /// * `caller` - The signer requesting the update
    /// * `price` - The new price
    /// * `confidence` - The new confidence width
    /// * `current_slot` - The slot the new price is observed at
    /// # Returns
    /// * `Result<()>` - Err(Unauthorized) for a non-owner, Err(SlotNotAdvanced) if `current_slot`
    ///   is not later than the last accepted write
    pub fn update_price(
        &mut self,
        caller: &Pubkey,
        price: i64,
        confidence: u64,
        current_slot: u64,
    ) -> Result<()> {
        require_owner(&self.owner, caller)?;
        require_gt!(
            current_slot,
            self.last_update_slot,
            OracleError::SlotNotAdvanced
        );

        self.price = price;
        self.confidence = confidence;
        self.last_update_slot = current_slot;

        Ok(())
    }

    pub fn set_policy(&mut self, caller: &Pubkey, policy: OraclePolicy) -> Result<()> {
        require_owner(&self.owner, caller)?;

        self.policy = Some(policy);

        Ok(())
    }

    pub fn clear_policy(&mut self, caller: &Pubkey) -> Result<()> {
        require_owner(&self.owner, caller)?;

        self.policy = None;

        Ok(())
    }

    /// Pause or resume the oracle. Setting the current value again is a no-op.
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<()> {
        require_owner(&self.owner, caller)?;

        self.paused = paused;

        Ok(())
    }

    /// Validate the price against caller supplied thresholds
    pub fn check_price(
        &self,
        current_slot: u64,
        max_staleness: u64,
        max_confidence: u64,
    ) -> Verdict {
        let policy = OraclePolicy {
            max_staleness,
            max_confidence,
        };
        evaluate(self, current_slot, Some(&policy))
    }

    /// Validate the price against the stored policy
    pub fn check_price_stored(&self, current_slot: u64) -> Verdict {
        evaluate(self, current_slot, self.policy.as_ref())
    }

    pub fn snapshot(&self) -> PriceSnapshot {
        PriceSnapshot {
            price: self.price,
            expo: self.expo,
            confidence: self.confidence,
            last_update_slot: self.last_update_slot,
        }
    }
}
