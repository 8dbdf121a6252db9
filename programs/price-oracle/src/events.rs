use anchor_lang::prelude::*;

/// Event emitted when a new oracle is created
/// Fields:
/// - oracle: The address of the oracle account
/// - owner: The public key allowed to write to the oracle
/// - symbol: The oracle symbol
/// - price: The initial price
/// - expo: The exponent applied to the price and confidence
/// - confidence: The initial confidence width
/// - slot: The slot the initial price was recorded at
#[event]
pub struct OracleInitialized {
    pub oracle: Pubkey,
    pub owner: Pubkey,
    pub symbol: String,
    pub price: i64,
    pub expo: i32,
    pub confidence: u64,
    pub slot: u64,
}

/// Event emitted when the owner publishes a new price
/// Fields:
/// - oracle: The address of the oracle account
/// - price: The new price
/// - confidence: The new confidence width
/// - slot: The slot the price was recorded at
#[event]
pub struct PriceUpdated {
    pub oracle: Pubkey,
    pub price: i64,
    pub confidence: u64,
    pub slot: u64,
}

/// Event emitted when the stored policy is set
/// Fields:
/// - oracle: The address of the oracle account
/// - max_staleness: The maximum price age in slots
/// - max_confidence: The maximum confidence width
#[event]
pub struct PolicySet {
    pub oracle: Pubkey,
    pub max_staleness: u64,
    pub max_confidence: u64,
}

/// Event emitted when the stored policy is removed
#[event]
pub struct PolicyCleared {
    pub oracle: Pubkey,
}

/// Event emitted when an oracle is paused or resumed
/// Fields:
/// - oracle: The address of the oracle account
/// - is_paused: The new pause state
/// - pauser: The public key that changed the pause state
#[event]
pub struct OraclePaused {
    pub oracle: Pubkey,
    pub is_paused: bool,
    pub pauser: Pubkey,
}
