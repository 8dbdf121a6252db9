// PDA SEEDS

/// Seed for PriceOracle account PDA
pub const PRICE_ORACLE_SEED: &[u8] = b"price_oracle";

/// The maximum length for an oracle symbol in bytes.
/// A single PDA seed is limited to 32 bytes.
pub const SYMBOL_MAX_LENGTH: usize = 32;
