use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("An oracle already exists for this owner and symbol")]
    AlreadyExists,
    #[msg("Signer is not the oracle owner")]
    Unauthorized,
    #[msg("Oracle is paused")]
    Paused,
    #[msg("Price is stale")]
    Stale,
    #[msg("Price confidence interval too wide")]
    ConfidenceTooWide,
    #[msg("Slot has not advanced since the last update")]
    SlotNotAdvanced,
    #[msg("Symbol must not be empty")]
    EmptySymbol,
    #[msg("Symbol too long (max 32 bytes)")]
    SymbolTooLong,
}
