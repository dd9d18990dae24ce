use anchor_lang::prelude::*;

/// Lotto Ledger Error Codes
///
/// Every failure an instruction can report. Each abort is transactional:
/// a failed operation leaves no partial state behind.
#[error_code]
pub enum ErrorCode {
    // Global controls
    #[msg("Ledger is paused")]
    Paused,

    #[msg("Unauthorized")]
    UnauthorizedAccess,

    // Purchases
    #[msg("Ticket count must be 1, 3 or 10")]
    InvalidTicketCount,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    // Referrals
    #[msg("Cannot refer yourself")]
    SelfReferral,

    #[msg("Inviter already set")]
    InviterAlreadySet,

    #[msg("Inviter ledger account required for referred purchase")]
    ReferrerLedgerMissing,

    #[msg("Inviter ledger does not match bound inviter")]
    ReferrerMismatch,

    // Invoices
    #[msg("Amount must be positive")]
    InvalidAmount,

    #[msg("Invoice is not active")]
    InvoiceNotActive,

    #[msg("Invoice has expired")]
    InvoiceExpired,

    #[msg("Invoice has not expired yet")]
    InvoiceNotExpired,

    // Withdrawals
    #[msg("Withdrawal below 1.0 coin minimum")]
    WithdrawalBelowMinimum,

    #[msg("Withdrawal request is not pending")]
    RequestNotPending,

    #[msg("Recipient does not match withdrawal request")]
    RecipientMismatch,

    // Misc
    #[msg("Language tag must be two ASCII bytes")]
    InvalidLanguage,

    #[msg("Math overflow")]
    MathOverflow,
}
