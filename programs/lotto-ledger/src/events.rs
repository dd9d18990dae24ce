use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// LIFECYCLE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted once when the global state and vault are created
#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub vault: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a fresh user ledger is created
#[event]
pub struct UserRegistered {
    pub user: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a user changes their language tag
#[event]
pub struct LanguageChanged {
    pub user: Pubkey,
    pub language: [u8; 2],
    pub timestamp: i64,
}

/// Emitted when an invitee is bound to an inviter (set-once)
#[event]
pub struct ReferralLinked {
    pub inviter: Pubkey,
    pub invitee: Pubkey,
    /// Inviter's referral count after this link
    pub referral_count: u32,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// PURCHASE / REWARD EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted on every settled ticket purchase.
///
/// Carries the full draw binding: the seed the roll was derived from and
/// the roll itself, so any payout can be re-derived after the fact.
#[event]
pub struct TicketsPurchased {
    pub player: Pubkey,
    pub tickets: u8,
    pub price: u64,
    pub seed: [u8; 32],
    pub roll_bps: u16,
    pub payout: u64,
    /// Zero outside of weekends
    pub cashback: u64,
    pub balance_after: u64,
    pub timestamp: i64,
}

/// Emitted when a referred purchase pays commission to the inviter
#[event]
pub struct ReferralBonusPaid {
    pub referrer: Pubkey,
    pub purchaser: Pubkey,
    pub price: u64,
    /// Tier rate applied, snapshotted from the live referral count
    pub rate_bps: u16,
    pub referral_count: u32,
    pub bonus: u64,
    pub timestamp: i64,
}

/// Emitted when the admin credits a balance out of band
#[event]
pub struct CreditGranted {
    pub user: Pubkey,
    pub amount: u64,
    pub balance_after: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// INVOICE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a deposit invoice is opened
#[event]
pub struct InvoiceCreated {
    pub invoice_id: u64,
    pub payer: Pubkey,
    pub amount: u64,
    pub expires_at: i64,
    pub timestamp: i64,
}

/// Emitted when an invoice is paid and the ledger credited
#[event]
pub struct InvoicePaid {
    pub invoice_id: u64,
    pub payer: Pubkey,
    pub amount: u64,
    pub balance_after: u64,
    pub timestamp: i64,
}

/// Emitted when an unpaid invoice is flipped to its terminal state
#[event]
pub struct InvoiceExpired {
    pub invoice_id: u64,
    pub payer: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// WITHDRAWAL EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when funds are reserved for a payout request
#[event]
pub struct WithdrawalRequested {
    pub request_id: u64,
    pub user: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub balance_after: u64,
    pub timestamp: i64,
}

/// Emitted when a pending request is paid out of the vault
#[event]
pub struct WithdrawalSettled {
    pub request_id: u64,
    pub user: Pubkey,
    /// Net lamports moved to the user's wallet (amount - fee)
    pub transferred: u64,
    pub timestamp: i64,
}

/// Emitted when a pending request is voided and the reserve refunded
#[event]
pub struct WithdrawalCancelled {
    pub request_id: u64,
    pub user: Pubkey,
    pub refunded: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// ADMIN EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when the paused flag changes
#[event]
pub struct StatusChanged {
    pub paused: bool,
    pub timestamp: i64,
}

/// Emitted when the admin key is handed over
#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}
