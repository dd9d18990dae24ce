use anchor_lang::prelude::*;

/// Global configuration and lifetime counters
///
/// One account per program instance. The vault itself is a dataless
/// system-owned PDA; only its bump lives here.
///
/// PDA Seeds: ["lotto_v1"]
#[account]
pub struct GlobalState {
    /// Current admin authority
    pub admin: Pubkey,

    /// PDA bump seed of this account
    pub bump: u8,

    /// PDA bump seed of the vault
    pub vault_bump: u8,

    /// Emergency stop for all user-facing mutations
    pub paused: bool,

    /// Lifetime tickets sold
    pub total_tickets_sold: u64,

    /// Lifetime units debited for purchases
    pub total_wagered: u64,

    /// Lifetime units credited back (payouts + cashback + referral bonuses)
    pub total_paid_out: u64,

    /// Lifetime units credited through paid invoices
    pub total_deposited: u64,

    /// Lifetime units reserved by settled withdrawals
    pub total_withdrawn: u64,

    /// Timestamp of initialization
    pub initialized_at: i64,
}

impl GlobalState {
    /// Account size calculation:
    /// - admin: 32 bytes (Pubkey)
    /// - bump + vault_bump + paused: 3 bytes
    /// - 5 u64 counters: 40 bytes
    /// - initialized_at: 8 bytes (i64)
    /// Total: 83 bytes
    pub const LEN: usize = 32 + 3 + 8 * 5 + 8;
}
