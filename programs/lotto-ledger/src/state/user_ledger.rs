use anchor_lang::prelude::*;

use crate::constants::MAX_HISTORY;

/// Kind tag of a ledger history entry
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum HistoryKind {
    /// Ticket purchase (negative amount)
    Purchase,
    /// Lottery payout (positive amount)
    Win,
    /// Commission for a referred purchase (positive, on the referrer)
    ReferralBonus,
    /// Paid deposit invoice (positive amount)
    Deposit,
    /// Withdrawal reserve (negative) or refund of a cancelled request (positive)
    Withdrawal,
    /// Weekend cashback (positive amount)
    Cashback,
    /// Out-of-band admin credit (positive amount)
    TestCredit,
}

/// One row of a user's transaction history
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct HistoryEntry {
    pub kind: HistoryKind,

    /// Signed amount in units; negative for debits
    pub amount: i64,

    /// Ticket count for Purchase entries, zero otherwise
    pub tickets: u8,

    /// Referrer/invitee for referral entries, `Pubkey::default()` otherwise
    pub counterparty: Pubkey,

    pub timestamp: i64,
}

impl HistoryEntry {
    /// kind(1) + amount(8) + tickets(1) + counterparty(32) + timestamp(8)
    pub const LEN: usize = 1 + 8 + 1 + 32 + 8;
}

/// Per-user ledger row
///
/// The single shared mutable record of the system. Every mutation happens
/// inside one instruction while the runtime holds the account write lock,
/// so a purchase and a deposit racing on the same user serialize instead
/// of overwriting each other.
///
/// PDA Seeds: ["ledger_v1", owner]
#[account]
pub struct UserLedger {
    /// PDA bump seed
    pub bump: u8,

    /// The user's wallet address
    pub owner: Pubkey,

    /// Spendable balance in units
    pub balance: u64,

    /// Inviter wallet, set at most once
    pub inviter: Option<Pubkey>,

    /// Number of users this user invited
    pub referral_count: u32,

    /// Lifetime commission earned from referred purchases
    pub referral_earned: u64,

    /// Ticket purchases made by this user (the inviter's "active referral"
    /// stat counts users with ref_purchases > 0)
    pub ref_purchases: u32,

    /// Monotonic purchase counter, mixed into each draw seed
    pub tickets_bought: u64,

    /// Two-letter language tag ("ru", "en", ...)
    pub language: [u8; 2],

    /// Seed of the most recent draw (seed-to-outcome binding)
    pub last_draw_seed: [u8; 32],

    /// Roll derived from `last_draw_seed`
    pub last_roll_bps: u16,

    /// Timestamp of ledger creation
    pub created_at: i64,

    /// Most recent history entries, oldest first, capped at MAX_HISTORY
    pub history: Vec<HistoryEntry>,
}

impl UserLedger {
    /// Account size calculation:
    /// - bump: 1 byte
    /// - owner: 32 bytes (Pubkey)
    /// - balance: 8 bytes (u64)
    /// - inviter: 33 bytes (Option<Pubkey>)
    /// - referral_count: 4 bytes (u32)
    /// - referral_earned: 8 bytes (u64)
    /// - ref_purchases: 4 bytes (u32)
    /// - tickets_bought: 8 bytes (u64)
    /// - language: 2 bytes
    /// - last_draw_seed: 32 bytes
    /// - last_roll_bps: 2 bytes (u16)
    /// - created_at: 8 bytes (i64)
    /// - history: 4 + MAX_HISTORY * 50 bytes (Vec)
    pub const LEN: usize =
        1 + 32 + 8 + 33 + 4 + 8 + 4 + 8 + 2 + 32 + 2 + 8 + (4 + MAX_HISTORY * HistoryEntry::LEN);

    /// Append an entry, evicting the oldest beyond MAX_HISTORY
    pub fn push_history(&mut self, entry: HistoryEntry) {
        if self.history.len() >= MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(entry);
    }
}
