// ══════════════════════════════════════════════════════════════════════════════
// MONETARY UNITS
// ══════════════════════════════════════════════════════════════════════════════

/// Base denomination: 1 coin = 10^9 units (same scale as lamports)
pub const UNIT: u64 = 1_000_000_000;

/// Smallest amount rendered to users: 0.01 coin.
/// All derived rewards are rounded half-up to this grain.
pub const CENT: u64 = 10_000_000;

// ══════════════════════════════════════════════════════════════════════════════
// TICKET PRICE TABLE
// ══════════════════════════════════════════════════════════════════════════════

/// 1 ticket = 1.0 coin
pub const TICKET_PRICE_1: u64 = 1_000_000_000;

/// 3 tickets = 2.9 coins (bulk discount)
pub const TICKET_PRICE_3: u64 = 2_900_000_000;

/// 10 tickets = 9.0 coins (bulk discount)
pub const TICKET_PRICE_10: u64 = 9_000_000_000;

// ══════════════════════════════════════════════════════════════════════════════
// PAYOUT / REWARD PARAMETERS
// ══════════════════════════════════════════════════════════════════════════════

/// Lower bound of the payout roll: 10% of the ticket price
pub const WIN_MIN_BPS: u16 = 1_000;

/// Upper bound of the payout roll: 50% of the ticket price
pub const WIN_MAX_BPS: u16 = 5_000;

/// Flat weekend cashback: 5% of the ticket price on Saturday/Sunday (UTC)
pub const CASHBACK_BPS: u16 = 500;

// ══════════════════════════════════════════════════════════════════════════════
// WITHDRAWALS / INVOICES
// ══════════════════════════════════════════════════════════════════════════════

/// Minimum withdrawal request: 1.0 coin
pub const MIN_WITHDRAWAL: u64 = UNIT;

/// Flat payout fee of 0.1 coin, absorbed from the transferred amount
/// (the ledger is debited by the full requested amount)
pub const WITHDRAWAL_FEE: u64 = 100_000_000;

/// Deposit invoices stay payable for one hour
pub const INVOICE_TTL: i64 = 3_600;

// ══════════════════════════════════════════════════════════════════════════════
// LEDGER LIMITS
// ══════════════════════════════════════════════════════════════════════════════

/// History ring capacity per user: oldest entries are evicted beyond this
pub const MAX_HISTORY: usize = 32;

/// Two-letter language tag assigned to fresh ledgers
pub const DEFAULT_LANGUAGE: [u8; 2] = *b"ru";

pub const SECONDS_PER_DAY: i64 = 86_400;

// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

pub const GLOBAL_STATE_SEED: &[u8] = b"lotto_v1";
pub const VAULT_SEED: &[u8] = b"vault_v1";
pub const USER_LEDGER_SEED: &[u8] = b"ledger_v1";
pub const INVOICE_SEED: &[u8] = b"invoice_v1";
pub const WITHDRAWAL_SEED: &[u8] = b"withdraw_v1";
pub const REFERRAL_LINK_SEED: &[u8] = b"referral_v1";
