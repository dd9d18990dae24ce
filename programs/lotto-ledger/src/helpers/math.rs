use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::*;
use crate::errors::ErrorCode;

/// Everything a single purchase settles, computed up front from the price,
/// the draw seed and the clock
pub struct PurchaseBreakdown {
    pub roll_bps: u16,
    pub payout: u64,
    /// Zero outside of weekends
    pub cashback: u64,
}

/// Fixed price table: 1 / 3 / 10 tickets with bulk discount
pub fn ticket_price(ticket_count: u8) -> Result<u64> {
    match ticket_count {
        1 => Ok(TICKET_PRICE_1),
        3 => Ok(TICKET_PRICE_3),
        10 => Ok(TICKET_PRICE_10),
        _ => Err(ErrorCode::InvalidTicketCount.into()),
    }
}

/// Commission tier by the referrer's total referral count (in basis points)
pub fn referral_rate_bps(referral_count: u32) -> u16 {
    match referral_count {
        0..=2 => 1_000,
        3..=4 => 1_200,
        5..=9 => 1_500,
        10..=19 => 1_800,
        20..=29 => 2_000,
        30..=49 => 2_200,
        _ => 2_500,
    }
}

/// Saturday or Sunday in UTC
pub fn is_weekend(unix_timestamp: i64) -> bool {
    // Epoch day zero (1970-01-01) was a Thursday; shift so 0 = Monday
    let weekday = (unix_timestamp.div_euclid(SECONDS_PER_DAY) + 3).rem_euclid(7);
    weekday >= 5
}

/// Round half-up to the nearest 0.01 coin
pub fn round_to_cents(value: u128) -> Result<u64> {
    let cent = CENT as u128;
    let rounded = value
        .checked_add(cent / 2)
        .ok_or(ErrorCode::MathOverflow)?
        / cent
        * cent;
    require!(rounded <= u64::MAX as u128, ErrorCode::MathOverflow);
    Ok(rounded as u64)
}

/// `amount * bps / 10_000`, rounded to the cent grain
pub fn share_of(amount: u64, bps: u16) -> Result<u64> {
    round_to_cents(amount as u128 * bps as u128 / 10_000)
}

/// Draw seed for one purchase: owner key, purchase nonce, slot, timestamp.
/// Persisted alongside the outcome so every roll can be re-derived.
pub fn derive_draw_seed(owner: &Pubkey, nonce: u64, slot: u64, unix_timestamp: i64) -> [u8; 32] {
    hashv(&[
        owner.as_ref(),
        &nonce.to_le_bytes(),
        &slot.to_le_bytes(),
        &unix_timestamp.to_le_bytes(),
    ])
    .to_bytes()
}

/// Uniform roll in [WIN_MIN_BPS, WIN_MAX_BPS] derived from a draw seed
pub fn draw_roll_bps(seed: &[u8; 32]) -> u16 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&seed[..8]);
    let span = (WIN_MAX_BPS - WIN_MIN_BPS + 1) as u64;
    WIN_MIN_BPS + (u64::from_le_bytes(raw) % span) as u16
}

/// Settle the player-side deltas of one purchase
pub fn purchase_breakdown(
    price: u64,
    seed: &[u8; 32],
    unix_timestamp: i64,
) -> Result<PurchaseBreakdown> {
    let roll_bps = draw_roll_bps(seed);
    let payout = share_of(price, roll_bps)?;
    let cashback = if is_weekend(unix_timestamp) {
        share_of(price, CASHBACK_BPS)?
    } else {
        0
    };
    Ok(PurchaseBreakdown {
        roll_bps,
        payout,
        cashback,
    })
}

/// Two-byte language tag: any ASCII pair ("ru", "EN", "z9").
/// Rendering lives off-chain, so the tag is stored as given.
pub fn valid_language(tag: &[u8; 2]) -> bool {
    tag.iter().all(|b| b.is_ascii())
}

/// Validate a withdrawal amount and return the net transfer (fee absorbed)
pub fn net_withdrawal(amount: u64) -> Result<u64> {
    require!(amount >= MIN_WITHDRAWAL, ErrorCode::WithdrawalBelowMinimum);
    // MIN_WITHDRAWAL > WITHDRAWAL_FEE keeps the net strictly positive
    amount
        .checked_sub(WITHDRAWAL_FEE)
        .ok_or(ErrorCode::MathOverflow.into())
}
