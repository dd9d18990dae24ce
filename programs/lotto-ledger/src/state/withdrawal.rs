use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Withdrawal request lifecycle: Pending until paid or cancelled
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum WithdrawalStatus {
    Pending,
    Paid,
    Cancelled,
}

/// Payout request with a stable idempotency key
///
/// The (user, request_id) pair is the persistent idempotency key: settling
/// requires Pending status, so a retried settle after a timeout fails
/// instead of paying twice. Funds are reserved (debited) at request time
/// and either leave through the vault or return on cancellation.
///
/// PDA Seeds: ["withdraw_v1", user, request_id (u64 LE)]
#[account]
pub struct WithdrawalRequest {
    /// PDA bump seed
    pub bump: u8,

    /// Caller-chosen request id, unique per user
    pub request_id: u64,

    /// The wallet the net amount is paid to
    pub user: Pubkey,

    /// Units reserved from the ledger (fee included)
    pub amount: u64,

    /// Flat fee absorbed from the transfer
    pub fee: u64,

    pub status: WithdrawalStatus,

    pub created_at: i64,

    /// Zero until paid or cancelled
    pub settled_at: i64,
}

impl WithdrawalRequest {
    /// bump(1) + request_id(8) + user(32) + amount(8) + fee(8) + status(1)
    /// + created_at(8) + settled_at(8) = 74 bytes
    pub const LEN: usize = 1 + 8 + 32 + 8 + 8 + 1 + 8 + 8;

    /// Pending -> Paid. Returns the net transfer (amount minus fee).
    /// Fails on any other status, so a retried settle cannot pay twice.
    pub fn settle(&mut self, now: i64) -> Result<u64> {
        require!(
            self.status == WithdrawalStatus::Pending,
            ErrorCode::RequestNotPending
        );
        let net = self
            .amount
            .checked_sub(self.fee)
            .ok_or(ErrorCode::MathOverflow)?;
        self.status = WithdrawalStatus::Paid;
        self.settled_at = now;
        Ok(net)
    }

    /// Pending -> Cancelled. Returns the reserved amount to refund.
    pub fn cancel(&mut self, now: i64) -> Result<u64> {
        require!(
            self.status == WithdrawalStatus::Pending,
            ErrorCode::RequestNotPending
        );
        self.status = WithdrawalStatus::Cancelled;
        self.settled_at = now;
        Ok(self.amount)
    }
}
