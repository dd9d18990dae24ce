use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Invoice lifecycle: Active until paid or past its deadline
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum InvoiceStatus {
    Active,
    Paid,
    Expired,
}

/// Deposit invoice
///
/// Replaces the external provider's invoice envelope with a first-class
/// account: create opens it, paying it credits the ledger in the same
/// transaction, and anyone can flip a stale one to Expired.
///
/// PDA Seeds: ["invoice_v1", payer, invoice_id (u64 LE)]
#[account]
pub struct Invoice {
    /// PDA bump seed
    pub bump: u8,

    /// Caller-chosen invoice id, unique per payer
    pub invoice_id: u64,

    /// The wallet that opened and must pay this invoice
    pub payer: Pubkey,

    /// Units credited to the ledger on payment
    pub amount: u64,

    pub status: InvoiceStatus,

    pub created_at: i64,

    /// Deadline: created_at + INVOICE_TTL
    pub expires_at: i64,

    /// Zero until paid
    pub paid_at: i64,
}

impl Invoice {
    /// bump(1) + invoice_id(8) + payer(32) + amount(8) + status(1)
    /// + created_at(8) + expires_at(8) + paid_at(8) = 74 bytes
    pub const LEN: usize = 1 + 8 + 32 + 8 + 1 + 8 + 8 + 8;

    /// Active -> Paid, only within the payment window
    pub fn pay(&mut self, now: i64) -> Result<()> {
        require!(
            self.status == InvoiceStatus::Active,
            ErrorCode::InvoiceNotActive
        );
        require!(now <= self.expires_at, ErrorCode::InvoiceExpired);
        self.status = InvoiceStatus::Paid;
        self.paid_at = now;
        Ok(())
    }

    /// Active -> Expired, only past the deadline
    pub fn expire(&mut self, now: i64) -> Result<()> {
        require!(
            self.status == InvoiceStatus::Active,
            ErrorCode::InvoiceNotActive
        );
        require!(now > self.expires_at, ErrorCode::InvoiceNotExpired);
        self.status = InvoiceStatus::Expired;
        Ok(())
    }
}
