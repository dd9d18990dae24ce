use anchor_lang::prelude::*;

/// Uniqueness marker for one (inviter, invitee) referral edge
///
/// Account init fails if the pair was already linked, which enforces the
/// "each invitee appears once in a referral list" rule atomically.
///
/// PDA Seeds: ["referral_v1", inviter, invitee]
#[account]
pub struct ReferralLink {
    /// PDA bump seed
    pub bump: u8,

    pub inviter: Pubkey,

    pub invitee: Pubkey,

    pub linked_at: i64,
}

impl ReferralLink {
    /// bump(1) + inviter(32) + invitee(32) + linked_at(8) = 73 bytes
    pub const LEN: usize = 1 + 32 + 32 + 8;
}
