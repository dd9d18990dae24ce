use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

mod tests;

use constants::*;
use errors::ErrorCode;
use events::*;
use helpers::{math, vault};
use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod lotto_ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let state = &mut ctx.accounts.global_state;
        let clock = Clock::get()?;

        state.admin = ctx.accounts.admin.key();
        state.bump = ctx.bumps.global_state;
        state.vault_bump = ctx.bumps.vault;
        state.paused = false;
        state.total_tickets_sold = 0;
        state.total_wagered = 0;
        state.total_paid_out = 0;
        state.total_deposited = 0;
        state.total_withdrawn = 0;
        state.initialized_at = clock.unix_timestamp;

        emit!(LedgerInitialized {
            admin: state.admin,
            vault: ctx.accounts.vault.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Get-or-create of the caller's ledger row. Safe to call repeatedly.
    pub fn register(ctx: Context<Register>) -> Result<()> {
        let clock = Clock::get()?;
        touch_ledger(
            &mut ctx.accounts.ledger,
            ctx.accounts.user.key(),
            ctx.bumps.ledger,
            clock.unix_timestamp,
        );
        Ok(())
    }

    pub fn set_language(ctx: Context<SetLanguage>, language: [u8; 2]) -> Result<()> {
        require!(math::valid_language(&language), ErrorCode::InvalidLanguage);

        let ledger = &mut ctx.accounts.ledger;
        ledger.language = language;

        emit!(LanguageChanged {
            user: ledger.owner,
            language,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Bind the signer to an inviter, at most once. The ReferralLink PDA
    /// init makes a duplicate (inviter, invitee) edge impossible.
    pub fn bind_inviter(ctx: Context<BindInviter>) -> Result<()> {
        let clock = Clock::get()?;
        let inviter_key = ctx.accounts.inviter.key();
        let invitee_key = ctx.accounts.invitee.key();

        require!(inviter_key != invitee_key, ErrorCode::SelfReferral);

        touch_ledger(
            &mut ctx.accounts.invitee_ledger,
            invitee_key,
            ctx.bumps.invitee_ledger,
            clock.unix_timestamp,
        );
        touch_ledger(
            &mut ctx.accounts.inviter_ledger,
            inviter_key,
            ctx.bumps.inviter_ledger,
            clock.unix_timestamp,
        );

        let invitee_ledger = &mut ctx.accounts.invitee_ledger;
        require!(invitee_ledger.inviter.is_none(), ErrorCode::InviterAlreadySet);
        invitee_ledger.inviter = Some(inviter_key);

        let inviter_ledger = &mut ctx.accounts.inviter_ledger;
        inviter_ledger.referral_count = inviter_ledger.referral_count.saturating_add(1);

        let link = &mut ctx.accounts.referral_link;
        link.bump = ctx.bumps.referral_link;
        link.inviter = inviter_key;
        link.invitee = invitee_key;
        link.linked_at = clock.unix_timestamp;

        emit!(ReferralLinked {
            inviter: inviter_key,
            invitee: invitee_key,
            referral_count: inviter_ledger.referral_count,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Core settlement path: debit the price, draw the payout, apply
    /// weekend cashback and referral commission, all in one instruction.
    pub fn buy_tickets(ctx: Context<BuyTickets>, ticket_count: u8) -> Result<()> {
        let clock = Clock::get()?;
        let state = &mut ctx.accounts.global_state;
        require!(!state.paused, ErrorCode::Paused);

        let price = math::ticket_price(ticket_count)?;
        let ledger = &mut ctx.accounts.ledger;
        // Rejecting here leaves the ledger untouched: no debit, no history
        require!(ledger.balance >= price, ErrorCode::InsufficientBalance);

        ledger.balance = ledger
            .balance
            .checked_sub(price)
            .ok_or(ErrorCode::InsufficientBalance)?;
        ledger.ref_purchases = ledger.ref_purchases.saturating_add(1);
        let nonce = ledger.tickets_bought;
        ledger.tickets_bought = ledger.tickets_bought.saturating_add(ticket_count as u64);

        // Draw. The seed is persisted next to the roll so the outcome can
        // be re-derived from on-chain data.
        let seed = math::derive_draw_seed(&ledger.owner, nonce, clock.slot, clock.unix_timestamp);
        let breakdown = math::purchase_breakdown(price, &seed, clock.unix_timestamp)?;
        ledger.last_draw_seed = seed;
        ledger.last_roll_bps = breakdown.roll_bps;

        ledger.balance = ledger
            .balance
            .checked_add(breakdown.payout)
            .ok_or(ErrorCode::MathOverflow)?;
        ledger.push_history(HistoryEntry {
            kind: HistoryKind::Purchase,
            amount: -(price as i64),
            tickets: ticket_count,
            counterparty: Pubkey::default(),
            timestamp: clock.unix_timestamp,
        });
        ledger.push_history(HistoryEntry {
            kind: HistoryKind::Win,
            amount: breakdown.payout as i64,
            tickets: 0,
            counterparty: Pubkey::default(),
            timestamp: clock.unix_timestamp,
        });

        if breakdown.cashback > 0 {
            ledger.balance = ledger
                .balance
                .checked_add(breakdown.cashback)
                .ok_or(ErrorCode::MathOverflow)?;
            ledger.push_history(HistoryEntry {
                kind: HistoryKind::Cashback,
                amount: breakdown.cashback as i64,
                tickets: 0,
                counterparty: Pubkey::default(),
                timestamp: clock.unix_timestamp,
            });
        }

        // Commission goes to the inviter only, never back to the purchaser.
        // The rate is snapshotted from the inviter's live referral count.
        let mut bonus = 0u64;
        if let Some(inviter) = ledger.inviter {
            let referrer = ctx
                .accounts
                .referrer_ledger
                .as_mut()
                .ok_or(ErrorCode::ReferrerLedgerMissing)?;
            require!(referrer.owner == inviter, ErrorCode::ReferrerMismatch);

            let rate_bps = math::referral_rate_bps(referrer.referral_count);
            bonus = math::share_of(price, rate_bps)?;
            referrer.balance = referrer
                .balance
                .checked_add(bonus)
                .ok_or(ErrorCode::MathOverflow)?;
            referrer.referral_earned = referrer
                .referral_earned
                .checked_add(bonus)
                .ok_or(ErrorCode::MathOverflow)?;
            referrer.push_history(HistoryEntry {
                kind: HistoryKind::ReferralBonus,
                amount: bonus as i64,
                tickets: 0,
                counterparty: ledger.owner,
                timestamp: clock.unix_timestamp,
            });

            emit!(ReferralBonusPaid {
                referrer: inviter,
                purchaser: ledger.owner,
                price,
                rate_bps,
                referral_count: referrer.referral_count,
                bonus,
                timestamp: clock.unix_timestamp,
            });
        }

        state.total_tickets_sold = state.total_tickets_sold.saturating_add(ticket_count as u64);
        state.total_wagered = state.total_wagered.saturating_add(price);
        state.total_paid_out = state
            .total_paid_out
            .saturating_add(breakdown.payout)
            .saturating_add(breakdown.cashback)
            .saturating_add(bonus);

        msg!(
            "Purchase: {} ticket(s), roll {} bps, payout {} units",
            ticket_count,
            breakdown.roll_bps,
            breakdown.payout
        );
        #[cfg(feature = "verbose")]
        msg!(
            "Breakdown: price={}, cashback={}, bonus={}, balance_after={}",
            price,
            breakdown.cashback,
            bonus,
            ledger.balance
        );

        emit!(TicketsPurchased {
            player: ledger.owner,
            tickets: ticket_count,
            price,
            seed,
            roll_bps: breakdown.roll_bps,
            payout: breakdown.payout,
            cashback: breakdown.cashback,
            balance_after: ledger.balance,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Open a deposit invoice, payable for INVOICE_TTL seconds
    pub fn create_invoice(ctx: Context<CreateInvoice>, invoice_id: u64, amount: u64) -> Result<()> {
        require!(!ctx.accounts.global_state.paused, ErrorCode::Paused);
        require!(amount > 0, ErrorCode::InvalidAmount);

        let clock = Clock::get()?;
        let invoice = &mut ctx.accounts.invoice;
        invoice.bump = ctx.bumps.invoice;
        invoice.invoice_id = invoice_id;
        invoice.payer = ctx.accounts.payer.key();
        invoice.amount = amount;
        invoice.status = InvoiceStatus::Active;
        invoice.created_at = clock.unix_timestamp;
        invoice.expires_at = clock.unix_timestamp + INVOICE_TTL;
        invoice.paid_at = 0;

        emit!(InvoiceCreated {
            invoice_id,
            payer: invoice.payer,
            amount,
            expires_at: invoice.expires_at,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Pay an active invoice: lamports move payer -> vault and the ledger
    /// is credited in the same transaction, so a deposit can never race a
    /// purchase into a lost update.
    pub fn pay_invoice(ctx: Context<PayInvoice>) -> Result<()> {
        let clock = Clock::get()?;
        let state = &mut ctx.accounts.global_state;
        require!(!state.paused, ErrorCode::Paused);

        let invoice = &mut ctx.accounts.invoice;
        invoice.pay(clock.unix_timestamp)?;

        vault::vault_deposit(
            &ctx.accounts.system_program,
            &ctx.accounts.payer,
            &ctx.accounts.vault,
            invoice.amount,
        )?;

        touch_ledger(
            &mut ctx.accounts.ledger,
            ctx.accounts.payer.key(),
            ctx.bumps.ledger,
            clock.unix_timestamp,
        );
        let ledger = &mut ctx.accounts.ledger;
        ledger.balance = ledger
            .balance
            .checked_add(invoice.amount)
            .ok_or(ErrorCode::MathOverflow)?;
        ledger.push_history(HistoryEntry {
            kind: HistoryKind::Deposit,
            amount: invoice.amount as i64,
            tickets: 0,
            counterparty: Pubkey::default(),
            timestamp: clock.unix_timestamp,
        });

        state.total_deposited = state.total_deposited.saturating_add(invoice.amount);

        msg!("Invoice {} paid: {} units", invoice.invoice_id, invoice.amount);

        emit!(InvoicePaid {
            invoice_id: invoice.invoice_id,
            payer: invoice.payer,
            amount: invoice.amount,
            balance_after: ledger.balance,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Flip a stale invoice to its terminal state; permissionless crank
    pub fn expire_invoice(ctx: Context<ExpireInvoice>) -> Result<()> {
        let clock = Clock::get()?;
        let invoice = &mut ctx.accounts.invoice;
        invoice.expire(clock.unix_timestamp)?;

        emit!(InvoiceExpired {
            invoice_id: invoice.invoice_id,
            payer: invoice.payer,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Reserve funds for a payout. The (user, request_id) PDA is the
    /// stable idempotency key the settle step checks against.
    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        request_id: u64,
        amount: u64,
    ) -> Result<()> {
        require!(!ctx.accounts.global_state.paused, ErrorCode::Paused);
        math::net_withdrawal(amount)?;

        let clock = Clock::get()?;
        let ledger = &mut ctx.accounts.ledger;
        require!(ledger.balance >= amount, ErrorCode::InsufficientBalance);
        ledger.balance = ledger
            .balance
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientBalance)?;
        ledger.push_history(HistoryEntry {
            kind: HistoryKind::Withdrawal,
            amount: -(amount as i64),
            tickets: 0,
            counterparty: Pubkey::default(),
            timestamp: clock.unix_timestamp,
        });

        let request = &mut ctx.accounts.request;
        request.bump = ctx.bumps.request;
        request.request_id = request_id;
        request.user = ctx.accounts.user.key();
        request.amount = amount;
        request.fee = WITHDRAWAL_FEE;
        request.status = WithdrawalStatus::Pending;
        request.created_at = clock.unix_timestamp;
        request.settled_at = 0;

        emit!(WithdrawalRequested {
            request_id,
            user: request.user,
            amount,
            fee: WITHDRAWAL_FEE,
            balance_after: ledger.balance,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Pay a pending request out of the vault (amount minus the flat fee).
    /// Replaying a settle after a timeout fails on the status check
    /// instead of paying twice.
    pub fn settle_withdrawal(ctx: Context<SettleWithdrawal>) -> Result<()> {
        let clock = Clock::get()?;
        let state = &mut ctx.accounts.global_state;
        let request = &mut ctx.accounts.request;

        let transferred = request.settle(clock.unix_timestamp)?;
        vault::vault_withdraw(
            &ctx.accounts.vault,
            &ctx.accounts.recipient,
            &ctx.accounts.system_program.to_account_info(),
            transferred,
            state.vault_bump,
        )?;

        state.total_withdrawn = state.total_withdrawn.saturating_add(request.amount);

        msg!(
            "Withdrawal {} settled: {} units to {}",
            request.request_id,
            transferred,
            request.user
        );

        emit!(WithdrawalSettled {
            request_id: request.request_id,
            user: request.user,
            transferred,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Void a pending request and return the reserved funds to the ledger
    pub fn cancel_withdrawal(ctx: Context<CancelWithdrawal>) -> Result<()> {
        let clock = Clock::get()?;
        let request = &mut ctx.accounts.request;

        let authority = ctx.accounts.authority.key();
        require!(
            authority == request.user || authority == ctx.accounts.global_state.admin,
            ErrorCode::UnauthorizedAccess
        );
        let refunded = request.cancel(clock.unix_timestamp)?;

        let ledger = &mut ctx.accounts.ledger;
        ledger.balance = ledger
            .balance
            .checked_add(refunded)
            .ok_or(ErrorCode::MathOverflow)?;
        ledger.push_history(HistoryEntry {
            kind: HistoryKind::Withdrawal,
            amount: refunded as i64,
            tickets: 0,
            counterparty: Pubkey::default(),
            timestamp: clock.unix_timestamp,
        });

        emit!(WithdrawalCancelled {
            request_id: request.request_id,
            user: request.user,
            refunded,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Admin-only out-of-band credit (test deposits, promotions)
    pub fn grant_credit(ctx: Context<GrantCredit>, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);

        let clock = Clock::get()?;
        touch_ledger(
            &mut ctx.accounts.ledger,
            ctx.accounts.user.key(),
            ctx.bumps.ledger,
            clock.unix_timestamp,
        );

        let ledger = &mut ctx.accounts.ledger;
        ledger.balance = ledger
            .balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        ledger.push_history(HistoryEntry {
            kind: HistoryKind::TestCredit,
            amount: amount as i64,
            tickets: 0,
            counterparty: Pubkey::default(),
            timestamp: clock.unix_timestamp,
        });

        emit!(CreditGranted {
            user: ledger.owner,
            amount,
            balance_after: ledger.balance,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    pub fn pause(ctx: Context<AdminControl>) -> Result<()> {
        let state = &mut ctx.accounts.global_state;
        state.paused = true;
        emit!(StatusChanged {
            paused: true,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn resume(ctx: Context<AdminControl>) -> Result<()> {
        let state = &mut ctx.accounts.global_state;
        state.paused = false;
        emit!(StatusChanged {
            paused: false,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>) -> Result<()> {
        let state = &mut ctx.accounts.global_state;
        let old_admin = state.admin;
        state.admin = ctx.accounts.new_admin.key();
        emit!(AdminTransferred {
            old_admin,
            new_admin: state.admin,
            timestamp: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}

// HELPERS

/// Fill in a freshly created ledger (init_if_needed leaves it zeroed).
/// No-op when the account already carries its owner.
fn touch_ledger(ledger: &mut UserLedger, owner: Pubkey, bump: u8, now: i64) {
    if ledger.owner == Pubkey::default() {
        ledger.bump = bump;
        ledger.owner = owner;
        ledger.language = DEFAULT_LANGUAGE;
        ledger.created_at = now;
        emit!(UserRegistered {
            user: owner,
            timestamp: now,
        });
    }
}

// ACCOUNTS

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + GlobalState::LEN,
        seeds = [GLOBAL_STATE_SEED],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,
    /// CHECK: dataless system-owned PDA holding the pooled lamports
    #[account(seeds = [VAULT_SEED], bump)]
    pub vault: AccountInfo<'info>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Register<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserLedger::LEN,
        seeds = [USER_LEDGER_SEED, user.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, UserLedger>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetLanguage<'info> {
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [USER_LEDGER_SEED, user.key().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, UserLedger>,
}

#[derive(Accounts)]
pub struct BindInviter<'info> {
    #[account(mut)]
    pub invitee: Signer<'info>,
    /// CHECK: inviter wallet; only its key is read
    pub inviter: AccountInfo<'info>,
    #[account(
        init_if_needed,
        payer = invitee,
        space = 8 + UserLedger::LEN,
        seeds = [USER_LEDGER_SEED, invitee.key().as_ref()],
        bump
    )]
    pub invitee_ledger: Account<'info, UserLedger>,
    #[account(
        init_if_needed,
        payer = invitee,
        space = 8 + UserLedger::LEN,
        seeds = [USER_LEDGER_SEED, inviter.key().as_ref()],
        bump
    )]
    pub inviter_ledger: Account<'info, UserLedger>,
    #[account(
        init,
        payer = invitee,
        space = 8 + ReferralLink::LEN,
        seeds = [
            REFERRAL_LINK_SEED,
            inviter.key().as_ref(),
            invitee.key().as_ref(),
        ],
        bump
    )]
    pub referral_link: Account<'info, ReferralLink>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct BuyTickets<'info> {
    pub player: Signer<'info>,
    #[account(mut, seeds = [GLOBAL_STATE_SEED], bump = global_state.bump)]
    pub global_state: Account<'info, GlobalState>,
    #[account(
        mut,
        seeds = [USER_LEDGER_SEED, player.key().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, UserLedger>,
    /// Required when the player has a bound inviter; verified in the handler
    #[account(mut)]
    pub referrer_ledger: Option<Account<'info, UserLedger>>,
}

#[derive(Accounts)]
#[instruction(invoice_id: u64)]
pub struct CreateInvoice<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(seeds = [GLOBAL_STATE_SEED], bump = global_state.bump)]
    pub global_state: Account<'info, GlobalState>,
    #[account(
        init,
        payer = payer,
        space = 8 + Invoice::LEN,
        seeds = [
            INVOICE_SEED,
            payer.key().as_ref(),
            invoice_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub invoice: Account<'info, Invoice>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct PayInvoice<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(mut, seeds = [GLOBAL_STATE_SEED], bump = global_state.bump)]
    pub global_state: Account<'info, GlobalState>,
    #[account(
        mut,
        seeds = [
            INVOICE_SEED,
            payer.key().as_ref(),
            invoice.invoice_id.to_le_bytes().as_ref(),
        ],
        bump = invoice.bump
    )]
    pub invoice: Account<'info, Invoice>,
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + UserLedger::LEN,
        seeds = [USER_LEDGER_SEED, payer.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, UserLedger>,
    /// CHECK: vault PDA, receives the deposit
    #[account(mut, seeds = [VAULT_SEED], bump = global_state.vault_bump)]
    pub vault: AccountInfo<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ExpireInvoice<'info> {
    pub cranker: Signer<'info>,
    #[account(mut)]
    pub invoice: Account<'info, Invoice>,
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct RequestWithdrawal<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(seeds = [GLOBAL_STATE_SEED], bump = global_state.bump)]
    pub global_state: Account<'info, GlobalState>,
    #[account(
        mut,
        seeds = [USER_LEDGER_SEED, user.key().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, UserLedger>,
    #[account(
        init,
        payer = user,
        space = 8 + WithdrawalRequest::LEN,
        seeds = [
            WITHDRAWAL_SEED,
            user.key().as_ref(),
            request_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub request: Account<'info, WithdrawalRequest>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SettleWithdrawal<'info> {
    pub cranker: Signer<'info>,
    #[account(mut, seeds = [GLOBAL_STATE_SEED], bump = global_state.bump)]
    pub global_state: Account<'info, GlobalState>,
    #[account(
        mut,
        seeds = [
            WITHDRAWAL_SEED,
            request.user.as_ref(),
            request.request_id.to_le_bytes().as_ref(),
        ],
        bump = request.bump
    )]
    pub request: Account<'info, WithdrawalRequest>,
    /// CHECK: paid to the wallet recorded on the request
    #[account(mut, address = request.user @ ErrorCode::RecipientMismatch)]
    pub recipient: AccountInfo<'info>,
    /// CHECK: vault PDA, source of the payout
    #[account(mut, seeds = [VAULT_SEED], bump = global_state.vault_bump)]
    pub vault: AccountInfo<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct CancelWithdrawal<'info> {
    pub authority: Signer<'info>,
    #[account(seeds = [GLOBAL_STATE_SEED], bump = global_state.bump)]
    pub global_state: Account<'info, GlobalState>,
    #[account(
        mut,
        seeds = [
            WITHDRAWAL_SEED,
            request.user.as_ref(),
            request.request_id.to_le_bytes().as_ref(),
        ],
        bump = request.bump
    )]
    pub request: Account<'info, WithdrawalRequest>,
    #[account(
        mut,
        seeds = [USER_LEDGER_SEED, request.user.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, UserLedger>,
}

#[derive(Accounts)]
pub struct GrantCredit<'info> {
    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        constraint = admin.key() == global_state.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub global_state: Account<'info, GlobalState>,
    #[account(mut)]
    pub admin: Signer<'info>,
    /// CHECK: credited wallet; only its key is read
    pub user: AccountInfo<'info>,
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + UserLedger::LEN,
        seeds = [USER_LEDGER_SEED, user.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, UserLedger>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct AdminControl<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        constraint = admin.key() == global_state.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub global_state: Account<'info, GlobalState>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        constraint = admin.key() == global_state.admin @ ErrorCode::UnauthorizedAccess
    )]
    pub global_state: Account<'info, GlobalState>,
    pub admin: Signer<'info>,
    /// CHECK: incoming admin wallet
    pub new_admin: AccountInfo<'info>,
}
