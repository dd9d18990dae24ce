// ============================================================================
// UNIT TESTS FOR LOTTO LEDGER PROGRAM
// ============================================================================
//
// This module contains unit tests for the core logic of the ledger program.
// Run with: cargo test --lib
//
// Test Categories:
// 1. Price Table - ticket_price fixed points and rejection
// 2. Referral Tiers - referral_rate_bps boundaries
// 3. Weekend Detection - is_weekend against known calendar dates
// 4. Rounding - round_to_cents / share_of half-up behavior
// 5. Draw - seed derivation and roll bounds
// 6. Purchase Settlement - purchase_breakdown balance identity
// 7. Withdrawals - net_withdrawal fee math, Pending state machine
// 8. Invoices - Active state machine and payment window
// 9. Ledger State - history eviction, language tags, account size math
// ============================================================================

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use crate::{
        constants::*,
        helpers::math::{
            derive_draw_seed, draw_roll_bps, is_weekend, net_withdrawal, purchase_breakdown,
            referral_rate_bps, round_to_cents, share_of, ticket_price, valid_language,
        },
        state::{
            GlobalState, HistoryEntry, HistoryKind, Invoice, InvoiceStatus, ReferralLink,
            UserLedger, WithdrawalRequest, WithdrawalStatus,
        },
    };
    use anchor_lang::prelude::Pubkey;

    // ========================================================================
    // 1. PRICE TABLE TESTS
    // ========================================================================

    mod price_tests {
        use super::*;

        #[test]
        fn test_ticket_price_fixed_points() {
            assert_eq!(ticket_price(1).unwrap(), TICKET_PRICE_1);
            assert_eq!(ticket_price(3).unwrap(), TICKET_PRICE_3);
            assert_eq!(ticket_price(10).unwrap(), TICKET_PRICE_10);
        }

        #[test]
        fn test_ticket_price_bulk_discount() {
            // 3 tickets cost less than 3x one, 10 tickets less than 10x one
            assert!(TICKET_PRICE_3 < 3 * TICKET_PRICE_1);
            assert!(TICKET_PRICE_10 < 10 * TICKET_PRICE_1);
        }

        #[test]
        fn test_ticket_price_rejects_off_table_counts() {
            for count in [0u8, 2, 4, 5, 9, 11, 100, u8::MAX] {
                assert!(
                    ticket_price(count).is_err(),
                    "count {} should be rejected",
                    count
                );
            }
        }
    }

    // ========================================================================
    // 2. REFERRAL TIER TESTS
    // ========================================================================

    mod referral_tier_tests {
        use super::*;

        #[test]
        fn test_tier_boundaries() {
            assert_eq!(referral_rate_bps(0), 1_000);
            assert_eq!(referral_rate_bps(2), 1_000);
            assert_eq!(referral_rate_bps(3), 1_200);
            assert_eq!(referral_rate_bps(4), 1_200);
            assert_eq!(referral_rate_bps(5), 1_500);
            assert_eq!(referral_rate_bps(9), 1_500);
            assert_eq!(referral_rate_bps(10), 1_800);
            assert_eq!(referral_rate_bps(19), 1_800);
            assert_eq!(referral_rate_bps(20), 2_000);
            assert_eq!(referral_rate_bps(29), 2_000);
            assert_eq!(referral_rate_bps(30), 2_200);
            assert_eq!(referral_rate_bps(49), 2_200);
            assert_eq!(referral_rate_bps(50), 2_500);
        }

        #[test]
        fn test_tier_is_monotonic_and_capped() {
            let mut prev = 0u16;
            for count in 0..=100u32 {
                let rate = referral_rate_bps(count);
                assert!(rate >= prev, "rate must not decrease with more referrals");
                prev = rate;
            }
            assert_eq!(referral_rate_bps(u32::MAX), 2_500);
        }

        #[test]
        fn test_commission_amounts_per_tier() {
            // 10% of the 1-ticket price at the base tier
            assert_eq!(share_of(TICKET_PRICE_1, 1_000).unwrap(), 100_000_000);
            // 25% at the top tier
            assert_eq!(share_of(TICKET_PRICE_1, 2_500).unwrap(), 250_000_000);
        }
    }

    // ========================================================================
    // 3. WEEKEND DETECTION TESTS
    // ========================================================================

    mod weekend_tests {
        use super::*;

        #[test]
        fn test_known_weekend_days() {
            // 2024-01-06 00:00 UTC, a Saturday
            assert!(is_weekend(1_704_499_200));
            // 2024-01-07 00:00 UTC, a Sunday
            assert!(is_weekend(1_704_585_600));
            // Last second of that Sunday
            assert!(is_weekend(1_704_585_600 + 86_399));
        }

        #[test]
        fn test_known_weekdays() {
            // 2024-01-05 00:00 UTC, a Friday
            assert!(!is_weekend(1_704_412_800));
            // 2024-01-08 00:00 UTC, a Monday
            assert!(!is_weekend(1_704_672_000));
            // Friday 23:59:59 is still a weekday
            assert!(!is_weekend(1_704_412_800 + 86_399));
        }

        #[test]
        fn test_epoch_and_negative_timestamps() {
            // 1970-01-01 was a Thursday
            assert!(!is_weekend(0));
            // 1969-12-28 was a Sunday
            assert!(is_weekend(-4 * 86_400));
        }
    }

    // ========================================================================
    // 4. ROUNDING TESTS
    // ========================================================================

    mod rounding_tests {
        use super::*;

        #[test]
        fn test_round_to_cents_half_up() {
            // Exactly on the grain: unchanged
            assert_eq!(round_to_cents(440_000_000).unwrap(), 440_000_000);
            // Exactly half a cent rounds up
            assert_eq!(round_to_cents(435_000_000).unwrap(), 440_000_000);
            // Just below half a cent rounds down
            assert_eq!(round_to_cents(434_999_999).unwrap(), 430_000_000);
            assert_eq!(round_to_cents(0).unwrap(), 0);
        }

        #[test]
        fn test_round_to_cents_overflow() {
            assert!(round_to_cents(u128::MAX).is_err());
        }

        #[test]
        fn test_share_of_rounds_on_cent_grain() {
            // 2.9 coins at 15% = 0.435, which rounds half-up to 0.44
            assert_eq!(share_of(TICKET_PRICE_3, 1_500).unwrap(), 440_000_000);
            // Every share lands on a whole cent
            for bps in [1_000u16, 1_234, 2_500, 5_000] {
                let share = share_of(TICKET_PRICE_3, bps).unwrap();
                assert_eq!(share % CENT, 0, "share at {} bps off the cent grain", bps);
            }
        }

        #[test]
        fn test_share_of_zero_amount() {
            assert_eq!(share_of(0, 2_500).unwrap(), 0);
        }
    }

    // ========================================================================
    // 5. DRAW TESTS
    // ========================================================================

    mod draw_tests {
        use super::*;

        #[test]
        fn test_seed_is_deterministic() {
            let owner = Pubkey::new_unique();
            let a = derive_draw_seed(&owner, 7, 1000, 1_704_499_200);
            let b = derive_draw_seed(&owner, 7, 1000, 1_704_499_200);
            assert_eq!(a, b);
        }

        #[test]
        fn test_seed_varies_with_each_input() {
            let owner = Pubkey::new_unique();
            let base = derive_draw_seed(&owner, 7, 1000, 1_704_499_200);
            assert_ne!(base, derive_draw_seed(&owner, 8, 1000, 1_704_499_200));
            assert_ne!(base, derive_draw_seed(&owner, 7, 1001, 1_704_499_200));
            assert_ne!(base, derive_draw_seed(&owner, 7, 1000, 1_704_499_201));
            assert_ne!(base, derive_draw_seed(&Pubkey::new_unique(), 7, 1000, 1_704_499_200));
        }

        #[test]
        fn test_roll_covers_exact_range() {
            // First 8 seed bytes drive the roll (little endian)
            let mut seed = [0u8; 32];
            assert_eq!(draw_roll_bps(&seed), WIN_MIN_BPS);

            let span = (WIN_MAX_BPS - WIN_MIN_BPS) as u64;
            seed[..8].copy_from_slice(&span.to_le_bytes());
            assert_eq!(draw_roll_bps(&seed), WIN_MAX_BPS);

            seed[..8].copy_from_slice(&(span + 1).to_le_bytes());
            assert_eq!(draw_roll_bps(&seed), WIN_MIN_BPS);
        }

        #[test]
        fn test_roll_stays_in_bounds() {
            let owner = Pubkey::new_unique();
            for nonce in 0..256u64 {
                let seed = derive_draw_seed(&owner, nonce, nonce * 3, 1_704_499_200);
                let roll = draw_roll_bps(&seed);
                assert!(roll >= WIN_MIN_BPS && roll <= WIN_MAX_BPS, "roll {} out of range", roll);
            }
        }
    }

    // ========================================================================
    // 6. PURCHASE SETTLEMENT TESTS
    // ========================================================================

    mod settlement_tests {
        use super::*;

        const WEEKDAY_TS: i64 = 1_704_672_000; // Monday
        const WEEKEND_TS: i64 = 1_704_499_200; // Saturday

        #[test]
        fn test_payout_matches_roll() {
            let seed = [0u8; 32]; // rolls WIN_MIN_BPS
            let b = purchase_breakdown(TICKET_PRICE_1, &seed, WEEKDAY_TS).unwrap();
            assert_eq!(b.roll_bps, WIN_MIN_BPS);
            assert_eq!(b.payout, share_of(TICKET_PRICE_1, WIN_MIN_BPS).unwrap());
            assert_eq!(b.cashback, 0);
        }

        #[test]
        fn test_weekend_cashback_applied() {
            let seed = [0u8; 32];
            let b = purchase_breakdown(TICKET_PRICE_1, &seed, WEEKEND_TS).unwrap();
            assert_eq!(b.cashback, share_of(TICKET_PRICE_1, CASHBACK_BPS).unwrap());
            assert_eq!(b.cashback, 50_000_000); // 5% of 1 coin
        }

        #[test]
        fn test_balance_identity() {
            // balance' = balance - price + payout (+ cashback on weekends),
            // checked over all three price points
            let owner = Pubkey::new_unique();
            for (count, price) in [(1u8, TICKET_PRICE_1), (3, TICKET_PRICE_3), (10, TICKET_PRICE_10)] {
                let seed = derive_draw_seed(&owner, count as u64, 42, WEEKEND_TS);
                let b = purchase_breakdown(price, &seed, WEEKEND_TS).unwrap();

                let start: u64 = 100 * UNIT;
                let end = start - price + b.payout + b.cashback;
                assert!(end < start, "payout plus cashback must stay below the price");
                assert!(b.payout >= share_of(price, WIN_MIN_BPS).unwrap());
                assert!(b.payout <= share_of(price, WIN_MAX_BPS).unwrap());
            }
        }
    }

    // ========================================================================
    // 7. WITHDRAWAL TESTS
    // ========================================================================

    mod withdrawal_tests {
        use super::*;

        #[test]
        fn test_net_withdrawal_fee() {
            // 1.0 coin gross pays out 0.9 net
            assert_eq!(net_withdrawal(MIN_WITHDRAWAL).unwrap(), 900_000_000);
            assert_eq!(net_withdrawal(5 * UNIT).unwrap(), 5 * UNIT - WITHDRAWAL_FEE);
        }

        #[test]
        fn test_net_withdrawal_rejects_below_minimum() {
            assert!(net_withdrawal(0).is_err());
            assert!(net_withdrawal(MIN_WITHDRAWAL - 1).is_err());
            // The fee alone is not a valid withdrawal
            assert!(net_withdrawal(WITHDRAWAL_FEE).is_err());
        }

        #[test]
        fn test_minimum_always_clears_the_fee() {
            assert!(MIN_WITHDRAWAL > WITHDRAWAL_FEE);
        }

        fn pending_request() -> WithdrawalRequest {
            WithdrawalRequest {
                bump: 255,
                request_id: 1,
                user: Pubkey::new_unique(),
                amount: 5 * UNIT,
                fee: WITHDRAWAL_FEE,
                status: WithdrawalStatus::Pending,
                created_at: 0,
                settled_at: 0,
            }
        }

        #[test]
        fn test_settle_pays_exactly_once() {
            let mut request = pending_request();

            let net = request.settle(100).unwrap();
            assert_eq!(net, 5 * UNIT - WITHDRAWAL_FEE);
            assert_eq!(request.status, WithdrawalStatus::Paid);
            assert_eq!(request.settled_at, 100);

            // A retried settle after a timeout fails instead of paying again
            assert!(request.settle(200).is_err());
            assert_eq!(request.status, WithdrawalStatus::Paid);
            assert_eq!(request.settled_at, 100);
        }

        #[test]
        fn test_cancel_is_terminal() {
            let mut request = pending_request();

            assert_eq!(request.cancel(50).unwrap(), 5 * UNIT);
            assert_eq!(request.status, WithdrawalStatus::Cancelled);

            // Neither a settle nor a second cancel can touch it again
            assert!(request.settle(60).is_err());
            assert!(request.cancel(70).is_err());
            assert_eq!(request.status, WithdrawalStatus::Cancelled);
        }

        #[test]
        fn test_settle_blocks_cancel() {
            let mut request = pending_request();
            request.settle(10).unwrap();
            assert!(request.cancel(20).is_err());
        }
    }

    // ========================================================================
    // 8. INVOICE TESTS
    // ========================================================================

    mod invoice_tests {
        use super::*;

        fn active_invoice() -> Invoice {
            Invoice {
                bump: 255,
                invoice_id: 1,
                payer: Pubkey::new_unique(),
                amount: 2 * UNIT,
                status: InvoiceStatus::Active,
                created_at: 0,
                expires_at: INVOICE_TTL,
                paid_at: 0,
            }
        }

        #[test]
        fn test_pay_within_window_exactly_once() {
            let mut invoice = active_invoice();

            // The deadline itself is still payable
            invoice.pay(INVOICE_TTL).unwrap();
            assert_eq!(invoice.status, InvoiceStatus::Paid);
            assert_eq!(invoice.paid_at, INVOICE_TTL);

            assert!(invoice.pay(INVOICE_TTL).is_err());
            assert_eq!(invoice.paid_at, INVOICE_TTL);
        }

        #[test]
        fn test_pay_after_deadline_fails() {
            let mut invoice = active_invoice();
            assert!(invoice.pay(INVOICE_TTL + 1).is_err());
            // Rejection leaves it Active until the expire crank runs
            assert_eq!(invoice.status, InvoiceStatus::Active);
        }

        #[test]
        fn test_expire_only_past_deadline() {
            let mut invoice = active_invoice();
            assert!(invoice.expire(INVOICE_TTL).is_err());
            assert_eq!(invoice.status, InvoiceStatus::Active);

            invoice.expire(INVOICE_TTL + 1).unwrap();
            assert_eq!(invoice.status, InvoiceStatus::Expired);

            // Expired is terminal: no late payment, no second expire
            assert!(invoice.pay(INVOICE_TTL + 2).is_err());
            assert!(invoice.expire(INVOICE_TTL + 2).is_err());
        }

        #[test]
        fn test_paid_invoice_cannot_expire() {
            let mut invoice = active_invoice();
            invoice.pay(100).unwrap();
            assert!(invoice.expire(INVOICE_TTL + 1).is_err());
            assert_eq!(invoice.status, InvoiceStatus::Paid);
        }
    }

    // ========================================================================
    // 9. LEDGER STATE TESTS
    // ========================================================================

    mod state_tests {
        use super::*;

        fn entry(amount: i64, ts: i64) -> HistoryEntry {
            HistoryEntry {
                kind: HistoryKind::Purchase,
                amount,
                tickets: 1,
                counterparty: Pubkey::default(),
                timestamp: ts,
            }
        }

        fn empty_ledger() -> UserLedger {
            UserLedger {
                bump: 255,
                owner: Pubkey::new_unique(),
                balance: 0,
                inviter: None,
                referral_count: 0,
                referral_earned: 0,
                ref_purchases: 0,
                tickets_bought: 0,
                language: DEFAULT_LANGUAGE,
                last_draw_seed: [0u8; 32],
                last_roll_bps: 0,
                created_at: 0,
                history: Vec::new(),
            }
        }

        #[test]
        fn test_history_capped_with_oldest_evicted() {
            let mut ledger = empty_ledger();
            for i in 0..(MAX_HISTORY + 5) {
                ledger.push_history(entry(-(i as i64), i as i64));
            }
            assert_eq!(ledger.history.len(), MAX_HISTORY);
            // The five oldest rows are gone, ordering is oldest-first
            assert_eq!(ledger.history[0].timestamp, 5);
            assert_eq!(
                ledger.history[MAX_HISTORY - 1].timestamp,
                (MAX_HISTORY + 4) as i64
            );
        }

        #[test]
        fn test_history_below_cap_keeps_everything() {
            let mut ledger = empty_ledger();
            for i in 0..10 {
                ledger.push_history(entry(i, i));
            }
            assert_eq!(ledger.history.len(), 10);
            assert_eq!(ledger.history[0].timestamp, 0);
        }

        #[test]
        fn test_language_accepts_any_ascii_pair() {
            for tag in [*b"ru", *b"en", *b"EN", *b"z9"] {
                assert!(valid_language(&tag), "{:?} should be accepted", tag);
            }
        }

        #[test]
        fn test_language_rejects_non_ascii() {
            // "é" in UTF-8, and a stray high byte
            assert!(!valid_language(&[0xC3, 0xA9]));
            assert!(!valid_language(&[b'r', 0xFF]));
        }

        #[test]
        fn test_account_size_math() {
            assert_eq!(HistoryEntry::LEN, 50);
            assert_eq!(
                UserLedger::LEN,
                142 + 4 + MAX_HISTORY * HistoryEntry::LEN
            );
            assert_eq!(GlobalState::LEN, 83);
            assert_eq!(Invoice::LEN, 74);
            assert_eq!(WithdrawalRequest::LEN, 74);
            assert_eq!(ReferralLink::LEN, 73);
        }
    }
}
