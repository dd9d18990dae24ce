use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke_signed, system_instruction};
use anchor_lang::system_program;

use crate::constants::VAULT_SEED;

/// Move lamports from a signing wallet into the vault PDA
pub fn vault_deposit<'info>(
    system_program: &Program<'info, System>,
    from: &Signer<'info>,
    vault: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            system_program::Transfer {
                from: from.to_account_info(),
                to: vault.to_account_info(),
            },
        ),
        amount,
    )
}

/// Move lamports out of the system-owned vault PDA, signing with its seeds
pub fn vault_withdraw<'info>(
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
    vault_bump: u8,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    invoke_signed(
        &system_instruction::transfer(vault.key, to.key, amount),
        &[
            vault.to_account_info(),
            to.to_account_info(),
            system_program.to_account_info(),
        ],
        &[&[VAULT_SEED, &[vault_bump]]],
    )?;
    Ok(())
}
