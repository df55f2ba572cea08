use anchor_lang::prelude::*;

use crate::events::ProgramInitialized;

#[derive(Accounts)]
pub struct Initialize {}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    msg!("Greetings from: {:?}", ctx.program_id);

    let slot = Clock::get()?.slot;
    emit!(ProgramInitialized {
        program_id: *ctx.program_id,
        slot,
    });

    Ok(())
}
