use std::sync::{Arc, Once, OnceLock};

use anchor_lang::solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, instruction::Instruction,
    program_stubs::{set_syscall_stubs, SyscallStubs},
    pubkey::Pubkey,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Natively loaded programs reach `sol_log_data` through the syscall stubs,
/// and the stubs installed by solana-program-test only print it to stdout.
/// This wrapper forwards everything to those stubs but writes event data
/// into the transaction log as `Program log: Program data: <base64>`.
struct EventLogStubs {
    inner: Arc<OnceLock<Box<dyn SyscallStubs>>>,
}

impl EventLogStubs {
    fn inner(&self) -> &dyn SyscallStubs {
        // Only empty between the swap and the `set` in `install`.
        loop {
            if let Some(inner) = self.inner.get() {
                return inner.as_ref();
            }
            std::hint::spin_loop();
        }
    }
}

impl SyscallStubs for EventLogStubs {
    fn sol_log(&self, message: &str) {
        self.inner().sol_log(message)
    }
    fn sol_log_compute_units(&self) {
        self.inner().sol_log_compute_units()
    }
    fn sol_remaining_compute_units(&self) -> u64 {
        self.inner().sol_remaining_compute_units()
    }
    fn sol_invoke_signed(
        &self,
        instruction: &Instruction,
        account_infos: &[AccountInfo],
        signers_seeds: &[&[&[u8]]],
    ) -> ProgramResult {
        self.inner()
            .sol_invoke_signed(instruction, account_infos, signers_seeds)
    }
    fn sol_get_clock_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.inner().sol_get_clock_sysvar(var_addr)
    }
    fn sol_get_epoch_schedule_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.inner().sol_get_epoch_schedule_sysvar(var_addr)
    }
    fn sol_get_fees_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.inner().sol_get_fees_sysvar(var_addr)
    }
    fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.inner().sol_get_rent_sysvar(var_addr)
    }
    fn sol_get_epoch_rewards_sysvar(&self, var_addr: *mut u8) -> u64 {
        self.inner().sol_get_epoch_rewards_sysvar(var_addr)
    }
    fn sol_get_last_restart_slot(&self, var_addr: *mut u8) -> u64 {
        self.inner().sol_get_last_restart_slot(var_addr)
    }
    unsafe fn sol_memcpy(&self, dst: *mut u8, src: *const u8, n: usize) {
        self.inner().sol_memcpy(dst, src, n)
    }
    unsafe fn sol_memmove(&self, dst: *mut u8, src: *const u8, n: usize) {
        self.inner().sol_memmove(dst, src, n)
    }
    unsafe fn sol_memcmp(&self, s1: *const u8, s2: *const u8, n: usize, result: *mut i32) {
        self.inner().sol_memcmp(s1, s2, n, result)
    }
    unsafe fn sol_memset(&self, s: *mut u8, c: u8, n: usize) {
        self.inner().sol_memset(s, c, n)
    }
    fn sol_get_return_data(&self) -> Option<(Pubkey, Vec<u8>)> {
        self.inner().sol_get_return_data()
    }
    fn sol_set_return_data(&self, data: &[u8]) {
        self.inner().sol_set_return_data(data)
    }
    fn sol_log_data(&self, fields: &[&[u8]]) {
        let encoded: Vec<String> = fields.iter().map(|field| STANDARD.encode(field)).collect();
        self.inner()
            .sol_log(&format!("Program data: {}", encoded.join(" ")));
    }
    fn sol_get_processed_sibling_instruction(&self, index: usize) -> Option<Instruction> {
        self.inner().sol_get_processed_sibling_instruction(index)
    }
    fn sol_get_stack_height(&self) -> u64 {
        self.inner().sol_get_stack_height()
    }
}

/// Must run after the first `ProgramTest` start, which installs the stubs being wrapped.
pub fn install() {
    static INSTALL: Once = Once::new();

    INSTALL.call_once(|| {
        let inner = Arc::new(OnceLock::new());
        let previous = set_syscall_stubs(Box::new(EventLogStubs {
            inner: inner.clone(),
        }));
        let _ = inner.set(previous);
    });
}

/// Decodes every event of type `E` from a transaction's log messages.
pub fn events<E: anchor_lang::Event>(logs: &[String]) -> Vec<E> {
    logs.iter()
        .filter_map(|line| line.strip_prefix("Program log: Program data: "))
        .flat_map(|fields| fields.split(' '))
        .filter_map(|field| STANDARD.decode(field).ok())
        .filter(|bytes| bytes.len() >= 8 && bytes[..8] == E::DISCRIMINATOR)
        .map(|bytes| E::try_from_slice(&bytes[8..]).expect("malformed event"))
        .collect()
}
