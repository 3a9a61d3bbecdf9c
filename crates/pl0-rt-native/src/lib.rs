//! Runtime bridge for programs produced by the PL/0 compiler.
//!
//! Compiled code cannot do I/O on its own; it calls the `__pl0_*` symbols
//! below, which format or scan one value against the host's stdio. The
//! signatures are ABI 2 (`pl0_rt_contracts::PL0_RT_ABI_TAG`) and are
//! mirrored in `include/pl0_rt.h`.
//!
//! All routines are synchronous and stateless. Write failures and
//! malformed input are never reported to the caller.

#![allow(clippy::missing_safety_doc)]

use std::ffi::CStr;
use std::io::{self, Write as _};

use libc::{c_char, c_int};
use pl0_rt_contracts::{NULL_TEXT, PL0_RT_ABI_MAJOR, READ_UNSPECIFIED_VALUE};

pub mod bridge;
pub mod config;
pub mod logging;
pub mod scan;

pub use bridge::{LineEnd, Printable};
pub use config::{config, RuntimeConfig};
pub use scan::{scan_i32, ScanError};

/// The compiled program's start routine: no arguments, no result.
pub type ProgramEntry = unsafe extern "C" fn();

/// Runs `entry` once and returns the process exit code.
///
/// Logging is installed first if configured. Stdout is flushed after the
/// program returns, since returning from a C `main` skips Rust's stdio
/// cleanup.
///
/// # Safety
///
/// `entry` must be a routine that follows the bridge ABI.
pub unsafe fn run_entry(entry: ProgramEntry) -> c_int {
    logging::init(config());
    tracing::debug!(target: "pl0_rt::entry", abi = PL0_RT_ABI_MAJOR, "entering compiled program");
    entry();
    if let Err(err) = io::stdout().lock().flush() {
        tracing::debug!(target: "pl0_rt::entry", %err, "final stdout flush failed");
    }
    tracing::debug!(target: "pl0_rt::entry", "compiled program returned");
    libc::EXIT_SUCCESS
}

/// Runs `entry` and terminates the process. Never returns.
///
/// # Safety
///
/// Same contract as [`run_entry`].
pub unsafe fn start(entry: ProgramEntry) -> ! {
    let code = run_entry(entry);
    std::process::exit(code)
}

fn emit(value: Printable<'_>, newline: i32) {
    let end = LineEnd::from_flag(newline);
    let _ = std::panic::catch_unwind(|| {
        tracing::trace!(target: "pl0_rt::print", ?value, ?end);
        let mut stdout = io::stdout().lock();
        if let Err(err) = value.write_to(&mut stdout, end) {
            tracing::debug!(target: "pl0_rt::print", %err, "stdout write dropped");
        }
    });
}

#[no_mangle]
pub extern "C" fn __pl0_print_integer(value: i32, newline: i32) {
    emit(Printable::Int32(value), newline);
}

#[no_mangle]
pub extern "C" fn __pl0_print_short(value: i16, newline: i32) {
    emit(Printable::Int16(value), newline);
}

#[no_mangle]
pub extern "C" fn __pl0_print_byte(value: i8, newline: i32) {
    emit(Printable::Int8(value), newline);
}

#[no_mangle]
pub extern "C" fn __pl0_print_unsigned_short(value: u16, newline: i32) {
    emit(Printable::Uint16(value), newline);
}

#[no_mangle]
pub extern "C" fn __pl0_print_unsigned_byte(value: u8, newline: i32) {
    emit(Printable::Uint8(value), newline);
}

/// `text` must be null or point to a NUL-terminated byte sequence valid for
/// the duration of the call. A missing terminator is undefined behaviour.
#[no_mangle]
pub unsafe extern "C" fn __pl0_print_string(text: *const c_char, newline: i32) {
    let bytes = if text.is_null() {
        NULL_TEXT.as_bytes()
    } else {
        CStr::from_ptr(text).to_bytes()
    };
    emit(Printable::Text(bytes), newline);
}

#[no_mangle]
pub extern "C" fn __pl0_print_boolean(value: i32, newline: i32) {
    emit(Printable::Boolean(value != 0), newline);
}

// Host stdio flushes line-buffered stdout before blocking on stdin.
fn flush_before_read<W: io::Write>(out: &mut W) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(target: "pl0_rt::read", %err, "stdout flush before read failed");
            false
        }
    }
}

/// Blocks for one integer token on stdin. Returns `READ_UNSPECIFIED_VALUE`
/// when the input is exhausted or malformed.
#[no_mangle]
pub extern "C" fn __pl0_read() -> i32 {
    std::panic::catch_unwind(|| {
        flush_before_read(&mut io::stdout().lock());
        let mut stdin = io::stdin().lock();
        match scan_i32(&mut stdin) {
            Ok(value) => {
                tracing::trace!(target: "pl0_rt::read", value);
                value
            }
            Err(err) => {
                tracing::debug!(target: "pl0_rt::read", %err, "no integer scanned");
                READ_UNSPECIFIED_VALUE
            }
        }
    })
    .unwrap_or(READ_UNSPECIFIED_VALUE)
}

#[no_mangle]
pub extern "C" fn __pl0_abi_version() -> u32 {
    PL0_RT_ABI_MAJOR
}
