//! Process entry for executables linked against the PL/0 runtime.
//!
//! Link this archive together with the compiler's assembly output:
//!
//! ```text
//! cc out.s -L target/release -lpl0_rt_start -lpthread -ldl -lm -o out
//! ```
//!
//! The archive bundles the bridge, so `libpl0_rt.a` must not be linked as
//! well.

use libc::{c_char, c_int};

// Re-exported so the bridge symbols stay in the archive.
pub use pl0_rt::{
    __pl0_abi_version, __pl0_print_boolean, __pl0_print_byte, __pl0_print_integer,
    __pl0_print_short, __pl0_print_string, __pl0_print_unsigned_byte,
    __pl0_print_unsigned_short, __pl0_read,
};

extern "C" {
    // Emitted by the compiler for the program's top-level body.
    fn __pl0_start();
}

#[no_mangle]
pub extern "C" fn main(_argc: c_int, _argv: *const *const c_char) -> c_int {
    unsafe { pl0_rt::start(__pl0_start) }
}
