//! Shared, version-pinned linkage identifiers.
//!
//! These constants are the single source of truth for the symbol names and
//! argument conventions that the PL/0 compiler emits calls against. Bump
//! `PL0_RT_ABI_MAJOR` whenever a signature below changes.

pub const PL0_RT_ABI_MAJOR: u32 = 2;
pub const PL0_RT_ABI_TAG: &str = "pl0-rt.abi@2";

/// Provided by the compiled program, called once by the process entry.
pub const START_SYMBOL: &str = "__pl0_start";

pub const PRINT_INTEGER_SYMBOL: &str = "__pl0_print_integer";
pub const PRINT_SHORT_SYMBOL: &str = "__pl0_print_short";
pub const PRINT_BYTE_SYMBOL: &str = "__pl0_print_byte";
pub const PRINT_UNSIGNED_SHORT_SYMBOL: &str = "__pl0_print_unsigned_short";
pub const PRINT_UNSIGNED_BYTE_SYMBOL: &str = "__pl0_print_unsigned_byte";
pub const PRINT_STRING_SYMBOL: &str = "__pl0_print_string";
pub const PRINT_BOOLEAN_SYMBOL: &str = "__pl0_print_boolean";
pub const READ_SYMBOL: &str = "__pl0_read";
pub const ABI_VERSION_SYMBOL: &str = "__pl0_abi_version";

/// Every symbol the bridge exports, in header order.
pub const BRIDGE_SYMBOLS: &[&str] = &[
    PRINT_INTEGER_SYMBOL,
    PRINT_SHORT_SYMBOL,
    PRINT_BYTE_SYMBOL,
    PRINT_UNSIGNED_SHORT_SYMBOL,
    PRINT_UNSIGNED_BYTE_SYMBOL,
    PRINT_STRING_SYMBOL,
    PRINT_BOOLEAN_SYMBOL,
    READ_SYMBOL,
    ABI_VERSION_SYMBOL,
];

// Second argument of every print routine.
pub const NEWLINE_FLAG_OFF: i32 = 0;
pub const NEWLINE_FLAG_ON: i32 = 1;

/// Returned by `__pl0_read` when no integer could be scanned.
pub const READ_UNSPECIFIED_VALUE: i32 = 0;

pub const BOOLEAN_TRUE_TEXT: &str = "True";
pub const BOOLEAN_FALSE_TEXT: &str = "False";

/// Written in place of a null text pointer.
pub const NULL_TEXT: &str = "(null)";
