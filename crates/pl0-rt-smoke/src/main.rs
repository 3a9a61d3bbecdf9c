//! Stand-in for a compiled PL/0 program.
//!
//! Each scenario is a program body that reaches the bridge only through
//! its C symbols, the way compiler output does.

use clap::{Parser, ValueEnum};
use libc::c_char;
use pl0_rt_contracts::{NEWLINE_FLAG_OFF, NEWLINE_FLAG_ON};

extern "C" {
    fn __pl0_print_integer(value: i32, newline: i32);
    fn __pl0_print_short(value: i16, newline: i32);
    fn __pl0_print_byte(value: i8, newline: i32);
    fn __pl0_print_unsigned_short(value: u16, newline: i32);
    fn __pl0_print_unsigned_byte(value: u8, newline: i32);
    fn __pl0_print_string(text: *const c_char, newline: i32);
    fn __pl0_print_boolean(value: i32, newline: i32);
    fn __pl0_read() -> i32;
    fn __pl0_abi_version() -> u32;
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scenario {
    /// -7, then True and 3 on one line.
    MixedLine,
    /// Extremes of every printable width.
    Widths,
    /// Reads two integers and prints each.
    ReadTwice,
    /// Prompts without a newline, then reads.
    Prompt,
    /// Ends on a print without a line break.
    Unterminated,
    /// Prints the bridge ABI version.
    Abi,
}

#[derive(Parser)]
#[command(name = "pl0-rt-smoke")]
#[command(about = "Drives the PL/0 runtime bridge through its C symbols.", long_about = None)]
struct Cli {
    #[arg(value_enum)]
    scenario: Scenario,
}

extern "C" fn mixed_line() {
    unsafe {
        __pl0_print_integer(-7, NEWLINE_FLAG_ON);
        __pl0_print_boolean(1, NEWLINE_FLAG_OFF);
        __pl0_print_integer(3, NEWLINE_FLAG_ON);
    }
}

extern "C" fn widths() {
    unsafe {
        __pl0_print_integer(i32::MIN, NEWLINE_FLAG_ON);
        __pl0_print_integer(i32::MAX, NEWLINE_FLAG_ON);
        __pl0_print_short(i16::MIN, NEWLINE_FLAG_ON);
        __pl0_print_byte(i8::MIN, NEWLINE_FLAG_ON);
        __pl0_print_unsigned_short(u16::MAX, NEWLINE_FLAG_ON);
        __pl0_print_unsigned_byte(u8::MAX, NEWLINE_FLAG_ON);
        __pl0_print_boolean(0, NEWLINE_FLAG_ON);
        __pl0_print_boolean(-1, NEWLINE_FLAG_ON);
        __pl0_print_string(c"hello, world".as_ptr(), NEWLINE_FLAG_ON);
        __pl0_print_string(std::ptr::null(), NEWLINE_FLAG_ON);
    }
}

extern "C" fn read_twice() {
    unsafe {
        let a = __pl0_read();
        __pl0_print_integer(a, NEWLINE_FLAG_ON);
        let b = __pl0_read();
        __pl0_print_integer(b, NEWLINE_FLAG_ON);
    }
}

extern "C" fn prompt() {
    unsafe {
        __pl0_print_string(c"n? ".as_ptr(), NEWLINE_FLAG_OFF);
        let n = __pl0_read();
        __pl0_print_integer(n.wrapping_mul(2), NEWLINE_FLAG_ON);
    }
}

extern "C" fn unterminated() {
    unsafe {
        __pl0_print_string(c"no".as_ptr(), NEWLINE_FLAG_OFF);
        __pl0_print_string(c" newline".as_ptr(), NEWLINE_FLAG_OFF);
    }
}

extern "C" fn abi() {
    unsafe {
        let version = __pl0_abi_version();
        __pl0_print_integer(version as i32, NEWLINE_FLAG_ON);
    }
}

fn main() {
    let cli = Cli::parse();
    let entry: extern "C" fn() = match cli.scenario {
        Scenario::MixedLine => mixed_line,
        Scenario::Widths => widths,
        Scenario::ReadTwice => read_twice,
        Scenario::Prompt => prompt,
        Scenario::Unterminated => unterminated,
        Scenario::Abi => abi,
    };
    unsafe { pl0_rt::start(entry) }
}
