//! Read-only textual views of the machine state
//!
//! Every view is pure and returns the rendered text; printing and
//! termination stay with the driver. The formats are stable but are not a
//! wire format; the one bit-exact representation is [`crate::image`].

use crate::instruction::{Instruction, Word};
use crate::interpreter::Interpreter;

use itertools::Itertools;

/// Cells per row in the CPU and data views.
const ROW_CELLS: usize = 3;

/// Symbolic program listing: address, raw word and disassembly per line.
pub fn program(vm: &Interpreter) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n*** PROGRAM (size: {}) ***\n", vm.textsize()));

    for (addr, instruction) in vm.text().iter().enumerate() {
        out.push_str(&format!(
            "0x{:04x}: 0x{:08x}\t{}\n",
            addr,
            instruction.word(),
            instruction
        ));
    }

    out
}

/// CPU view: program counter, condition code and the register file in
/// hexadecimal and signed decimal.
pub fn cpu(vm: &Interpreter) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n*** CPU ***\nPC: 0x{:08x}\tCC: {}\n\n", vm.pc(), vm.cc()));

    for row in &vm.registers().iter().enumerate().chunks(ROW_CELLS) {
        for (i, value) in row {
            out.push_str(&format!("R{:02}: 0x{:08x}\t{}\t", i, value, *value as i32));
        }
        out.push('\n');
    }

    out
}

/// Data view: every cell in hexadecimal and signed decimal.
pub fn data(vm: &Interpreter) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n*** DATA (size: {}, end = 0x{:08x} {}) ***\n",
        vm.datasize(),
        vm.dataend(),
        vm.dataend()
    ));

    for row in &vm.data().iter().enumerate().chunks(ROW_CELLS) {
        for (addr, value) in row {
            out.push_str(&format!("0x{:04x}: 0x{:08x} {}\t", addr, value, *value as i32));
        }
        out.push('\n');
    }

    out
}

/// Single trace line for an instruction at a text address.
pub fn trace(tag: &str, instruction: Instruction, addr: Word) -> String {
    format!("TRACE: {}: 0x{:04x}: {}", tag, addr, instruction)
}
