//! A learning-grade 8086 instruction decoder and register/flags
//! simulator: byte stream in, typed `Instruction` values out, optionally
//! executed against a small virtual machine.

pub mod cli;
pub mod decoder;
pub mod error;
pub mod instruction;
pub mod logging;
pub mod operand;
pub mod printer;
pub mod register;
pub mod simulator;

pub use decoder::decode_instruction;
pub use error::DriverError;
pub use instruction::{BranchOp, Instruction, Op};
pub use operand::{Cursor, Operand, Truncated};
pub use register::Register;
pub use simulator::Vm;

/// Read an input file into a byte buffer, capped at `max_bytes`. A file
/// larger than the cap is truncated with a `warn`-level log line rather
/// than a hard error, preserving the decoder's forward-progress
/// guarantee over whatever prefix was read.
pub fn read_program(path: &std::path::Path, max_bytes: usize) -> Result<Vec<u8>, DriverError> {
    let mut bytes = std::fs::read(path).map_err(|source| DriverError::IoError {
        path: path.display().to_string(),
        source,
    })?;

    if bytes.len() > max_bytes {
        logging::Logger::warn(format!(
            "input file {} is {} bytes, truncating to --max-bytes={}",
            path.display(),
            bytes.len(),
            max_bytes
        ));
        bytes.truncate(max_bytes);
    }

    Ok(bytes)
}

/// Disassemble an entire byte buffer, one line of text per decoded
/// instruction. Unknown opcodes print as `UNKN` and still consume one
/// byte; a truncated trailing instruction stops the listing with a
/// warning rather than panicking.
pub fn disassemble_all(bytes: &[u8]) -> Vec<String> {
    let mut cursor = Cursor::new(bytes);
    let mut lines = Vec::new();

    while !cursor.at_end() {
        match decode_instruction(&mut cursor) {
            Ok(instr) => lines.push(instr.to_string()),
            Err(Truncated) => {
                logging::Logger::warn(format!(
                    "truncated instruction at byte {}, stopping",
                    cursor.pos()
                ));
                break;
            }
        }
    }

    lines
}
