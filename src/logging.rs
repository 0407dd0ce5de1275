//! A minimal stderr logger, kept deliberately separate from the
//! decoder/simulator's stdout instruction stream: the stdout contract is
//! a fixed line-per-instruction format that scripted comparisons against
//! a reference disassembler depend on, so diagnostics never go there.

pub struct Logger;

impl Logger {
    pub fn info(message: impl AsRef<str>) {
        eprintln!("[info] {}", message.as_ref());
    }

    pub fn warn(message: impl AsRef<str>) {
        eprintln!("[warn] {}", message.as_ref());
    }

    pub fn error(message: impl AsRef<str>) {
        eprintln!("[error] {}", message.as_ref());
    }
}
