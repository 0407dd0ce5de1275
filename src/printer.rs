//! Formats a decoded `Instruction` as lowercase Intel-syntax assembly
//! text, via `std::fmt::Display` rather than a bespoke `to_string`-style
//! method.

use std::fmt;

use crate::instruction::Instruction;
use crate::operand::Operand;

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(r) => write!(f, "{r}"),
            Operand::Immediate(v) => write!(f, "{v}"),
            Operand::DirectAddress(addr) => write!(f, "{addr}"),
            Operand::EffectiveAddress { base, index, disp } => {
                write!(f, "[{base}")?;
                if *index != crate::register::Register::None {
                    write!(f, " + {index}")?;
                }
                if *disp != 0 {
                    write!(f, " + {disp}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::TwoOperand { op, dst, src } => {
                write!(f, "{} {dst}, {src}", op.mnemonic())
            }
            Instruction::Branch { op, offset } => write!(f, "{} {offset}", op.mnemonic()),
            Instruction::Unknown => write!(f, "UNKN"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::instruction::{BranchOp, Op};
    use crate::register::Register;

    #[test]
    fn two_operand_prints_mnemonic_dst_src() {
        let instr = Instruction::TwoOperand {
            op: Op::Mov,
            dst: Operand::Register(Register::CX),
            src: Operand::Register(Register::BX),
        };
        assert_eq!(instr.to_string(), "mov cx, bx");
    }

    #[test]
    fn immediate_to_reg_prints_decimal() {
        let instr = Instruction::TwoOperand {
            op: Op::Mov,
            dst: Operand::Register(Register::AX),
            src: Operand::Immediate(1),
        };
        assert_eq!(instr.to_string(), "mov ax, 1");
    }

    #[test]
    fn effective_address_elides_zero_disp() {
        let instr = Instruction::TwoOperand {
            op: Op::Mov,
            dst: Operand::Register(Register::BX),
            src: Operand::EffectiveAddress {
                base: Register::BP,
                index: Register::None,
                disp: 0,
            },
        };
        assert_eq!(instr.to_string(), "mov bx, [bp]");
    }

    #[test]
    fn effective_address_with_index_and_negative_disp() {
        let instr = Instruction::TwoOperand {
            op: Op::Mov,
            dst: Operand::Register(Register::AX),
            src: Operand::EffectiveAddress {
                base: Register::BX,
                index: Register::SI,
                disp: -1,
            },
        };
        assert_eq!(instr.to_string(), "mov ax, [bx + si + -1]");
    }

    #[test]
    fn direct_address_prints_decimal_no_brackets() {
        let instr = Instruction::TwoOperand {
            op: Op::Mov,
            dst: Operand::Register(Register::AX),
            src: Operand::DirectAddress(2555),
        };
        assert_eq!(instr.to_string(), "mov ax, 2555");
    }

    #[test]
    fn sign_extended_add_prints_negative_immediate() {
        let instr = Instruction::TwoOperand {
            op: Op::Add,
            dst: Operand::Register(Register::SP),
            src: Operand::Immediate(-100),
        };
        assert_eq!(instr.to_string(), "add sp, -100");
    }

    #[test]
    fn branch_prints_mnemonic_and_signed_offset() {
        let instr = Instruction::Branch {
            op: BranchOp::Jne,
            offset: -4,
        };
        assert_eq!(instr.to_string(), "jne -4");
    }

    #[test]
    fn unknown_prints_sentinel() {
        assert_eq!(Instruction::Unknown.to_string(), "UNKN");
    }
}
