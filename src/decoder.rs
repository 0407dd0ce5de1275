//! Top-level instruction dispatch: matches the opcode bit-patterns and
//! composes the operand decoders to build one `Instruction`, advancing
//! the cursor past everything it reads.
//!
//! Three shapes recur across MOV/ADD/SUB/CMP (reg↔r/m, imm→r/m with an
//! optional sign-extension bit, imm→accumulator); each is factored into
//! one function parameterised by the target `Op`, rather than kept as
//! six near-identical copies.

use crate::instruction::{BranchOp, Instruction, Op};
use crate::operand::{
    parse_immediate, parse_immediate_sign_extended, parse_modrm, Cursor, DecodeResult, Operand,
    Truncated,
};
use crate::register::Register;

/// Decode one instruction starting at the cursor's current position.
///
/// `Ok(Instruction::Unknown)` means byte 0 matched no known pattern; the
/// cursor has still advanced by exactly one byte, so the caller is
/// guaranteed forward progress. `Err(Truncated)` means a pattern matched
/// but the stream ended before all of its bytes were available; callers
/// should stop decoding rather than retry.
pub fn decode_instruction(cursor: &mut Cursor) -> DecodeResult<Instruction> {
    let byte0 = cursor.read_u8()?;

    if byte0 >> 2 == 0b100010 {
        return decode_reg_rm(Op::Mov, byte0, cursor);
    }
    if byte0 >> 1 == 0b1100011 {
        let byte1 = cursor.peek()?;
        if (byte1 >> 3) & 0b111 == 0b000 {
            return decode_imm_to_rm(byte0, cursor);
        }
    }
    if byte0 >> 4 == 0b1011 {
        return decode_mov_imm_to_reg(byte0, cursor);
    }
    if byte0 >> 2 == 0b101000 {
        return decode_mov_acc_direct_address(byte0, cursor);
    }
    if byte0 >> 2 == 0b000000 {
        return decode_reg_rm(Op::Add, byte0, cursor);
    }
    if byte0 >> 2 == 0b100000 {
        let byte1 = cursor.peek()?;
        let secondary_op = match (byte1 >> 3) & 0b111 {
            0b000 => Some(Op::Add),
            0b101 => Some(Op::Sub),
            0b111 => Some(Op::Cmp),
            _ => None,
        };
        if let Some(op) = secondary_op {
            return decode_imm_to_rm_with_sign(op, byte0, cursor);
        }
    }
    if byte0 >> 1 == 0b0000010 {
        return decode_imm_to_acc(Op::Add, byte0, cursor);
    }
    if byte0 >> 2 == 0b001010 {
        return decode_reg_rm(Op::Sub, byte0, cursor);
    }
    if byte0 >> 1 == 0b0010110 {
        return decode_imm_to_acc(Op::Sub, byte0, cursor);
    }
    if byte0 >> 2 == 0b001110 {
        return decode_reg_rm(Op::Cmp, byte0, cursor);
    }
    if byte0 >> 1 == 0b0011110 {
        return decode_imm_to_acc(Op::Cmp, byte0, cursor);
    }
    if let Some(op) = BranchOp::from_opcode_byte(byte0) {
        let offset = cursor.read_u8()? as i8;
        return Ok(Instruction::Branch { op, offset });
    }

    Ok(Instruction::Unknown)
}

/// Shared `reg↔r/m` shape: byte0 carries D (direction) and W (width);
/// byte1 is a ModR/M whose REG field names one operand and whose
/// MOD+R/M names the other via `parse_modrm`.
fn decode_reg_rm(op: Op, byte0: u8, cursor: &mut Cursor) -> DecodeResult<Instruction> {
    let direction_reg_is_dst = (byte0 >> 1) & 1 != 0;
    let wide = byte0 & 1 != 0;

    let (rm_operand, modrm) = parse_modrm(wide, cursor)?;
    let reg_field = (modrm >> 3) & 0b111;
    let reg_operand = Operand::Register(Register::from_field(reg_field, wide));

    let (dst, src) = if direction_reg_is_dst {
        (reg_operand, rm_operand)
    } else {
        (rm_operand, reg_operand)
    };

    Ok(Instruction::TwoOperand { op, dst, src })
}

/// `MOV imm→r/m` (opcode `1100011 w`, ModR/M REG field forced to 000).
/// Only MOV uses this exact shape (no S bit).
fn decode_imm_to_rm(byte0: u8, cursor: &mut Cursor) -> DecodeResult<Instruction> {
    let wide = byte0 & 1 != 0;
    let (dst, _modrm) = parse_modrm(wide, cursor)?;
    let src = parse_immediate(wide, cursor)?;
    Ok(Instruction::TwoOperand {
        op: Op::Mov,
        dst,
        src,
    })
}

/// `ADD/SUB/CMP imm→r/m` (opcode `100000 s w`). Reads two immediate
/// bytes iff `w ∧ ¬s`; sign-extends a single byte when `w ∧ s`.
fn decode_imm_to_rm_with_sign(op: Op, byte0: u8, cursor: &mut Cursor) -> DecodeResult<Instruction> {
    let sign_extend = (byte0 >> 1) & 1 != 0;
    let wide = byte0 & 1 != 0;

    let (dst, _modrm) = parse_modrm(wide, cursor)?;
    let src = match (wide, sign_extend) {
        (true, false) => parse_immediate(true, cursor)?,
        (true, true) => parse_immediate_sign_extended(cursor)?,
        (false, _) => parse_immediate(false, cursor)?,
    };

    Ok(Instruction::TwoOperand { op, dst, src })
}

/// `MOV imm→reg` (opcode `1011 w reg`).
fn decode_mov_imm_to_reg(byte0: u8, cursor: &mut Cursor) -> DecodeResult<Instruction> {
    let wide = (byte0 >> 3) & 1 != 0;
    let reg_field = byte0 & 0b111;
    let dst = Operand::Register(Register::from_field(reg_field, wide));
    let src = parse_immediate(wide, cursor)?;
    Ok(Instruction::TwoOperand {
        op: Op::Mov,
        dst,
        src,
    })
}

/// `MOV` between the accumulator and a direct memory address (opcode
/// `101000 d w`): D=0 loads the accumulator from `[addr]`, D=1 stores the
/// accumulator to `[addr]`. `addr` is a little-endian 16-bit word read
/// directly off the cursor, with no ModR/M byte involved.
fn decode_mov_acc_direct_address(byte0: u8, cursor: &mut Cursor) -> DecodeResult<Instruction> {
    let mem_is_dst = (byte0 >> 1) & 1 != 0;
    let wide = byte0 & 1 != 0;

    let addr = cursor.read_u16()?;
    let acc = Operand::Register(Register::accumulator(wide));
    let mem = Operand::DirectAddress(addr);

    let (dst, src) = if mem_is_dst { (mem, acc) } else { (acc, mem) };

    Ok(Instruction::TwoOperand {
        op: Op::Mov,
        dst,
        src,
    })
}

/// `ADD/SUB/CMP imm→accumulator` (AL for W=0, AX for W=1).
fn decode_imm_to_acc(op: Op, byte0: u8, cursor: &mut Cursor) -> DecodeResult<Instruction> {
    let wide = byte0 & 1 != 0;
    let dst = Operand::Register(Register::accumulator(wide));
    let src = parse_immediate(wide, cursor)?;
    Ok(Instruction::TwoOperand { op, dst, src })
}
