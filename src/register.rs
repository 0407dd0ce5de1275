//! The 8086 register name space: the eight 8-bit halves and eight 16-bit
//! wide registers, addressed through the same three-bit REG/R-M field.

/// A single 8086 general-purpose register, or the `None` sentinel used by
/// an `EffectiveAddress` with no index register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    AL,
    CL,
    DL,
    BL,
    AH,
    CH,
    DH,
    BH,
    AX,
    CX,
    DX,
    BX,
    SP,
    BP,
    SI,
    DI,
    None,
}

impl Register {
    /// Decode a three-bit REG/R-M field into a register name, given the W
    /// (operand-width) flag. `field` must be in `0..8`; any other value
    /// maps to `Register::None` since it cannot arise from a real ModR/M
    /// byte (the caller always masks to three bits first).
    pub fn from_field(field: u8, wide: bool) -> Register {
        use Register::*;
        match (field, wide) {
            (0b000, false) => AL,
            (0b001, false) => CL,
            (0b010, false) => DL,
            (0b011, false) => BL,
            (0b100, false) => AH,
            (0b101, false) => CH,
            (0b110, false) => DH,
            (0b111, false) => BH,
            (0b000, true) => AX,
            (0b001, true) => CX,
            (0b010, true) => DX,
            (0b011, true) => BX,
            (0b100, true) => SP,
            (0b101, true) => BP,
            (0b110, true) => SI,
            (0b111, true) => DI,
            _ => None,
        }
    }

    /// The accumulator for a given operand width: `al` (8-bit) or `ax` (16-bit).
    pub fn accumulator(wide: bool) -> Register {
        if wide {
            Register::AX
        } else {
            Register::AL
        }
    }

    /// Lowercase assembly mnemonic, as printed by the disassembler.
    pub fn name(self) -> &'static str {
        use Register::*;
        match self {
            AL => "al",
            CL => "cl",
            DL => "dl",
            BL => "bl",
            AH => "ah",
            CH => "ch",
            DH => "dh",
            BH => "bh",
            AX => "ax",
            CX => "cx",
            DX => "dx",
            BX => "bx",
            SP => "sp",
            BP => "bp",
            SI => "si",
            DI => "di",
            None => "<none>",
        }
    }

    /// Index into the simulator's 8-entry 16-bit register file
    /// (AX=0, BX=1, CX=2, DX=3, SP=4, BP=5, SI=6, DI=7), per the VM state
    /// layout. Only meaningful for wide registers; returns `Option::None`
    /// for 8-bit halves and the `None` sentinel.
    pub fn wide_index(self) -> Option<usize> {
        use Register::*;
        match self {
            AX => Some(0),
            BX => Some(1),
            CX => Some(2),
            DX => Some(3),
            SP => Some(4),
            BP => Some(5),
            SI => Some(6),
            DI => Some(7),
            _ => Option::None,
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Addressing mode derived from the top two bits of a ModR/M byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    MemNoDisp,
    MemDisp8,
    MemDisp16,
    Reg,
}

impl AddressingMode {
    pub fn from_bits(bits: u8) -> AddressingMode {
        match bits & 0b11 {
            0b00 => AddressingMode::MemNoDisp,
            0b01 => AddressingMode::MemDisp8,
            0b10 => AddressingMode::MemDisp16,
            _ => AddressingMode::Reg,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reg_field_wide_matches_table() {
        assert_eq!(Register::from_field(0b000, true), Register::AX);
        assert_eq!(Register::from_field(0b100, true), Register::SP);
        assert_eq!(Register::from_field(0b111, true), Register::DI);
    }

    #[test]
    fn reg_field_byte_matches_table() {
        assert_eq!(Register::from_field(0b000, false), Register::AL);
        assert_eq!(Register::from_field(0b100, false), Register::AH);
        assert_eq!(Register::from_field(0b111, false), Register::BH);
    }

    #[test]
    fn accumulator_picks_width() {
        assert_eq!(Register::accumulator(false), Register::AL);
        assert_eq!(Register::accumulator(true), Register::AX);
    }

    #[test]
    fn mode_from_top_bits() {
        assert_eq!(AddressingMode::from_bits(0b00), AddressingMode::MemNoDisp);
        assert_eq!(AddressingMode::from_bits(0b01), AddressingMode::MemDisp8);
        assert_eq!(AddressingMode::from_bits(0b10), AddressingMode::MemDisp16);
        assert_eq!(AddressingMode::from_bits(0b11), AddressingMode::Reg);
    }
}
