//! 3-bit clock divisor fields.
//!
//! The same encoding is used by every stage 2 divider in `MSSDDR_FACC1_CR` and
//! by the MPLL output stage (`FACC_PLL_DIVQ`). The output stage uses an
//! extended variant where codes 3..=5 select twice the divisor.

/// Width mask of a divisor field.
pub const DIVISOR_FIELD_MASK: u32 = 0x7;

/// Translate an extracted 3-bit divisor field into the divisor it selects.
///
/// | field | normal | extended |
/// |-------|--------|----------|
/// | 0     | 1      | 1        |
/// | 1     | 2      | 2        |
/// | 2     | 4      | 4        |
/// | 3     | 4      | 8        |
/// | 4     | 8      | 16       |
/// | 5     | 16     | 32       |
/// | 6, 7  | 32     | 32       |
///
/// Bits above the field width are ignored.
pub const fn decode_field(field: u8, extended: bool) -> u32 {
    match field as u32 & DIVISOR_FIELD_MASK {
        0 => 1,
        1 => 2,
        2 => 4,
        3 => if extended { 8 } else { 4 },
        4 => if extended { 16 } else { 8 },
        5 => if extended { 32 } else { 16 },
        _ => 32,
    }
}

/// Decode the divisor field starting at bit `offset` of register value `reg`.
///
/// Offsets past the register width read as a zero field.
pub const fn decode(reg: u32, offset: u32, extended: bool) -> u32 {
    let shifted = match reg.checked_shr(offset) {
        Some(v) => v,
        None => 0,
    };
    decode_field((shifted & DIVISOR_FIELD_MASK) as u8, extended)
}
