#![allow(
    clippy::incompatible_msrv, // https://github.com/rust-lang/rust-clippy/issues/12257
)]

#[rustfmt::skip]
#[path = "../src/tables.rs"]
mod tables;

use std::mem;

#[test]
fn two_tables_of_8192_bytes() {
    assert_eq!(8192, mem::size_of_val(&tables::NAME_START.0));
    assert_eq!(8192, mem::size_of_val(&tables::NAME_CHAR.0));
    assert_eq!(64, mem::align_of_val(&tables::NAME_START));
    assert_eq!(64, mem::align_of_val(&tables::NAME_CHAR));
}

#[test]
fn bit_order_is_lsb_first() {
    // of 0x38..=0x3F only ':' (0x3A) may start a Name, so bit 2 alone is set
    assert_eq!(0x04, tables::NAME_START.0[7]);
    // 'X', 'Y', 'Z' in bits 0..=2 and '_' (0x5F) in bit 7
    assert_eq!(0x87, tables::NAME_START.0[11]);
    // '-' (0x2D) and '.' (0x2E) in bits 5 and 6
    assert_eq!(0x60, tables::NAME_CHAR.0[5]);
    // '0'..='7', a full byte of digits
    assert_eq!(0xFF, tables::NAME_CHAR.0[6]);
    // '8', '9', ':' in bits 0..=2
    assert_eq!(0x07, tables::NAME_CHAR.0[7]);
}

#[test]
fn accessors_agree_with_raw_bytes() {
    for cp in 0..=u16::MAX {
        let start_bit = tables::NAME_START.0[cp as usize / 8] & (1 << (cp % 8)) != 0;
        assert_eq!(start_bit, xml_name_chars::is_name_start_char(cp), "{cp:04X}");
        let char_bit = tables::NAME_CHAR.0[cp as usize / 8] & (1 << (cp % 8)) != 0;
        assert_eq!(char_bit, xml_name_chars::is_name_char(cp), "{cp:04X}");
    }
}

#[test]
fn name_start_bits_are_within_name_char_bits() {
    for i in 0..8192 {
        let start = tables::NAME_START.0[i];
        let every = tables::NAME_CHAR.0[i];
        assert_eq!(0, start & !every, "byte {i}");
    }
}

#[test]
fn surrogate_rows_are_zero() {
    for i in 0xD800 / 8..=0xDFFF / 8 {
        assert_eq!(0, tables::NAME_START.0[i]);
        assert_eq!(0, tables::NAME_CHAR.0[i]);
    }
}
