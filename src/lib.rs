//! Determine whether code points match the `NameStartChar` or `NameChar`
//! classes of the Name production in XML 1.0 (Fourth Edition).
//!
//! The grammar is defined over the 16-bit code space of Unicode 2.0, so
//! queries take a raw UTF-16 code unit and inputs beyond U+FFFF are
//! unrepresentable rather than checked at runtime. Surrogate code units are
//! accepted as indices and are simply not Name characters.

#![no_std]

#[rustfmt::skip]
mod tables;

use tables::{NAME_CHAR, NAME_START};

// Bit cp%8 of byte cp/8, least significant bit first.
fn lookup(bitmap: &[u8; 8192], cp: u16) -> bool {
    bitmap[cp as usize / 8] >> (cp % 8) & 1 != 0
}

/// Whether `cp` may appear as the first code unit of a Name.
pub fn is_name_start_char(cp: u16) -> bool {
    lookup(&NAME_START.0, cp)
}

/// Whether `cp` may appear after the first code unit of a Name.
pub fn is_name_char(cp: u16) -> bool {
    lookup(&NAME_CHAR.0, cp)
}

#[cfg(test)]
mod tests {
    use crate::lookup;

    #[test]
    fn one_bit_maps_to_one_code_point() {
        let mut scratch = [0u8; 8192];
        for cp in 0..=u16::MAX {
            let i = cp as usize / 8;
            scratch[i] = 1 << (cp % 8);
            assert!(lookup(&scratch, cp), "{:04X}", cp);
            for neighbor in (cp & !7)..=(cp | 7) {
                if neighbor != cp {
                    assert!(!lookup(&scratch, neighbor), "{:04X} vs {:04X}", cp, neighbor);
                }
            }
            scratch[i] = 0;
        }
    }

    #[test]
    fn set_bit_is_invisible_to_every_other_code_point() {
        for &cp in &[0x0000, 0x0007, 0x0008, 0x003A, 0x8000, 0xFFF8, 0xFFFF] {
            let mut scratch = [0u8; 8192];
            scratch[cp as usize / 8] = 1 << (cp % 8);
            for probe in 0..=u16::MAX {
                assert_eq!(probe == cp, lookup(&scratch, probe), "{:04X} vs {:04X}", cp, probe);
            }
        }
    }
}
