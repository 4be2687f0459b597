// To regenerate tables, run the following in the repo root:
//
// $ cargo run --manifest-path generate/Cargo.toml
//
// ranges.rs is transcribed by hand from appendix B of XML 1.0 (Fourth
// Edition) <https://www.w3.org/TR/2006/REC-xml-20060816/#CharClasses>.

#[rustfmt::skip]
mod ranges;

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

const TABLE_BYTES: usize = 8192;
const PATH: &str = "../src/tables.rs";

fn is_name_start_char(cp: u16) -> bool {
    cp == 0x005F || cp == 0x003A || is_letter(cp)
}

fn is_name_char(cp: u16) -> bool {
    is_name_start_char(cp)
        || cp == 0x002D
        || cp == 0x002E
        || search(cp, ranges::DIGIT)
        || search(cp, ranges::COMBINING_CHAR)
        || search(cp, ranges::EXTENDER)
}

fn is_letter(cp: u16) -> bool {
    search(cp, ranges::BASE_CHAR) || search(cp, ranges::IDEOGRAPHIC)
}

fn search(cp: u16, table: &[(u16, u16)]) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if lo > cp {
                Ordering::Greater
            } else if hi < cp {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

fn bitmap(contains: fn(u16) -> bool) -> [u8; TABLE_BYTES] {
    let mut bits = [0u8; TABLE_BYTES];
    for cp in 0..=u16::MAX {
        bits[cp as usize / 8] |= (contains(cp) as u8) << (cp % 8);
    }
    bits
}

fn emit(out: &mut String, name: &str, bits: &[u8; TABLE_BYTES]) {
    out.push_str(&format!(
        "pub(crate) static {}: Align64<[u8; {}]> = Align64([\n",
        name, TABLE_BYTES,
    ));
    for line in bits.chunks(16) {
        out.push_str("   ");
        for byte in line {
            out.push_str(&format!(" 0x{:02X},", byte));
        }
        out.push('\n');
    }
    out.push_str("]);\n");
}

fn main() {
    for cp in 0..=u16::MAX {
        if is_name_start_char(cp) {
            assert!(
                is_name_char(cp),
                "{:04X}: NameStartChar is not contained in NameChar",
                cp,
            );
        }
    }

    let mut out = String::new();
    out.push_str("#[repr(C, align(64))]\n");
    out.push_str("pub(crate) struct Align64<T>(pub(crate) T);\n");
    out.push('\n');
    emit(&mut out, "NAME_START", &bitmap(is_name_start_char));
    out.push('\n');
    emit(&mut out, "NAME_CHAR", &bitmap(is_name_char));

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(PATH);
    fs::write(path, out).unwrap();
}
