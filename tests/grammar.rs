#![allow(
    clippy::incompatible_msrv, // https://github.com/rust-lang/rust-clippy/issues/12257
)]

use xml_name_chars::{is_name_char, is_name_start_char};

#[test]
fn ascii_boundaries() {
    assert!(is_name_start_char(':' as u16));
    assert!(is_name_start_char('_' as u16));
    assert!(is_name_start_char('A' as u16));
    assert!(is_name_start_char('a' as u16));

    // digits, hyphen, and period continue a Name but never start one
    assert!(!is_name_start_char('0' as u16));
    assert!(is_name_char('0' as u16));
    assert!(!is_name_start_char('9' as u16));
    assert!(is_name_char('9' as u16));
    assert!(!is_name_start_char('-' as u16));
    assert!(is_name_char('-' as u16));
    assert!(!is_name_start_char('.' as u16));
    assert!(is_name_char('.' as u16));

    assert!(!is_name_start_char(' ' as u16));
    assert!(!is_name_char(' ' as u16));
    assert!(!is_name_start_char(0x0000));
    assert!(!is_name_char(0x0000));
    assert!(!is_name_char('@' as u16));
    assert!(!is_name_char('/' as u16));
}

#[test]
fn unicode_class_members() {
    // U+00C0 LATIN CAPITAL LETTER A WITH GRAVE
    assert!(is_name_start_char(0x00C0));
    // U+00D7 MULTIPLICATION SIGN
    assert!(!is_name_char(0x00D7));
    // U+0132 LATIN CAPITAL LIGATURE IJ, absent from BaseChar
    assert!(!is_name_char(0x0132));
    // U+0386 GREEK CAPITAL LETTER ALPHA WITH TONOS
    assert!(is_name_start_char(0x0386));
    // U+0387 GREEK ANO TELEIA is an Extender, like U+00B7 MIDDLE DOT
    assert!(!is_name_start_char(0x0387));
    assert!(is_name_char(0x0387));
    assert!(!is_name_start_char(0x00B7));
    assert!(is_name_char(0x00B7));
    // U+0300 COMBINING GRAVE ACCENT
    assert!(!is_name_start_char(0x0300));
    assert!(is_name_char(0x0300));
    // U+0660 ARABIC-INDIC DIGIT ZERO
    assert!(!is_name_start_char(0x0660));
    assert!(is_name_char(0x0660));
    // U+3007 IDEOGRAPHIC NUMBER ZERO counts as Ideographic
    assert!(is_name_start_char(0x3007));
    // U+3008 LEFT ANGLE BRACKET
    assert!(!is_name_char(0x3008));
    // U+4E00 and U+9FA5, the ends of the CJK ideograph range
    assert!(is_name_start_char(0x4E00));
    assert!(is_name_start_char(0x9FA5));
    assert!(!is_name_char(0x9FA6));
    // U+AC00 and U+D7A3, the ends of the hangul syllable range
    assert!(is_name_start_char(0xAC00));
    assert!(is_name_start_char(0xD7A3));
    assert!(!is_name_char(0xD7A4));
}

#[test]
fn table_edges() {
    assert!(!is_name_start_char(0xFFFF));
    assert!(!is_name_char(0xFFFF));
    assert!(!is_name_char(0xFFFE));
    // U+FFFD REPLACEMENT CHARACTER
    assert!(!is_name_char(0xFFFD));
}

#[test]
fn surrogates_are_not_name_chars() {
    for cp in 0xD800..=0xDFFF {
        assert!(!is_name_start_char(cp), "{cp:04X}");
        assert!(!is_name_char(cp), "{cp:04X}");
    }
}

#[test]
fn name_start_is_subset_of_name_char() {
    for cp in 0..=u16::MAX {
        if is_name_start_char(cp) {
            assert!(is_name_char(cp), "{cp:04X}");
        }
    }
}

#[test]
fn repeated_queries_agree() {
    for cp in [0x0000, 0x003A, 0x0041, 0x00B7, 0x4E00, 0xD800, 0xFFFF] {
        let first = (is_name_start_char(cp), is_name_char(cp));
        for _ in 0..2 {
            assert_eq!(first, (is_name_start_char(cp), is_name_char(cp)), "{cp:04X}");
        }
    }
}

// What a tokenizer does with the two queries: take one NameStartChar, then
// NameChars until the first code unit that is neither.
fn scan_name(input: &str) -> Option<String> {
    let mut units = input.encode_utf16();
    let first = units.next()?;
    if !is_name_start_char(first) {
        return None;
    }
    let mut name = vec![first];
    name.extend(units.take_while(|&cp| is_name_char(cp)));
    String::from_utf16(&name).ok()
}

#[test]
fn assembles_name_token_from_stream() {
    assert_eq!(Some("foo-bar.2:baz".to_owned()), scan_name("foo-bar.2:baz "));
    assert_eq!(Some("xml:lang".to_owned()), scan_name("xml:lang=\"en\""));
    assert_eq!(Some("é".to_owned()), scan_name("é"));
    assert_eq!(None, scan_name("2nd"));
    assert_eq!(None, scan_name("-dash"));
    assert_eq!(None, scan_name(" name"));
    assert_eq!(None, scan_name(""));
    // a supplementary-plane scalar arrives as a surrogate pair, and a
    // surrogate never passes either query
    assert_eq!(None, scan_name("\u{10000}"));
}
