#![allow(
    clippy::incompatible_msrv, // https://github.com/rust-lang/rust-clippy/issues/12257
)]

mod fst;
mod ranges;
mod roaring;
mod trie;

#[test]
fn compare_all_implementations() {
    let name_start_fst = fst::name_start_fst();
    let name_char_fst = fst::name_char_fst();
    let name_start_roaring = roaring::name_start_bitmap();
    let name_char_roaring = roaring::name_char_bitmap();
    let name_start_trie = trie::name_start_trie();
    let name_char_trie = trie::name_char_trie();

    for cp in 0..=u16::MAX {
        let thought_to_be_start = ranges::is_name_start_char(cp);
        let thought_to_be_char = ranges::is_name_char(cp);

        // the packed tables
        assert_eq!(
            thought_to_be_start,
            xml_name_chars::is_name_start_char(cp),
            "{cp:04X}",
        );
        assert_eq!(
            thought_to_be_char,
            xml_name_chars::is_name_char(cp),
            "{cp:04X}",
        );

        // ucd-trie
        assert_eq!(
            thought_to_be_start,
            name_start_trie.contains_u32(cp as u32),
            "{cp:04X}",
        );
        assert_eq!(
            thought_to_be_char,
            name_char_trie.contains_u32(cp as u32),
            "{cp:04X}",
        );

        // fst
        assert_eq!(
            thought_to_be_start,
            name_start_fst.contains(cp.to_be_bytes()),
            "{cp:04X}",
        );
        assert_eq!(
            thought_to_be_char,
            name_char_fst.contains(cp.to_be_bytes()),
            "{cp:04X}",
        );

        // roaring
        assert_eq!(
            thought_to_be_start,
            name_start_roaring.contains(cp as u32),
            "{cp:04X}",
        );
        assert_eq!(
            thought_to_be_char,
            name_char_roaring.contains(cp as u32),
            "{cp:04X}",
        );
    }
}
