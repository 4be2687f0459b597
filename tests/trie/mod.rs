use ucd_trie::TrieSetOwned;

pub fn name_start_trie() -> TrieSetOwned {
    trie_of_code_points(crate::ranges::is_name_start_char)
}

pub fn name_char_trie() -> TrieSetOwned {
    trie_of_code_points(crate::ranges::is_name_char)
}

fn trie_of_code_points(contains: fn(u16) -> bool) -> TrieSetOwned {
    let code_points = (0..=u16::MAX).filter(|&cp| contains(cp)).map(u32::from);
    TrieSetOwned::from_codepoints(code_points).unwrap()
}
