#![allow(clippy::module_name_repetitions)]

pub fn name_start_fst() -> fst::Set<Vec<u8>> {
    set_of_code_points(crate::ranges::is_name_start_char)
}

pub fn name_char_fst() -> fst::Set<Vec<u8>> {
    set_of_code_points(crate::ranges::is_name_char)
}

// Big-endian keys keep numeric order and lexicographic order in agreement,
// which is what SetBuilder::insert demands.
fn set_of_code_points(contains: fn(u16) -> bool) -> fst::Set<Vec<u8>> {
    let mut builder = fst::SetBuilder::memory();
    for cp in 0..=u16::MAX {
        if contains(cp) {
            builder.insert(cp.to_be_bytes()).unwrap();
        }
    }
    builder.into_set()
}
