// The Name classes of XML 1.0 lie entirely within the basic multilingual
// plane; code points wider than 16 bits map to false.

#[unsafe(no_mangle)]
pub extern "C" fn is_name_start_char(c: u32) -> bool {
    if let Ok(cp) = u16::try_from(c) {
        return xml_name_chars::is_name_start_char(cp);
    };

    false
}

#[unsafe(no_mangle)]
pub extern "C" fn is_name_char(c: u32) -> bool {
    if let Ok(cp) = u16::try_from(c) {
        return xml_name_chars::is_name_char(cp);
    };

    false
}

#[cfg(test)]
mod tests {
    #[test]
    fn wide_code_points_are_rejected() {
        assert!(super::is_name_start_char('A' as u32));
        assert!(super::is_name_char('-' as u32));
        assert!(!super::is_name_start_char(0x10000));
        assert!(!super::is_name_char(0x10000));
        assert!(!super::is_name_char(u32::MAX));
    }
}
