use roaring::RoaringBitmap;

pub fn name_start_bitmap() -> RoaringBitmap {
    let mut bitmap = RoaringBitmap::new();
    for cp in 0..=u16::MAX {
        if crate::ranges::is_name_start_char(cp) {
            bitmap.insert(cp as u32);
        }
    }
    bitmap
}

pub fn name_char_bitmap() -> RoaringBitmap {
    let mut bitmap = RoaringBitmap::new();
    for cp in 0..=u16::MAX {
        if crate::ranges::is_name_char(cp) {
            bitmap.insert(cp as u32);
        }
    }
    bitmap
}
