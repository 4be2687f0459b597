#![allow(clippy::type_complexity, clippy::uninlined_format_args)]

use image::{ImageBuffer, Rgb};
use std::process;

fn main() {
    // One pixel per code point, one row per 256-code-point page.
    let width = 256;
    let height = 256;
    let diagrams: [(&str, fn(u16) -> bool); 2] = [
        ("name_start.png", xml_name_chars::is_name_start_char),
        ("name_char.png", xml_name_chars::is_name_char),
    ];
    for (name, f) in diagrams {
        let mut imgbuf = ImageBuffer::new(width, height);
        for (col, row, pixel) in imgbuf.enumerate_pixels_mut() {
            *pixel = if f((row * width + col) as u16) {
                Rgb([0u8, 0, 0])
            } else {
                Rgb([255, 255, 255])
            };
        }
        if let Err(err) = imgbuf.save(name) {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
