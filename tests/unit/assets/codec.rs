use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn encode_then_decode_keeps_dimensions() {
    let img = RgbaImage::from_pixel(17, 9, image::Rgba([120, 60, 30, 255]));
    let bytes = encode_jpeg(&img, DEFAULT_JPEG_QUALITY).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

    let back = decode_jpeg(&bytes).unwrap();
    assert_eq!(back.dimensions(), (17, 9));
    let px = back.get_pixel(8, 4).0;
    assert!(px[0].abs_diff(120) <= 4, "{px:?}");
    assert_eq!(px[3], 255);
}

#[test]
fn garbage_is_a_decode_error() {
    let err = decode_jpeg(b"definitely not a jpeg").unwrap_err();
    assert!(matches!(err, ApodError::Decode(_)), "{err}");
}

#[test]
fn other_codecs_are_rejected() {
    let err = decode_jpeg(&png_bytes(4, 4)).unwrap_err();
    assert!(matches!(err, ApodError::Decode(_)), "{err}");
}

#[test]
fn out_of_range_quality_is_clamped() {
    let img = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));
    assert!(encode_jpeg(&img, 0).is_ok());
    assert!(encode_jpeg(&img, 255).is_ok());
}
