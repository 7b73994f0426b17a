use super::*;

#[test]
fn png_decodes_back_to_the_same_pixels() {
    let src = RasterImage {
        width: 2,
        height: 1,
        data: vec![0, 179, 184, 255, 247, 207, 55, 128],
    };
    let png = encode_png(&src).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 1));
    assert_eq!(decoded.as_raw(), &src.data);
}

#[test]
fn mismatched_buffer_is_an_encode_error() {
    let bad = RasterImage {
        width: 4,
        height: 4,
        data: vec![0; 3],
    };
    assert!(matches!(encode_png(&bad), Err(IconError::Encode(_))));
}
