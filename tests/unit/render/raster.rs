use super::*;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba(rgba)))
}

#[test]
fn new_rejects_zero_size() {
    assert!(Raster::new(0, 4).is_err());
    assert!(Raster::new(4, 0).is_err());
    let r = Raster::new(4, 3).unwrap();
    assert_eq!((r.width(), r.height()), (4, 3));
    assert!(r.pixels().pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn draw_scaled_fills_whole_raster_without_letterboxing() {
    let mut r = Raster::new(8, 4).unwrap();
    r.draw_scaled(&solid(2, 6, [0, 255, 0, 255]));
    assert!(r.pixels().pixels().all(|p| p.0 == [0, 255, 0, 255]));
}

#[test]
fn clear_prevents_previous_frame_bleeding_through() {
    let mut r = Raster::new(4, 4).unwrap();
    r.draw_scaled(&solid(4, 4, [255, 0, 0, 255]));

    r.clear();
    r.draw_scaled(&solid(4, 4, [0, 0, 255, 0]));
    assert!(r.pixels().pixels().all(|p| p.0[3] == 0));
    assert!(r.pixels().pixels().all(|p| p.0[0] == 0));
}

#[test]
fn scaling_does_not_bleed_transparent_colour_into_edges() {
    let mut src = RgbaImage::new(2, 1);
    src.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
    src.put_pixel(1, 0, Rgba([255, 0, 0, 0]));

    let mut r = Raster::new(8, 1).unwrap();
    r.draw_scaled(&DynamicImage::ImageRgba8(src));

    let px: Vec<[u8; 4]> = r.pixels().pixels().map(|p| p.0).collect();
    assert!(px.iter().any(|p| p[3] > 0 && p[3] < 255), "{px:?}");
    for p in px.iter().filter(|p| p[3] > 0) {
        assert!(p[0] >= 250, "{p:?}");
        assert_eq!(p[0], p[1], "red tint in {p:?}");
        assert_eq!(p[1], p[2], "red tint in {p:?}");
    }
}

#[test]
fn premultiply_round_trip_keeps_opaque_and_clears_transparent() {
    let mut px = [200u8, 100, 50, 255, 255, 0, 0, 0, 255, 255, 255, 128];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px[..8], [200, 100, 50, 255, 0, 0, 0, 0]);
    assert_eq!(px[8..], [128, 128, 128, 128]);

    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [200, 100, 50, 255, 0, 0, 0, 0, 255, 255, 255, 128]);
}

#[test]
fn flatten_drops_alpha_and_blackens_transparent() {
    let src = [10u8, 20, 30, 128, 40, 50, 60, 0];
    let mut dst = [9u8; 8];
    flatten_for_palette(&mut dst, &src, None).unwrap();
    assert_eq!(dst, [10, 20, 30, 255, 0, 0, 0, 255]);
}

#[test]
fn flatten_marks_key_matches_transparent() {
    // The transparent pixel flattens to black and therefore matches a black key.
    let src = [0u8, 0, 0, 255, 1, 1, 1, 255, 40, 50, 60, 0];
    let mut dst = [0u8; 12];
    flatten_for_palette(&mut dst, &src, Some(Rgb8::BLACK)).unwrap();
    assert_eq!(dst, [0, 0, 0, 0, 1, 1, 1, 255, 0, 0, 0, 0]);

    let mut dst = [0u8; 12];
    flatten_for_palette(&mut dst, &src, Some(Rgb8::new(1, 1, 1))).unwrap();
    assert_eq!(dst, [0, 0, 0, 255, 1, 1, 1, 0, 0, 0, 0, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = [0u8; 4];
    assert!(flatten_for_palette(&mut dst, &[0u8; 8], None).is_err());
    let mut odd = [0u8; 3];
    assert!(flatten_for_palette(&mut odd, &[0u8; 3], None).is_err());
}
