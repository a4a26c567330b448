use super::*;
use crate::foundation::core::Point;

const BG: BackgroundColor = BackgroundColor(0xCC10_2030);

fn focus(cx: f64, cy: f64, r: f64) -> FocusPoint {
    FocusPoint::new(Point::new(cx, cy), r)
}

#[test]
fn rejects_non_positive_dimensions() {
    assert!(composite(0, 10, BG, None).is_err());
    assert!(composite(10, 0, BG, None).is_err());
}

#[test]
fn without_focus_every_pixel_is_background() {
    let m = composite(32, 24, BG, None).unwrap();
    let expected = BG.to_rgba8_premul().to_array();
    assert_eq!(m.transparent_pixel_count(), 0);
    assert!(m.data.chunks_exact(4).all(|p| p == expected));
}

#[test]
fn unset_color_paints_default() {
    let m = composite(4, 4, BackgroundColor(0), None).unwrap();
    assert_eq!(m.pixel(0, 0).unwrap()[3], BackgroundColor::DEFAULT.alpha());
}

#[test]
fn compositing_is_idempotent() {
    let f = Some(focus(40.3, 27.9, 13.2));
    let a = composite(96, 64, BG, f).unwrap();
    let b = composite(96, 64, BG, f).unwrap();
    assert_eq!(a, b);
}

#[test]
fn half_radius_is_clear_and_double_radius_is_background() {
    let (cx, cy, r) = (100.0, 80.0, 20.0);
    let m = composite(240, 200, BG, Some(focus(cx, cy, r))).unwrap();
    let expected = BG.to_rgba8_premul().to_array();

    // Pixel centres sit at +0.5, so pick pixels whose centre is exactly at the distance.
    let inner = ((cx + r / 2.0 - 0.5) as u32, (cy - 0.5) as u32);
    let outer = ((cx + 2.0 * r - 0.5) as u32, (cy - 0.5) as u32);
    assert!(m.is_transparent_at(inner.0, inner.1));
    assert_eq!(m.pixel(outer.0, outer.1).unwrap(), expected);
}

#[test]
fn cutout_respects_radius_outside_the_aa_band() {
    let f = focus(50.0, 50.0, 18.0);
    let m = composite(100, 100, BG, Some(f)).unwrap();
    let expected = BG.to_rgba8_premul().to_array();

    for y in 0..100u32 {
        for x in 0..100u32 {
            let d = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5).distance(f.center);
            let px = m.pixel(x, y).unwrap();
            if d <= f.radius - 0.5 {
                assert_eq!(px[3], 0, "({x},{y}) inside circle must be clear");
            } else if d >= f.radius + 0.5 {
                assert_eq!(px, expected, "({x},{y}) outside circle must be untouched");
            }
        }
    }
}

#[test]
fn circle_partially_off_buffer_is_clipped() {
    let m = composite(20, 20, BG, Some(focus(-5.0, 10.0, 8.0))).unwrap();
    assert!(m.is_transparent_at(0, 10));
    assert!(!m.is_transparent_at(19, 10));

    let far = composite(20, 20, BG, Some(focus(500.0, 500.0, 8.0))).unwrap();
    assert_eq!(far.transparent_pixel_count(), 0);
}

#[test]
fn zero_radius_clears_nothing() {
    let m = composite(16, 16, BG, Some(focus(8.0, 8.0, 0.0))).unwrap();
    assert_eq!(m.transparent_pixel_count(), 0);
}

#[test]
fn rgba_image_is_unpremultiplied() {
    let m = composite(2, 1, BackgroundColor(0x8080_4020), None).unwrap();
    let img = m.to_rgba_image().unwrap();
    let p = img.get_pixel(0, 0).0;
    assert_eq!(p[3], 0x80);
    assert!((i32::from(p[0]) - 0x80).abs() <= 1);
    assert!((i32::from(p[1]) - 0x40).abs() <= 1);
    assert!((i32::from(p[2]) - 0x20).abs() <= 1);
}

#[test]
fn non_finite_focus_leaves_mask_fully_dimmed() {
    let m = composite(32, 24, BG, Some(focus(f64::NAN, 12.0, 8.0))).unwrap();
    assert_eq!(m.transparent_pixel_count(), 0);

    let m = composite(32, 24, BG, Some(focus(16.0, 12.0, f64::INFINITY))).unwrap();
    assert_eq!(m.transparent_pixel_count(), 0);
}
