use super::*;
use crate::foundation::error::IconError;
use crate::icon::builtin::default_icon;
use crate::icon::model::Shape;

fn close(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 2)
}

#[test]
fn renders_exact_target_dimensions() {
    let mut r = CpuRenderer::new(RenderSettings::default());
    for (w, h) in [(40, 40), (167, 167), (64, 32)] {
        let img = r.render(&default_icon(), w, h).unwrap();
        assert_eq!((img.width, img.height), (w, h));
        assert_eq!(img.data.len(), (w * h * 4) as usize);
    }
}

#[test]
fn background_fills_the_corners_and_shapes_paint_over_it() {
    let mut r = CpuRenderer::new(RenderSettings::default());
    let img = r.render(&default_icon(), 1024, 1024).unwrap();

    let teal = [0, 179, 184, 255];
    assert!(close(img.pixel(0, 0).unwrap(), teal));
    assert!(close(img.pixel(1023, 1023).unwrap(), teal));

    // Centre of the white dot (first child of the first group).
    assert!(close(img.pixel(132, 424).unwrap(), [255, 255, 255, 255]));
    // Centre of the yellow dot (last child of the second group).
    assert!(close(img.pixel(892, 599).unwrap(), [247, 207, 55, 255]));
}

#[test]
fn small_sizes_keep_proportions() {
    let mut r = CpuRenderer::new(RenderSettings::default());
    let img = r.render(&default_icon(), 128, 128).unwrap();
    // 1024 -> 128 divides every coordinate by 8.
    assert!(close(img.pixel(16, 53).unwrap(), [255, 255, 255, 255]));
    assert!(close(img.pixel(111, 75).unwrap(), [247, 207, 55, 255]));
    assert!(close(img.pixel(0, 0).unwrap(), [0, 179, 184, 255]));
}

#[test]
fn rendering_is_deterministic_across_renderer_reuse() {
    let icon = default_icon();
    let mut r = CpuRenderer::new(RenderSettings::default());
    let a = r.render(&icon, 120, 120).unwrap();
    let _ = r.render(&icon, 58, 58).unwrap();
    let b = r.render(&icon, 120, 120).unwrap();
    let c = CpuRenderer::new(RenderSettings::default())
        .render(&icon, 120, 120)
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn home_screen_mask_clears_corners() {
    let mut r = CpuRenderer::new(RenderSettings {
        home_screen_mask: true,
        ..RenderSettings::default()
    });
    let img = r.render(&default_icon(), 256, 256).unwrap();
    assert_eq!(img.pixel(0, 0).unwrap()[3], 0);
    assert!(close(img.pixel(128, 2).unwrap(), [0, 179, 184, 255]));
}

#[test]
fn clear_color_shows_through_transparent_background() {
    let icon = IconDescriptor {
        background: Color::TRANSPARENT,
        root: Shape::circle(Color::WHITE, 10.0).into(),
    };
    let mut r = CpuRenderer::new(RenderSettings {
        clear_rgba: Some([10, 20, 30, 255]),
        ..RenderSettings::default()
    });
    let img = r.render(&icon, 64, 64).unwrap();
    assert!(close(img.pixel(0, 0).unwrap(), [10, 20, 30, 255]));
}

#[test]
fn zero_and_oversized_targets_fail() {
    let mut r = CpuRenderer::new(RenderSettings::default());
    assert!(matches!(
        r.render(&default_icon(), 0, 20),
        Err(IconError::Render(_))
    ));
    assert!(matches!(
        r.render(&default_icon(), 70_000, 1),
        Err(IconError::Render(_))
    ));
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = vec![0, 0, 0, 0, 64, 32, 0, 128, 10, 20, 30, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[0, 0, 0, 0]);
    assert_eq!(&px[4..8], &[128, 64, 0, 128]);
    assert_eq!(&px[8..12], &[10, 20, 30, 255]);
}
