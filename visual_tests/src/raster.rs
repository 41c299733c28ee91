use image::{Rgba, RgbaImage};
use material_layout::prelude::{Color, DrawCommand, Rect};

/// Rasterize recorded draw commands onto an opaque background.
///
/// Pixels are sampled at their centers with no anti-aliasing, so the output
/// is deterministic for a given command list.
pub fn rasterize(commands: &[DrawCommand], width: u32, height: u32, background: Color) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, to_pixel(background));

    for command in commands {
        match command {
            DrawCommand::Rect { rect, color, clip } => {
                fill(&mut img, *rect, *clip, *color, |_, _| true);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                clip,
            } => {
                let bounds = Rect::new(
                    center.0 - radius,
                    center.1 - radius,
                    radius * 2.0,
                    radius * 2.0,
                );
                let (cx, cy, r) = (center.0, center.1, *radius);
                fill(&mut img, bounds, *clip, *color, |x, y| {
                    let dx = x - cx;
                    let dy = y - cy;
                    dx * dx + dy * dy <= r * r
                });
            }
        }
    }

    img
}

fn fill(
    img: &mut RgbaImage,
    bounds: Rect,
    clip: Option<Rect>,
    color: Color,
    inside: impl Fn(f32, f32) -> bool,
) {
    let area = match clip {
        Some(clip) => bounds.intersection(&clip),
        None => bounds,
    };
    let x0 = area.x.floor().max(0.0) as u32;
    let y0 = area.y.floor().max(0.0) as u32;
    let x1 = (area.right().ceil().max(0.0) as u32).min(img.width());
    let y1 = (area.bottom().ceil().max(0.0) as u32).min(img.height());

    for py in y0..y1 {
        for px in x0..x1 {
            let (sx, sy) = (px as f32 + 0.5, py as f32 + 0.5);
            if !area.contains(sx, sy) || !inside(sx, sy) {
                continue;
            }
            let dst = img.get_pixel(px, py);
            let blended = blend(*dst, color);
            img.put_pixel(px, py, blended);
        }
    }
}

/// Source-over blend of `src` onto an opaque pixel.
fn blend(dst: Rgba<u8>, src: Color) -> Rgba<u8> {
    let a = src.a.clamp(0.0, 1.0);
    let mix = |d: u8, s: f32| -> u8 {
        let d = f32::from(d) / 255.0;
        ((s * a + d * (1.0 - a)) * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Rgba([mix(dst[0], src.r), mix(dst[1], src.g), mix(dst[2], src.b), 255])
}

fn to_pixel(color: Color) -> Rgba<u8> {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([channel(color.r), channel(color.g), channel(color.b), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_only() {
        let img = rasterize(&[], 4, 4, Color::WHITE);
        assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_opaque_rect() {
        let commands = [DrawCommand::Rect {
            rect: Rect::new(1.0, 1.0, 2.0, 2.0),
            color: Color::BLACK,
            clip: None,
        }];
        let img = rasterize(&commands, 4, 4, Color::WHITE);
        assert_eq!(*img.get_pixel(1, 1), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(2, 2), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(3, 3), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_circle_respects_clip() {
        let commands = [DrawCommand::circle(
            (10.0, 10.0),
            8.0,
            Color::BLACK,
            Some(Rect::new(0.0, 0.0, 10.0, 20.0)),
        )];
        let img = rasterize(&commands, 20, 20, Color::WHITE);
        assert_eq!(*img.get_pixel(8, 10), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(12, 10), Rgba([255, 255, 255, 255]));
        // Outside the radius
        assert_eq!(*img.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_translucent_blend() {
        let commands = [DrawCommand::Rect {
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            color: Color::BLACK.with_alpha_u8(128),
            clip: None,
        }];
        let img = rasterize(&commands, 1, 1, Color::WHITE);
        assert_eq!(*img.get_pixel(0, 0), Rgba([127, 127, 127, 255]));
    }
}
