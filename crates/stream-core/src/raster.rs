// File: crates/stream-core/src/raster.rs
// Summary: Headless rasterization of a Scene with Skia CPU raster surfaces (PNG / RGBA8).

use std::path::Path;

use skia_safe as skia;

use crate::error::RenderError;
use crate::geometry::{PathCmd, RectF};
use crate::scene::{Node, Scene};
use crate::text::TextShaper;

/// Draw `scene` onto a fresh surface of the scene's size.
fn draw(scene: &Scene) -> Result<skia::Surface, RenderError> {
    let mut surface = skia::surfaces::raster_n32_premul((scene.width, scene.height))
        .ok_or(RenderError::Surface { width: scene.width, height: scene.height })?;
    let canvas = surface.canvas();
    canvas.clear(scene.background.unwrap_or(skia::Color::TRANSPARENT));

    let needs_text = scene.nodes.iter().any(|n| matches!(n, Node::Text { .. }));
    let shaper = needs_text.then(TextShaper::new);

    for node in &scene.nodes {
        match node {
            Node::Area { path, fill, opacity, .. } => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(*fill);
                paint.set_alpha_f(opacity.clamp(0.0, 1.0));
                canvas.draw_path(&to_skia_path(path), &paint);
            }
            Node::Rect { rect, fill, stroke, radius } => {
                let r = to_skia_rect(rect);
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                paint.set_color(*fill);
                draw_rect(canvas, r, *radius, &paint);
                if let Some(c) = stroke {
                    paint.set_style(skia::paint::Style::Stroke);
                    paint.set_stroke_width(1.0);
                    paint.set_color(*c);
                    draw_rect(canvas, r, *radius, &paint);
                }
            }
            Node::Line { from, to, color, width } => {
                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_stroke_width(*width);
                paint.set_color(*color);
                canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
            }
            Node::Text { pos, text, size, color, anchor } => {
                if let Some(shaper) = shaper.as_ref() {
                    shaper.draw(canvas, text, pos.x, pos.y, *size, *color, *anchor);
                }
            }
        }
    }
    Ok(surface)
}

fn draw_rect(canvas: &skia::Canvas, r: skia::Rect, radius: f32, paint: &skia::Paint) {
    if radius > 0.0 {
        canvas.draw_round_rect(r, radius, radius, paint);
    } else {
        canvas.draw_rect(r, paint);
    }
}

fn to_skia_rect(r: &RectF) -> skia::Rect {
    // bars of negative values come in with a negative height
    skia::Rect::from_ltrb(r.left, r.top.min(r.bottom), r.right, r.top.max(r.bottom))
}

fn to_skia_path(cmds: &[PathCmd]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => { path.move_to((p.x, p.y)); }
            PathCmd::LineTo(p) => { path.line_to((p.x, p.y)); }
            PathCmd::CubicTo(a, b, p) => { path.cubic_to((a.x, a.y), (b.x, b.y), (p.x, p.y)); }
            PathCmd::Close => { path.close(); }
        }
    }
    path
}

/// Encode the scene as PNG bytes.
pub fn png_bytes(scene: &Scene) -> Result<Vec<u8>, RenderError> {
    let mut surface = draw(scene)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode("PNG"))?;
    Ok(data.as_bytes().to_vec())
}

/// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
pub fn rgba8(scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
    let mut surface = draw(scene)?;
    let info = skia::ImageInfo::new(
        (scene.width, scene.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = scene.width as usize * 4;
    let mut pixels = vec![0u8; stride * scene.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::Readback);
    }
    Ok((pixels, scene.width as u32, scene.height as u32, stride))
}

pub fn write_png(scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
    write_file(output_png_path, &png_bytes(scene)?)
}

/// Write `bytes`, creating parent directories as needed.
pub fn write_file(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), RenderError> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
