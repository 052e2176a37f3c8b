//! Everything around the mock screen: vignette, phone frame and caption.

use woodsnap_engine::coords::Rect;
use woodsnap_engine::paint::LinearGradient;

use crate::layout::{Bounds, Scale, pt};
use crate::painter::Painter;
use crate::style::{ESPRESSO, rgb, rgba};
use crate::typeface::{Face, Typeface};

/// Alpha of the vignette at the bottom edge.
const VIGNETTE_ALPHA: u8 = 30;
const FRAME_SHADOW_OFFSET: i32 = 8;
const CAPTION_SHADOW_OFFSET: i32 = 3;

// ── vignette ──────────────────────────────────────────────────────────────

/// Tints the whole canvas, transparent at the top to faint at the bottom.
///
/// Dark backgrounds are darkened further, light ones are lightened.
pub fn vignette(painter: &mut Painter<'_>, width: u32, height: u32, dark: bool) {
    let v = if dark { 0 } else { 255 };
    let gradient = LinearGradient::vertical(
        0.0,
        height as f32,
        rgba(v, v, v, 0),
        rgba(v, v, v, VIGNETTE_ALPHA),
    );
    painter.fill_rect(Rect::new(0.0, 0.0, width as f32, height as f32), gradient);
}

// ── phone frame ───────────────────────────────────────────────────────────

/// Outer body of the phone for a `width × height` canvas.
pub fn phone_body(width: u32, height: u32) -> Bounds {
    let (w, h) = (width as i32, height as i32);
    let pw = w * 62 / 100;
    let ph = h / 2;
    Bounds::from_xywh((w - pw) / 2, h * 38 / 100, pw, ph)
}

/// The screen region: the phone body inset by the bezel.
pub fn screen_region(width: u32, height: u32, s: Scale) -> Bounds {
    phone_body(width, height).inset(s.px(8))
}

/// Draws the phone shadow and body, returning the screen region.
pub fn phone_frame(painter: &mut Painter<'_>, width: u32, height: u32, s: Scale) -> Bounds {
    let body = phone_body(width, height);
    let radius = s.pxf(40);
    let shadow = Bounds::new(
        body.x0 + FRAME_SHADOW_OFFSET,
        body.y0 + FRAME_SHADOW_OFFSET,
        body.x1 + FRAME_SHADOW_OFFSET,
        body.y1 + FRAME_SHADOW_OFFSET,
    );
    painter.fill_rounded_rect(shadow, radius, rgba(0, 0, 0, 60));
    painter.fill_rounded_rect(body, radius, rgb(20, 20, 20));
    screen_region(width, height, s)
}

// ── caption ───────────────────────────────────────────────────────────────

/// One positioned caption line.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLine {
    pub text: String,
    /// Left edge, chosen so the line is centered on the canvas.
    pub x: i32,
    /// Top of the line box.
    pub y: i32,
    pub width: f32,
    pub size: f32,
}

impl CaptionLine {
    /// Horizontal center of the laid-out line.
    pub fn center_x(&self) -> f32 {
        self.x as f32 + self.width / 2.0
    }
}

/// Lays out `text` (lines split on `\n`) for a canvas `width` pixels wide.
pub fn layout_caption(typeface: &Typeface, width: u32, text: &str, s: Scale) -> Vec<CaptionLine> {
    let size = s.px(88);
    let top = s.px(120);
    let line_height = size + s.px(16);

    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            let line_width = typeface.text_width(Face::Rounded, line, size as f32);
            CaptionLine {
                text: line.to_string(),
                x: (width as i32 - line_width.round() as i32).div_euclid(2),
                y: top + i as i32 * line_height,
                width: line_width,
                size: size as f32,
            }
        })
        .collect()
}

/// Draws the caption with its drop shadow.
pub fn caption(painter: &mut Painter<'_>, width: u32, text: &str, dark: bool, s: Scale) {
    let [r, g, b] = if dark { [255, 255, 255] } else { ESPRESSO };
    let lines = layout_caption(painter.typeface(), width, text, s);
    for line in &lines {
        painter.text(
            Face::Rounded,
            &line.text,
            line.size,
            pt(line.x + CAPTION_SHADOW_OFFSET, line.y + CAPTION_SHADOW_OFFSET),
            rgba(0, 0, 0, 80),
        );
        painter.text(Face::Rounded, &line.text, line.size, pt(line.x, line.y), rgb(r, g, b));
    }
}
