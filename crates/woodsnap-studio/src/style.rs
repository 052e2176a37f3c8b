//! Shared palette of the mock WoodSnap UI.

use woodsnap_engine::paint::Color;

#[inline]
pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_srgb_u8(r, g, b, 255)
}

#[inline]
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::from_srgb_u8(r, g, b, a)
}

pub const WHITE: [u8; 3] = [255, 255, 255];
/// Cream screen background of the light scenes.
pub const PAPER: [u8; 3] = [250, 244, 234];
/// Near-black camera viewport.
pub const VIEWFINDER: [u8; 3] = [15, 12, 8];
/// Empty part of progress bars.
pub const TRACK: [u8; 3] = [230, 225, 215];
/// Primary text on light cards.
pub const INK: [u8; 3] = [50, 35, 20];
/// Secondary labels.
pub const MUTED: [u8; 3] = [130, 110, 85];
/// Tertiary text (dates, placeholders).
pub const FAINT: [u8; 3] = [150, 130, 110];
/// Caption color on light backgrounds.
pub const ESPRESSO: [u8; 3] = [42, 32, 24];
