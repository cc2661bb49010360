//! Colors and sizes for the figures.
//!
//! Follows the usual plotting conventions: blue nodes with black labels for the
//! plain graph, red for selected antennas and blue with white labels for the rest.

use image::Rgb;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const EDGE: Rgb<u8> = Rgb([0, 0, 0]);
pub const DEFAULT_NODE: Rgb<u8> = Rgb([31, 119, 180]);
pub const SELECTED_NODE: Rgb<u8> = Rgb([255, 0, 0]);
pub const UNSELECTED_NODE: Rgb<u8> = Rgb([0, 0, 255]);
pub const DARK_LABEL: Rgb<u8> = Rgb([0, 0, 0]);
pub const LIGHT_LABEL: Rgb<u8> = Rgb([255, 255, 255]);

/// Pixel radius of a node disc.
pub const NODE_RADIUS: i32 = 11;
/// Size of one glyph cell in pixels.
pub const GLYPH_SCALE: u32 = 2;

/// How one layer of the drawing looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub node: Rgb<u8>,
    pub outline: Rgb<u8>,
    pub label: Rgb<u8>,
    pub edge: Rgb<u8>,
}

impl Style {
    fn with_node(node: Rgb<u8>, label: Rgb<u8>) -> Self {
        Style {
            node,
            outline: darken(node, 0.35),
            label,
            edge: EDGE,
        }
    }

    pub fn original() -> Self {
        Style::with_node(DEFAULT_NODE, DARK_LABEL)
    }

    pub fn selected() -> Self {
        Style::with_node(SELECTED_NODE, DARK_LABEL)
    }

    pub fn unselected() -> Self {
        Style::with_node(UNSELECTED_NODE, LIGHT_LABEL)
    }
}

/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
pub fn darken(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
    let f = 1.0 - factor.clamp(0.0, 1.0);
    let Rgb([r, g, b]) = color;
    Rgb([
        (r as f64 * f) as u8,
        (g as f64 * f) as u8,
        (b as f64 * f) as u8,
    ])
}
