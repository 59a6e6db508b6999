//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::{Rect, World};

/// Convert an sRGB color with u8 channels to linear RGBA.
///
/// The surface format is sRGB, so shader outputs are gamma-encoded on write;
/// vertex colors have to be supplied in linear space to round-trip.
pub fn srgb_u8_to_linear(color: [u8; 4]) -> [f32; 4] {
    fn channel(c: u8) -> f32 {
        let c = c as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    [
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3] as f32 / 255.0,
    ]
}

/// Generate two triangles covering a filled rectangle, in canvas coordinates.
pub fn quad(rect: &Rect, color: [u8; 4]) -> [Vertex; 6] {
    let color = srgb_u8_to_linear(color);
    let (l, r) = (rect.left(), rect.right());
    let (t, b) = (rect.top(), rect.bottom());

    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Build the frame's vertex list from every square, in creation order.
pub fn world_vertices(world: &World) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(world.squares.len() * 6);
    for square in &world.squares {
        vertices.extend_from_slice(&quad(&square.rect, square.color));
    }
    vertices
}
