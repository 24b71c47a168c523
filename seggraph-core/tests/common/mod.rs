use seggraph_core::{Color, PixelGrid};

pub const GREY: Color = Color::new(128, 128, 128);

pub fn uniform(height: usize, width: usize, color: Color) -> PixelGrid {
    PixelGrid::from_fn(height, width, |_, _| color).expect("valid uniform grid")
}

/// Four flat quadrants with strongly different colours.
#[must_use]
pub fn quadrants(height: usize, width: usize) -> PixelGrid {
    let palette = [
        Color::new(220, 30, 30),
        Color::new(30, 220, 30),
        Color::new(30, 30, 220),
        Color::new(240, 240, 240),
    ];
    PixelGrid::from_fn(height, width, |row, col| {
        let index = usize::from(row >= height / 2) * 2 + usize::from(col >= width / 2);
        palette[index]
    })
    .expect("valid quadrant grid")
}
