use super::Point;

/// Pixel size of the drawing surface as reported by the host
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Board dimensions in cells
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Derive dimensions from canvas pixels: `max(min_cells, pixels / cell_size)` per axis
    pub fn from_canvas(canvas: CanvasSize, cell_size: u32, min_cells: u32) -> Self {
        let cells = |pixels: f32| {
            let fitted = (pixels.max(0.0) / cell_size as f32).floor() as i32;
            fitted.max(min_cells as i32)
        };
        Self::new(cells(canvas.width), cells(canvas.height))
    }

    /// Zero or negative dimensions cannot host food
    pub const fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[cfg(test)]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    pub const fn cell_count(&self) -> usize {
        if self.is_degenerate() {
            0
        } else {
            self.width as usize * self.height as usize
        }
    }

    pub const fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}
