use serde::{Deserialize, Serialize};

/// A point in map coordinates. Cell `(x, y)` spans `[x, x + 1) × [y, y + 1)`,
/// so its center is at `(x + 0.5, y + 0.5)`.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Point2 { x, y }
    }

    /// Center of the cell at integer coordinates.
    pub fn cell_center(x: i32, y: i32) -> Self {
        Point2::new(x as f32 + 0.5, y as f32 + 0.5)
    }

    #[inline]
    pub fn floor(self) -> Self {
        Point2::new(self.x.floor(), self.y.floor())
    }

    /// Round both coordinates, halves to even.
    #[inline]
    pub fn rounded(self) -> Self {
        Point2::new(self.x.round_ties_even(), self.y.round_ties_even())
    }

    /// Integer coordinates of the cell containing this point.
    #[inline]
    pub fn cell(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Point2::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Unit-axis sign vector, following `copysign(1, v)` (zero counts as positive).
    pub fn axis_sign(v: f32) -> f32 {
        1.0f32.copysign(v)
    }
}

impl std::ops::Add for Point2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Add<(i32, i32)> for Point2 {
    type Output = Self;
    fn add(self, other: (i32, i32)) -> Self {
        Point2::new(self.x + other.0 as f32, self.y + other.1 as f32)
    }
}

impl std::ops::Sub for Point2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Point2 {
    type Output = Self;
    fn mul(self, scale: f32) -> Self {
        Point2::new(self.x * scale, self.y * scale)
    }
}

impl std::ops::Neg for Point2 {
    type Output = Self;
    fn neg(self) -> Self {
        Point2::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Point2 {
    fn from((x, y): (f32, f32)) -> Self {
        Point2::new(x, y)
    }
}

/// Axis-aligned rectangle anchored at its lower corner.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn centered(center: Point2, width: f32, height: f32) -> Self {
        Rectangle::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Integer cell ranges covered by this rectangle: a cell is inside iff its
    /// center lies in `[x, x + width) × [y, y + height)`.
    pub fn cell_ranges(&self) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        let x0 = (self.x - 0.5).ceil() as i32;
        let x1 = (self.x + self.width - 0.5).ceil() as i32;
        let y0 = (self.y - 0.5).ceil() as i32;
        let y1 = (self.y + self.height - 0.5).ceil() as i32;
        (x0..x1.max(x0), y0..y1.max(y0))
    }

    /// Iterate covered cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (xs, ys) = self.cell_ranges();
        ys.flat_map(move |y| xs.clone().map(move |x| (x, y)))
    }

    pub fn is_empty(&self) -> bool {
        let (xs, ys) = self.cell_ranges();
        xs.is_empty() || ys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_integer_footprint_covers_three_cells() {
        let rect = Rectangle::centered(Point2::new(10.5, 4.5), 3.0, 3.0);
        let cells: Vec<_> = rect.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], (9, 3));
        assert_eq!(cells[8], (11, 5));
    }

    #[test]
    fn integer_footprint_covers_cells_below_anchor() {
        let rect = Rectangle::centered(Point2::new(10.0, 4.0), 2.0, 2.0);
        let cells: Vec<_> = rect.cells().collect();
        assert_eq!(cells, vec![(9, 3), (10, 3), (9, 4), (10, 4)]);
    }

    #[test]
    fn zero_sized_rectangle_is_empty() {
        assert!(Rectangle::new(3.0, 3.0, 0.0, 2.0).is_empty());
        assert_eq!(Rectangle::new(3.0, 3.0, 0.0, 2.0).cells().count(), 0);
    }

    #[test]
    fn rounding_sends_halves_to_even() {
        assert_eq!(Point2::new(18.5, 27.5).rounded(), Point2::new(18.0, 28.0));
        assert_eq!(Point2::new(-2.5, 3.4).rounded(), Point2::new(-2.0, 3.0));
    }

    #[test]
    fn axis_sign_treats_zero_as_positive() {
        assert_eq!(Point2::axis_sign(0.0), 1.0);
        assert_eq!(Point2::axis_sign(-3.0), -1.0);
    }
}
