use ggez::glam::Vec2;

/// y = a * x^2 + b * x + c
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    /// Parabola with its vertex at `vertex` that also passes through `point`.
    /// `point.x` must differ from `vertex.x`.
    pub fn through_vertex(vertex: Vec2, point: Vec2) -> Self {
        let (vertex_x, vertex_y) = (vertex.x as f64, vertex.y as f64);
        let dx = point.x as f64 - vertex_x;
        let a = (point.y as f64 - vertex_y) / (dx * dx);
        let b = -2.0 * a * vertex_x;
        let c = vertex_y - a * vertex_x * vertex_x - b * vertex_x;
        Self { a, b, c }
    }

    /// Fit that places a construction vertex at the horizontal midpoint and bows
    /// the curve by an amount proportional to the horizontal span. The curve's
    /// real vertex sits on `start`, and the end height is moved onto the curve
    /// rather than honoured: the adjusted end y is returned alongside.
    ///
    /// Requires `start.x != end.x` and `start.y != end.y`.
    pub fn vertex_midpoint(start: Vec2, end: Vec2) -> (Self, f64) {
        let (start_x, start_y) = (start.x as f64, start.y as f64);
        let (end_x, end_y) = (end.x as f64, end.y as f64);
        let span = start_x - end_x;
        let height = end_y - span * span / (4.0 * (start_y - end_y));

        let vertex_x = (start_x + end_x) / 2.0;
        let vertex_y = (start_y + end_y) / 2.0
            + (vertex_x - start_x) * (vertex_x - end_x) / (4.0 * height - 2.0 * start_y - 2.0 * end_y);

        let adjusted_end_y = 2.0 * vertex_y - start_y;

        let a = (vertex_y - start_y) / ((vertex_x - start_x) * (vertex_x - start_x));
        let b = -2.0 * a * start_x;
        let c = start_y - a * start_x * start_x - b * start_x;

        (Self { a, b, c }, adjusted_end_y)
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }
}
