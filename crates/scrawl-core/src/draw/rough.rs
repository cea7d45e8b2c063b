//! Hand-drawn stroke generation.
//!
//! [`RoughGenerator`] produces SVG path data that imitates a pen sketch: each
//! line is drawn as two slightly diverging Bézier passes whose end and control
//! points wander by an amount scaled by the roughness and the stroke length.
//! Ellipses become wobbly closed curves and box fills become hachure strokes.
//!
//! The generator owns a seeded [`StdRng`], so the same sequence of calls with
//! the same seed always yields the same path data.

use std::f32::consts::TAU;

use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::geometry::{Bounds, Point};

/// Number of sample points on a rough ellipse.
const ELLIPSE_STEPS: usize = 9;

/// Seeded generator for sketch-style SVG path data.
///
/// # Examples
///
/// ```
/// # use scrawl_core::draw::RoughGenerator;
/// # use scrawl_core::geometry::Point;
/// let mut first = RoughGenerator::new(42, 1.5);
/// let mut second = RoughGenerator::new(42, 1.5);
///
/// let from = Point::new(0.0, 0.0);
/// let to = Point::new(40.0, 0.0);
/// assert_eq!(first.line(from, to), second.line(from, to));
/// ```
#[derive(Debug, Clone)]
pub struct RoughGenerator {
    rng: StdRng,
    roughness: f32,
}

impl RoughGenerator {
    /// Creates a generator. Negative or non-finite roughness is treated as `0.0`.
    pub fn new(seed: u64, roughness: f32) -> Self {
        let roughness = if roughness.is_finite() {
            roughness.max(0.0)
        } else {
            0.0
        };
        trace!(seed, roughness; "Seeding rough generator");

        Self {
            rng: StdRng::seed_from_u64(seed),
            roughness,
        }
    }

    /// Returns the roughness in use.
    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    /// Path data for a hand-drawn line from `from` to `to`.
    ///
    /// With zero roughness this is a single straight segment.
    pub fn line(&mut self, from: Point, to: Point) -> String {
        if self.roughness == 0.0 {
            return format!("M {} L {}", fmt_point(from), fmt_point(to));
        }

        let spread = self.spread(from.distance(to));
        let first = self.pass(from, to, spread);
        let second = self.pass(from, to, spread * 0.75);
        format!("{first} {second}")
    }

    /// Path data for the outline of a box, as four rough lines.
    pub fn rectangle(&mut self, bounds: Bounds) -> String {
        let top_left = bounds.min_point();
        let top_right = Point::new(bounds.max_x(), bounds.min_y());
        let bottom_right = bounds.max_point();
        let bottom_left = Point::new(bounds.min_x(), bounds.max_y());

        [
            self.line(top_left, top_right),
            self.line(top_right, bottom_right),
            self.line(bottom_right, bottom_left),
            self.line(bottom_left, top_left),
        ]
        .join(" ")
    }

    /// Path data for a closed, slightly irregular ellipse.
    pub fn ellipse(&mut self, center: Point, width: f32, height: f32) -> String {
        let rx = width / 2.0;
        let ry = height / 2.0;

        if self.roughness == 0.0 {
            let left = Point::new(center.x() - rx, center.y());
            let right = Point::new(center.x() + rx, center.y());
            return format!(
                "M {left} A {rx:.2} {ry:.2} 0 1 0 {right} A {rx:.2} {ry:.2} 0 1 0 {left} Z",
                left = fmt_point(left),
                right = fmt_point(right),
            );
        }

        let start_angle = self.jitter(TAU / ELLIPSE_STEPS as f32);
        let wobble = 0.08 * self.roughness;
        let points: Vec<Point> = (0..ELLIPSE_STEPS)
            .map(|step| {
                let angle = start_angle + TAU * step as f32 / ELLIPSE_STEPS as f32;
                let scale = 1.0 + self.jitter(wobble);
                Point::new(
                    center.x() + rx * scale * angle.cos(),
                    center.y() + ry * scale * angle.sin(),
                )
            })
            .collect();

        smooth_closed_path(&points)
    }

    /// Path data for a hachure fill of `bounds`, one rough line per hachure segment.
    pub fn hachure(&mut self, bounds: Bounds, gap: f32) -> String {
        hachure_segments(bounds, gap)
            .into_iter()
            .map(|(from, to)| self.line(from, to))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Maximum offset for a stroke of the given length.
    ///
    /// Short strokes wobble less than long ones.
    fn spread(&self, length: f32) -> f32 {
        self.roughness * (length / 20.0).clamp(0.25, 1.5)
    }

    fn jitter(&mut self, spread: f32) -> f32 {
        if spread > 0.0 && spread.is_finite() {
            self.rng.random_range(-spread..spread)
        } else {
            0.0
        }
    }

    fn jitter_point(&mut self, point: Point, spread: f32) -> Point {
        let dx = self.jitter(spread);
        let dy = self.jitter(spread);
        point.add_point(Point::new(dx, dy))
    }

    /// One pass of a rough line: a cubic Bézier with wandering end points
    /// and control points near the thirds of the segment.
    fn pass(&mut self, from: Point, to: Point, spread: f32) -> String {
        let start = self.jitter_point(from, spread);
        let end = self.jitter_point(to, spread);
        let control1 = self.jitter_point(start.lerp(end, 1.0 / 3.0), spread);
        let control2 = self.jitter_point(start.lerp(end, 2.0 / 3.0), spread);

        format!(
            "M {} C {} {} {}",
            fmt_point(start),
            fmt_point(control1),
            fmt_point(control2),
            fmt_point(end)
        )
    }
}

/// Segments of a 45° hachure clipped to `bounds`, spaced `gap` apart.
///
/// The strokes rise from bottom-left to top-right. A non-positive gap yields
/// no segments.
///
/// # Examples
///
/// ```
/// # use scrawl_core::draw::hachure_segments;
/// # use scrawl_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(20.0, 10.0));
/// let segments = hachure_segments(bounds, 4.0);
/// assert_eq!(segments.len(), 7);
/// ```
pub fn hachure_segments(bounds: Bounds, gap: f32) -> Vec<(Point, Point)> {
    if gap.is_nan() || gap <= 0.0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Vec::new();
    }

    // Each stroke lies on x + y = c
    let first = bounds.min_x() + bounds.min_y();
    let last = bounds.max_x() + bounds.max_y();
    let count = ((last - first) / gap).ceil() as usize;

    (1..count)
        .filter_map(|step| {
            let c = first + gap * step as f32;
            let start_x = bounds.min_x().max(c - bounds.max_y());
            let end_x = bounds.max_x().min(c - bounds.min_y());
            (end_x > start_x).then(|| {
                (
                    Point::new(start_x, c - start_x),
                    Point::new(end_x, c - end_x),
                )
            })
        })
        .collect()
}

/// Closed curve through `points`, using each point as the control of a
/// quadratic segment between neighbouring midpoints.
fn smooth_closed_path(points: &[Point]) -> String {
    let Some(&last) = points.last() else {
        return String::new();
    };

    let mut data = format!("M {}", fmt_point(last.midpoint(points[0])));
    for (index, &point) in points.iter().enumerate() {
        let next = points[(index + 1) % points.len()];
        data.push_str(&format!(
            " Q {} {}",
            fmt_point(point),
            fmt_point(point.midpoint(next))
        ));
    }
    data.push_str(" Z");
    data
}

fn fmt_point(point: Point) -> String {
    format!("{:.2} {:.2}", point.x(), point.y())
}
