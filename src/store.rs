use crate::math::distance;
use crate::point::Point;
use log::debug;

/// Nearest stored point to a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Zero-based position in insertion order
    pub index: usize,
    pub point: Point,
    pub distance: f64,
}

/// User-placed points in screen space, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Empty store
    pub fn new() -> Self {
        PointStore { points: Vec::new() }
    }

    /// Number of stored points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at a zero-based index
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Points in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Appends a point; duplicates are kept
    pub fn add(&mut self, point: Point) {
        self.points.push(point);
        debug!("added point #{} at ({}, {})", self.points.len(), point.x, point.y);
    }

    /// Linear scan for the closest point. The earliest inserted point wins ties.
    pub fn nearest(&self, query: &Point) -> Option<Nearest> {
        let mut best: Option<Nearest> = None;
        for (index, point) in self.points.iter().enumerate() {
            let d = distance(point, query);
            // Strict comparison keeps the first of equally distant points
            if best.map_or(true, |b| d < b.distance) {
                best = Some(Nearest {
                    index,
                    point: *point,
                    distance: d,
                });
            }
        }
        best
    }

    /// Removes the point closest to `query` if it lies strictly within
    /// `threshold`. Returns whether a point was removed.
    pub fn remove_nearest_within(&mut self, query: &Point, threshold: f64) -> bool {
        match self.nearest(query) {
            Some(nearest) if nearest.distance < threshold => {
                self.points.remove(nearest.index);
                debug!(
                    "removed point #{} at ({}, {})",
                    nearest.index + 1,
                    nearest.point.x,
                    nearest.point.y
                );
                true
            }
            _ => false,
        }
    }

    /// Removes every point
    pub fn clear(&mut self) {
        debug!("cleared {} points", self.points.len());
        self.points.clear();
    }
}

impl FromIterator<Point> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointStore {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
