use crate::math::{interval_sq, CoordinateMapper, Mode, Viewport};
use crate::point::Point;
use crate::report::{DisplayInfo, IntervalReport, Measure, TableRow};
use crate::store::PointStore;
use log::trace;

/// Computes distances and intervals for stored points under one mode and
/// viewport
#[derive(Debug, Clone, Copy)]
pub struct InvariantEngine {
    mode: Mode,
    mapper: CoordinateMapper,
}

impl InvariantEngine {
    pub fn new(mode: Mode, viewport: &Viewport) -> Self {
        InvariantEngine {
            mode,
            mapper: CoordinateMapper::new(viewport),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// s², t and x of a screen point relative to the viewport center
    pub fn interval(&self, point: &Point) -> IntervalReport {
        let s = self.mapper.to_spacetime(point);
        IntervalReport {
            s2: interval_sq(&s),
            t: s.t,
            x: s.x,
        }
    }

    /// Report for `query`: the nearest stored point with its distance or
    /// interval. Without a query, Minkowski mode lists every point instead.
    pub fn report(&self, store: &PointStore, query: Option<&Point>) -> DisplayInfo {
        let info = match (query, self.mode) {
            (Some(query), mode) => match store.nearest(query) {
                None => DisplayInfo::NoPoints,
                Some(nearest) => DisplayInfo::Nearest {
                    index: nearest.index + 1,
                    point: nearest.point,
                    measure: match mode {
                        Mode::Euclidean => Measure::Distance(nearest.distance),
                        Mode::Minkowski => Measure::Interval(self.interval(&nearest.point)),
                    },
                },
            },
            (None, Mode::Euclidean) => DisplayInfo::Idle,
            (None, Mode::Minkowski) if store.is_empty() => DisplayInfo::NoPoints,
            (None, Mode::Minkowski) => DisplayInfo::Table(self.table(store)),
        };
        trace!("{} report: {info:?}", self.mode);
        info
    }

    /// Interval of every stored point, in insertion order
    pub fn table(&self, store: &PointStore) -> Vec<TableRow> {
        store
            .iter()
            .enumerate()
            .map(|(i, point)| TableRow {
                index: i + 1,
                interval: self.interval(point),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "invariant_test.rs"]
mod tests;
