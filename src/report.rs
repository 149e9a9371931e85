use crate::math::Separation;
use crate::point::Point;
use std::fmt;

/// Minkowski interval of a point from the origin, with its components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalReport {
    pub s2: f64,
    pub t: f64,
    pub x: f64,
}

impl IntervalReport {
    pub fn separation(&self) -> Separation {
        Separation::classify(self.s2)
    }
}

/// Scalar shown for the nearest point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// Distance from the query point, in pixels
    Distance(f64),
    Interval(IntervalReport),
}

/// One line of the invariant table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// 1-based
    pub index: usize,
    pub interval: IntervalReport,
}

/// Text-ready result of a query against the point store
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayInfo {
    /// Nothing to report
    Idle,
    NoPoints,
    Nearest {
        /// 1-based
        index: usize,
        point: Point,
        measure: Measure,
    },
    Table(Vec<TableRow>),
}

impl DisplayInfo {
    /// Lines as they should be displayed
    pub fn lines(&self) -> Vec<String> {
        let text = self.to_string();
        if text.is_empty() {
            Vec::new()
        } else {
            text.lines().map(str::to_owned).collect()
        }
    }
}

impl fmt::Display for DisplayInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayInfo::Idle => Ok(()),
            DisplayInfo::NoPoints => f.write_str("No points"),
            DisplayInfo::Nearest {
                point,
                measure: Measure::Distance(d),
                ..
            } => write!(
                f,
                "Nearest point: ({:.0}, {:.0}), distance = {:.2}",
                point.x, point.y, d
            ),
            DisplayInfo::Nearest {
                index,
                measure: Measure::Interval(interval),
                ..
            } => write!(
                f,
                "Point #{}: s^2 = {:.2} (t={:.1}, x={:.1})",
                index, interval.s2, interval.t, interval.x
            ),
            DisplayInfo::Table(rows) => {
                f.write_str("Invariant table (s^2 = t^2 - x^2):")?;
                for row in rows {
                    write!(
                        f,
                        "\n#{}: s^2={:.1} (t={:.1}, x={:.1})",
                        row.index, row.interval.s2, row.interval.t, row.interval.x
                    )?;
                }
                Ok(())
            }
        }
    }
}
