//! Report data for a sorted yard, kept separate from rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wagon::{Direction, Wagon};

/// Contents of one outbound track at reporting time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackReport {
    /// The direction this track serves.
    pub direction: Direction,
    /// Wagons on the track in snapshot order: first routed first, most
    /// recently routed last.
    pub wagons: Vec<Wagon>,
}

impl TrackReport {
    /// Number of wagons on the track.
    pub fn len(&self) -> usize {
        self.wagons.len()
    }

    /// Returns `true` if the track holds no wagons.
    pub fn is_empty(&self) -> bool {
        self.wagons.is_empty()
    }
}

/// Per-direction view of the yard's outbound tracks.
///
/// Pure data. Rendering is layered on top: the `Display` impl below
/// gives the common console form, and the serde derives cover
/// machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardReport {
    /// One entry per direction, in [`Direction::ALL`] order.
    pub tracks: Vec<TrackReport>,
}

impl YardReport {
    /// Total number of wagons across all tracks.
    pub fn total(&self) -> usize {
        self.tracks.iter().map(TrackReport::len).sum()
    }

    /// The entry for one direction, if the report carries it.
    pub fn track(&self, direction: Direction) -> Option<&TrackReport> {
        self.tracks.iter().find(|t| t.direction == direction)
    }
}

impl fmt::Display for YardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, track) in self.tracks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let noun = if track.len() == 1 { "wagon" } else { "wagons" };
            write!(f, "Direction {}: {} {}", track.direction, track.len(), noun)?;
            if !track.is_empty() {
                let list: Vec<String> = track.wagons.iter().map(|w| w.to_string()).collect();
                write!(f, "\n  {}", list.join(", "))?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yard::SortingYard;

    fn sample_report() -> YardReport {
        let mut yard = SortingYard::new();
        yard.load(["A-1", "B-1", "A-2"]);
        yard.sort();
        yard.report()
    }

    #[test]
    fn total_sums_every_track() {
        let report = sample_report();
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn track_lookup_by_direction() {
        let report = sample_report();
        assert_eq!(report.track(Direction::A).unwrap().len(), 2);
        assert_eq!(report.track(Direction::B).unwrap().len(), 1);
    }

    #[test]
    fn display_lists_each_direction() {
        let text = sample_report().to_string();
        assert_eq!(
            text,
            "Direction A: 2 wagons\n  A-2, A-1\nDirection B: 1 wagon\n  B-1"
        );
    }

    #[test]
    fn display_of_empty_yard_has_no_wagon_lists() {
        let report = SortingYard::new().report();
        assert_eq!(
            report.to_string(),
            "Direction A: 0 wagons\nDirection B: 0 wagons"
        );
    }

    #[test]
    fn report_serializes_to_json() {
        let value = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(value["tracks"][0]["direction"], "A");
        assert_eq!(value["tracks"][0]["wagons"][0]["number"], 2);
        assert_eq!(value["tracks"][1]["wagons"][0]["direction"], "B");
    }

    #[test]
    fn report_deserializes_back() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: YardReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
