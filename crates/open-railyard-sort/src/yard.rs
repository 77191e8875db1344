//! The sorting yard — load, sort, and report over LIFO tracks.

use tracing::{debug, info};

use crate::consist::parse_consist;
use crate::report::{TrackReport, YardReport};
use crate::stack::Stack;
use crate::wagon::{Direction, Wagon};

/// A classification yard with one inbound track and one outbound track
/// per [`Direction`].
///
/// The phases are caller-driven: [`load`](SortingYard::load) fills the
/// inbound track, [`sort`](SortingYard::sort) drains it onto the
/// outbound tracks, [`report`](SortingYard::report) reads the result.
/// Both the inbound track and each outbound track are LIFO, so a full
/// pass leaves each direction's wagons in reverse of the order they
/// appeared in the consist.
#[derive(Debug, Default)]
pub struct SortingYard {
    /// Wagons awaiting classification, last loaded on top.
    inbound: Stack<Wagon>,
    /// Outbound track for direction A.
    track_a: Stack<Wagon>,
    /// Outbound track for direction B.
    track_b: Stack<Wagon>,
}

impl SortingYard {
    /// Create an empty yard.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Load
    // -----------------------------------------------------------------------

    /// Load a consist onto the inbound track.
    ///
    /// Whatever was previously inbound is cleared. The lines are parsed
    /// leniently (see [`parse_consist`]) and each wagon is pushed in
    /// parse order, so the last valid line ends up on top. Returns the
    /// number of wagons loaded. Outbound tracks are left untouched;
    /// call [`reset`](SortingYard::reset) to start the whole yard over.
    pub fn load<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inbound = parse_consist(lines).into_iter().collect();
        let count = self.inbound.len();
        info!(count, "Consist loaded");
        count
    }

    // -----------------------------------------------------------------------
    // Sort
    // -----------------------------------------------------------------------

    /// Drain the inbound track, pushing each wagon onto the outbound
    /// track for its direction. Returns the number of wagons routed.
    ///
    /// Wagons are popped in LIFO order, so within each direction the
    /// outbound track ends up holding that direction's wagons in exact
    /// reverse of their consist order. Calling `sort` again without a
    /// fresh load drains nothing and returns 0.
    pub fn sort(&mut self) -> usize {
        let mut routed = 0;
        while let Some(wagon) = self.inbound.pop() {
            debug!(wagon = %wagon, direction = %wagon.direction, "Routing wagon");
            self.track_mut(wagon.direction).push(wagon);
            routed += 1;
        }
        info!(routed, "Yard sorted");
        routed
    }

    // -----------------------------------------------------------------------
    // Report and inspection
    // -----------------------------------------------------------------------

    /// Current contents of every outbound track, in snapshot order,
    /// without mutating the yard.
    pub fn report(&self) -> YardReport {
        YardReport {
            tracks: Direction::ALL
                .iter()
                .map(|&direction| TrackReport {
                    direction,
                    wagons: self.track(direction).snapshot(),
                })
                .collect(),
        }
    }

    /// Number of wagons still awaiting classification.
    pub fn pending(&self) -> usize {
        self.inbound.len()
    }

    /// The outbound track for a direction.
    pub fn track(&self, direction: Direction) -> &Stack<Wagon> {
        match direction {
            Direction::A => &self.track_a,
            Direction::B => &self.track_b,
        }
    }

    fn track_mut(&mut self, direction: Direction) -> &mut Stack<Wagon> {
        match direction {
            Direction::A => &mut self.track_a,
            Direction::B => &mut self.track_b,
        }
    }

    /// Clear the inbound track and every outbound track.
    pub fn reset(&mut self) {
        self.inbound.clear();
        self.track_a.clear();
        self.track_b.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
