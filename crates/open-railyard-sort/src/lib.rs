//! # OpenRailyard sorting core
//!
//! LIFO classification for a two-direction shunting yard: wagons arrive
//! as `TAG-NUMBER` text lines, are stacked on an inbound track, then
//! popped one at a time and pushed onto the outbound track for their
//! direction.
//!
//! ## Features
//!
//! - **Generic LIFO stack** — `pop`/`peek` return `Option`, never panic
//! - **Strict token parsing** — `TAG-NUMBER` with typed rejection reasons
//! - **Lenient batch loading** — blank and rejected lines are dropped,
//!   valid wagons keep their order
//! - **Load → Sort → Report yard** — caller-driven phases over one
//!   inbound and two outbound tracks
//! - **Reversal ordering** — draining LIFO into LIFO leaves each
//!   direction's wagons in reverse consist order
//!
//! ## Example
//!
//! ```rust
//! use open_railyard_sort::SortingYard;
//!
//! let mut yard = SortingYard::new();
//! let loaded = yard.load(["A-1", "B-1", "A-2"]);
//! assert_eq!(loaded, 3);
//! assert_eq!(yard.sort(), 3);
//! assert_eq!(yard.report().total(), 3);
//! ```

pub mod consist;
pub mod error;
pub mod report;
pub mod stack;
pub mod wagon;
pub mod yard;

pub use consist::parse_consist;
pub use error::TokenError;
pub use report::{TrackReport, YardReport};
pub use stack::Stack;
pub use wagon::{Direction, Wagon};
pub use yard::SortingYard;

/// Convenience result type for token parsing operations.
pub type Result<T> = std::result::Result<T, TokenError>;
