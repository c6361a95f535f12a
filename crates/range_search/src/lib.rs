//! range_search - Best-covered lattice point search for L1 range swarms
//!
//! This crate locates the integer lattice point covered by the most
//! Manhattan-distance ranges, breaking ties toward the origin. The search
//! runs branch-and-bound over an octree of cubic tiles driven by a
//! priority queue, so it never scans the coordinate space point by point.
//!
//! # Features
//!
//! - **Exact integer geometry**: every quantity is `i64` end to end; no
//!   floating point anywhere in the pipeline
//! - **Best-first octree search**: tile counts upper-bound point coverage,
//!   so the first unit tile popped is already the optimum
//! - **Deterministic ordering**: a four-level priority key makes pop
//!   sequences identical across runs
//! - **Swarm parsing**: newline-separated `pos=<x,y,z>, r=R` records
//! - **Parallel counting**: rayon accelerates box-intersection counts on
//!   large sets
//!
//! # Example
//!
//! ```
//! use glam::I64Vec3;
//! use range_search::{find_best_point, Range};
//!
//! let ranges = vec![
//!   Range::new(I64Vec3::new(10, 12, 12), 2),
//!   Range::new(I64Vec3::new(12, 14, 12), 2),
//!   Range::new(I64Vec3::new(16, 12, 12), 4),
//!   Range::new(I64Vec3::new(14, 14, 14), 6),
//!   Range::new(I64Vec3::new(50, 50, 50), 200),
//!   Range::new(I64Vec3::new(10, 10, 10), 5),
//! ];
//!
//! let outcome = find_best_point(ranges)?;
//! assert_eq!(outcome.point, I64Vec3::new(12, 12, 12));
//! assert_eq!(outcome.count, 5);
//! assert_eq!(outcome.distance, 36);
//! # Ok::<(), range_search::InputError>(())
//! ```

pub mod error;
pub mod parse;
pub mod range;

// Re-export commonly used items
pub use error::{InputError, ParseError};
pub use parse::parse_ranges;
pub use range::{manhattan, Range, RangeSet, PARALLEL_CUTOVER};

// Best-first octree search
pub mod search;
pub use search::{find_best_point, root_tile, search, Frontier, SearchOutcome, SearchStats, Tile};
