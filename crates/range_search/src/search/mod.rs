//! Branch-and-bound search over the range set.
//!
//! `tile` owns the cube geometry and its derived facts, `queue` the
//! frontier order, `driver` the pop-expand loop and the public entry
//! points.

pub mod driver;
pub mod queue;
pub mod tile;

pub use driver::{find_best_point, root_tile, search, SearchOutcome, SearchStats};
pub use queue::{Frontier, SearchKey};
pub use tile::Tile;
