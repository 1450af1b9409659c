//! Rook ray directions.

use crate::moves::sliding_rays::Direction;

/// North, south, east, west.
pub const ROOK_DIRECTIONS: [Direction; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
