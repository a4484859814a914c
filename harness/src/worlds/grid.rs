//! `GridWorld`: weighted grid pathfinding.
//!
//! Moving into a cell costs that cell's weight; the start cell is free unless
//! [`GridWorld::charging_start`] is set. Moves are orthogonal.
//!
//! The grid can be repeated `tiles` times in each direction. A tile `d` steps
//! away (right plus down) adds `d` to every weight, wrapping 9 back to 1.

use advent_kernel::grid::{Grid, Point};
use advent_search::contract::{SearchState, SearchWorld};

/// Position plus accumulated weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStep {
    pub point: Point,
    pub cost: u64,
}

impl SearchState for GridStep {
    type Fingerprint = Point;

    fn cost(&self) -> u64 {
        self.cost
    }

    fn fingerprint(&self) -> Point {
        self.point
    }
}

/// Search world over a digit-weighted grid.
#[derive(Debug, Clone)]
pub struct GridWorld {
    grid: Grid<u8>,
    tiles: u32,
    target: Point,
    charge_start: bool,
}

impl GridWorld {
    /// Single-tile world targeting the bottom-right cell.
    #[must_use]
    pub fn new(grid: Grid<u8>) -> Self {
        let target = grid.bottom_right();
        Self {
            grid,
            tiles: 1,
            target,
            charge_start: false,
        }
    }

    /// Repeat the grid `tiles` times in each direction and retarget the
    /// bottom-right cell of the enlarged map. `tiles` below 1 is treated as 1.
    #[must_use]
    pub fn tiled(mut self, tiles: u32) -> Self {
        self.tiles = tiles.max(1);
        let (width, height) = self.extent();
        self.target = Point::new(width - 1, height - 1);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Point) -> Self {
        self.target = target;
        self
    }

    /// Count the start cell's own weight in the initial cost.
    #[must_use]
    pub fn charging_start(mut self) -> Self {
        self.charge_start = true;
        self
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Width and height of the (possibly tiled) map.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn extent(&self) -> (i64, i64) {
        let tiles = i64::from(self.tiles);
        (
            self.grid.width() as i64 * tiles,
            self.grid.height() as i64 * tiles,
        )
    }

    /// Weight of entering `point`, or `None` off the map.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn weight(&self, point: &Point) -> Option<u64> {
        let (width, height) = self.extent();
        if point.x < 0 || point.y < 0 || point.x >= width || point.y >= height {
            return None;
        }
        let tile_w = self.grid.width() as i64;
        let tile_h = self.grid.height() as i64;
        let base = Point::new(point.x % tile_w, point.y % tile_h);
        let distance = (point.x / tile_w + point.y / tile_h) as u64;
        let weight = u64::from(*self.grid.get(&base)?) + distance;
        Some(if weight > 9 { (weight - 1) % 9 + 1 } else { weight })
    }

    /// Initial state at `start`, or `None` if `start` is off the map.
    #[must_use]
    pub fn start_at(&self, start: Point) -> Option<GridStep> {
        let weight = self.weight(&start)?;
        Some(GridStep {
            point: start,
            cost: if self.charge_start { weight } else { 0 },
        })
    }

    /// Initial state at the top-left corner.
    #[must_use]
    pub fn start(&self) -> GridStep {
        let origin = Point::default();
        let cost = if self.charge_start {
            self.weight(&origin).unwrap_or(0)
        } else {
            0
        };
        GridStep {
            point: origin,
            cost,
        }
    }
}

impl SearchWorld for GridWorld {
    type State = GridStep;

    fn is_goal(&self, state: &GridStep) -> bool {
        state.point == self.target
    }

    fn successors(&self, state: &GridStep) -> Vec<GridStep> {
        state
            .point
            .neighbors()
            .into_iter()
            .filter_map(|point| {
                self.weight(&point).map(|w| GridStep {
                    point,
                    cost: state.cost.saturating_add(w),
                })
            })
            .collect()
    }
}
