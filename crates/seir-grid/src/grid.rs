//! Multi-occupant lattice.
//!
//! # Layout
//!
//! Occupancy is a row-major `Vec<Vec<AgentId>>` (`y * width + x`); any number
//! of agents may share a cell.  Positions are kept in a second table indexed
//! by `AgentId` so "where is agent A" is O(1) and an absent entry means the
//! agent is not on the grid.  The two tables are only mutated together, by
//! [`Grid::place`], [`Grid::move_agent`] and [`Grid::remove`].

use seir_core::{AgentId, Cell};

use crate::{GridError, GridResult};

/// Moore offsets in column-major scan order.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A `width × height` lattice, bounded unless built as a torus.
#[derive(Debug, Clone)]
pub struct Grid {
    width:     u32,
    height:    u32,
    torus:     bool,
    cells:     Vec<Vec<AgentId>>,
    positions: Vec<Option<Cell>>,
}

impl Grid {
    /// Build an empty grid.  Zero-sized dimensions are rejected.
    pub fn new(width: u32, height: u32, torus: bool) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            torus,
            cells: vec![Vec::new(); width as usize * height as usize],
            positions: Vec::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_torus(&self) -> bool {
        self.torus
    }

    /// `true` if `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    // ── Occupancy queries ─────────────────────────────────────────────────

    /// Current cell of `agent`, or `None` if it was never placed or has been
    /// removed.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<Cell> {
        self.positions.get(agent.index()).copied().flatten()
    }

    /// Agents currently in `cell`.  Empty for out-of-bounds cells.
    pub fn agents_at(&self, cell: Cell) -> &[AgentId] {
        if !self.contains(cell) {
            return &[];
        }
        &self.cells[self.slot(cell)]
    }

    /// Number of agents currently on the grid.
    pub fn occupied_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put `agent` into `cell`.  An agent that is already placed is moved.
    pub fn place(&mut self, agent: AgentId, cell: Cell) -> GridResult<()> {
        self.check(cell)?;
        if self.position(agent).is_some() {
            self.detach(agent);
        }
        let slot = self.slot(cell);
        self.cells[slot].push(agent);
        if self.positions.len() <= agent.index() {
            self.positions.resize(agent.index() + 1, None);
        }
        self.positions[agent.index()] = Some(cell);
        Ok(())
    }

    /// Relocate a placed agent to `to`.
    ///
    /// Returns `Ok(false)` and does nothing if the agent is not on the grid.
    pub fn move_agent(&mut self, agent: AgentId, to: Cell) -> GridResult<bool> {
        self.check(to)?;
        if self.position(agent).is_none() {
            return Ok(false);
        }
        self.place(agent, to)?;
        Ok(true)
    }

    /// Take `agent` off the grid.  Idempotent: returns `false` if it was not
    /// placed, and its position is absent afterwards either way.
    pub fn remove(&mut self, agent: AgentId) -> bool {
        if self.position(agent).is_none() {
            return false;
        }
        self.detach(agent);
        self.positions[agent.index()] = None;
        true
    }

    // ── Neighbourhoods ────────────────────────────────────────────────────

    /// The distinct Moore-adjacent cells of `cell`, never `cell` itself.
    ///
    /// On a bounded grid, off-grid offsets are dropped (3 cells in a corner,
    /// 5 on an edge).  On a torus the offsets wrap; grids narrower than three
    /// cells would otherwise repeat cells, so duplicates are removed.
    pub fn neighbor_cells(&self, cell: Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(MOORE_OFFSETS.len());
        for (dx, dy) in MOORE_OFFSETS {
            let Some(next) = self.offset(cell, dx, dy) else {
                continue;
            };
            if next != cell && !out.contains(&next) {
                out.push(next);
            }
        }
        out
    }

    /// Agents in the Moore neighbourhood of `cell`, plus those in `cell`
    /// itself when `include_center` is set.
    pub fn neighbors(
        &self,
        cell:           Cell,
        include_center: bool,
    ) -> impl Iterator<Item = AgentId> + '_ {
        let mut cells = self.neighbor_cells(cell);
        if include_center && self.contains(cell) {
            cells.push(cell);
        }
        cells
            .into_iter()
            .flat_map(move |c| self.agents_at(c).iter().copied())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    fn slot(&self, cell: Cell) -> usize {
        cell.y as usize * self.width as usize + cell.x as usize
    }

    fn check(&self, cell: Cell) -> GridResult<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { cell, width: self.width, height: self.height })
        }
    }

    fn offset(&self, cell: Cell, dx: i64, dy: i64) -> Option<Cell> {
        let (w, h) = (self.width as i64, self.height as i64);
        let (mut x, mut y) = (cell.x as i64 + dx, cell.y as i64 + dy);
        if self.torus {
            x = x.rem_euclid(w);
            y = y.rem_euclid(h);
        } else if !(0..w).contains(&x) || !(0..h).contains(&y) {
            return None;
        }
        Some(Cell::new(x as u32, y as u32))
    }

    /// Remove `agent` from its occupancy list, leaving `positions` untouched.
    fn detach(&mut self, agent: AgentId) {
        let Some(cell) = self.position(agent) else {
            return;
        };
        let slot = self.slot(cell);
        let occupants = &mut self.cells[slot];
        if let Some(i) = occupants.iter().position(|&a| a == agent) {
            occupants.swap_remove(i);
        }
    }
}
