//! Square tri-state cell grid backing the land/water map.
//!
//! Cells are `Water`, `Land`, or `Visited`. `Visited` only appears while
//! islands are being counted: it marks land already attributed to a counted
//! island and still reads as land to the exporter.

/// State of a single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Water,
    Land,
    /// Land that the island counter has already claimed.
    Visited,
}

impl CellState {
    /// Land and counted-land are both land as far as rendering is concerned.
    pub fn is_land(self) -> bool {
        matches!(self, CellState::Land | CellState::Visited)
    }
}

/// A size × size grid of cell states, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    data: Vec<CellState>,
}

impl Grid {
    pub fn new_with(size: usize, value: CellState) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }

    /// Build a grid from a row-major cell vector.
    pub fn from_vec(size: usize, data: Vec<CellState>) -> Self {
        assert_eq!(data.len(), size * size, "cell vector must be size * size");
        Self { size, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: CellState) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Get 4-connected neighbors (up, down, left, right). Edges don't wrap.
    pub fn neighbors(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(4);

        if x > 0 {
            result.push((x - 1, y));
        }
        if x < self.size - 1 {
            result.push((x + 1, y));
        }
        if y > 0 {
            result.push((x, y - 1));
        }
        if y < self.size - 1 {
            result.push((x, y + 1));
        }

        result
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.data.iter().enumerate().map(move |(idx, &cell)| {
            let x = idx % self.size;
            let y = idx / self.size;
            (x, y, cell)
        })
    }

    /// Number of cells currently reading as land (`Land` or `Visited`).
    pub fn land_cell_count(&self) -> usize {
        self.data.iter().filter(|c| c.is_land()).count()
    }

    /// Row-major access to the raw cell storage, used by the parallel
    /// generation loop to fill disjoint rows from separate threads.
    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.data
    }
}
