use veer_core::{Bounds, Cell, Grid};

/// Passability interface the search engine runs over.
pub trait Terrain {
    /// Dimensions of the area; cost tables are sized from this.
    fn bounds(&self) -> Bounds;

    /// Whether an agent may stand on `cell`. Must be `false` outside
    /// [`bounds`](Self::bounds).
    fn is_open(&self, cell: Cell) -> bool;
}

impl Terrain for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        Grid::bounds(self)
    }

    #[inline]
    fn is_open(&self, cell: Cell) -> bool {
        Grid::is_open(self, cell)
    }
}
