use std::fmt;

use super::GeometryError;

/// A raw pointer position in pixels, possibly inside a cell.
pub type Point = (f32, f32);

/// Discrete cell address. Both components are multiples of the cell size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a pixel offset
    pub const fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Neighbor directions in cell units. The order is fixed so that every
/// scan visits neighbors the same way.
const UNIT_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Geometry maps pointer positions onto the fixed, finite set of cells.
/// The grid does not wrap: neighbors past an edge are simply never alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Geometry {
    /// Build a geometry from pixel extents and a cell size
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, GeometryError> {
        if cell_size <= 0 {
            return Err(GeometryError::ZeroCellSize(cell_size));
        }
        if width <= 0 || height <= 0 {
            return Err(GeometryError::EmptyExtent { width, height });
        }
        if width % cell_size != 0 || height % cell_size != 0 {
            return Err(GeometryError::Misaligned { width, height, cell_size });
        }
        Ok(Self { width, height, cell_size })
    }

    /// Pixel extents of the grid
    pub const fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub const fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Number of cells along each axis
    pub const fn cells_per_axis(&self) -> (usize, usize) {
        (
            (self.width / self.cell_size) as usize,
            (self.height / self.cell_size) as usize,
        )
    }

    /// Total number of valid coordinates
    pub const fn cell_count(&self) -> usize {
        let (columns, rows) = self.cells_per_axis();
        columns * rows
    }

    /// Floor each axis down to the nearest multiple of the cell size
    pub fn quantize(&self, (px, py): Point) -> Coordinate {
        let snap = |v: f32| {
            let v = v.floor() as i32;
            v - v.rem_euclid(self.cell_size)
        };
        Coordinate::new(snap(px), snap(py))
    }

    /// True iff the coordinate is one of the enumerated grid cells
    pub const fn is_valid(&self, coord: Coordinate) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.x < self.width
            && coord.y < self.height
            && coord.x % self.cell_size == 0
            && coord.y % self.cell_size == 0
    }

    /// True iff a raw position falls inside the grid area
    pub fn contains(&self, point: Point) -> bool {
        self.is_valid(self.quantize(point))
    }

    /// The 8 neighbor offsets in pixels
    pub fn neighbor_offsets(&self) -> [(i32, i32); 8] {
        UNIT_OFFSETS.map(|(dx, dy)| (dx * self.cell_size, dy * self.cell_size))
    }

    /// The 8 coordinates around `coord`. Off-grid entries are kept as-is.
    pub fn neighbors_of(&self, coord: Coordinate) -> [Coordinate; 8] {
        self.neighbor_offsets().map(|offset| coord.offset(offset))
    }

    /// Every valid coordinate, column by column
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let step = self.cell_size as usize;
        (0..self.width)
            .step_by(step)
            .flat_map(move |x| (0..self.height).step_by(step).map(move |y| Coordinate::new(x, y)))
    }
}
