use thiserror::Error;

/// Errors raised while building a grid geometry from its constants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Cell size must be a positive number of pixels.
    #[error("cell size must be positive, got {0}")]
    ZeroCellSize(i32),

    /// Grid extents must be positive.
    #[error("grid extent must be positive, got {width}x{height}")]
    EmptyExtent { width: i32, height: i32 },

    /// Grid extents must be whole multiples of the cell size.
    #[error("grid extent {width}x{height} is not divisible by cell size {cell_size}")]
    Misaligned {
        width: i32,
        height: i32,
        cell_size: i32,
    },
}
