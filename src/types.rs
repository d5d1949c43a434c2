//! Types specific to panel-added-mass

/// Error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The pipeline received a mesh without panels
    #[error("Mesh contains no panels")]
    EmptyMesh,
    /// The influence matrix cannot be factorised
    #[error("Influence matrix is singular (pivot {pivot})")]
    SingularMatrix {
        /// Column at which elimination broke down
        pivot: usize,
    },
    /// The linear system contains NaN or infinite coefficients
    #[error("Non-finite coefficient in linear system at ({row}, {col})")]
    NonFiniteSystem {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
    },
    /// The right-hand side contains NaN or infinite entries
    #[error("Non-finite right-hand side entry at row {row}")]
    NonFiniteRhs {
        /// Row of the offending entry
        row: usize,
    },
    /// Array shapes do not agree
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected size
        expected: usize,
        /// Actual size
        got: usize,
    },
    /// A mesh file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A mesh file header could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Description of the problem
        message: String,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Dense 2D array used for the influence matrix
pub type DenseMatrix = rlst::DynamicArray<f64, 2>;

/// Dense 1D array used for the right-hand side and the solution
pub type DenseVector = rlst::DynamicArray<f64, 1>;
