use std::fmt::{Display, Formatter};

/// Errors that can occur when building or reducing a linear system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinearSystemError {
    /// Two vectors, planes or rows of different dimension were combined.
    DimensionMismatch { expected: usize, found: usize },
    /// A vector or system was built from an empty collection.
    EmptyInput,
    /// The zero vector cannot be normalized and has no angle.
    ZeroVector,
    /// The operation is only defined in a specific dimension.
    UnsupportedDimension { required: usize, found: usize },
    RowOutOfBounds { row: usize, rows: usize },
    /// A row was scaled by a (near-)zero coefficient.
    ZeroScaling,
    DivisionByZero,
    ParameterCountMismatch { expected: usize, found: usize },
    Parse(String),
}

impl Display for LinearSystemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LinearSystemError::DimensionMismatch { expected, found } => write!(
                f,
                "All planes and vectors should live in the same dimension: expected {}, found {}",
                expected, found
            ),
            LinearSystemError::EmptyInput => write!(f, "The coordinates must be nonempty"),
            LinearSystemError::ZeroVector => {
                write!(f, "Cannot normalize or compute an angle with the zero vector")
            }
            LinearSystemError::UnsupportedDimension { required, found } => write!(
                f,
                "Vectors must have {} dimensions instead of {}",
                required, found
            ),
            LinearSystemError::RowOutOfBounds { row, rows } => {
                write!(f, "Row {} is out of bounds for a system of {} rows", row, rows)
            }
            LinearSystemError::ZeroScaling => write!(f, "Cannot scale a row by zero"),
            LinearSystemError::DivisionByZero => write!(f, "Division by zero"),
            LinearSystemError::ParameterCountMismatch { expected, found } => write!(
                f,
                "Expected {} parameters, but {} were supplied",
                expected, found
            ),
            LinearSystemError::Parse(s) => write!(f, "Cannot parse '{}' as a number", s),
        }
    }
}

impl std::error::Error for LinearSystemError {}
