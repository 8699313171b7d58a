//! Solver configuration.

use crate::domains::number::ExactNumber;

/// How [compute_triangular_form](crate::linear_system::LinearSystem::compute_triangular_form)
/// advances when a column has no usable pivot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PivotStrategy {
    /// The row and column index advance together, even when a column has
    /// no pivot. A row that is skipped this way is not revisited, so systems
    /// with a free variable before the last pivot may end up with two rows
    /// sharing a pivot column.
    #[default]
    Lockstep,
    /// Only the column advances when it has no pivot, so that the current row
    /// can still take a pivot from a later column. This always yields a proper
    /// echelon form.
    SkipFreeColumns,
}

/// Settings that control the elimination.
#[derive(Clone, PartialEq, Debug)]
pub struct SolverSettings {
    /// Numbers with an absolute value below `epsilon` are treated as zero.
    pub epsilon: ExactNumber,
    pub pivot_strategy: PivotStrategy,
}

impl SolverSettings {
    pub fn new() -> SolverSettings {
        SolverSettings {
            epsilon: ExactNumber::epsilon(),
            pivot_strategy: PivotStrategy::Lockstep,
        }
    }

    /// Settings that always produce a proper row echelon form.
    pub fn skip_free_columns() -> SolverSettings {
        SolverSettings {
            pivot_strategy: PivotStrategy::SkipFreeColumns,
            ..SolverSettings::new()
        }
    }

    pub fn with_epsilon(mut self, epsilon: ExactNumber) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self::new()
    }
}
