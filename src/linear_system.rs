//! Gaussian elimination on systems of hyperplanes.
//!
//! A [LinearSystem] is reduced to triangular form, then to reduced row echelon
//! form (RREF), from which the [Solution] is read off:
//!
//! ```
//! use linsys::{linear_system::{LinearSystem, Solution}, tensors::hyperplane::Hyperplane};
//!
//! let system = LinearSystem::from_planes(vec![
//!     Hyperplane::parse(&["0", "1", "1"], "1").unwrap(),
//!     Hyperplane::parse(&["1", "-1", "1"], "2").unwrap(),
//!     Hyperplane::parse(&["1", "2", "-5"], "3").unwrap(),
//! ])
//! .unwrap();
//!
//! match system.solve() {
//!     Solution::Unique(x) => println!("{}", x),
//!     s => panic!("Expected a unique solution: {}", s),
//! }
//! ```

use std::{fmt::Display, ops::Index};

use smallvec::smallvec;
use tracing::{debug, instrument};

use crate::{
    domains::number::ExactNumber,
    error::LinearSystemError,
    printer::{LinearSystemPrinter, ParametrizationPrinter},
    settings::{PivotStrategy, SolverSettings},
    tensors::{hyperplane::Hyperplane, vector::Vector},
};

/// The solution set of a linear system.
#[derive(Clone, PartialEq, Debug)]
pub enum Solution {
    Unique(Vector),
    NoSolution,
    /// Infinitely many solutions, described by an affine family.
    Parametrized(Parametrization),
}

/// The affine set `basepoint + Σ tᵢ directionᵢ`.
#[derive(Clone, PartialEq, Debug)]
pub struct Parametrization {
    basepoint: Vector,
    direction_vectors: Vec<Vector>,
}

impl Parametrization {
    pub fn new(
        basepoint: Vector,
        direction_vectors: Vec<Vector>,
    ) -> Result<Parametrization, LinearSystemError> {
        if let Some(d) = direction_vectors
            .iter()
            .find(|d| d.dimension() != basepoint.dimension())
        {
            return Err(LinearSystemError::DimensionMismatch {
                expected: basepoint.dimension(),
                found: d.dimension(),
            });
        }

        Ok(Parametrization {
            basepoint,
            direction_vectors,
        })
    }

    pub fn basepoint(&self) -> &Vector {
        &self.basepoint
    }

    pub fn direction_vectors(&self) -> &[Vector] {
        &self.direction_vectors
    }

    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }

    /// The number of free parameters.
    pub fn num_parameters(&self) -> usize {
        self.direction_vectors.len()
    }

    /// Evaluate the family at the parameters `t`.
    pub fn point_at(&self, t: &[ExactNumber]) -> Result<Vector, LinearSystemError> {
        if t.len() != self.direction_vectors.len() {
            return Err(LinearSystemError::ParameterCountMismatch {
                expected: self.direction_vectors.len(),
                found: t.len(),
            });
        }

        let mut p = self.basepoint.clone();
        for (d, ti) in self.direction_vectors.iter().zip(t) {
            p = p.plus(&d.times_scalar(ti))?;
        }
        Ok(p)
    }
}

impl Display for Parametrization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ParametrizationPrinter::new(self).fmt(f)
    }
}

/// An ordered list of hyperplanes that live in the same dimension.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
    settings: SolverSettings,
}

impl LinearSystem {
    /// Create a new system. All planes must have the same dimension.
    pub fn new(
        planes: Vec<Hyperplane>,
        settings: SolverSettings,
    ) -> Result<LinearSystem, LinearSystemError> {
        let dimension = planes
            .first()
            .ok_or(LinearSystemError::EmptyInput)?
            .dimension();

        if let Some(p) = planes.iter().find(|p| p.dimension() != dimension) {
            return Err(LinearSystemError::DimensionMismatch {
                expected: dimension,
                found: p.dimension(),
            });
        }

        Ok(LinearSystem {
            planes,
            dimension,
            settings,
        })
    }

    /// Create a new system with the default solver settings.
    pub fn from_planes(planes: Vec<Hyperplane>) -> Result<LinearSystem, LinearSystemError> {
        LinearSystem::new(planes, SolverSettings::default())
    }

    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The number of equations.
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn planes(&self) -> &[Hyperplane] {
        &self.planes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hyperplane> {
        self.planes.iter()
    }

    fn check_row(&self, row: usize) -> Result<(), LinearSystemError> {
        if row >= self.planes.len() {
            return Err(LinearSystemError::RowOutOfBounds {
                row,
                rows: self.planes.len(),
            });
        }
        Ok(())
    }

    /// Replace the `row`th equation.
    pub fn set_row(&mut self, row: usize, plane: Hyperplane) -> Result<(), LinearSystemError> {
        self.check_row(row)?;
        if plane.dimension() != self.dimension {
            return Err(LinearSystemError::DimensionMismatch {
                expected: self.dimension,
                found: plane.dimension(),
            });
        }

        self.planes[row] = plane;
        Ok(())
    }

    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<(), LinearSystemError> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        self.planes.swap(row1, row2);
        Ok(())
    }

    /// Multiply the `row`th equation by `coefficient`, which may not be zero.
    pub fn multiply_coefficient_and_row(
        &mut self,
        coefficient: &ExactNumber,
        row: usize,
    ) -> Result<(), LinearSystemError> {
        self.check_row(row)?;
        if coefficient.is_near_zero(&self.settings.epsilon) {
            return Err(LinearSystemError::ZeroScaling);
        }

        self.scale_row(coefficient, row);
        Ok(())
    }

    /// Add `coefficient` times the equation `row_to_add` to the equation `row_to_be_added_to`.
    pub fn add_multiple_times_row_to_row(
        &mut self,
        coefficient: &ExactNumber,
        row_to_add: usize,
        row_to_be_added_to: usize,
    ) -> Result<(), LinearSystemError> {
        self.check_row(row_to_add)?;
        self.check_row(row_to_be_added_to)?;
        self.add_row_multiple(coefficient, row_to_add, row_to_be_added_to);
        Ok(())
    }

    fn scale_row(&mut self, coefficient: &ExactNumber, row: usize) {
        self.planes[row] = self.planes[row].times_scalar(coefficient);
    }

    fn add_row_multiple(&mut self, coefficient: &ExactNumber, source: usize, target: usize) {
        let add = &self.planes[source];
        let added_to = &self.planes[target];

        // all rows share the dimension of the system
        let normal = added_to.normal_vector() + &(add.normal_vector() * coefficient);
        let constant = added_to.constant_term() + &(add.constant_term() * coefficient);
        self.planes[target] = Hyperplane::new(normal, constant);
    }

    /// For each row, the column of its first coefficient that is not near zero,
    /// or `None` if the normal vector of the row is zero.
    pub fn indices_of_first_nonzero_terms_in_each_row(&self) -> Vec<Option<usize>> {
        self.planes
            .iter()
            .map(|p| p.pivot(&self.settings.epsilon))
            .collect()
    }

    /// Make sure that the `row`th equation has a nonzero coefficient in `column`
    /// by swapping in the first lower row that does. Returns `false` if there is
    /// no such row.
    fn select_pivot(&mut self, row: usize, column: usize) -> bool {
        let eps = &self.settings.epsilon;
        if !self.planes[row][column].is_near_zero(eps) {
            return true;
        }

        match (row + 1..self.planes.len()).find(|&k| !self.planes[k][column].is_near_zero(eps)) {
            Some(k) => {
                debug!("Swapping rows {} and {} for pivot in column {}", row, k, column);
                self.planes.swap(row, k);
                true
            }
            None => {
                debug!("No pivot in column {} at or below row {}", column, row);
                false
            }
        }
    }

    /// Eliminate `column` from all rows below `row`, using the pivot in `row`.
    fn clear_rows_below(&mut self, row: usize, column: usize) {
        for i in row + 1..self.planes.len() {
            self.clear_entry(row, column, i);
        }
    }

    /// Eliminate `column` from all rows other than `row`: first the rows above,
    /// from the closest one upward, then the rows below.
    fn clear_other_rows(&mut self, row: usize, column: usize) {
        for i in (0..row).rev().chain(row + 1..self.planes.len()) {
            self.clear_entry(row, column, i);
        }
    }

    fn clear_entry(&mut self, pivot_row: usize, column: usize, target: usize) {
        let coefficient_to_clear = &self.planes[target][column];
        if coefficient_to_clear.is_near_zero(&self.settings.epsilon) {
            return;
        }

        let factor = -(coefficient_to_clear / &self.planes[pivot_row][column]);
        self.add_row_multiple(&factor, pivot_row, target);
    }

    /// Compute a row echelon form of a copy of the system. The original system
    /// is not modified.
    ///
    /// How columns without a pivot are handled depends on the
    /// [PivotStrategy] of the system settings.
    pub fn compute_triangular_form(&self) -> LinearSystem {
        let mut system = self.clone();

        match self.settings.pivot_strategy {
            PivotStrategy::Lockstep => {
                for row in 0..system.len().min(system.dimension) {
                    if system.select_pivot(row, row) {
                        system.clear_rows_below(row, row);
                    }
                }
            }
            PivotStrategy::SkipFreeColumns => {
                let mut row = 0;
                for column in 0..system.dimension {
                    if row == system.len() {
                        break;
                    }

                    if system.select_pivot(row, column) {
                        system.clear_rows_below(row, column);
                        row += 1;
                    }
                }
            }
        }

        system
    }

    /// Compute the reduced row echelon form of a copy of the system.
    /// Every pivot is normalized to one and is the only nonzero entry in its column.
    /// Rows are ordered by pivot column, with the rows without a pivot last.
    ///
    /// The lockstep triangular form may leave several rows with a pivot in the
    /// same column, so a pivot column is cleared in the rows below as well.
    #[instrument(level = "debug", skip_all)]
    pub fn compute_rref(&self) -> LinearSystem {
        let mut tf = self.compute_triangular_form();

        for row in (0..tf.len()).rev() {
            // the pivot is looked up after the rows below have been processed
            let Some(column) = tf.planes[row].pivot(&tf.settings.epsilon) else {
                continue;
            };

            let pivot = &tf.planes[row][column];
            if !pivot.is_one() {
                let scale = &ExactNumber::one() / pivot;
                tf.scale_row(&scale, row);
            }
            tf.clear_other_rows(row, column);
        }

        let eps = &tf.settings.epsilon;
        tf.planes.sort_by_cached_key(|p| p.pivot(eps).unwrap_or(usize::MAX));

        tf
    }

    /// The number of linearly independent equations.
    pub fn rank(&self) -> usize {
        self.compute_rref()
            .indices_of_first_nonzero_terms_in_each_row()
            .iter()
            .flatten()
            .count()
    }

    /// Solve the system.
    #[instrument(level = "debug", skip_all)]
    pub fn solve(&self) -> Solution {
        let rref = self.compute_rref();
        let eps = &self.settings.epsilon;
        let pivots = rref.indices_of_first_nonzero_terms_in_each_row();

        if rref
            .planes
            .iter()
            .zip(&pivots)
            .any(|(p, pivot)| pivot.is_none() && !p.constant_term().is_near_zero(eps))
        {
            debug!("Inconsistent equation in the reduced system");
            return Solution::NoSolution;
        }

        let mut has_pivot = vec![false; self.dimension];
        for c in pivots.iter().flatten() {
            has_pivot[*c] = true;
        }

        let num_pivots = has_pivot.iter().filter(|x| **x).count();
        if num_pivots < self.dimension {
            debug!(
                "{} free variables in {} dimensions",
                self.dimension - num_pivots,
                self.dimension
            );
            return Solution::Parametrized(rref.parametrize(&pivots));
        }

        let mut data = smallvec![ExactNumber::zero(); self.dimension];
        for (p, pivot) in rref.planes.iter().zip(&pivots) {
            if let Some(c) = pivot {
                data[*c] = p.constant_term().clone();
            }
        }

        Solution::Unique(Vector { data })
    }

    /// Solve the system and describe the solution set as an affine family.
    /// A unique solution yields a family without direction vectors.
    /// Returns `None` if the system is inconsistent.
    pub fn parametrized_solve(&self) -> Option<Parametrization> {
        match self.solve() {
            Solution::Unique(basepoint) => Some(Parametrization {
                basepoint,
                direction_vectors: vec![],
            }),
            Solution::NoSolution => None,
            Solution::Parametrized(p) => Some(p),
        }
    }

    /// Read off the parametrization from a consistent system in RREF.
    ///
    /// Every pivot variable is written as `constant - Σ coefficient_j x_j` over
    /// the other columns and every free variable as itself. Collecting these
    /// rows per column and transposing yields the basepoint from the constants
    /// and one direction vector per free variable.
    fn parametrize(&self, pivots: &[Option<usize>]) -> Parametrization {
        let dim = self.dimension;
        let mut rows: Vec<Option<Vec<ExactNumber>>> = vec![None; dim];

        for (p, pivot) in self.planes.iter().zip(pivots) {
            let Some(column) = *pivot else {
                continue;
            };
            if rows[column].is_some() {
                continue;
            }

            let mut row = Vec::with_capacity(dim + 1);
            row.push(p.constant_term().clone());
            for (j, c) in p.normal_vector().iter().enumerate() {
                row.push(if j == column { ExactNumber::zero() } else { -c });
            }
            rows[column] = Some(row);
        }

        let free_columns: Vec<usize> = (0..dim).filter(|c| rows[*c].is_none()).collect();
        for c in &free_columns {
            let mut row = vec![ExactNumber::zero(); dim + 1];
            row[c + 1] = ExactNumber::one();
            rows[*c] = Some(row);
        }

        let rows: Vec<Vec<ExactNumber>> = rows.into_iter().flatten().collect();

        let basepoint = Vector {
            data: rows.iter().map(|r| r[0].clone()).collect(),
        };
        let direction_vectors = free_columns
            .iter()
            .map(|c| Vector {
                data: rows.iter().map(|r| r[c + 1].clone()).collect(),
            })
            .collect();

        Parametrization {
            basepoint,
            direction_vectors,
        }
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    fn index(&self, index: usize) -> &Self::Output {
        &self.planes[index]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Hyperplane;
    type IntoIter = std::slice::Iter<'a, Hyperplane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.iter()
    }
}

impl Display for LinearSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        LinearSystemPrinter::new(self).fmt(f)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::number::ExactNumber,
        error::LinearSystemError,
        settings::SolverSettings,
        tensors::{hyperplane::Hyperplane, vector::Vector},
    };

    use super::{LinearSystem, Parametrization, Solution};

    fn p(n: &[&str], c: &str) -> Hyperplane {
        Hyperplane::parse(n, c).unwrap()
    }

    /// Check that two planes have exactly the same coefficients.
    fn same(a: &Hyperplane, n: &[&str], c: &str) -> bool {
        a.normal_vector() == &Vector::parse(n).unwrap()
            && a.constant_term() == &c.parse::<ExactNumber>().unwrap()
    }

    fn four_planes() -> Vec<Hyperplane> {
        vec![
            p(&["1", "1", "1"], "1"),
            p(&["0", "1", "0"], "2"),
            p(&["1", "1", "-1"], "3"),
            p(&["1", "0", "-2"], "2"),
        ]
    }

    #[test]
    fn construction() {
        assert_eq!(
            LinearSystem::from_planes(vec![]).unwrap_err(),
            LinearSystemError::EmptyInput
        );
        assert_eq!(
            LinearSystem::from_planes(vec![p(&["1", "1", "1"], "1"), p(&["1", "1"], "1")])
                .unwrap_err(),
            LinearSystemError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );

        let mut s = LinearSystem::from_planes(four_planes()).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.dimension(), 3);
        assert_eq!(
            s.set_row(0, p(&["1", "1"], "1")),
            Err(LinearSystemError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            s.set_row(4, p(&["1", "1", "1"], "1")),
            Err(LinearSystemError::RowOutOfBounds { row: 4, rows: 4 })
        );
        s.set_row(3, p(&["0", "0", "1"], "7")).unwrap();
        assert!(same(&s[3], &["0", "0", "1"], "7"));
    }

    #[test]
    fn row_operations() {
        let mut s = LinearSystem::from_planes(four_planes()).unwrap();

        s.swap_rows(0, 1).unwrap();
        assert!(same(&s[0], &["0", "1", "0"], "2"));
        assert!(same(&s[1], &["1", "1", "1"], "1"));

        s.swap_rows(1, 3).unwrap();
        s.swap_rows(3, 1).unwrap();
        assert!(same(&s[1], &["1", "1", "1"], "1"));
        assert!(same(&s[3], &["1", "0", "-2"], "2"));

        s.multiply_coefficient_and_row(&ExactNumber::one(), 0).unwrap();
        assert!(same(&s[0], &["0", "1", "0"], "2"));

        s.multiply_coefficient_and_row(&ExactNumber::from(-1), 2).unwrap();
        assert!(same(&s[2], &["-1", "-1", "1"], "-3"));

        s.multiply_coefficient_and_row(&ExactNumber::from(10), 1).unwrap();
        assert!(same(&s[1], &["10", "10", "10"], "10"));

        s.add_multiple_times_row_to_row(&ExactNumber::zero(), 0, 1).unwrap();
        assert!(same(&s[1], &["10", "10", "10"], "10"));

        s.add_multiple_times_row_to_row(&ExactNumber::one(), 0, 1).unwrap();
        assert!(same(&s[1], &["10", "11", "10"], "12"));

        s.add_multiple_times_row_to_row(&ExactNumber::from(-1), 1, 0).unwrap();
        assert!(same(&s[0], &["-10", "-10", "-10"], "-10"));

        assert_eq!(
            s.multiply_coefficient_and_row(&ExactNumber::zero(), 0),
            Err(LinearSystemError::ZeroScaling)
        );
        assert_eq!(
            s.swap_rows(0, 9),
            Err(LinearSystemError::RowOutOfBounds { row: 9, rows: 4 })
        );
        assert!(s
            .add_multiple_times_row_to_row(&ExactNumber::one(), 5, 0)
            .is_err());
    }

    #[test]
    fn first_nonzero_terms() {
        let s = LinearSystem::from_planes(vec![
            p(&["0", "0", "3"], "1"),
            p(&["1e-11", "2", "0"], "1"),
            p(&["0", "0", "0"], "1"),
        ])
        .unwrap();
        assert_eq!(
            s.indices_of_first_nonzero_terms_in_each_row(),
            vec![Some(2), Some(1), None]
        );
    }

    #[test]
    fn triangular_form() {
        let s = LinearSystem::from_planes(vec![p(&["1", "1", "1"], "1"), p(&["0", "1", "1"], "2")])
            .unwrap();
        let t = s.compute_triangular_form();
        assert!(same(&t[0], &["1", "1", "1"], "1"));
        assert!(same(&t[1], &["0", "1", "1"], "2"));

        let s = LinearSystem::from_planes(vec![p(&["1", "1", "1"], "1"), p(&["1", "1", "1"], "2")])
            .unwrap();
        let t = s.compute_triangular_form();
        assert!(same(&t[0], &["1", "1", "1"], "1"));
        assert!(same(&t[1], &["0", "0", "0"], "1"));

        let s = LinearSystem::from_planes(four_planes()).unwrap();
        let t = s.compute_triangular_form();
        assert!(same(&t[0], &["1", "1", "1"], "1"));
        assert!(same(&t[1], &["0", "1", "0"], "2"));
        assert!(same(&t[2], &["0", "0", "-2"], "2"));
        assert!(same(&t[3], &["0", "0", "0"], "0"));

        let s = LinearSystem::from_planes(vec![
            p(&["0", "1", "1"], "1"),
            p(&["1", "-1", "1"], "2"),
            p(&["1", "2", "-5"], "3"),
        ])
        .unwrap();
        let t = s.compute_triangular_form();
        assert!(same(&t[0], &["1", "-1", "1"], "2"));
        assert!(same(&t[1], &["0", "1", "1"], "1"));
        assert!(same(&t[2], &["0", "0", "-9"], "-2"));

        // the input is left untouched
        assert!(same(&s[0], &["0", "1", "1"], "1"));
    }

    #[test]
    fn rref() {
        let s = LinearSystem::from_planes(vec![p(&["1", "1", "1"], "1"), p(&["1", "1", "1"], "2")])
            .unwrap();
        let r = s.compute_rref();
        assert_eq!(r[0], p(&["1", "1", "1"], "1"));
        assert_eq!(r[1], p(&["0", "0", "0"], "1"));

        let r = LinearSystem::from_planes(four_planes())
            .unwrap()
            .compute_rref();
        assert_eq!(r[0], p(&["1", "0", "0"], "0"));
        assert_eq!(r[1], p(&["0", "1", "0"], "2"));
        assert_eq!(r[2], p(&["0", "0", "-2"], "2"));
        assert_eq!(r[3], Hyperplane::zero(3).unwrap());
        assert!(same(&r[2], &["0", "0", "1"], "-1"));
    }

    #[test]
    fn lockstep_shares_pivot_columns() {
        let planes = vec![p(&["0", "1", "0"], "1"), p(&["0", "1", "1"], "2")];

        let t = LinearSystem::from_planes(planes.clone())
            .unwrap()
            .compute_triangular_form();
        assert_eq!(
            t.indices_of_first_nonzero_terms_in_each_row(),
            vec![Some(1), Some(1)]
        );

        let s = LinearSystem::new(planes, SolverSettings::skip_free_columns()).unwrap();
        let t = s.compute_triangular_form();
        assert_eq!(
            t.indices_of_first_nonzero_terms_in_each_row(),
            vec![Some(1), Some(2)]
        );

        let r = s.compute_rref();
        assert!(same(&r[0], &["0", "1", "0"], "1"));
        assert!(same(&r[1], &["0", "0", "1"], "1"));

        let Solution::Parametrized(sol) = s.solve() else {
            panic!("Expected a parametrized solution");
        };
        assert_eq!(sol.basepoint(), &Vector::parse(&["0", "1", "1"]).unwrap());
        assert_eq!(
            sol.direction_vectors(),
            &[Vector::parse(&["1", "0", "0"]).unwrap()]
        );
    }

    #[test]
    fn lockstep_rref_clears_shared_pivot_columns() {
        let planes = vec![p(&["0", "1", "0"], "1"), p(&["0", "1", "1"], "2")];
        let s = LinearSystem::from_planes(planes.clone()).unwrap();

        let r = s.compute_rref();
        assert!(same(&r[0], &["0", "1", "0"], "1"));
        assert!(same(&r[1], &["0", "0", "1"], "1"));
        assert_eq!(
            r.indices_of_first_nonzero_terms_in_each_row(),
            vec![Some(1), Some(2)]
        );

        let Solution::Parametrized(sol) = s.solve() else {
            panic!("Expected a parametrized solution");
        };
        assert_eq!(sol.basepoint(), &Vector::parse(&["0", "1", "1"]).unwrap());
        assert_eq!(
            sol.direction_vectors(),
            &[Vector::parse(&["1", "0", "0"]).unwrap()]
        );

        let eps = ExactNumber::epsilon();
        for t in [ExactNumber::zero(), ExactNumber::new(-7, 3)] {
            let x = sol.point_at(&[t]).unwrap();
            for plane in &planes {
                assert!(plane.contains(&x, &eps).unwrap());
            }
        }
    }

    #[test]
    fn lockstep_rref_moves_zero_rows_last() {
        // lockstep leaves the zero row on top
        let s = LinearSystem::from_planes(vec![
            p(&["0", "1", "0"], "1"),
            p(&["0", "2", "0"], "2"),
            p(&["0", "0", "1"], "1"),
        ])
        .unwrap();

        let r = s.compute_rref();
        assert_eq!(
            r.indices_of_first_nonzero_terms_in_each_row(),
            vec![Some(1), Some(2), None]
        );
        assert!(same(&r[2], &["0", "0", "0"], "0"));
        assert_eq!(s.rank(), 2);
    }

    #[test]
    fn rank() {
        assert_eq!(LinearSystem::from_planes(four_planes()).unwrap().rank(), 3);
        let s = LinearSystem::from_planes(vec![p(&["1", "2"], "1"), p(&["2", "4"], "2")]).unwrap();
        assert_eq!(s.rank(), 1);
    }

    #[test]
    fn solve() {
        let s = LinearSystem::from_planes(four_planes()).unwrap();
        assert_eq!(
            s.solve(),
            Solution::Unique(Vector::parse(&["0", "2", "-1"]).unwrap())
        );

        let s = LinearSystem::from_planes(vec![p(&["1", "1"], "1"), p(&["1", "1"], "2")]).unwrap();
        assert_eq!(s.solve(), Solution::NoSolution);
        assert_eq!(s.parametrized_solve(), None);

        let s = LinearSystem::from_planes(vec![p(&["1", "1", "1"], "1"), p(&["0", "1", "1"], "2")])
            .unwrap();
        let expected = Parametrization::new(
            Vector::parse(&["-1", "2", "0"]).unwrap(),
            vec![Vector::parse(&["0", "-1", "1"]).unwrap()],
        )
        .unwrap();
        assert_eq!(s.solve(), Solution::Parametrized(expected.clone()));
        assert_eq!(s.parametrized_solve(), Some(expected));
    }

    #[test]
    fn solve_with_custom_epsilon() {
        // 1e-6 is noise with a loose tolerance
        let planes = vec![p(&["1", "1"], "1"), p(&["1", "1"], "1.000001")];
        let strict = LinearSystem::from_planes(planes.clone()).unwrap();
        assert_eq!(strict.solve(), Solution::NoSolution);

        let loose = LinearSystem::new(
            planes,
            SolverSettings::new().with_epsilon(ExactNumber::new(1, 1000)),
        )
        .unwrap();
        assert!(matches!(loose.solve(), Solution::Parametrized(_)));
    }

    #[test]
    fn parametrization() {
        assert_eq!(
            Parametrization::new(
                Vector::parse(&["1", "2"]).unwrap(),
                vec![Vector::parse(&["1", "2", "3"]).unwrap()]
            ),
            Err(LinearSystemError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );

        let p = Parametrization::new(
            Vector::parse(&["1", "0", "-2"]).unwrap(),
            vec![
                Vector::parse(&["-1", "1", "0"]).unwrap(),
                Vector::parse(&["0.5", "0", "1"]).unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.num_parameters(), 2);
        assert_eq!(
            p.point_at(&[ExactNumber::from(2), ExactNumber::from(4)]).unwrap(),
            Vector::parse(&["1", "2", "2"]).unwrap()
        );
        assert_eq!(
            p.point_at(&[ExactNumber::one()]),
            Err(LinearSystemError::ParameterCountMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
