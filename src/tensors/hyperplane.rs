use std::{fmt::Display, ops::Index};

use crate::{
    domains::number::ExactNumber, error::LinearSystemError, printer::HyperplanePrinter,
};

use super::vector::Vector;

/// The relative position of two hyperplanes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlaneRelation {
    /// The planes describe the same set of points.
    Coincident,
    /// The planes are parallel but do not share any points.
    Parallel,
    Intersecting,
}

/// The set of points `x` that satisfy `normal_vector · x = constant_term`.
#[derive(Clone, Debug)]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: ExactNumber,
}

impl Hyperplane {
    pub fn new(normal_vector: Vector, constant_term: ExactNumber) -> Hyperplane {
        Hyperplane {
            normal_vector,
            constant_term,
        }
    }

    /// Create the degenerate plane `0 = 0`.
    pub fn zero(dimension: usize) -> Result<Hyperplane, LinearSystemError> {
        Ok(Hyperplane::new(Vector::zero(dimension)?, ExactNumber::zero()))
    }

    /// Parse a hyperplane from its coefficients and constant term.
    pub fn parse(normal: &[&str], constant_term: &str) -> Result<Hyperplane, LinearSystemError> {
        Ok(Hyperplane::new(Vector::parse(normal)?, constant_term.parse()?))
    }

    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    pub fn constant_term(&self) -> &ExactNumber {
        &self.constant_term
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    /// Get the coefficient of the `i`th variable.
    pub fn coefficient(&self, i: usize) -> Option<&ExactNumber> {
        self.normal_vector.coordinates().get(i)
    }

    /// Find the index of the first coefficient that is not near zero.
    pub fn first_nonzero_index(coordinates: &[ExactNumber], eps: &ExactNumber) -> Option<usize> {
        coordinates.iter().position(|c| !c.is_near_zero(eps))
    }

    /// The index of the first variable with a coefficient that is not near zero.
    pub fn pivot(&self, eps: &ExactNumber) -> Option<usize> {
        Hyperplane::first_nonzero_index(self.normal_vector.coordinates(), eps)
    }

    /// A point on the plane, found by solving for the first variable with a nonzero
    /// coefficient while setting all others to zero. Returns `None` when the normal
    /// vector is zero.
    pub fn basepoint(&self) -> Option<Vector> {
        let index = self.pivot(&ExactNumber::epsilon())?;
        let value = &self.constant_term / &self.normal_vector[index];

        let mut data = self.normal_vector.data.clone();
        for (i, c) in data.iter_mut().enumerate() {
            *c = if i == index {
                value.clone()
            } else {
                ExactNumber::zero()
            };
        }

        Some(Vector { data })
    }

    /// Compute `normal_vector · point`.
    pub fn evaluate(&self, point: &Vector) -> Result<ExactNumber, LinearSystemError> {
        self.normal_vector.dot(point)
    }

    /// Check if `point` lies on the plane, up to `eps`.
    pub fn contains(&self, point: &Vector, eps: &ExactNumber) -> Result<bool, LinearSystemError> {
        Ok((&self.evaluate(point)? - &self.constant_term).is_near_zero(eps))
    }

    /// Check if the normal vectors are parallel.
    pub fn is_parallel_to(&self, other: &Hyperplane) -> Result<bool, LinearSystemError> {
        self.normal_vector.is_parallel_to(&other.normal_vector)
    }

    /// Classify the relative position of two planes.
    pub fn relation_to(&self, other: &Hyperplane) -> Result<PlaneRelation, LinearSystemError> {
        if self.dimension() != other.dimension() {
            return Err(LinearSystemError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }

        Ok(if self == other {
            PlaneRelation::Coincident
        } else if self.is_parallel_to(other)? {
            PlaneRelation::Parallel
        } else {
            PlaneRelation::Intersecting
        })
    }

    /// Multiply the equation by `c`.
    pub fn times_scalar(&self, c: &ExactNumber) -> Hyperplane {
        Hyperplane {
            normal_vector: self.normal_vector.times_scalar(c),
            constant_term: &self.constant_term * c,
        }
    }

    /// Add the equation `other` to this one.
    pub fn plus(&self, other: &Hyperplane) -> Result<Hyperplane, LinearSystemError> {
        Ok(Hyperplane {
            normal_vector: self.normal_vector.plus(&other.normal_vector)?,
            constant_term: &self.constant_term + &other.constant_term,
        })
    }
}

impl PartialEq for Hyperplane {
    /// Two planes are equal when they contain the same points.
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }

        // a zero normal is one without a pivot, as in `basepoint`
        let eps = ExactNumber::epsilon();
        match (self.pivot(&eps).is_none(), other.pivot(&eps).is_none()) {
            (true, true) => {
                return (&self.constant_term - &other.constant_term).is_near_zero(&eps);
            }
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }

        if !matches!(self.is_parallel_to(other), Ok(true)) {
            return false;
        }

        let (Some(x), Some(y)) = (self.basepoint(), other.basepoint()) else {
            return false;
        };

        y.minus(&x)
            .and_then(|connection| connection.is_orthogonal_to(&self.normal_vector))
            .unwrap_or(false)
    }
}

impl Index<usize> for Hyperplane {
    type Output = ExactNumber;

    /// Get the coefficient of the `i`th variable.
    fn index(&self, index: usize) -> &Self::Output {
        &self.normal_vector[index]
    }
}

impl Display for Hyperplane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        HyperplanePrinter::new(self).fmt(f)
    }
}
