use std::{
    f64::consts::PI,
    fmt::Display,
    ops::{Add, Index, Mul, Neg, Sub},
};

use smallvec::SmallVec;

use crate::{domains::number::ExactNumber, error::LinearSystemError, printer::VectorPrinter};

/// An n-dimensional vector of exact numbers. The dimension is fixed at
/// construction and is never zero.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Vector {
    pub(crate) data: SmallVec<[ExactNumber; 4]>,
}

impl Vector {
    /// Create a new vector from a list of coordinates.
    pub fn new(data: impl IntoIterator<Item = ExactNumber>) -> Result<Vector, LinearSystemError> {
        let data: SmallVec<[ExactNumber; 4]> = data.into_iter().collect();
        if data.is_empty() {
            return Err(LinearSystemError::EmptyInput);
        }

        Ok(Vector { data })
    }

    /// Parse a vector from decimal or fractional strings, e.g. `["1.5", "-2", "1/3"]`.
    pub fn parse(coordinates: &[&str]) -> Result<Vector, LinearSystemError> {
        Vector::new(
            coordinates
                .iter()
                .map(|c| c.parse())
                .collect::<Result<Vec<ExactNumber>, _>>()?,
        )
    }

    /// Create a vector from floats, using their shortest decimal representation.
    pub fn from_f64(coordinates: &[f64]) -> Result<Vector, LinearSystemError> {
        Vector::new(
            coordinates
                .iter()
                .map(|c| ExactNumber::try_from(*c))
                .collect::<Result<Vec<ExactNumber>, _>>()?,
        )
    }

    pub fn zero(dimension: usize) -> Result<Vector, LinearSystemError> {
        Vector::new((0..dimension).map(|_| ExactNumber::zero()))
    }

    /// Create the unit vector along the `index`th axis.
    pub fn unit(dimension: usize, index: usize) -> Result<Vector, LinearSystemError> {
        if index >= dimension {
            return Err(LinearSystemError::DimensionMismatch {
                expected: dimension,
                found: index + 1,
            });
        }

        Vector::new((0..dimension).map(|i| {
            if i == index {
                ExactNumber::one()
            } else {
                ExactNumber::zero()
            }
        }))
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn coordinates(&self) -> &[ExactNumber] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExactNumber> {
        self.data.iter()
    }

    fn check_dimension(&self, other: &Vector) -> Result<(), LinearSystemError> {
        if self.dimension() != other.dimension() {
            return Err(LinearSystemError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn plus(&self, other: &Vector) -> Result<Vector, LinearSystemError> {
        self.check_dimension(other)?;
        Ok(Vector {
            data: self.data.iter().zip(&other.data).map(|(a, b)| a + b).collect(),
        })
    }

    pub fn minus(&self, other: &Vector) -> Result<Vector, LinearSystemError> {
        self.check_dimension(other)?;
        Ok(Vector {
            data: self.data.iter().zip(&other.data).map(|(a, b)| a - b).collect(),
        })
    }

    pub fn times_scalar(&self, c: &ExactNumber) -> Vector {
        Vector {
            data: self.data.iter().map(|x| x * c).collect(),
        }
    }

    /// Take the Euclidean scalar product of two vectors.
    pub fn dot(&self, other: &Vector) -> Result<ExactNumber, LinearSystemError> {
        self.check_dimension(other)?;

        let mut res = ExactNumber::zero();
        for (a, b) in self.data.iter().zip(&other.data) {
            res += &(a * b);
        }
        Ok(res)
    }

    pub fn norm_squared(&self) -> ExactNumber {
        let mut res = ExactNumber::zero();
        for e in &self.data {
            res += &(e * e);
        }
        res
    }

    /// The Euclidean norm. The square root is taken in floating point.
    pub fn magnitude(&self) -> f64 {
        self.norm_squared().to_f64().sqrt()
    }

    /// Scale the vector to unit length.
    pub fn normalized(&self) -> Result<Vector, LinearSystemError> {
        let magnitude = self.magnitude();
        if magnitude == 0. {
            return Err(LinearSystemError::ZeroVector);
        }

        let inv = ExactNumber::try_from(magnitude)?.recip()?;
        Ok(self.times_scalar(&inv))
    }

    /// Compute the angle between two vectors in radians.
    pub fn angle_with(&self, other: &Vector) -> Result<f64, LinearSystemError> {
        self.check_dimension(other)?;

        let n1 = self.magnitude();
        let n2 = other.magnitude();
        if n1 == 0. || n2 == 0. {
            return Err(LinearSystemError::ZeroVector);
        }

        // round-off can push the cosine just outside of [-1, 1]
        let cos = (self.dot(other)?.to_f64() / (n1 * n2)).clamp(-1., 1.);
        Ok(cos.acos())
    }

    pub fn angle_with_degrees(&self, other: &Vector) -> Result<f64, LinearSystemError> {
        Ok(self.angle_with(other)? * 180. / PI)
    }

    /// Check if the magnitude is below the default tolerance.
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(&ExactNumber::epsilon())
    }

    pub fn is_zero_within(&self, eps: &ExactNumber) -> bool {
        self.norm_squared() < eps * eps
    }

    /// Check if the vectors are parallel or anti-parallel. The zero vector is
    /// parallel to every vector.
    ///
    /// The angle test is done exactly: the vectors are parallel when
    /// `sinθ` is below the tolerance, i.e. when
    /// `|u|²|v|² - (u·v)² < eps² |u|²|v|²`.
    pub fn is_parallel_to(&self, other: &Vector) -> Result<bool, LinearSystemError> {
        self.check_dimension(other)?;

        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }

        let eps = ExactNumber::epsilon();
        let dot = self.dot(other)?;
        let norms = &self.norm_squared() * &other.norm_squared();
        let sin_squared_times_norms = &norms - &(&dot * &dot);
        Ok(sin_squared_times_norms < &(&eps * &eps) * &norms)
    }

    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool, LinearSystemError> {
        Ok(self.dot(other)?.is_near_zero(&ExactNumber::epsilon()))
    }

    /// Project the vector onto `basis`.
    pub fn parallel_component_to(&self, basis: &Vector) -> Result<Vector, LinearSystemError> {
        self.check_dimension(basis)?;
        if basis.is_zero() {
            return Err(LinearSystemError::ZeroVector);
        }

        Ok(basis.times_scalar(&(&self.dot(basis)? / &basis.norm_squared())))
    }

    /// The component of the vector that is orthogonal to `basis`.
    pub fn orthogonal_component_to(&self, basis: &Vector) -> Result<Vector, LinearSystemError> {
        self.minus(&self.parallel_component_to(basis)?)
    }

    /// Compute the Euclidean cross product in three dimensions.
    pub fn cross(&self, other: &Vector) -> Result<Vector, LinearSystemError> {
        for d in [self.dimension(), other.dimension()] {
            if d != 3 {
                return Err(LinearSystemError::UnsupportedDimension {
                    required: 3,
                    found: d,
                });
            }
        }

        let (a, b) = (&self.data, &other.data);
        Vector::new([
            &(&a[1] * &b[2]) - &(&a[2] * &b[1]),
            &(&a[2] * &b[0]) - &(&a[0] * &b[2]),
            &(&a[0] * &b[1]) - &(&a[1] * &b[0]),
        ])
    }

    pub fn area_of_parallelogram_with(&self, other: &Vector) -> Result<f64, LinearSystemError> {
        Ok(self.cross(other)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, other: &Vector) -> Result<f64, LinearSystemError> {
        Ok(self.area_of_parallelogram_with(other)? / 2.)
    }
}

impl Index<usize> for Vector {
    type Output = ExactNumber;

    /// Get the `i`th coordinate of the vector.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a ExactNumber;
    type IntoIter = std::slice::Iter<'a, ExactNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        VectorPrinter::new(self).fmt(f)
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    /// Add two vectors. Panics when the dimensions differ; use [Vector::plus]
    /// for a checked version.
    fn add(self, rhs: &Vector) -> Self::Output {
        if self.dimension() != rhs.dimension() {
            panic!(
                "Cannot add vectors of different dimensions: {} vs {}",
                self.dimension(),
                rhs.dimension()
            );
        }

        Vector {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a + b).collect(),
        }
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    /// Subtract two vectors. Panics when the dimensions differ; use [Vector::minus]
    /// for a checked version.
    fn sub(self, rhs: &Vector) -> Self::Output {
        if self.dimension() != rhs.dimension() {
            panic!(
                "Cannot subtract vectors of different dimensions: {} vs {}",
                self.dimension(),
                rhs.dimension()
            );
        }

        Vector {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a - b).collect(),
        }
    }
}

impl Mul<&ExactNumber> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &ExactNumber) -> Self::Output {
        self.times_scalar(rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = -&*e;
        }
        self
    }
}
