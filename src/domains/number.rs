use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use rug::{ops::Pow, Integer, Rational};

use crate::error::LinearSystemError;

/// The largest decimal exponent accepted by the parser.
const MAX_EXPONENT: u32 = 10_000;

/// The tolerance below which a number is considered to be zero.
const DEFAULT_EPSILON: (i64, i64) = (1, 10_000_000_000);

/// An exact rational number of arbitrary precision.
///
/// All arithmetic is performed without rounding, so long elimination chains
/// do not accumulate errors. Only [ExactNumber::to_f64] and the display
/// routines leave the exact domain.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct ExactNumber(Rational);

impl ExactNumber {
    pub fn new(num: i64, den: i64) -> ExactNumber {
        ExactNumber(Rational::from((num, den)))
    }

    pub fn zero() -> ExactNumber {
        ExactNumber(Rational::new())
    }

    pub fn one() -> ExactNumber {
        ExactNumber(Rational::from(1))
    }

    /// The default near-zero tolerance, `1e-10`.
    pub fn epsilon() -> ExactNumber {
        ExactNumber(Rational::from(DEFAULT_EPSILON))
    }

    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    pub fn is_one(&self) -> bool {
        self.0 == 1
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    /// Check if `|self| < eps`.
    pub fn is_near_zero(&self, eps: &ExactNumber) -> bool {
        self.0.clone().abs() < eps.0
    }

    pub fn abs(&self) -> ExactNumber {
        ExactNumber(self.0.clone().abs())
    }

    /// Compute `1 / self`.
    pub fn recip(&self) -> Result<ExactNumber, LinearSystemError> {
        if self.is_zero() {
            return Err(LinearSystemError::DivisionByZero);
        }

        Ok(ExactNumber(self.0.clone().recip()))
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    pub fn as_rational(&self) -> &Rational {
        &self.0
    }

    /// Round to `places` decimal places, with ties rounded away from zero.
    pub fn round_to_decimals(&self, places: u32) -> ExactNumber {
        let scale = Integer::from(10).pow(places);
        let scaled = (self.0.clone() * &scale).round();
        ExactNumber(scaled / scale)
    }

    /// Check if the number is an integer.
    pub fn is_integer(&self) -> bool {
        *self.0.denom() == 1
    }

    /// Format the number in decimal notation with at most `places` decimal places.
    /// Trailing zeros are removed and integral values are written without a fractional part.
    pub fn to_decimal_string(&self, places: u32) -> String {
        let scale = Integer::from(10).pow(places);
        let scaled = Integer::from((self.0.clone() * &scale).round().numer());

        let negative = scaled < 0;
        let digits = scaled.abs().to_string();
        let places = places as usize;

        let (int_part, frac_part) = if digits.len() > places {
            let (i, f) = digits.split_at(digits.len() - places);
            (i.to_string(), f.to_string())
        } else {
            ("0".to_string(), format!("{:0>width$}", digits, width = places))
        };

        let frac_part = frac_part.trim_end_matches('0');
        let mut out = String::with_capacity(int_part.len() + frac_part.len() + 2);
        if negative {
            out.push('-');
        }
        out.push_str(&int_part);
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

impl FromStr for ExactNumber {
    type Err = LinearSystemError;

    /// Parse a decimal such as `-10.366` or `1.5e-3`, or a fraction such as `23/9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LinearSystemError::Parse(s.to_string()));
        }

        if s.contains('/') {
            return Rational::from_str(s)
                .map(ExactNumber)
                .map_err(|_| LinearSystemError::Parse(s.to_string()));
        }

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(p) => {
                let exp = s[p + 1..]
                    .parse::<i32>()
                    .map_err(|_| LinearSystemError::Parse(s.to_string()))?;
                if exp.unsigned_abs() > MAX_EXPONENT {
                    return Err(LinearSystemError::Parse(s.to_string()));
                }
                (&s[..p], exp)
            }
            None => (s, 0),
        };

        let (negative, mantissa) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (int_digits, frac_digits) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };

        if int_digits.is_empty() && frac_digits.is_empty()
            || !int_digits
                .bytes()
                .chain(frac_digits.bytes())
                .all(|b| b.is_ascii_digit())
        {
            return Err(LinearSystemError::Parse(s.to_string()));
        }

        let digits = format!("{}{}", int_digits, frac_digits);
        let mut num = Integer::from_str_radix(&digits, 10)
            .map_err(|_| LinearSystemError::Parse(s.to_string()))?;
        if negative {
            num = -num;
        }

        let shift = exponent - frac_digits.len() as i32;
        let ten = Integer::from(10);
        let r = if shift >= 0 {
            Rational::from(num * ten.pow(shift as u32))
        } else {
            Rational::from((num, ten.pow(shift.unsigned_abs())))
        };

        Ok(ExactNumber(r))
    }
}

impl TryFrom<&str> for ExactNumber {
    type Error = LinearSystemError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<f64> for ExactNumber {
    type Error = LinearSystemError;

    /// Convert through the shortest decimal representation of the float,
    /// so that `5.862` becomes `5862/1000` and not its binary approximation.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(LinearSystemError::Parse(value.to_string()));
        }

        format!("{}", value).parse()
    }
}

impl From<i64> for ExactNumber {
    fn from(value: i64) -> Self {
        ExactNumber(Rational::from(value))
    }
}

impl From<i32> for ExactNumber {
    fn from(value: i32) -> Self {
        ExactNumber(Rational::from(value))
    }
}

impl From<(i64, i64)> for ExactNumber {
    fn from(value: (i64, i64)) -> Self {
        ExactNumber(Rational::from(value))
    }
}

impl From<Rational> for ExactNumber {
    fn from(value: Rational) -> Self {
        ExactNumber(value)
    }
}

impl Display for ExactNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'a> Add<&'a ExactNumber> for &'a ExactNumber {
    type Output = ExactNumber;

    fn add(self, rhs: &'a ExactNumber) -> ExactNumber {
        ExactNumber(Rational::from(&self.0 + &rhs.0))
    }
}

impl<'a> Sub<&'a ExactNumber> for &'a ExactNumber {
    type Output = ExactNumber;

    fn sub(self, rhs: &'a ExactNumber) -> ExactNumber {
        ExactNumber(Rational::from(&self.0 - &rhs.0))
    }
}

impl<'a> Mul<&'a ExactNumber> for &'a ExactNumber {
    type Output = ExactNumber;

    fn mul(self, rhs: &'a ExactNumber) -> ExactNumber {
        ExactNumber(Rational::from(&self.0 * &rhs.0))
    }
}

impl<'a> Div<&'a ExactNumber> for &'a ExactNumber {
    type Output = ExactNumber;

    /// Divide two numbers. Panics when `rhs` is zero; use [ExactNumber::recip]
    /// for a checked inverse.
    fn div(self, rhs: &'a ExactNumber) -> ExactNumber {
        ExactNumber(Rational::from(&self.0 / &rhs.0))
    }
}

impl Add for ExactNumber {
    type Output = ExactNumber;

    fn add(self, rhs: ExactNumber) -> ExactNumber {
        ExactNumber(self.0 + rhs.0)
    }
}

impl Sub for ExactNumber {
    type Output = ExactNumber;

    fn sub(self, rhs: ExactNumber) -> ExactNumber {
        ExactNumber(self.0 - rhs.0)
    }
}

impl Mul for ExactNumber {
    type Output = ExactNumber;

    fn mul(self, rhs: ExactNumber) -> ExactNumber {
        ExactNumber(self.0 * rhs.0)
    }
}

impl Div for ExactNumber {
    type Output = ExactNumber;

    fn div(self, rhs: ExactNumber) -> ExactNumber {
        ExactNumber(self.0 / rhs.0)
    }
}

impl AddAssign<&ExactNumber> for ExactNumber {
    fn add_assign(&mut self, rhs: &ExactNumber) {
        self.0 += &rhs.0;
    }
}

impl SubAssign<&ExactNumber> for ExactNumber {
    fn sub_assign(&mut self, rhs: &ExactNumber) {
        self.0 -= &rhs.0;
    }
}

impl MulAssign<&ExactNumber> for ExactNumber {
    fn mul_assign(&mut self, rhs: &ExactNumber) {
        self.0 *= &rhs.0;
    }
}

impl Neg for ExactNumber {
    type Output = ExactNumber;

    fn neg(self) -> ExactNumber {
        ExactNumber(-self.0)
    }
}

impl Neg for &ExactNumber {
    type Output = ExactNumber;

    fn neg(self) -> ExactNumber {
        ExactNumber(Rational::from(-&self.0))
    }
}

#[cfg(test)]
mod test {
    use crate::error::LinearSystemError;

    use super::ExactNumber;

    #[test]
    fn parse_decimal() {
        let a: ExactNumber = "-10.366".parse().unwrap();
        assert_eq!(a, ExactNumber::new(-10366, 1000));

        let b: ExactNumber = "1.5e-3".parse().unwrap();
        assert_eq!(b, ExactNumber::new(3, 2000));

        let c: ExactNumber = "23/9".parse().unwrap();
        assert_eq!(c, ExactNumber::new(23, 9));

        let d: ExactNumber = ".5".parse().unwrap();
        assert_eq!(d, ExactNumber::new(1, 2));

        assert!("1.2.3".parse::<ExactNumber>().is_err());
        assert!("".parse::<ExactNumber>().is_err());
        assert!("-".parse::<ExactNumber>().is_err());
    }

    #[test]
    fn parse_exponent_range() {
        let a: ExactNumber = "2e10000".parse().unwrap();
        assert!(a.is_integer());
        let b: ExactNumber = "1e-10000".parse().unwrap();
        assert!(!b.is_zero());

        for s in ["1e10001", "1e-10001", "1e2000000000", "1e99999999999"] {
            assert_eq!(
                s.parse::<ExactNumber>(),
                Err(LinearSystemError::Parse(s.to_string()))
            );
        }
    }

    #[test]
    fn from_float() {
        let a = ExactNumber::try_from(5.862).unwrap();
        assert_eq!(a, ExactNumber::new(5862, 1000));
        assert!(ExactNumber::try_from(f64::NAN).is_err());
    }

    #[test]
    fn near_zero() {
        let eps = ExactNumber::epsilon();
        assert!(ExactNumber::new(1, 100_000_000_000).is_near_zero(&eps));
        assert!(ExactNumber::new(-1, 100_000_000_000).is_near_zero(&eps));
        assert!(!ExactNumber::new(1, 10_000_000_000).is_near_zero(&eps));
        assert!(!ExactNumber::new(1, 1000).is_near_zero(&eps));
    }

    #[test]
    fn arithmetic() {
        let a = ExactNumber::new(1, 3);
        let b = ExactNumber::new(1, 6);
        assert_eq!(&a + &b, ExactNumber::new(1, 2));
        assert_eq!(&a - &b, ExactNumber::new(1, 6));
        assert_eq!(&a * &b, ExactNumber::new(1, 18));
        assert_eq!(&a / &b, ExactNumber::from(2));
        assert_eq!(-&a, ExactNumber::new(-1, 3));
        assert_eq!(b.recip().unwrap(), ExactNumber::from(6));
        assert!(ExactNumber::zero().recip().is_err());
    }

    #[test]
    fn decimal_display() {
        assert_eq!(ExactNumber::new(23, 9).to_decimal_string(3), "2.556");
        assert_eq!(ExactNumber::new(-1, 2).to_decimal_string(3), "-0.5");
        assert_eq!(ExactNumber::from(4).to_decimal_string(3), "4");
        assert_eq!(ExactNumber::new(-1, 100_000).to_decimal_string(3), "0");
        assert_eq!(ExactNumber::new(19999, 10000).to_decimal_string(3), "2");
        assert_eq!(
            ExactNumber::new(23, 9).round_to_decimals(2),
            ExactNumber::new(256, 100)
        );
    }
}
