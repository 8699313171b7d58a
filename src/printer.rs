//! Textual rendering of vectors, hyperplanes, systems and their solutions.
//!
//! Numbers are rounded for display only. The number of decimal places can be
//! set with the precision of the format string, e.g. `format!("{:.5}", plane)`,
//! and the alternate flag `{:#}` prints exact fractions instead.

use std::fmt::{self, Write};

use crate::{
    domains::number::ExactNumber,
    linear_system::{LinearSystem, Parametrization, Solution},
    tensors::{hyperplane::Hyperplane, vector::Vector},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// The number of decimal places, or `None` for exact fractions.
    pub precision: Option<usize>,
}

impl PrintOptions {
    pub const fn new() -> Self {
        Self { precision: Some(3) }
    }

    /// Print numbers as exact fractions.
    pub const fn exact() -> PrintOptions {
        Self { precision: None }
    }

    pub const fn with_precision(precision: usize) -> PrintOptions {
        Self {
            precision: Some(precision),
        }
    }

    pub fn from_fmt(f: &fmt::Formatter) -> PrintOptions {
        if f.alternate() {
            return PrintOptions::exact();
        }

        PrintOptions {
            precision: f.precision().or(Self::new().precision),
        }
    }

    fn decimals(&self) -> Option<u32> {
        self.precision.map(|p| u32::try_from(p).unwrap_or(u32::MAX))
    }

    fn format(&self, n: &ExactNumber) -> String {
        match self.decimals() {
            Some(p) => n.to_decimal_string(p),
            None => n.to_string(),
        }
    }

    /// Check if the number is displayed as zero.
    fn shows_zero(&self, n: &ExactNumber) -> bool {
        match self.decimals() {
            Some(p) => n.round_to_decimals(p).is_zero(),
            None => n.is_zero(),
        }
    }

    fn shows_one(&self, n: &ExactNumber) -> bool {
        match self.decimals() {
            Some(p) => n.abs().round_to_decimals(p).is_one(),
            None => n.abs().is_one(),
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a linear combination such as `x_1 - 2x_2 + 0.5x_3`, omitting terms that
/// are displayed as zero. Nothing is written if all terms vanish.
fn write_terms<'a>(
    f: &mut fmt::Formatter,
    terms: impl Iterator<Item = (&'a ExactNumber, String)>,
    opts: &PrintOptions,
    separator: &str,
    mut first: bool,
) -> Result<bool, fmt::Error> {
    for (c, var) in terms {
        if opts.shows_zero(c) {
            continue;
        }

        if first {
            if c.is_negative() {
                f.write_char('-')?;
            }
        } else if c.is_negative() {
            f.write_str(" - ")?;
        } else {
            f.write_str(" + ")?;
        }

        if !opts.shows_one(c) {
            f.write_str(&opts.format(&c.abs()))?;
            f.write_str(separator)?;
        }
        f.write_str(&var)?;
        first = false;
    }

    Ok(!first)
}

pub struct VectorPrinter<'a> {
    pub vector: &'a Vector,
    pub opts: Option<PrintOptions>,
}

impl<'a> VectorPrinter<'a> {
    pub fn new(vector: &'a Vector) -> VectorPrinter<'a> {
        VectorPrinter { vector, opts: None }
    }

    pub fn new_with_options(vector: &'a Vector, opts: PrintOptions) -> VectorPrinter<'a> {
        VectorPrinter {
            vector,
            opts: Some(opts),
        }
    }
}

impl<'a> fmt::Display for VectorPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts = self.opts.unwrap_or_else(|| PrintOptions::from_fmt(f));

        f.write_str("Vector: (")?;
        for (i, c) in self.vector.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&opts.format(c))?;
        }
        f.write_char(')')
    }
}

pub struct HyperplanePrinter<'a> {
    pub plane: &'a Hyperplane,
    pub opts: Option<PrintOptions>,
}

impl<'a> HyperplanePrinter<'a> {
    pub fn new(plane: &'a Hyperplane) -> HyperplanePrinter<'a> {
        HyperplanePrinter { plane, opts: None }
    }

    pub fn new_with_options(plane: &'a Hyperplane, opts: PrintOptions) -> HyperplanePrinter<'a> {
        HyperplanePrinter {
            plane,
            opts: Some(opts),
        }
    }
}

impl<'a> fmt::Display for HyperplanePrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts = self.opts.unwrap_or_else(|| PrintOptions::from_fmt(f));

        let terms = self
            .plane
            .normal_vector()
            .iter()
            .enumerate()
            .map(|(i, c)| (c, format!("x_{}", i + 1)));

        if !write_terms(f, terms, &opts, "", true)? {
            f.write_char('0')?;
        }

        write!(f, " = {}", opts.format(self.plane.constant_term()))
    }
}

pub struct LinearSystemPrinter<'a> {
    pub system: &'a LinearSystem,
    pub opts: Option<PrintOptions>,
}

impl<'a> LinearSystemPrinter<'a> {
    pub fn new(system: &'a LinearSystem) -> LinearSystemPrinter<'a> {
        LinearSystemPrinter { system, opts: None }
    }
}

impl<'a> fmt::Display for LinearSystemPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts = self.opts.unwrap_or_else(|| PrintOptions::from_fmt(f));

        f.write_str("Linear System:")?;
        for (i, p) in self.system.iter().enumerate() {
            write!(
                f,
                "\nEquation {}: {}",
                i + 1,
                HyperplanePrinter::new_with_options(p, opts)
            )?;
        }
        Ok(())
    }
}

pub struct ParametrizationPrinter<'a> {
    pub parametrization: &'a Parametrization,
    pub opts: Option<PrintOptions>,
}

impl<'a> ParametrizationPrinter<'a> {
    pub fn new(parametrization: &'a Parametrization) -> ParametrizationPrinter<'a> {
        ParametrizationPrinter {
            parametrization,
            opts: None,
        }
    }
}

impl<'a> fmt::Display for ParametrizationPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts = self.opts.unwrap_or_else(|| PrintOptions::from_fmt(f));
        let p = self.parametrization;

        for (coord, base) in p.basepoint().iter().enumerate() {
            if coord > 0 {
                f.write_char('\n')?;
            }
            write!(f, "x_{} = {}", coord + 1, opts.format(base))?;

            let terms = p
                .direction_vectors()
                .iter()
                .enumerate()
                .map(|(j, d)| (&d[coord], format!("t_{}", j + 1)));
            write_terms(f, terms, &opts, " ", false)?;
        }
        Ok(())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts = PrintOptions::from_fmt(f);
        match self {
            Solution::Unique(v) => {
                f.write_str("Unique solution:")?;
                for (i, c) in v.iter().enumerate() {
                    write!(f, "\nx_{} = {}", i + 1, opts.format(c))?;
                }
                Ok(())
            }
            Solution::NoSolution => f.write_str("No solutions"),
            Solution::Parametrized(p) => write!(
                f,
                "Infinitely many solutions:\n{}",
                ParametrizationPrinter {
                    parametrization: p,
                    opts: Some(opts),
                }
            ),
        }
    }
}
