//! Solution classification.

use smallvec::SmallVec;

use gauss_scalar::Scalar;

/// `coefficient · t<parameter>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Term<S> {
    /// Multiplier of the parameter.
    pub coefficient: S,
    /// 1-based free-parameter index.
    pub parameter: usize,
}

/// An affine expression `constant + Σ coefficient · t_k` over the free
/// parameters of an infinite solution family.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearExpr<S> {
    /// The value when every parameter is 0.
    pub constant: S,
    /// Parameter terms in increasing parameter order.
    pub terms: SmallVec<[Term<S>; 4]>,
}

impl<S: Scalar> LinearExpr<S> {
    /// An expression with no parameter terms.
    #[must_use]
    pub fn from_constant(value: S) -> Self {
        Self {
            constant: value,
            terms: SmallVec::new(),
        }
    }

    /// The bare parameter `t<parameter>`.
    #[must_use]
    pub fn parameter(parameter: usize) -> Self {
        let mut expr = Self::from_constant(S::zero());
        expr.push_term(S::one(), parameter);
        expr
    }

    pub(crate) fn push_term(&mut self, coefficient: S, parameter: usize) {
        self.terms.push(Term {
            coefficient,
            parameter,
        });
    }

    /// Returns true if no parameter appears.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// Substitutes `params[k - 1]` for each `t_k`.
    ///
    /// # Panics
    ///
    /// Panics if a term refers to a parameter beyond `params`.
    #[must_use]
    pub fn evaluate(&self, params: &[S]) -> S {
        self.terms.iter().fold(self.constant.clone(), |acc, term| {
            acc + term.coefficient.clone() * params[term.parameter - 1].clone()
        })
    }
}

/// The outcome of reducing a system.
#[derive(Clone, Debug, PartialEq)]
pub enum SolutionResult<S> {
    /// Exactly one solution; `values[j]` is `x_{j+1}`.
    Unique(Vec<S>),

    /// No solution: `row` of the reduced matrix reads `0 = c` with `c ≠ 0`.
    Inconsistent {
        /// 0-based row of the first contradiction.
        row: usize,
    },

    /// Infinitely many solutions.
    Infinite {
        /// The solution with every free parameter set to 0.
        particular: Vec<S>,
        /// `expressions[j]` gives `x_{j+1}` in terms of `t1, t2, …`.
        expressions: Vec<LinearExpr<S>>,
        /// The variable column behind each parameter: `t_k` is column
        /// `free_columns[k - 1]`.
        free_columns: Vec<usize>,
    },
}

impl<S: Scalar> SolutionResult<S> {
    /// Returns true for a unique solution.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        matches!(self, SolutionResult::Unique(_))
    }

    /// Returns true for an inconsistent system.
    #[must_use]
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, SolutionResult::Inconsistent { .. })
    }

    /// Returns true for an infinite family.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, SolutionResult::Infinite { .. })
    }

    /// A concrete solution vector: the unique solution or the particular one.
    #[must_use]
    pub fn values(&self) -> Option<&[S]> {
        match self {
            SolutionResult::Unique(values) => Some(values.as_slice()),
            SolutionResult::Infinite { particular, .. } => Some(particular.as_slice()),
            SolutionResult::Inconsistent { .. } => None,
        }
    }

    /// Number of free parameters (0 unless infinite).
    #[must_use]
    pub fn num_parameters(&self) -> usize {
        match self {
            SolutionResult::Infinite { free_columns, .. } => free_columns.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_rational::Rational;

    fn q(n: i64) -> Rational {
        Rational::from_integer(n)
    }

    #[test]
    fn test_evaluate() {
        let mut expr = LinearExpr::from_constant(q(2));
        expr.push_term(q(-1), 1);
        expr.push_term(Rational::new(1, 2), 2);

        assert_eq!(expr.evaluate(&[q(0), q(0)]), q(2));
        assert_eq!(expr.evaluate(&[q(3), q(4)]), q(1));
        assert!(!expr.is_constant());
    }

    #[test]
    fn test_parameter() {
        let expr: LinearExpr<Rational> = LinearExpr::parameter(2);
        assert_eq!(expr.evaluate(&[q(9), q(5)]), q(5));
    }

    #[test]
    fn test_accessors() {
        let unique = SolutionResult::Unique(vec![q(1), q(2)]);
        assert!(unique.is_unique());
        assert_eq!(unique.values(), Some(&[q(1), q(2)][..]));
        assert_eq!(unique.num_parameters(), 0);

        let none: SolutionResult<Rational> = SolutionResult::Inconsistent { row: 1 };
        assert!(none.is_inconsistent());
        assert_eq!(none.values(), None);
    }
}
