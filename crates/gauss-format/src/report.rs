//! Full solution reports.

use std::fmt;

use gauss_linalg::{SolutionResult, Step};
use gauss_scalar::Scalar;

use crate::config::FormatConfig;
use crate::expression::format_expression;
use crate::matrix::format_matrix;

/// Renders the trace, the result and the verification outcome with the
/// default [`FormatConfig`].
///
/// `verified` is `None` when no check was run; the verification line is then
/// left out.
#[must_use]
pub fn render<S: Scalar>(
    steps: &[Step<S>],
    solution: &SolutionResult<S>,
    verified: Option<bool>,
) -> String {
    render_with(&FormatConfig::default(), steps, solution, verified)
}

/// Like [`render`], with explicit options.
#[must_use]
pub fn render_with<S: Scalar>(
    config: &FormatConfig,
    steps: &[Step<S>],
    solution: &SolutionResult<S>,
    verified: Option<bool>,
) -> String {
    Report {
        config,
        steps,
        solution,
        verified,
    }
    .to_string()
}

struct Report<'a, S> {
    config: &'a FormatConfig,
    steps: &'a [Step<S>],
    solution: &'a SolutionResult<S>,
    verified: Option<bool>,
}

impl<S: Scalar> Report<'_, S> {
    fn write_trace(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "Step {}: {}", index + 1, step.op())?;
            if self.config.show_matrices {
                writeln!(f, "{}", format_matrix(step.matrix()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_values(&self, f: &mut fmt::Formatter<'_>, values: &[S]) -> fmt::Result {
        for (index, value) in values.iter().enumerate() {
            writeln!(f, "  {}{} = {value}", self.config.variable_prefix, index + 1)?;
        }
        Ok(())
    }

    fn write_result(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.solution {
            SolutionResult::Unique(values) => {
                writeln!(f, "Result: unique solution")?;
                self.write_values(f, values)
            }
            SolutionResult::Inconsistent { row } => {
                write!(f, "Result: no solution, R{} reads 0 = ", row + 1)?;
                match self.steps.last() {
                    Some(step) => writeln!(f, "{}", step.matrix().constant(*row)),
                    None => writeln!(f, "c with c ≠ 0"),
                }
            }
            SolutionResult::Infinite {
                particular,
                expressions,
                free_columns,
            } => {
                let count = free_columns.len();
                writeln!(
                    f,
                    "Result: infinitely many solutions ({count} free parameter{})",
                    if count == 1 { "" } else { "s" }
                )?;
                writeln!(f, "Particular solution (all parameters 0):")?;
                self.write_values(f, particular)?;
                writeln!(f, "General solution:")?;
                for (index, expr) in expressions.iter().enumerate() {
                    writeln!(
                        f,
                        "  {}{} = {}",
                        self.config.variable_prefix,
                        index + 1,
                        format_expression(expr, &self.config.parameter_prefix)
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl<S: Scalar> fmt::Display for Report<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gauss-Jordan elimination ({})", S::MODE)?;
        writeln!(f)?;
        if self.config.show_steps {
            self.write_trace(f)?;
        }
        self.write_result(f)?;
        if let Some(passed) = self.verified {
            writeln!(f)?;
            writeln!(
                f,
                "Verification: {}",
                if passed { "passed" } else { "failed" }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauss_linalg::{EliminationEngine, Matrix};
    use gauss_rational::Rational;
    use gauss_scalar::Real;

    fn reduce(rows: &[[i64; 3]]) -> gauss_linalg::Reduction<Rational> {
        EliminationEngine::reduce(&Matrix::from_integers(rows).unwrap()).unwrap()
    }

    #[test]
    fn test_unique_report() {
        let reduction = reduce(&[[1, 2, 5], [3, 4, 11]]);
        let text = render(&reduction.steps, &reduction.classification, Some(true));

        assert!(text.starts_with("Gauss-Jordan elimination (exact arithmetic)\n"));
        assert!(text.contains("Step 1: initial matrix\n⎡ 1 2 │  5 ⎤\n⎣ 3 4 │ 11 ⎦\n"));
        assert!(text.contains("Step 2: R1 ↔ R2\n"));
        assert!(text.contains("Result: unique solution\n  x1 = 1\n  x2 = 2\n"));
        assert!(text.ends_with("Verification: passed\n"));
    }

    #[test]
    fn test_infinite_report() {
        let reduction = reduce(&[[1, 1, 2], [2, 2, 4]]);
        let text = render(&reduction.steps, &reduction.classification, Some(true));

        assert!(text.contains("infinitely many solutions (1 free parameter)"));
        assert!(text.contains("Particular solution (all parameters 0):\n  x1 = 2\n  x2 = 0\n"));
        assert!(text.contains("General solution:\n  x1 = 2 - t1\n  x2 = t1\n"));
    }

    #[test]
    fn test_inconsistent_report() {
        let reduction = reduce(&[[1, 1, 1], [1, 1, 5]]);
        let text = render(&reduction.steps, &reduction.classification, None);

        assert!(text.contains("Result: no solution, R2 reads 0 = 4\n"));
        assert!(!text.contains("Verification"));
    }

    #[test]
    fn test_config_controls_output() {
        let reduction = reduce(&[[1, 1, 2], [2, 2, 4]]);

        let summary = render_with(
            &FormatConfig::summary(),
            &reduction.steps,
            &reduction.classification,
            Some(false),
        );
        assert!(!summary.contains("Step 1"));
        assert!(summary.ends_with("Verification: failed\n"));

        let config = FormatConfig::default()
            .with_matrices(false)
            .with_variable_prefix("y")
            .with_parameter_prefix("s");
        let text = render_with(&config, &reduction.steps, &reduction.classification, None);
        assert!(text.contains("Step 2: R1 ↔ R2\n\n"));
        assert!(!text.contains('⎡'));
        assert!(text.contains("  y1 = 2 - s1\n"));
    }

    #[test]
    fn test_float_header() {
        let m: Matrix<Real> = Matrix::from_integers(&[[2, 1]]).unwrap();
        let reduction = EliminationEngine::reduce(&m).unwrap();
        let text = render(&reduction.steps, &reduction.classification, Some(true));
        assert!(text.starts_with("Gauss-Jordan elimination (floating-point arithmetic)\n"));
        assert!(text.contains("  x1 = 0.5\n"));
    }
}
