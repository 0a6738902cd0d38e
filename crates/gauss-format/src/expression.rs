//! Free-parameter expressions.

use gauss_linalg::LinearExpr;
use gauss_scalar::{Ring, Scalar};

/// Renders `constant + Σ c·t_k` the way it is written by hand.
///
/// The constant comes first and is dropped when it is zero and terms exist;
/// unit coefficients are omitted and signs are folded into the joins, so
/// `2 + (-1)·t1` prints as `2 - t1`.
#[must_use]
pub fn format_expression<S: Scalar>(expr: &LinearExpr<S>, parameter_prefix: &str) -> String {
    let mut out = String::new();
    if !expr.constant.is_zero() || expr.is_constant() {
        out.push_str(&expr.constant.to_string());
    }

    for term in &expr.terms {
        let magnitude = term.coefficient.abs();
        let body = if Ring::is_one(&magnitude) {
            format!("{parameter_prefix}{}", term.parameter)
        } else {
            format!("{magnitude}·{parameter_prefix}{}", term.parameter)
        };

        match (out.is_empty(), term.coefficient.is_negative()) {
            (true, false) => out.push_str(&body),
            (true, true) => {
                out.push('-');
                out.push_str(&body);
            }
            (false, false) => {
                out.push_str(" + ");
                out.push_str(&body);
            }
            (false, true) => {
                out.push_str(" - ");
                out.push_str(&body);
            }
        }
    }
    out
}
