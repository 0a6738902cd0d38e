//! Formatter options.

/// Options controlling what [`crate::render_with`] prints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    /// Print the step trace.
    pub show_steps: bool,
    /// Print the matrix under each step description.
    pub show_matrices: bool,
    /// Name stem of the unknowns (`x` gives `x1, x2, …`).
    pub variable_prefix: String,
    /// Name stem of the free parameters (`t` gives `t1, t2, …`).
    pub parameter_prefix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            show_steps: true,
            show_matrices: true,
            variable_prefix: "x".to_string(),
            parameter_prefix: "t".to_string(),
        }
    }
}

impl FormatConfig {
    /// Only the result and verification lines.
    #[must_use]
    pub fn summary() -> Self {
        Self {
            show_steps: false,
            ..Self::default()
        }
    }

    /// Step descriptions without matrices.
    #[must_use]
    pub fn with_matrices(mut self, show: bool) -> Self {
        self.show_matrices = show;
        self
    }

    /// Sets the unknown name stem.
    #[must_use]
    pub fn with_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = prefix.into();
        self
    }

    /// Sets the free-parameter name stem.
    #[must_use]
    pub fn with_parameter_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parameter_prefix = prefix.into();
        self
    }
}
