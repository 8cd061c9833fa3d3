use crate::error_metrics::ErrorReport;
use crate::nodes::NodeKind;

/// Result of one method in a comparison run.
///
/// [`MethodOutcome`]
/// - `algorithm_name` : e.g. `"newton"`
/// - `evaluated`      : approximant on the grid
/// - `abs_errors`     : `|f - p|` on the grid
/// - `errors`         : [`ErrorReport`] over the grid
#[derive(Debug, Clone)]
pub struct MethodOutcome {
    pub algorithm_name : &'static str,
    pub evaluated      : Vec<f64>,
    pub abs_errors     : Vec<f64>,
    pub errors         : ErrorReport,
}


/// Summary of a comparison run.
///
/// [`ComparisonReport`]
/// - `function_name` : catalog name of the target
/// - `node_kind`     : node distribution used
/// - `nodes`         : interpolation nodes, ascending
/// - `values`        : target sampled at `nodes`
/// - `grid`          : evaluation grid
/// - `target`        : target on `grid`
/// - `methods`       : one [`MethodOutcome`] per selected method, in selection order
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub function_name : &'static str,
    pub node_kind     : NodeKind,
    pub nodes         : Vec<f64>,
    pub values        : Vec<f64>,
    pub grid          : Vec<f64>,
    pub target        : Vec<f64>,
    pub methods       : Vec<MethodOutcome>,
}

impl ComparisonReport {
    pub fn outcome(&self, algorithm_name: &str) -> Option<&MethodOutcome> {
        self.methods.iter().find(|m| m.algorithm_name == algorithm_name)
    }

    /// Method with the smallest max error. NaN errors never win.
    pub fn best_by_max_error(&self) -> Option<&MethodOutcome> {
        self.methods
            .iter()
            .filter(|m| !m.errors.max_error.is_nan())
            .min_by(|l, r| l.errors.max_error.total_cmp(&r.errors.max_error))
    }
}

impl std::fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} on {} {} nodes:", self.function_name, self.nodes.len(), self.node_kind)?;
        for m in &self.methods {
            writeln!(f, "{}: {}", m.algorithm_name, m.errors)?;
        }
        Ok(())
    }
}
