use log::{debug, trace};

use crate::comparison::config::ComparisonCfg;
use crate::comparison::errors::ComparisonError;
use crate::comparison::report::{ComparisonReport, MethodOutcome};
use crate::error_metrics::{abs_differences, report_from_values};
use crate::functions::{TargetFunction, Univariate};
use crate::interpolation::build_with;
use crate::nodes::{linspace, try_generate_nodes};


/// Runs every method selected in `cfg` against the configured target.
///
/// # Behavior
/// - Generates `cfg.n_nodes()` nodes on the interval (ascending).
/// - Samples the target at the nodes.
/// - Builds each approximant through the validating builders.
/// - Evaluates target and approximants on `linspace(a, b, grid_size)`.
///
/// # Errors
/// - [`ComparisonError::Nodes`] for an invalid interval or node count.
/// - [`ComparisonError::Interpolation`] if the generated sample set is
///   rejected, e.g. nodes closer than the minimum spacing.
pub fn compare(cfg: &ComparisonCfg) -> Result<ComparisonReport, ComparisonError> {
    let f = TargetFunction::new(cfg.function());
    let (a, b) = cfg.interval();

    let nodes  = try_generate_nodes(a, b, cfg.n_nodes(), cfg.node_kind())?;
    let values = f.eval_many(&nodes);
    let grid   = linspace(a, b, cfg.grid_size());
    let target = f.eval_many(&grid);

    debug!(
        "comparison: {} with {} {} nodes on [{a}, {b}], {} methods",
        f.name(),
        nodes.len(),
        cfg.node_kind(),
        cfg.methods().len(),
    );

    let mut methods = Vec::with_capacity(cfg.methods().len());
    for &alg in cfg.methods() {
        let p = build_with(alg, &nodes, &values)?;

        let evaluated = p.eval_many(&grid);

        let outcome = MethodOutcome {
            algorithm_name : alg.algorithm_name(),
            abs_errors     : abs_differences(&target, &evaluated),
            errors         : report_from_values(&target, &evaluated),
            evaluated,
        };
        trace!("comparison: {}: {}", outcome.algorithm_name, outcome.errors);

        methods.push(outcome);
    }

    Ok(ComparisonReport {
        function_name: f.name(),
        node_kind: cfg.node_kind(),
        nodes,
        values,
        grid,
        target,
        methods,
    })
}
