pub mod metrics;
pub mod report;

pub use metrics::{
    abs_differences,
    abs_errors,
    calculate_max_error,
    calculate_mse,
    evaluate,
    report_from_values,
};
pub use report::{sci, ErrorReport};
