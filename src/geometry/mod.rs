pub mod hit_testing;

pub use hit_testing::{FontMetrics, element_bounds, hit_test};
