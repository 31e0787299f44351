/// Numeric conversion helpers.
///
/// Converts parsed integer literals into the floating-point values the
/// evaluator works with, refusing any conversion that would silently round.
pub mod num;
