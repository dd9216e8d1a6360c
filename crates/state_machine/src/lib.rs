pub mod trend_cause;
pub mod trend_state;
pub mod trend_transition;

#[cfg(test)]
mod trend_tests;
