//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` through key
//! presses and inspect the resulting state and rendered buffer.

mod load_lifecycle;
