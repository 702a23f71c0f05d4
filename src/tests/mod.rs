//! Bin-side integration tests: the full config → widget → preview path.

mod daylight_tests;
