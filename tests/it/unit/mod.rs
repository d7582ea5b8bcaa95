//! Unit tests for cardwheel.

mod geometry_config_tests;
