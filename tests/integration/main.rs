//! Integration test suite: full controller scenarios over mock hardware.

mod control_tests;
mod mock_hw;
mod protocol_tests;
