//! Host-side integration tests for the ranging pipeline.
//!
//! Everything here runs without hardware: the ranging driver is exercised
//! against a simulated clock and echo signal, and the sampling service
//! against scripted measurement results.

mod mock_hw;
mod sampling_tests;
