//! Sensor subsystem — the ultrasonic ranging driver and the independent
//! BMP180 environmental channel.
//!
//! The two sensors share no state: the ranging driver feeds the fill-level
//! pipeline, the barometer only feeds the diagnostic log stream.

pub mod barometer;
pub mod ultrasonic;
