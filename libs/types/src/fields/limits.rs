//! Scaled field limits
//!
//! Declared range and wire width of every scaled field in the catalog. Angles are
//! radians, distances meters, speeds meters per second, efforts percent.

use jaus_codec::ScaledField;
use jaus_codec::ScaledInteger::{Int, Short, UInt, UShort};
use std::f64::consts::PI;

// Global position
pub const LATITUDE: ScaledField = ScaledField::new("latitude", -90.0, 90.0, Int);
pub const LONGITUDE: ScaledField = ScaledField::new("longitude", -180.0, 180.0, Int);
pub const ELEVATION: ScaledField = ScaledField::new("elevation", -10_000.0, 35_000.0, Int);
pub const POSITION_RMS: ScaledField = ScaledField::new("position_rms", 0.0, 100.0, UInt);

// Local position
pub const LOCAL_X: ScaledField = ScaledField::new("x", -100_000.0, 100_000.0, Int);
pub const LOCAL_Y: ScaledField = ScaledField::new("y", -100_000.0, 100_000.0, Int);
pub const LOCAL_Z: ScaledField = ScaledField::new("z", -100_000.0, 100_000.0, Int);

// Attitude
pub const ROLL: ScaledField = ScaledField::new("roll", -PI, PI, Short);
pub const PITCH: ScaledField = ScaledField::new("pitch", -PI, PI, Short);
pub const YAW: ScaledField = ScaledField::new("yaw", -PI, PI, Short);
pub const HEADING: ScaledField = ScaledField::new("heading", -PI, PI, Short);
pub const ATTITUDE_RMS: ScaledField = ScaledField::new("attitude_rms", 0.0, PI, UShort);

// Velocity
pub const SPEED: ScaledField = ScaledField::new("speed", 0.0, 10_000.0, UShort);
pub const VELOCITY_X: ScaledField = ScaledField::new("velocity_x", -65.534, 65.534, Int);
pub const VELOCITY_Y: ScaledField = ScaledField::new("velocity_y", -65.534, 65.534, Int);
pub const VELOCITY_Z: ScaledField = ScaledField::new("velocity_z", -65.534, 65.534, Int);
pub const VELOCITY_RMS: ScaledField = ScaledField::new("velocity_rms", 0.0, 100.0, UInt);
pub const ROLL_RATE: ScaledField = ScaledField::new("roll_rate", -32.767, 32.767, Short);
pub const PITCH_RATE: ScaledField = ScaledField::new("pitch_rate", -32.767, 32.767, Short);
pub const YAW_RATE: ScaledField = ScaledField::new("yaw_rate", -32.767, 32.767, Short);
pub const RATE_RMS: ScaledField = ScaledField::new("rate_rms", 0.0, PI, UShort);

// Wrench effort: propulsive efforts are signed, resistive efforts only brake
pub const PROPULSIVE_LINEAR_X: ScaledField = ScaledField::new("propulsive_linear_x", -100.0, 100.0, Short);
pub const PROPULSIVE_LINEAR_Y: ScaledField = ScaledField::new("propulsive_linear_y", -100.0, 100.0, Short);
pub const PROPULSIVE_LINEAR_Z: ScaledField = ScaledField::new("propulsive_linear_z", -100.0, 100.0, Short);
pub const PROPULSIVE_ROTATIONAL_X: ScaledField = ScaledField::new("propulsive_rotational_x", -100.0, 100.0, Short);
pub const PROPULSIVE_ROTATIONAL_Y: ScaledField = ScaledField::new("propulsive_rotational_y", -100.0, 100.0, Short);
pub const PROPULSIVE_ROTATIONAL_Z: ScaledField = ScaledField::new("propulsive_rotational_z", -100.0, 100.0, Short);
pub const RESISTIVE_LINEAR_X: ScaledField = ScaledField::new("resistive_linear_x", 0.0, 100.0, Short);
pub const RESISTIVE_LINEAR_Y: ScaledField = ScaledField::new("resistive_linear_y", 0.0, 100.0, Short);
pub const RESISTIVE_LINEAR_Z: ScaledField = ScaledField::new("resistive_linear_z", 0.0, 100.0, Short);
pub const RESISTIVE_ROTATIONAL_X: ScaledField = ScaledField::new("resistive_rotational_x", 0.0, 100.0, Short);
pub const RESISTIVE_ROTATIONAL_Y: ScaledField = ScaledField::new("resistive_rotational_y", 0.0, 100.0, Short);
pub const RESISTIVE_ROTATIONAL_Z: ScaledField = ScaledField::new("resistive_rotational_z", 0.0, 100.0, Short);
