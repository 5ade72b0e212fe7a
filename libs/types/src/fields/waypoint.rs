//! Waypoint field groups
//!
//! A waypoint's number and horizontal position are always on the wire; height
//! and orientation are optional.

use super::limits::*;
use super::PresenceLayout;

crate::field_group! {
    /// Waypoint in WGS84 coordinates
    pub struct GlobalWaypoint [presence: PresenceLayout::fixed(1, 0x0F)] {
        waypoint_number: required(u16),
        latitude: required_scaled(LATITUDE),
        longitude: required_scaled(LONGITUDE),
        elevation: scaled(0, ELEVATION),
        roll: scaled(1, ROLL),
        pitch: scaled(2, PITCH),
        yaw: scaled(3, YAW),
    }
}

crate::field_group! {
    /// Waypoint in the platform's local frame
    pub struct LocalWaypoint [presence: PresenceLayout::fixed(1, 0x0F)] {
        waypoint_number: required(u16),
        x: required_scaled(LOCAL_X),
        y: required_scaled(LOCAL_Y),
        z: scaled(0, LOCAL_Z),
        roll: scaled(1, ROLL),
        pitch: scaled(2, PITCH),
        yaw: scaled(3, YAW),
    }
}

crate::field_group! {
    /// Selects one waypoint of a stored path
    pub struct WaypointNumber {
        waypoint_number: required(u16),
    }
}

crate::field_group! {
    /// Number of waypoints in the stored path
    pub struct WaypointCount {
        waypoint_count: required(u16),
    }
}

crate::presence_bits! {
    /// Presence bits of [`GlobalWaypoint`] messages
    pub enum GlobalWaypointBit {
        Elevation = 0,
        Roll = 1,
        Pitch = 2,
        Yaw = 3,
    }
}

crate::presence_bits! {
    /// Presence bits of [`LocalWaypoint`] messages
    pub enum LocalWaypointBit {
        Z = 0,
        Roll = 1,
        Pitch = 2,
        Yaw = 3,
    }
}
