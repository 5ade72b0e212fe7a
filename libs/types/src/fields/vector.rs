//! Velocity vector and travel speed field groups

use super::limits::*;
use super::PresenceLayout;

crate::field_group! {
    /// Desired speed, elevation and orientation in global coordinates
    pub struct GlobalVector [presence: PresenceLayout::fixed(1, 0x1F)] {
        speed: scaled(0, SPEED),
        elevation: scaled(1, ELEVATION),
        heading: scaled(2, HEADING),
        roll: scaled(3, ROLL),
        pitch: scaled(4, PITCH),
    }
}

crate::field_group! {
    /// Desired speed, height and orientation in the local frame
    pub struct LocalVector [presence: PresenceLayout::fixed(1, 0x1F)] {
        speed: scaled(0, SPEED),
        z: scaled(1, LOCAL_Z),
        heading: scaled(2, HEADING),
        roll: scaled(3, ROLL),
        pitch: scaled(4, PITCH),
    }
}

crate::field_group! {
    /// Speed along the current path
    pub struct TravelSpeed {
        speed: required_scaled(SPEED),
    }
}

crate::presence_bits! {
    /// Presence bits of [`GlobalVector`] messages
    pub enum GlobalVectorBit {
        Speed = 0,
        Elevation = 1,
        Heading = 2,
        Roll = 3,
        Pitch = 4,
    }
}

crate::presence_bits! {
    /// Presence bits of [`LocalVector`] messages
    pub enum LocalVectorBit {
        Speed = 0,
        Z = 1,
        Heading = 2,
        Roll = 3,
        Pitch = 4,
    }
}
