//! Actuator field groups: wrench effort and discrete devices

use super::limits::*;
use super::PresenceLayout;

crate::field_group! {
    /// Propulsive and resistive efforts as percent of maximum
    ///
    /// Propulsive efforts range -100..100; resistive (braking) efforts 0..100.
    pub struct WrenchEffort [presence: PresenceLayout::fixed(2, 0x0FFF)] {
        propulsive_linear_x: scaled(0, PROPULSIVE_LINEAR_X),
        propulsive_linear_y: scaled(1, PROPULSIVE_LINEAR_Y),
        propulsive_linear_z: scaled(2, PROPULSIVE_LINEAR_Z),
        propulsive_rotational_x: scaled(3, PROPULSIVE_ROTATIONAL_X),
        propulsive_rotational_y: scaled(4, PROPULSIVE_ROTATIONAL_Y),
        propulsive_rotational_z: scaled(5, PROPULSIVE_ROTATIONAL_Z),
        resistive_linear_x: scaled(6, RESISTIVE_LINEAR_X),
        resistive_linear_y: scaled(7, RESISTIVE_LINEAR_Y),
        resistive_linear_z: scaled(8, RESISTIVE_LINEAR_Z),
        resistive_rotational_x: scaled(9, RESISTIVE_ROTATIONAL_X),
        resistive_rotational_y: scaled(10, RESISTIVE_ROTATIONAL_Y),
        resistive_rotational_z: scaled(11, RESISTIVE_ROTATIONAL_Z),
    }
}

crate::field_group! {
    /// On/off style platform devices
    pub struct DiscreteDevices [presence: PresenceLayout::fixed(1, 0x0F)] {
        /// Bit 0 on/off, bit 1 automatic start, bit 2 automatic stop
        main_propulsion: optional(0, u8),
        /// Bit 0 parking brake, bit 1 horn
        parking_brake_and_horn: optional(1, u8),
        gear: optional(2, u8),
        transfer_case: optional(3, u8),
    }
}

crate::presence_bits! {
    /// Presence bits of [`WrenchEffort`] messages
    pub enum WrenchEffortBit {
        PropulsiveLinearX = 0,
        PropulsiveLinearY = 1,
        PropulsiveLinearZ = 2,
        PropulsiveRotationalX = 3,
        PropulsiveRotationalY = 4,
        PropulsiveRotationalZ = 5,
        ResistiveLinearX = 6,
        ResistiveLinearY = 7,
        ResistiveLinearZ = 8,
        ResistiveRotationalX = 9,
        ResistiveRotationalY = 10,
        ResistiveRotationalZ = 11,
    }
}

crate::presence_bits! {
    /// Presence bits of [`DiscreteDevices`] messages
    pub enum DiscreteDevicesBit {
        MainPropulsion = 0,
        ParkingBrakeAndHorn = 1,
        Gear = 2,
        TransferCase = 3,
    }
}
