//! Position, attitude, pose and velocity field groups
//!
//! Poses are composed: a global pose is a [`GlobalPosition`] (bits 0-2), its RMS
//! (bit 3), an [`Attitude`] (bits 4-6), its RMS (bit 7) and a time stamp (bit 8).

use super::limits::*;
use super::PresenceLayout;
use crate::time::JausTime;

crate::field_group! {
    /// WGS84 position
    pub struct GlobalPosition {
        /// Degrees, positive north
        latitude: scaled(0, LATITUDE),
        /// Degrees, positive east
        longitude: scaled(1, LONGITUDE),
        /// Meters above the ellipsoid
        elevation: scaled(2, ELEVATION),
    }
}

crate::field_group! {
    /// Position in the platform's local frame
    pub struct LocalPosition {
        x: scaled(0, LOCAL_X),
        y: scaled(1, LOCAL_Y),
        z: scaled(2, LOCAL_Z),
    }
}

crate::field_group! {
    /// Orientation as roll, pitch and yaw in radians
    pub struct Attitude {
        roll: scaled(0, ROLL),
        pitch: scaled(1, PITCH),
        yaw: scaled(2, YAW),
    }
}

crate::field_group! {
    /// Global position and attitude with error estimates
    pub struct GlobalPose [presence: PresenceLayout::TimeStamped] {
        position: group(GlobalPosition, 0),
        position_rms: scaled(3, POSITION_RMS),
        attitude: group(Attitude, 4),
        attitude_rms: scaled(7, ATTITUDE_RMS),
        /// Only legal from JAUS 3.0 on
        time_stamp: optional(8, JausTime),
    }
}

crate::field_group! {
    /// Local position and attitude with error estimates
    pub struct LocalPose [presence: PresenceLayout::TimeStamped] {
        position: group(LocalPosition, 0),
        position_rms: scaled(3, POSITION_RMS),
        attitude: group(Attitude, 4),
        attitude_rms: scaled(7, ATTITUDE_RMS),
        /// Only legal from JAUS 3.0 on
        time_stamp: optional(8, JausTime),
    }
}

crate::field_group! {
    /// Linear velocity and angular rates in the platform frame
    pub struct VelocityState [presence: PresenceLayout::TimeStamped] {
        velocity_x: scaled(0, VELOCITY_X),
        velocity_y: scaled(1, VELOCITY_Y),
        velocity_z: scaled(2, VELOCITY_Z),
        velocity_rms: scaled(3, VELOCITY_RMS),
        roll_rate: scaled(4, ROLL_RATE),
        pitch_rate: scaled(5, PITCH_RATE),
        yaw_rate: scaled(6, YAW_RATE),
        rate_rms: scaled(7, RATE_RMS),
        /// Only legal from JAUS 3.0 on
        time_stamp: optional(8, JausTime),
    }
}

crate::presence_bits! {
    /// Presence bits of [`GlobalPose`] messages
    pub enum GlobalPoseBit {
        Latitude = 0,
        Longitude = 1,
        Elevation = 2,
        PositionRms = 3,
        Roll = 4,
        Pitch = 5,
        Yaw = 6,
        AttitudeRms = 7,
        TimeStamp = 8,
    }
}

crate::presence_bits! {
    /// Presence bits of [`LocalPose`] messages
    pub enum LocalPoseBit {
        X = 0,
        Y = 1,
        Z = 2,
        PositionRms = 3,
        Roll = 4,
        Pitch = 5,
        Yaw = 6,
        AttitudeRms = 7,
        TimeStamp = 8,
    }
}

crate::presence_bits! {
    /// Presence bits of [`VelocityState`] messages
    pub enum VelocityStateBit {
        VelocityX = 0,
        VelocityY = 1,
        VelocityZ = 2,
        VelocityRms = 3,
        RollRate = 4,
        PitchRate = 5,
        YawRate = 6,
        RateRms = 7,
        TimeStamp = 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldGroup;
    use jaus_codec::{JausVersion, Stream};

    #[test]
    fn test_composed_presence_bits() {
        let mut pose = GlobalPose::new();
        pose.position_mut().set_latitude(42.0).unwrap();
        pose.attitude_mut().set_yaw(-1.0).unwrap();
        pose.set_attitude_rms(0.1).unwrap();

        assert_eq!(
            pose.presence(),
            GlobalPoseBit::mask_of(&[
                GlobalPoseBit::Latitude,
                GlobalPoseBit::Yaw,
                GlobalPoseBit::AttitudeRms
            ])
        );
        assert_eq!(pose.encoded_size(), 4 + 2 + 2);
    }

    #[test]
    fn test_composed_round_trip() {
        let mut pose = LocalPose::new();
        pose.position_mut().set_x(-12.25).unwrap();
        pose.position_mut().set_z(3.5).unwrap();
        pose.attitude_mut().set_roll(0.5).unwrap();
        pose.set_time_stamp(JausTime::new(3, 4, 5, 6, 7).unwrap());

        let mut stream = Stream::new();
        let written = pose.encode(&mut stream);
        assert_eq!(written, pose.encoded_size());

        let mut decoded = LocalPose::new();
        let consumed = decoded.decode(&mut stream, pose.presence()).unwrap();
        assert_eq!(consumed, written);
        assert_eq!(decoded.presence(), pose.presence());
        assert!((decoded.position().x().unwrap() + 12.25).abs() < 1e-3);
        assert_eq!(decoded.position().y(), None);
        assert_eq!(decoded.time_stamp(), pose.time_stamp());
    }

    #[test]
    fn test_time_stamped_layout() {
        let layout = <VelocityState as FieldGroup>::LAYOUT;
        assert_eq!(layout.size(JausVersion::V2_0), 1);
        assert_eq!(layout.mask(JausVersion::V2_0), 0xFF);
        assert_eq!(layout.size(JausVersion::V3_4), 2);
        assert_eq!(layout.mask(JausVersion::V3_0), 0x1FF);
        assert_eq!(GlobalPoseBit::TimeStamp.mask(), 0x100);
        assert_eq!(VelocityStateBit::try_from(4u32), Ok(VelocityStateBit::RollRate));
    }

    #[test]
    fn test_rejected_value_leaves_group_unchanged() {
        let mut position = GlobalPosition::new();
        position.set_latitude(10.0).unwrap();
        assert!(position.set_latitude(90.5).is_err());
        assert!(position.set_longitude(-180.01).is_err());
        assert_eq!(position.latitude(), Some(10.0));
        assert_eq!(position.longitude(), None);
        assert_eq!(position.presence(), 0b001);
    }
}
