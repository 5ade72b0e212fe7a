//! Message Body Serialization Tests
//!
//! Covers the behavior shared by every catalog type:
//! - Field layouts and presence vectors of SetGlobalVector and SetWrenchEffort
//! - Range rejection without clamping
//! - Byte-count agreement between `body_size` and the bytes written
//! - Version gating and version-dependent presence vectors
//! - Idempotent clear

use jaus_types::fields::limits::{HEADING, SPEED};
use jaus_types::fields::{GlobalVectorBit, WrenchEffortBit};
use jaus_types::{
    Body, JausError, JausTime, JausVersion, MessageBody, ReportGlobalPose, ReportVelocityState,
    SetGlobalVector, SetGlobalWaypoint, SetWrenchEffort, Stream,
};

#[test]
fn test_set_global_vector_speed_and_heading() {
    let mut message = SetGlobalVector::new();
    message.set_speed(12.5).unwrap();
    message.set_heading(1.0).unwrap();

    let mut stream = Stream::new();
    let written = message.write_message_body(&mut stream, JausVersion::MAX).unwrap();
    assert_eq!(written, 5);
    assert_eq!(stream.as_bytes()[0], 0b0000_0101);

    let mut decoded = SetGlobalVector::new();
    assert_eq!(decoded.read_message_body(&mut stream, JausVersion::MAX).unwrap(), 5);

    assert_eq!(
        decoded.presence_vector(),
        GlobalVectorBit::mask_of(&[GlobalVectorBit::Speed, GlobalVectorBit::Heading])
    );
    assert!((decoded.speed().unwrap() - 12.5).abs() <= SPEED.resolution());
    assert!((decoded.heading().unwrap() - 1.0).abs() <= HEADING.resolution());
    assert_eq!(decoded.elevation(), None);
    assert_eq!(decoded.roll(), None);
    assert_eq!(decoded.pitch(), None);
}

#[test]
fn test_set_wrench_effort_limits() {
    let mut message = SetWrenchEffort::new();
    message.set_propulsive_linear_x(75.0).unwrap();

    let err = message.set_resistive_linear_x(-5.0).unwrap_err();
    assert!(matches!(err, JausError::OutOfRange { .. }));
    assert_eq!(message.resistive_linear_x(), None);
    assert_eq!(
        message.presence_vector(),
        WrenchEffortBit::PropulsiveLinearX.mask()
    );

    let mut stream = Stream::new();
    assert_eq!(message.write_message_body(&mut stream, JausVersion::MAX).unwrap(), 4);
    let mut decoded = SetWrenchEffort::new();
    decoded.read_message_body(&mut stream, JausVersion::MAX).unwrap();
    assert!((decoded.propulsive_linear_x().unwrap() - 75.0).abs() < 0.01);
}

#[test]
fn test_range_rejection_keeps_previous_value() {
    let mut message = SetGlobalVector::new();
    message.set_speed(40.0).unwrap();

    let epsilon = 1e-6;
    assert!(message.set_speed(SPEED.lower - epsilon).is_err());
    assert!(message.set_speed(SPEED.upper + epsilon).is_err());
    assert!(message.set_speed(f64::NAN).is_err());
    assert_eq!(message.speed(), Some(40.0));

    assert!(message.set_heading(HEADING.upper + epsilon).is_err());
    assert_eq!(message.heading(), None);
    assert_eq!(message.presence_vector() & GlobalVectorBit::Heading.mask(), 0);

    message.set_speed(SPEED.lower).unwrap();
    message.set_speed(SPEED.upper).unwrap();
    message.set_heading(HEADING.lower).unwrap();
}

#[test]
fn test_byte_count_agreement() {
    let mut pose = ReportGlobalPose::new();
    pose.position_mut().set_latitude(45.0).unwrap();
    pose.position_mut().set_longitude(-122.0).unwrap();
    pose.attitude_mut().set_yaw(0.25).unwrap();
    pose.set_attitude_rms(0.1).unwrap();

    for version in [JausVersion::V2_0, JausVersion::V3_0, JausVersion::V3_4] {
        let expected = pose.presence_vector_size(version) + 4 + 4 + 2 + 2;
        assert_eq!(pose.body_size(version), expected);

        let mut stream = Stream::new();
        assert_eq!(pose.write_message_body(&mut stream, version).unwrap(), expected);
        assert_eq!(stream.length(), expected);
    }

    let mut waypoint = SetGlobalWaypoint::new();
    waypoint.set_waypoint_number(3);
    waypoint.set_pitch(0.5).unwrap();
    assert_eq!(waypoint.body_size(JausVersion::MAX), 1 + 2 + 4 + 4 + 2);
}

#[test]
fn test_version_gating_moves_no_bytes() {
    let too_new = JausVersion::new(4);
    let mut message = SetGlobalVector::new();
    message.set_speed(1.0).unwrap();

    let mut stream = Stream::new();
    assert!(matches!(
        message.write_message_body(&mut stream, too_new),
        Err(JausError::UnsupportedVersion { version: 4, max: 3 })
    ));
    assert!(stream.is_empty());

    message.write_message_body(&mut stream, JausVersion::MAX).unwrap();
    let mut decoded = SetGlobalVector::new();
    assert!(matches!(
        decoded.read_message_body(&mut stream, too_new),
        Err(JausError::UnsupportedVersion { .. })
    ));
    assert_eq!(stream.read_position(), 0);
}

#[test]
fn test_pose_presence_vector_width_by_version() {
    let mut pose = ReportGlobalPose::new();
    pose.position_mut().set_elevation(100.0).unwrap();

    let mut v2 = Stream::new();
    assert_eq!(pose.write_message_body(&mut v2, JausVersion::V2_0).unwrap(), 1 + 4);
    let mut v3 = Stream::new();
    assert_eq!(pose.write_message_body(&mut v3, JausVersion::V3_0).unwrap(), 2 + 4);

    let mut decoded = ReportGlobalPose::new();
    decoded.read_message_body(&mut v2, JausVersion::V2_0).unwrap();
    assert_eq!(decoded.presence_vector(), pose.presence_vector());

    pose.set_time_stamp(JausTime::new(1, 2, 3, 4, 5).unwrap());
    let mut stream = Stream::new();
    assert!(matches!(
        pose.write_message_body(&mut stream, JausVersion::V2_0),
        Err(JausError::WriteFailure { .. })
    ));
    assert!(stream.is_empty());
}

#[test]
fn test_received_presence_vector_outside_mask() {
    let mut stream = Stream::from(vec![0b0010_0000u8]);
    let mut decoded = SetGlobalVector::new();
    assert!(matches!(
        decoded.read_message_body(&mut stream, JausVersion::MAX),
        Err(JausError::ReadFailure { .. })
    ));

    let mut stream = Stream::from(vec![0x00u8, 0x02]);
    let mut velocity = ReportVelocityState::new();
    assert!(velocity.read_message_body(&mut stream, JausVersion::MAX).is_err());
}

#[test]
fn test_truncated_body() {
    let mut stream = Stream::from(vec![0b0000_0001u8, 0x10]);
    let mut decoded = SetGlobalVector::new();
    assert!(matches!(
        decoded.read_message_body(&mut stream, JausVersion::MAX),
        Err(JausError::ReadFailure { .. })
    ));
}

#[test]
fn test_failed_read_leaves_body_cleared() {
    let mut decoded = SetGlobalVector::new();
    decoded.set_roll(0.5).unwrap();

    let mut stream = Stream::from(vec![0b0000_0101u8, 0x10, 0x00]);
    assert!(matches!(
        decoded.read_message_body(&mut stream, JausVersion::MAX),
        Err(JausError::ReadFailure { .. })
    ));
    assert_eq!(decoded.presence_vector(), 0);
    assert_eq!(decoded.speed(), None);
    assert_eq!(decoded.roll(), None);
    assert_eq!(decoded, SetGlobalVector::new());
}

#[test]
fn test_clear_is_idempotent() {
    let mut message = SetWrenchEffort::new();
    message.set_propulsive_rotational_z(-20.0).unwrap();
    message.set_resistive_linear_y(10.0).unwrap();

    message.clear_message_body();
    let once = message.clone();
    message.clear_message_body();
    assert_eq!(message, once);
    assert_eq!(message.presence_vector(), 0);

    let mut stream = Stream::new();
    assert_eq!(message.write_message_body(&mut stream, JausVersion::MAX).unwrap(), 2);
    assert_eq!(stream.as_bytes(), &[0, 0]);
}

#[test]
fn test_clone_is_independent() {
    let mut original = SetGlobalVector::new();
    original.set_speed(5.0).unwrap();
    let mut copy = original.clone();
    copy.set_speed(6.0).unwrap();
    copy.clear_heading();

    assert_eq!(original.speed(), Some(5.0));
    assert_eq!(copy.speed(), Some(6.0));

    let body = Body::from(original.clone());
    assert_eq!(SetGlobalVector::try_from(body), Ok(original));
}
