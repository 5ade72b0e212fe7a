//! Envelope and Dispatch Tests
//!
//! Full messages through header, command code dispatch and body:
//! - Every catalog prototype encodes and decodes through the envelope
//! - Unknown command codes and bad headers are rejected
//! - Codec configuration flows into outgoing headers

use jaus_types::command_code::MessageCategory;
use jaus_types::registry;
use jaus_types::{
    Address, Body, CodecConfig, CommandCode, Header, JausError, JausVersion, Message,
    MessageCodec, ReportGlobalWaypoint, ReportWrenchEffort, SetGlobalVector, Stream, HEADER_SIZE,
};

#[test]
fn test_every_prototype_round_trips() {
    for code in registry::supported_command_codes() {
        let message = Message::new(Body::prototype(code));
        let mut stream = Stream::new();
        let written = message.write(&mut stream).unwrap();
        assert_eq!(
            written,
            HEADER_SIZE + message.body.body_size(JausVersion::MAX),
            "{code}"
        );

        let decoded = Message::read(&mut stream).unwrap();
        assert_eq!(decoded.body.command_code(), code);
        assert_eq!(decoded.body, message.body, "{code}");
    }
}

#[test]
fn test_queries_answered_by_catalogued_reports() {
    for code in registry::supported_command_codes() {
        if code.category() != MessageCategory::Query {
            continue;
        }
        let response = code.response().unwrap();
        assert_eq!(response.category(), MessageCategory::Inform);
        assert!(registry::create(response.raw()).is_ok());
    }
}

#[test]
fn test_unknown_command_code() {
    let mut header = Header::default();
    header.command_code = 0x0999;
    let mut stream = Stream::new();
    header.write(&mut stream).unwrap();

    assert_eq!(
        Message::read(&mut stream),
        Err(JausError::UnknownCommandCode(0x0999))
    );
    assert!(CommandCode::from_raw(0x0999).is_err());
}

#[test]
fn test_header_version_selects_body_layout() {
    let mut report = ReportWrenchEffort::new();
    report.set_resistive_rotational_z(50.0).unwrap();

    for version in [JausVersion::V2_0, JausVersion::V3_3] {
        let mut message = Message::new(report.clone());
        message.header.version = version;

        let mut stream = Stream::new();
        message.write(&mut stream).unwrap();
        let decoded = Message::read(&mut stream).unwrap();
        assert_eq!(decoded.header.version, version);
        assert_eq!(decoded.body, message.body);
    }
}

#[test]
fn test_header_rejects_unsupported_version() {
    let mut stream = Stream::new();
    Message::new(SetGlobalVector::new()).write(&mut stream).unwrap();
    let mut bytes = stream.into_bytes();
    bytes[1] = 0x05;

    let mut stream = Stream::from(bytes);
    assert!(matches!(
        Message::read(&mut stream),
        Err(JausError::UnsupportedVersion { version: 5, .. })
    ));
}

#[test]
fn test_codec_round_trip_with_required_elevation() {
    let mut codec = MessageCodec::new(CodecConfig::default());
    let mut report = ReportGlobalWaypoint::new();
    report.set_waypoint_number(7);
    report.set_latitude(10.0).unwrap();
    report.set_longitude(20.0).unwrap();

    let controller = Address::new(1, 1, 1, 1);
    let platform = Address::new(1, 2, 33, 1);
    let message = codec.message(report, controller, platform);
    let bytes = codec.encode(&message).unwrap();
    let decoded: ReportGlobalWaypoint = codec.decode(&bytes).unwrap().into_body().unwrap();

    assert_eq!(decoded.waypoint_number(), 7);
    assert!(matches!(
        decoded.elevation(),
        Err(JausError::FieldNotPresent { field: "elevation" })
    ));
}

#[test]
fn test_consecutive_messages_in_one_stream() {
    let mut first = SetGlobalVector::new();
    first.set_pitch(-0.5).unwrap();
    let second = ReportWrenchEffort::new();

    let mut stream = Stream::new();
    Message::new(first).write(&mut stream).unwrap();
    Message::new(second).write(&mut stream).unwrap();

    assert!(matches!(
        Message::read(&mut stream).unwrap().body,
        Body::SetGlobalVector(_)
    ));
    assert!(matches!(
        Message::read(&mut stream).unwrap().body,
        Body::ReportWrenchEffort(_)
    ));
    assert_eq!(stream.remaining(), 0);
}
