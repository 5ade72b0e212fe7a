//! # Message Body Contract
//!
//! Every catalog message implements [`MessageBody`]. Implementors describe their
//! presence vector and encode/decode their fields; the provided
//! [`write_message_body`](MessageBody::write_message_body) and
//! [`read_message_body`](MessageBody::read_message_body) wrap that with the checks
//! shared by all types:
//!
//! 1. Version gate: a version newer than the type supports fails before the
//!    stream is touched.
//! 2. Presence vector gate: on write, bits outside the version's mask fail
//!    before the stream is touched; on read, a received vector claiming such bits
//!    fails.
//! 3. Byte-count agreement: bytes moved must equal presence vector size plus the
//!    widths of the present fields.

use crate::command_code::CommandCode;
use jaus_codec::{JausError, JausResult, JausVersion, Stream};
use std::fmt;
use tracing::warn;

/// Serialization contract of a message body
pub trait MessageBody: Clone + Default + fmt::Debug + PartialEq {
    /// Fixed command code of the type
    const COMMAND_CODE: CommandCode;

    /// Newest protocol version the type can be encoded for
    const MAX_VERSION: JausVersion = JausVersion::MAX;

    /// Type name used in diagnostics
    const NAME: &'static str;

    /// Presence vector size in bytes for `version` (0 when the body has none)
    fn presence_vector_size(&self, version: JausVersion) -> usize;

    /// Bits a presence vector may set for `version`
    fn presence_vector_mask(&self, version: JausVersion) -> u32;

    /// Current presence vector, derived from the fields held
    fn presence_vector(&self) -> u32;

    /// Bytes the body occupies on the wire for `version`
    fn body_size(&self, version: JausVersion) -> usize;

    /// Append the presence vector and fields without integrity checks
    fn encode_body(&self, stream: &mut Stream, version: JausVersion) -> JausResult<usize>;

    /// Consume the presence vector and fields into a cleared body
    fn decode_body(&mut self, stream: &mut Stream, version: JausVersion) -> JausResult<usize>;

    /// Reset every field and the presence vector
    fn clear_message_body(&mut self) {
        *self = Self::default();
    }

    /// Append the body to `stream`; returns bytes written
    fn write_message_body(&self, stream: &mut Stream, version: JausVersion) -> JausResult<usize> {
        check_version(Self::NAME, version, Self::MAX_VERSION)?;

        let vector = self.presence_vector();
        let mask = self.presence_vector_mask(version);
        if (vector & !mask) != 0 {
            warn!(
                message_type = Self::NAME,
                %version,
                vector,
                mask,
                "presence vector holds fields not defined for this version"
            );
            return Err(JausError::write_failure(
                format!(
                    "{}: presence vector {vector:#x} outside mask {mask:#x} for version {version}",
                    Self::NAME
                ),
                self.body_size(version),
                0,
            ));
        }

        let expected = self.body_size(version);
        let start = stream.length();
        let written = self.encode_body(stream, version)?;
        let appended = stream.length() - start;
        if written != expected || appended != expected {
            warn!(
                message_type = Self::NAME,
                expected, written, appended, "body byte count mismatch on write"
            );
            return Err(JausError::write_failure(Self::NAME, expected, appended));
        }
        Ok(written)
    }

    /// Replace this body with one consumed from `stream`; returns bytes read
    ///
    /// On failure the body is left cleared, never partially decoded.
    fn read_message_body(&mut self, stream: &mut Stream, version: JausVersion) -> JausResult<usize> {
        check_version(Self::NAME, version, Self::MAX_VERSION)?;

        self.clear_message_body();
        let mut decoded = Self::default();
        let start = stream.read_position();
        let read = decoded.decode_body(stream, version)?;
        let consumed = stream.read_position() - start;
        let expected = decoded.body_size(version);
        if read != consumed || consumed != expected {
            warn!(
                message_type = Self::NAME,
                expected, read, consumed, "body byte count mismatch on read"
            );
            return Err(JausError::read_failure(Self::NAME, expected, consumed));
        }
        *self = decoded;
        Ok(consumed)
    }
}

fn check_version(name: &str, version: JausVersion, max: JausVersion) -> JausResult<()> {
    if version > max {
        warn!(message_type = name, %version, %max, "unsupported protocol version");
        return Err(JausError::unsupported_version(version.raw(), max.raw()));
    }
    Ok(())
}

/// Consume a presence vector of `size` bytes, rejecting bits outside `mask`
pub fn read_presence_vector(
    stream: &mut Stream,
    size: usize,
    mask: u32,
    name: &str,
) -> JausResult<u32> {
    let vector = stream.read_presence_vector(size)?;
    if (vector & !mask) != 0 {
        warn!(
            message_type = name,
            vector,
            mask,
            "received presence vector sets undefined bits"
        );
        return Err(JausError::invalid_presence_vector(name, vector, mask));
    }
    Ok(vector)
}
