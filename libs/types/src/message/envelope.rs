//! # Message Envelope
//!
//! [`Message`] pairs a [`Header`] with a catalog [`Body`]. Writing encodes the body
//! into a scratch stream first so the header can carry the body length; reading
//! decodes the header, picks the prototype named by its command code and reads the
//! body for the header's version.

use super::header::{AckNak, DataFlag, Header};
use crate::registry::{self, Body};
use jaus_codec::{with_scratch_stream, JausError, JausResult, Stream, MAX_DATA_SIZE};
use tracing::{debug, warn};

/// Header plus typed body
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub header: Header,
    pub body: Body,
}

impl Message {
    /// Wrap `body` in a default header carrying its command code
    pub fn new(body: impl Into<Body>) -> Self {
        let body = body.into();
        Self {
            header: Header::new(body.command_code()),
            body,
        }
    }

    pub fn with_header(header: Header, body: impl Into<Body>) -> Self {
        Self {
            header,
            body: body.into(),
        }
    }

    /// Response envelope: routing swapped, same sequence number and version
    ///
    /// The reply requests no acknowledgement and goes out as a single packet.
    pub fn reply(&self, body: impl Into<Body>) -> Self {
        let mut reply = Message::new(body);
        reply.header.copy_header_data(&self.header);
        reply.header.source = self.header.destination;
        reply.header.destination = self.header.source;
        reply.header.ack_nak = AckNak::None;
        reply.header.data_flag = DataFlag::Single;
        reply
    }

    /// Body as a concrete catalog type, or `None` for any other type
    pub fn body_as<T>(&self) -> Option<T>
    where
        T: TryFrom<Body>,
    {
        T::try_from(self.body.clone()).ok()
    }

    /// Take the body as a concrete type, handing the message back on mismatch
    pub fn into_body<T>(self) -> Result<T, Message>
    where
        T: TryFrom<Body, Error = Body>,
    {
        let header = self.header;
        T::try_from(self.body).map_err(|body| Message { header, body })
    }

    /// Append header and body; returns bytes written
    ///
    /// The header's command code and data size are taken from the body, the
    /// rest of the header is written as held.
    pub fn write(&self, stream: &mut Stream) -> JausResult<usize> {
        let version = self.header.version;
        let body_bytes = with_scratch_stream(|scratch| -> JausResult<Vec<u8>> {
            self.body.write_message_body(scratch, version)?;
            Ok(scratch.as_bytes().to_vec())
        })?;

        if body_bytes.len() > MAX_DATA_SIZE {
            warn!(
                command_code = %self.body.command_code(),
                size = body_bytes.len(),
                "body does not fit a single packet"
            );
            return Err(JausError::MessageTooLarge {
                size: body_bytes.len(),
                max: MAX_DATA_SIZE,
            });
        }

        let mut header = self.header.clone();
        header.command_code = self.body.command_code().raw();
        header.data_size = body_bytes.len() as u16;

        let written = header.write(stream)? + stream.write_bytes(&body_bytes);
        debug!(
            command_code = %self.body.command_code(),
            source = %header.source,
            destination = %header.destination,
            sequence = header.sequence_number,
            bytes = written,
            "message written"
        );
        Ok(written)
    }

    /// Consume one message, checking the body length against the header
    ///
    /// A message whose header or body is rejected is still consumed up to the
    /// length its header declares, so the next read starts at the next message.
    /// Nothing is consumed when the stream holds less than a whole message.
    pub fn read(stream: &mut Stream) -> JausResult<Self> {
        Self::read_with(stream, true)
    }

    pub(crate) fn read_with(stream: &mut Stream, verify_data_size: bool) -> JausResult<Self> {
        let header = match Header::peek(stream) {
            Ok(header) => header,
            Err(err) => {
                discard_rejected_frame(stream);
                return Err(err);
            }
        };

        let data_size = usize::from(header.data_size);
        let frame_size = Header::SIZE + data_size;
        if stream.remaining() < frame_size {
            return Err(JausError::read_failure(
                "message body",
                frame_size,
                stream.remaining(),
            ));
        }
        stream.read_bytes(Header::SIZE)?;
        let mut frame = Stream::from(stream.read_bytes(data_size)?);

        let mut body = registry::create(header.command_code)?;
        let consumed = body.read_message_body(&mut frame, header.version)?;
        if verify_data_size && consumed != data_size {
            warn!(
                command_code = %body.command_code(),
                data_size = header.data_size,
                consumed,
                "body length disagrees with header data size"
            );
            return Err(JausError::read_failure(
                format!("{} data size", body.name()),
                header.data_size.into(),
                consumed,
            ));
        }

        debug!(
            command_code = %body.command_code(),
            source = %header.source,
            destination = %header.destination,
            sequence = header.sequence_number,
            bytes = consumed,
            "message read"
        );
        Ok(Self { header, body })
    }
}

/// Skip a message whose header failed validation, trusting only its data size
fn discard_rejected_frame(stream: &mut Stream) {
    let Some(frame_size) = Header::declared_frame_size(stream.unread()) else {
        return;
    };
    if frame_size <= stream.remaining() {
        warn!(bytes = frame_size, "discarding message with rejected header");
        // length checked above
        let _ = stream.read_bytes(frame_size);
    }
}
