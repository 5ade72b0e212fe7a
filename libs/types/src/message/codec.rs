//! # Envelope Codec
//!
//! Byte-slice front end over [`Message`]: stamps outgoing headers from
//! [`CodecConfig`] and a [`SequenceCounter`], enforces the configured size limit,
//! and decodes inbound buffers.

use super::envelope::Message;
use super::header::{Header, SequenceCounter};
use crate::address::Address;
use crate::config::CodecConfig;
use crate::registry::Body;
use jaus_codec::{JausError, JausResult, Stream, HEADER_SIZE};
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct MessageCodec {
    config: CodecConfig,
    sequence: SequenceCounter,
}

impl MessageCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            sequence: SequenceCounter::new(),
        }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Build an outgoing message with version, priority and the next sequence number
    pub fn message(&mut self, body: impl Into<Body>, destination: Address, source: Address) -> Message {
        let body = body.into();
        let header = Header {
            priority: self.config.default_priority,
            version: self.config.jaus_version(),
            command_code: body.command_code().raw(),
            destination,
            source,
            sequence_number: self.sequence.next_sequence(),
            ..Header::default()
        };
        Message::with_header(header, body)
    }

    pub fn encode(&self, message: &Message) -> JausResult<Vec<u8>> {
        let body_size = message.body.body_size(message.header.version);
        if body_size > self.config.max_data_size {
            warn!(
                command_code = %message.body.command_code(),
                body_size,
                limit = self.config.max_data_size,
                "body exceeds configured limit"
            );
            return Err(JausError::MessageTooLarge {
                size: body_size,
                max: self.config.max_data_size,
            });
        }

        let mut stream = Stream::with_capacity(HEADER_SIZE + body_size);
        message.write(&mut stream)?;
        Ok(stream.into_bytes())
    }

    /// Decode one message from the front of `bytes`
    pub fn decode(&self, bytes: &[u8]) -> JausResult<Message> {
        let mut stream = Stream::from(bytes);
        Message::read_with(&mut stream, self.config.verify_data_size)
    }
}
