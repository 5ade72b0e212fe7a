//! # Message Envelope and Body Contract
//!
//! - [`header`]: the 16-byte routing and control header
//! - [`body`]: the [`MessageBody`] contract every catalog type implements
//! - [`envelope`]: [`Message`], header plus dispatched body
//! - [`codec`]: [`MessageCodec`], configured byte-slice encode/decode

pub mod body;
pub mod codec;
pub mod envelope;
pub mod header;

pub use body::{read_presence_vector, MessageBody};
pub use codec::MessageCodec;
pub use envelope::Message;
pub use header::{AckNak, DataFlag, Header, SequenceCounter, DEFAULT_PRIORITY, MAX_PRIORITY};
