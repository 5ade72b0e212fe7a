//! # JAUS Types - Message Catalog and Envelope
//!
//! ## Purpose
//!
//! Typed JAUS messages on top of the `jaus-codec` wire primitives:
//! - **Header / Message**: routing envelope with version and body length
//! - **MessageBody**: presence-vector serialization contract shared by all types
//! - **Catalog**: core and platform messages built from reusable field groups
//! - **Body**: closed dispatch over the catalog, selected by command code
//!
//! ## Usage
//!
//! ```rust
//! use jaus_types::{Address, Body, Message, SetGlobalVector, Stream};
//!
//! let mut body = SetGlobalVector::new();
//! body.set_speed(12.5).unwrap();
//! body.set_heading(1.0).unwrap();
//!
//! let mut message = Message::new(body);
//! message.header.destination = Address::new(1, 1, 40, 1);
//!
//! let mut stream = Stream::new();
//! message.write(&mut stream).unwrap();
//!
//! let decoded = Message::read(&mut stream).unwrap();
//! assert!(matches!(decoded.body, Body::SetGlobalVector(_)));
//! ```

pub mod address;
pub mod catalog;
pub mod command_code;
pub mod config;
pub mod fields;
pub mod message;
pub mod registry;
pub mod time;

pub use address::Address;
pub use catalog::*;
pub use command_code::{CommandCode, MessageCategory};
pub use config::{CodecConfig, ConfigError};
pub use message::{Header, Message, MessageBody, MessageCodec, SequenceCounter};
pub use registry::{supported_command_codes, Body};
pub use time::{JausDate, JausTime};

pub use jaus_codec::{
    is_bit_set, set_bit, BitVector, JausError, JausResult, JausVersion, ScaledField, ScaledInteger,
    Stream, WireValue, HEADER_SIZE, MAX_DATA_SIZE,
};

#[doc(hidden)]
pub use paste;
