//! # Field Groups
//!
//! A field group is a reusable set of message fields with presence-vector bit
//! positions: a position, an attitude, a velocity vector. Message types wrap a
//! group (or compose several) rather than re-declaring fields.
//!
//! ## Field Kinds
//!
//! - `scaled(bit, LIMIT)`: optional real value, range-checked and quantized by a
//!   [`ScaledField`](jaus_codec::ScaledField)
//! - `optional(bit, Type)`: optional fixed-size wire value
//! - `group(Type, offset)`: nested group whose bits start at `offset`
//! - `required(Type)`: always-present fixed-size wire value
//! - `required_scaled(LIMIT)`: always-present scaled real value
//!
//! Optional fields are held as `Option`s and the presence vector is computed from
//! them, so a set bit always has a value behind it.

mod macros;

pub mod component;
pub mod effort;
pub mod limits;
pub mod pose;
pub mod vector;
pub mod waypoint;

pub use component::*;
pub use effort::*;
pub use pose::*;
pub use vector::*;
pub use waypoint::*;

use jaus_codec::{JausResult, JausVersion, Stream};
use std::fmt;

/// Size and legal bits of a message's presence vector for each protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceLayout {
    /// Body carries no presence vector
    Absent,
    /// Same vector in every supported version
    Fixed { size: usize, mask: u32 },
    /// 1-byte vector (mask 0xFF) before JAUS 3.0; 2 bytes with the time stamp
    /// bit (mask 0x1FF) from 3.0 on
    TimeStamped,
}

impl PresenceLayout {
    pub const fn fixed(size: usize, mask: u32) -> Self {
        Self::Fixed { size, mask }
    }

    /// Presence vector size in bytes
    pub fn size(self, version: JausVersion) -> usize {
        match self {
            Self::Absent => 0,
            Self::Fixed { size, .. } => size,
            Self::TimeStamped if version < JausVersion::V3_0 => 1,
            Self::TimeStamped => 2,
        }
    }

    /// Bits a presence vector may legally set
    pub fn mask(self, version: JausVersion) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Fixed { mask, .. } => mask,
            Self::TimeStamped if version < JausVersion::V3_0 => 0x00FF,
            Self::TimeStamped => 0x01FF,
        }
    }
}

/// Set of message fields sharing one presence vector numbering
pub trait FieldGroup: Clone + Default + fmt::Debug + PartialEq {
    /// Presence vector layout when the group forms a whole message body
    const LAYOUT: PresenceLayout;

    /// Bits of the optional fields currently held, in the group's own numbering
    fn presence(&self) -> u32;

    /// Bytes [`encode`](Self::encode) will write
    fn encoded_size(&self) -> usize;

    /// Append required fields and every held optional field in declared order
    fn encode(&self, stream: &mut Stream) -> usize;

    /// Consume required fields and the optional fields flagged in `presence`
    fn decode(&mut self, stream: &mut Stream, presence: u32) -> JausResult<usize>;
}
