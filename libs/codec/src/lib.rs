//! # JAUS Codec - Wire Primitives
//!
//! ## Purpose
//!
//! The numeric and byte-level foundation of JAUS message serialization:
//! - **ScaledInteger**: bounded real values quantized onto 2 or 4 byte integers
//! - **BitVector**: presence vector bit access
//! - **Stream**: append/consume byte buffer with little-endian primitives
//! - **JausError**: the error taxonomy shared by every message type
//!
//! ## Architecture Role
//!
//! ```text
//! jaus-codec  →  jaus-types  →  component runtime / transport
//!     ↑               ↓                    ↓
//! Stream          Header, Message      Sockets, event
//! ScaledInteger   catalog, dispatch    loops (external)
//! BitVector
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Message headers, command codes or the message catalog (`jaus-types`)
//! - Transport, discovery or component control

pub mod bit_vector;
pub mod buffers;
pub mod constants;
pub mod error;
pub mod scaled_integer;
pub mod stream;

pub use bit_vector::{is_bit_set, set_bit, BitVector};
pub use buffers::with_scratch_stream;
pub use constants::{JausVersion, HEADER_SIZE, MAX_DATA_SIZE};
pub use error::{JausError, JausResult};
pub use scaled_integer::{ScaledField, ScaledInteger};
pub use stream::{Stream, WireValue};
