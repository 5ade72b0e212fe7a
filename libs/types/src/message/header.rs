//! Message Header Implementation
//!
//! The header is identical for all messages and carries routing, priority,
//! version and body size information.
//!
//! ```text
//! ┌──────────┬─────────┬─────────────┬─────────────┬──────────────┬──────────┐
//! │properties│ command │ destination │   source    │ data control │ sequence │
//! │  u16     │  u16    │ 4 x u8      │ 4 x u8      │  u16         │  u16     │
//! └──────────┴─────────┴─────────────┴─────────────┴──────────────┴──────────┘
//!  16 bytes, little-endian
//!
//! properties:   bits 0-3 priority, 4-5 ack/nak, 6 service connection,
//!               7 experimental, 8-13 version, 14-15 reserved
//! data control: bits 0-11 data size, 12-15 data flag
//! ```

use crate::address::Address;
use crate::command_code::CommandCode;
use jaus_codec::{JausError, JausResult, JausVersion, Stream, HEADER_SIZE, MAX_DATA_SIZE};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Priority given to messages unless the caller says otherwise
pub const DEFAULT_PRIORITY: u8 = 6;

/// Highest priority the 4-bit field can carry
pub const MAX_PRIORITY: u8 = 15;

const PRIORITY_MASK: u16 = 0x000F;
const ACK_NAK_SHIFT: u16 = 4;
const ACK_NAK_MASK: u16 = 0x0003;
const SERVICE_CONNECTION_BIT: u16 = 1 << 6;
const EXPERIMENTAL_BIT: u16 = 1 << 7;
const VERSION_SHIFT: u16 = 8;
const VERSION_MASK: u16 = 0x003F;

const DATA_SIZE_MASK: u16 = 0x0FFF;
const DATA_FLAG_SHIFT: u16 = 12;

/// Acknowledgement handling requested or reported by a message
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum AckNak {
    None = 0,
    Request = 1,
    Nak = 2,
    Ack = 3,
}

/// Position of a packet within a multi-packet stream
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum DataFlag {
    Single = 0,
    First = 1,
    Normal = 2,
    Retransmit = 4,
    Last = 8,
}

/// JAUS message header
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    pub priority: u8,
    pub ack_nak: AckNak,
    pub service_connection: bool,
    pub experimental: bool,
    pub version: JausVersion,
    /// Raw code; a received header may name a type outside the catalog
    pub command_code: u16,
    pub destination: Address,
    pub source: Address,
    pub data_size: u16,
    pub data_flag: DataFlag,
    pub sequence_number: u16,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            ack_nak: AckNak::None,
            service_connection: false,
            experimental: false,
            version: JausVersion::MAX,
            command_code: 0,
            destination: Address::default(),
            source: Address::default(),
            data_size: 0,
            data_flag: DataFlag::Single,
            sequence_number: 0,
        }
    }
}

impl Header {
    /// Header size in bytes
    pub const SIZE: usize = HEADER_SIZE;

    pub fn new(command_code: CommandCode) -> Self {
        Self {
            command_code: command_code.into(),
            ..Self::default()
        }
    }

    /// Catalog entry named by the command code
    pub fn command(&self) -> JausResult<CommandCode> {
        CommandCode::from_raw(self.command_code)
    }

    /// Copy routing and control fields from `other`, keeping this header's
    /// command code and data size
    pub fn copy_header_data(&mut self, other: &Header) {
        let command_code = self.command_code;
        let data_size = self.data_size;
        *self = other.clone();
        self.command_code = command_code;
        self.data_size = data_size;
    }

    fn properties(&self) -> u16 {
        let mut properties = u16::from(self.priority) & PRIORITY_MASK;
        properties |= (u16::from(u8::from(self.ack_nak)) & ACK_NAK_MASK) << ACK_NAK_SHIFT;
        if self.service_connection {
            properties |= SERVICE_CONNECTION_BIT;
        }
        if self.experimental {
            properties |= EXPERIMENTAL_BIT;
        }
        properties | (u16::from(self.version.raw()) & VERSION_MASK) << VERSION_SHIFT
    }

    fn data_control(&self) -> u16 {
        (self.data_size & DATA_SIZE_MASK) | u16::from(u8::from(self.data_flag)) << DATA_FLAG_SHIFT
    }

    /// Append the 16-byte header; returns bytes written
    pub fn write(&self, stream: &mut Stream) -> JausResult<usize> {
        if self.priority > MAX_PRIORITY {
            return Err(JausError::InvalidHeader(format!(
                "priority {} exceeds {}",
                self.priority, MAX_PRIORITY
            )));
        }
        if usize::from(self.data_size) > MAX_DATA_SIZE {
            return Err(JausError::MessageTooLarge {
                size: self.data_size.into(),
                max: MAX_DATA_SIZE,
            });
        }

        let mut written = stream.write(self.properties());
        written += stream.write(self.command_code);
        written += stream.write(self.destination);
        written += stream.write(self.source);
        written += stream.write(self.data_control());
        written += stream.write(self.sequence_number);

        if written != Self::SIZE {
            return Err(JausError::write_failure("message header", Self::SIZE, written));
        }
        Ok(written)
    }

    /// Consume a 16-byte header
    ///
    /// Nothing is consumed when fewer than 16 bytes remain or the header fails
    /// validation.
    pub fn read(stream: &mut Stream) -> JausResult<Self> {
        let header = Self::peek(stream)?;
        stream.read_bytes(Self::SIZE)?;
        Ok(header)
    }

    /// Decode and validate the header at the read cursor without consuming it
    pub fn peek(stream: &Stream) -> JausResult<Self> {
        let unread = stream.unread();
        if unread.len() < Self::SIZE {
            return Err(JausError::read_failure(
                "message header",
                Self::SIZE,
                unread.len(),
            ));
        }
        Self::decode(&mut Stream::from(&unread[..Self::SIZE]))
    }

    /// Header plus body bytes the header at the start of `bytes` declares,
    /// without validating it
    pub(crate) fn declared_frame_size(bytes: &[u8]) -> Option<usize> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let data_control = u16::from_le_bytes([bytes[12], bytes[13]]);
        Some(Self::SIZE + usize::from(data_control & DATA_SIZE_MASK))
    }

    fn decode(view: &mut Stream) -> JausResult<Self> {
        let properties: u16 = view.read()?;
        let command_code: u16 = view.read()?;
        let destination: Address = view.read()?;
        let source: Address = view.read()?;
        let data_control: u16 = view.read()?;
        let sequence_number: u16 = view.read()?;

        let version = JausVersion::new(((properties >> VERSION_SHIFT) & VERSION_MASK) as u8);
        if !version.is_supported() {
            return Err(JausError::unsupported_version(
                version.raw(),
                JausVersion::MAX.raw(),
            ));
        }

        let ack_nak_raw = ((properties >> ACK_NAK_SHIFT) & ACK_NAK_MASK) as u8;
        let ack_nak = AckNak::try_from(ack_nak_raw)
            .map_err(|_| JausError::InvalidHeader(format!("ack/nak value {ack_nak_raw}")))?;

        let flag_raw = (data_control >> DATA_FLAG_SHIFT) as u8;
        let data_flag = DataFlag::try_from(flag_raw)
            .map_err(|_| JausError::InvalidHeader(format!("data flag value {flag_raw}")))?;

        let data_size = data_control & DATA_SIZE_MASK;
        if usize::from(data_size) > MAX_DATA_SIZE {
            return Err(JausError::InvalidHeader(format!(
                "data size {data_size} exceeds {MAX_DATA_SIZE}"
            )));
        }

        Ok(Self {
            priority: (properties & PRIORITY_MASK) as u8,
            ack_nak,
            service_connection: (properties & SERVICE_CONNECTION_BIT) != 0,
            experimental: (properties & EXPERIMENTAL_BIT) != 0,
            version,
            command_code,
            destination,
            source,
            data_size,
            data_flag,
            sequence_number,
        })
    }
}

/// Wrapping sequence number source for outgoing messages
#[derive(Debug, Clone, Default)]
pub struct SequenceCounter {
    next: u16,
}

impl SequenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next: u16) -> Self {
        Self { next }
    }

    /// Return the current number and advance, wrapping after 65535
    pub fn next_sequence(&mut self) -> u16 {
        let current = self.next;
        self.next = self.next.wrapping_add(1);
        current
    }

    pub fn peek(&self) -> u16 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> Header {
        Header {
            priority: 11,
            ack_nak: AckNak::Request,
            service_connection: true,
            experimental: false,
            version: JausVersion::V3_3,
            command_code: CommandCode::SetGlobalVector.into(),
            destination: Address::new(1, 2, 3, 4),
            source: Address::new(5, 6, 7, 8),
            data_size: 5,
            data_flag: DataFlag::Single,
            sequence_number: 0xBEEF,
        }
    }

    #[test]
    fn test_header_layout() {
        let mut stream = Stream::new();
        assert_eq!(sample_header().write(&mut stream).unwrap(), Header::SIZE);
        assert_eq!(
            stream.as_bytes(),
            &[
                0x5B, 0x02, // priority 11, ack request, service connection, version 2
                0x07, 0x04, // SetGlobalVector
                4, 3, 2, 1, // destination
                8, 7, 6, 5, // source
                0x05, 0x00, // data size 5, single packet
                0xEF, 0xBE, // sequence
            ]
        );
    }

    #[test]
    fn test_header_round_trip() {
        let header = sample_header();
        let mut stream = Stream::new();
        header.write(&mut stream).unwrap();
        assert_eq!(Header::read(&mut stream).unwrap(), header);
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_truncated_header_consumes_nothing() {
        let mut stream = Stream::from(vec![0u8; 15]);
        assert!(matches!(
            Header::read(&mut stream),
            Err(JausError::ReadFailure { expected: 16, actual: 15, .. })
        ));
        assert_eq!(stream.read_position(), 0);
    }

    #[test]
    fn test_rejects_future_version() {
        let mut bytes = vec![0u8; 16];
        bytes[1] = 0x09;
        let mut stream = Stream::from(bytes);
        assert_eq!(
            Header::read(&mut stream),
            Err(JausError::UnsupportedVersion { version: 9, max: 3 })
        );
    }

    #[test]
    fn test_rejects_unknown_data_flag() {
        let mut bytes = vec![0u8; 16];
        bytes[13] = 0x30;
        let mut stream = Stream::from(bytes);
        assert!(matches!(Header::read(&mut stream), Err(JausError::InvalidHeader(_))));
    }

    #[test]
    fn test_rejected_header_consumes_nothing() {
        let mut stream = Stream::new();
        sample_header().write(&mut stream).unwrap();
        let mut bytes = stream.into_bytes();
        bytes[1] = 0x05;

        let mut stream = Stream::from(bytes.clone());
        assert!(matches!(
            Header::read(&mut stream),
            Err(JausError::UnsupportedVersion { version: 5, .. })
        ));
        assert_eq!(stream.read_position(), 0);
        assert_eq!(Header::declared_frame_size(&bytes), Some(Header::SIZE + 5));
    }

    #[test]
    fn test_peek_leaves_cursor() {
        let mut stream = Stream::new();
        sample_header().write(&mut stream).unwrap();
        assert_eq!(Header::peek(&stream).unwrap(), sample_header());
        assert_eq!(stream.read_position(), 0);
    }

    #[test]
    fn test_write_validates_fields() {
        let mut header = sample_header();
        header.priority = 16;
        assert!(header.write(&mut Stream::new()).is_err());

        let mut header = sample_header();
        header.data_size = 4080;
        assert!(matches!(
            header.write(&mut Stream::new()),
            Err(JausError::MessageTooLarge { size: 4080, .. })
        ));
    }

    #[test]
    fn test_copy_header_data_keeps_code_and_size() {
        let source = sample_header();
        let mut target = Header::new(CommandCode::ReportTime);
        target.data_size = 9;
        target.copy_header_data(&source);

        assert_eq!(target.command_code, 0x4011);
        assert_eq!(target.data_size, 9);
        assert_eq!(target.destination, source.destination);
        assert_eq!(target.sequence_number, source.sequence_number);
        assert_eq!(target.priority, 11);
    }

    #[test]
    fn test_sequence_counter_wraps() {
        let mut counter = SequenceCounter::starting_at(u16::MAX);
        assert_eq!(counter.next_sequence(), u16::MAX);
        assert_eq!(counter.next_sequence(), 0);
        assert_eq!(counter.peek(), 1);
    }
}
