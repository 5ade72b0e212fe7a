//! # Command Codes
//!
//! Every message type carries a fixed 16-bit command code. The numeric range a
//! code falls in determines the message category:
//!
//! ```text
//! 0x0000-0x1FFF  Command       change component state
//! 0x2000-0x3FFF  Query         request information
//! 0x4000-0x5FFF  Inform        report information (query code + 0x2000)
//! 0x6000-0xCFFF  Reserved
//! 0xD000-0xFFFF  Experimental
//! ```

use jaus_codec::JausError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// Message category derived from the command code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    Command,
    Query,
    Inform,
    Reserved,
    Experimental,
}

impl MessageCategory {
    /// Classify any raw command code, catalogued or not
    pub fn of(code: u16) -> Self {
        match code {
            0x0000..=0x1FFF => Self::Command,
            0x2000..=0x3FFF => Self::Query,
            0x4000..=0x5FFF => Self::Inform,
            0x6000..=0xCFFF => Self::Reserved,
            0xD000..=0xFFFF => Self::Experimental,
        }
    }
}

/// Offset from a query's code to the code of the inform answering it
const RESPONSE_OFFSET: u16 = 0x2000;

/// Command codes of every message type in the catalog
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive, IntoPrimitive)]
pub enum CommandCode {
    // ═══════════════════════════════════════════════════════════════════════
    // Core Command (0x0000-0x03FF)
    // ═══════════════════════════════════════════════════════════════════════
    SetComponentAuthority = 0x0001,
    Shutdown = 0x0002,
    Standby = 0x0003,
    Resume = 0x0004,
    Reset = 0x0005,
    SetEmergency = 0x0006,
    ClearEmergency = 0x0007,
    RequestComponentControl = 0x000D,
    ReleaseComponentControl = 0x000E,
    ConfirmComponentControl = 0x000F,
    RejectComponentControl = 0x0010,
    SetTime = 0x0011,

    // Platform Command (0x0400-0x05FF)
    SetGlobalPose = 0x0402,
    SetLocalPose = 0x0403,
    SetWrenchEffort = 0x0405,
    SetDiscreteDevices = 0x0406,
    SetGlobalVector = 0x0407,
    SetLocalVector = 0x0408,
    SetTravelSpeed = 0x040A,
    SetGlobalWaypoint = 0x040C,
    SetLocalWaypoint = 0x040D,

    // ═══════════════════════════════════════════════════════════════════════
    // Core Query (0x2000-0x23FF)
    // ═══════════════════════════════════════════════════════════════════════
    QueryComponentAuthority = 0x2001,
    QueryComponentStatus = 0x2002,
    QueryComponentControl = 0x200D,
    QueryTime = 0x2011,
    QueryHeartbeatPulse = 0x2202,

    // Platform Query (0x2400-0x25FF)
    QueryGlobalPose = 0x2402,
    QueryLocalPose = 0x2403,
    QueryVelocityState = 0x2404,
    QueryWrenchEffort = 0x2405,
    QueryDiscreteDevices = 0x2406,
    QueryGlobalVector = 0x2407,
    QueryLocalVector = 0x2408,
    QueryTravelSpeed = 0x240A,
    QueryWaypointCount = 0x240B,
    QueryGlobalWaypoint = 0x240C,
    QueryLocalWaypoint = 0x240D,

    // ═══════════════════════════════════════════════════════════════════════
    // Core Inform (0x4000-0x43FF)
    // ═══════════════════════════════════════════════════════════════════════
    ReportComponentAuthority = 0x4001,
    ReportComponentStatus = 0x4002,
    ReportComponentControl = 0x400D,
    ReportTime = 0x4011,
    ReportHeartbeatPulse = 0x4202,

    // Platform Inform (0x4400-0x45FF)
    ReportGlobalPose = 0x4402,
    ReportLocalPose = 0x4403,
    ReportVelocityState = 0x4404,
    ReportWrenchEffort = 0x4405,
    ReportDiscreteDevices = 0x4406,
    ReportGlobalVector = 0x4407,
    ReportLocalVector = 0x4408,
    ReportTravelSpeed = 0x440A,
    ReportWaypointCount = 0x440B,
    ReportGlobalWaypoint = 0x440C,
    ReportLocalWaypoint = 0x440D,
}

impl CommandCode {
    pub fn raw(self) -> u16 {
        self.into()
    }

    pub fn category(self) -> MessageCategory {
        MessageCategory::of(self.raw())
    }

    /// Inform code answering this query, if this is a query with a catalogued reply
    pub fn response(self) -> Option<CommandCode> {
        if self.category() != MessageCategory::Query {
            return None;
        }
        CommandCode::try_from(self.raw() + RESPONSE_OFFSET).ok()
    }

    /// Resolve a raw code, failing for codes outside the catalog
    pub fn from_raw(code: u16) -> Result<Self, JausError> {
        CommandCode::try_from(code).map_err(|_| JausError::UnknownCommandCode(code))
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({:#06x})", self, self.raw())
    }
}
