//! Component management field groups: authority, status, control, time

use super::PresenceLayout;
use crate::address::Address;
use crate::time::{JausDate, JausTime};

crate::field_group! {
    /// Authority level, higher values override lower ones
    pub struct AuthorityCode {
        authority_code: required(u8),
    }
}

crate::field_group! {
    pub struct EmergencyCode {
        /// 1 = stop
        emergency_code: required(u16),
    }
}

crate::field_group! {
    pub struct ComponentStatus {
        /// 0 initialize, 1 ready, 2 standby, 3 shutdown, 4 failure, 5 emergency
        primary_status_code: required(u8),
        secondary_status_code: required(u32),
    }
}

crate::field_group! {
    /// Component currently in control and its authority
    pub struct ComponentControl {
        controller: required(Address),
        authority_code: required(u8),
    }
}

crate::field_group! {
    pub struct ControlResponse {
        /// 0 control accepted, 1 not available, 2 insufficient authority
        response_code: required(u8),
    }
}

crate::field_group! {
    /// Time of day and calendar date
    pub struct TimeAndDate [presence: PresenceLayout::fixed(1, 0x03)] {
        time: optional(0, JausTime),
        date: optional(1, JausDate),
    }
}

crate::presence_bits! {
    /// Presence bits of [`TimeAndDate`] messages
    pub enum TimeAndDateBit {
        Time = 0,
        Date = 1,
    }
}
