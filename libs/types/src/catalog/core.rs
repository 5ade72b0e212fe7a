//! Core messages: component life cycle, control, status and time

use crate::fields::{
    AuthorityCode, ComponentControl, ComponentStatus, ControlResponse, EmergencyCode, TimeAndDate,
};
use crate::{empty_message, group_message, query_message};

// ═══════════════════════════════════════════════════════════════════════
// Command
// ═══════════════════════════════════════════════════════════════════════

group_message! {
    /// Set the authority level the component uses when it sends commands
    SetComponentAuthority => AuthorityCode
}

empty_message! {
    /// Transition to the shutdown state
    Shutdown
}

empty_message! {
    /// Transition from ready to standby
    Standby
}

empty_message! {
    /// Transition from standby back to ready
    Resume
}

empty_message! {
    /// Return to the initialize state
    Reset
}

group_message! {
    /// Enter the emergency state
    SetEmergency => EmergencyCode
}

group_message! {
    /// Leave the emergency state
    ClearEmergency => EmergencyCode
}

group_message! {
    /// Ask for exclusive control, presenting the sender's authority
    RequestComponentControl => AuthorityCode
}

empty_message!(ReleaseComponentControl);

group_message! {
    /// Answer to a control request
    ConfirmComponentControl => ControlResponse
}

empty_message! {
    /// Control was taken away by a higher authority
    RejectComponentControl
}

group_message!(SetTime => TimeAndDate);

// ═══════════════════════════════════════════════════════════════════════
// Query
// ═══════════════════════════════════════════════════════════════════════

empty_message!(QueryComponentAuthority);
empty_message!(QueryComponentStatus);
empty_message!(QueryComponentControl);
query_message!(QueryTime => TimeAndDate);
empty_message!(QueryHeartbeatPulse);

// ═══════════════════════════════════════════════════════════════════════
// Inform
// ═══════════════════════════════════════════════════════════════════════

group_message!(ReportComponentAuthority => AuthorityCode);
group_message!(ReportComponentStatus => ComponentStatus);

group_message! {
    /// Component currently holding control, all zeros when uncontrolled
    ReportComponentControl => ComponentControl
}

group_message!(ReportTime => TimeAndDate);

empty_message! {
    /// Liveness signal sent periodically or in answer to a query
    ReportHeartbeatPulse
}
