//! Platform messages: pose, velocity, effort, devices, vectors and waypoints

use crate::fields::{
    DiscreteDevices, GlobalPose, GlobalVector, GlobalWaypoint, LocalPose, LocalVector,
    LocalWaypoint, TravelSpeed, VelocityState, WaypointCount, WaypointNumber, WrenchEffort,
};
use crate::{empty_message, group_message, query_message};
use jaus_codec::{JausError, JausResult};

// ═══════════════════════════════════════════════════════════════════════
// Command
// ═══════════════════════════════════════════════════════════════════════

group_message!(SetGlobalPose => GlobalPose);
group_message!(SetLocalPose => LocalPose);

group_message! {
    /// Drive the platform's actuators directly
    SetWrenchEffort => WrenchEffort
}

group_message!(SetDiscreteDevices => DiscreteDevices);

group_message! {
    /// Desired global velocity vector for the platform
    SetGlobalVector => GlobalVector
}

group_message!(SetLocalVector => LocalVector);
group_message!(SetTravelSpeed => TravelSpeed);
group_message!(SetGlobalWaypoint => GlobalWaypoint);
group_message!(SetLocalWaypoint => LocalWaypoint);

// ═══════════════════════════════════════════════════════════════════════
// Query
// ═══════════════════════════════════════════════════════════════════════

query_message!(QueryGlobalPose => GlobalPose);
query_message!(QueryLocalPose => LocalPose);
query_message!(QueryVelocityState => VelocityState);
query_message!(QueryWrenchEffort => WrenchEffort);
query_message!(QueryDiscreteDevices => DiscreteDevices);
query_message!(QueryGlobalVector => GlobalVector);
query_message!(QueryLocalVector => LocalVector);
empty_message!(QueryTravelSpeed);
empty_message!(QueryWaypointCount);
group_message!(QueryGlobalWaypoint => WaypointNumber);
group_message!(QueryLocalWaypoint => WaypointNumber);

// ═══════════════════════════════════════════════════════════════════════
// Inform
// ═══════════════════════════════════════════════════════════════════════

group_message!(ReportGlobalPose => GlobalPose);
group_message!(ReportLocalPose => LocalPose);
group_message!(ReportVelocityState => VelocityState);
group_message!(ReportWrenchEffort => WrenchEffort);
group_message!(ReportDiscreteDevices => DiscreteDevices);
group_message!(ReportGlobalVector => GlobalVector);
group_message!(ReportLocalVector => LocalVector);
group_message!(ReportTravelSpeed => TravelSpeed);
group_message!(ReportWaypointCount => WaypointCount);

group_message! {
    /// Stored waypoint in global coordinates
    ReportGlobalWaypoint => GlobalWaypoint
}

group_message!(ReportLocalWaypoint => LocalWaypoint);

impl ReportGlobalWaypoint {
    /// Waypoint elevation, failing when the report omitted it
    pub fn elevation(&self) -> JausResult<f64> {
        self.fields()
            .elevation()
            .ok_or(JausError::FieldNotPresent { field: "elevation" })
    }
}
