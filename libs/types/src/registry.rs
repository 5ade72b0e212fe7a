//! # Message Dispatch
//!
//! [`Body`] is a closed sum over every catalog type. An inbound header's command
//! code selects the prototype that decodes the body; callers then match on the
//! variant or extract the concrete type with `TryFrom`.
//!
//! ```rust,ignore
//! let body = registry::create(header.command_code)?;
//! match body {
//!     Body::ReportGlobalPose(report) => handle_pose(report),
//!     Body::ReportTime(report) => handle_time(report),
//!     other => warn!(code = %other.command_code(), "unhandled message"),
//! }
//! ```

use crate::catalog::*;
use crate::command_code::CommandCode;
use crate::message::MessageBody;
use jaus_codec::{JausError, JausResult, JausVersion, Stream};
use tracing::warn;

/// Generate [`Body`] and its dispatch over the listed catalog types
///
/// Each type name must also be a `CommandCode` variant; the prototype match is
/// exhaustive over `CommandCode`, so a code without a type fails to compile.
macro_rules! define_catalog {
    ($($name:ident),+ $(,)?) => {
        /// Body of any catalog message
        #[derive(Debug, Clone, PartialEq)]
        pub enum Body {
            $($name($name),)+
        }

        impl Body {
            /// Default-constructed body for `code`
            pub fn prototype(code: CommandCode) -> Self {
                match code {
                    $(CommandCode::$name => Body::$name($name::default()),)+
                }
            }

            pub fn command_code(&self) -> CommandCode {
                match self {
                    $(Body::$name(_) => <$name as MessageBody>::COMMAND_CODE,)+
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Body::$name(_) => <$name as MessageBody>::NAME,)+
                }
            }

            pub fn presence_vector(&self) -> u32 {
                match self {
                    $(Body::$name(body) => body.presence_vector(),)+
                }
            }

            pub fn presence_vector_size(&self, version: JausVersion) -> usize {
                match self {
                    $(Body::$name(body) => body.presence_vector_size(version),)+
                }
            }

            pub fn presence_vector_mask(&self, version: JausVersion) -> u32 {
                match self {
                    $(Body::$name(body) => body.presence_vector_mask(version),)+
                }
            }

            pub fn body_size(&self, version: JausVersion) -> usize {
                match self {
                    $(Body::$name(body) => body.body_size(version),)+
                }
            }

            pub fn write_message_body(&self, stream: &mut Stream, version: JausVersion) -> JausResult<usize> {
                match self {
                    $(Body::$name(body) => body.write_message_body(stream, version),)+
                }
            }

            pub fn read_message_body(&mut self, stream: &mut Stream, version: JausVersion) -> JausResult<usize> {
                match self {
                    $(Body::$name(body) => body.read_message_body(stream, version),)+
                }
            }

            pub fn clear_message_body(&mut self) {
                match self {
                    $(Body::$name(body) => body.clear_message_body(),)+
                }
            }
        }

        $(
            impl From<$name> for Body {
                fn from(body: $name) -> Self {
                    Body::$name(body)
                }
            }

            impl TryFrom<Body> for $name {
                type Error = Body;

                fn try_from(body: Body) -> Result<Self, Body> {
                    match body {
                        Body::$name(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )+

        /// Every command code with a catalog type, in ascending order
        pub fn supported_command_codes() -> Vec<CommandCode> {
            let mut codes = vec![$(<$name as MessageBody>::COMMAND_CODE),+];
            codes.sort();
            codes
        }
    };
}

define_catalog! {
    // Core
    SetComponentAuthority,
    Shutdown,
    Standby,
    Resume,
    Reset,
    SetEmergency,
    ClearEmergency,
    RequestComponentControl,
    ReleaseComponentControl,
    ConfirmComponentControl,
    RejectComponentControl,
    SetTime,
    QueryComponentAuthority,
    QueryComponentStatus,
    QueryComponentControl,
    QueryTime,
    QueryHeartbeatPulse,
    ReportComponentAuthority,
    ReportComponentStatus,
    ReportComponentControl,
    ReportTime,
    ReportHeartbeatPulse,
    // Platform
    SetGlobalPose,
    SetLocalPose,
    SetWrenchEffort,
    SetDiscreteDevices,
    SetGlobalVector,
    SetLocalVector,
    SetTravelSpeed,
    SetGlobalWaypoint,
    SetLocalWaypoint,
    QueryGlobalPose,
    QueryLocalPose,
    QueryVelocityState,
    QueryWrenchEffort,
    QueryDiscreteDevices,
    QueryGlobalVector,
    QueryLocalVector,
    QueryTravelSpeed,
    QueryWaypointCount,
    QueryGlobalWaypoint,
    QueryLocalWaypoint,
    ReportGlobalPose,
    ReportLocalPose,
    ReportVelocityState,
    ReportWrenchEffort,
    ReportDiscreteDevices,
    ReportGlobalVector,
    ReportLocalVector,
    ReportTravelSpeed,
    ReportWaypointCount,
    ReportGlobalWaypoint,
    ReportLocalWaypoint,
}

/// Prototype body for a raw command code
pub fn create(code: u16) -> JausResult<Body> {
    match CommandCode::try_from(code) {
        Ok(command) => Ok(Body::prototype(command)),
        Err(_) => {
            warn!(code = %format_args!("{code:#06x}"), "no catalog entry for command code");
            Err(JausError::UnknownCommandCode(code))
        }
    }
}
