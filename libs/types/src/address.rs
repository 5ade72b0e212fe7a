//! Component addressing
//!
//! Every JAUS component is identified by a four-level address. On the wire the
//! levels appear lowest first: instance, component, node, subsystem.

use jaus_codec::WireValue;
use std::fmt;

/// Four-level JAUS component address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address {
    pub subsystem: u8,
    pub node: u8,
    pub component: u8,
    pub instance: u8,
}

impl Address {
    /// Wildcard value addressing every entity at one level
    pub const BROADCAST: u8 = 255;

    pub const fn new(subsystem: u8, node: u8, component: u8, instance: u8) -> Self {
        Self {
            subsystem,
            node,
            component,
            instance,
        }
    }

    /// True when any level holds the broadcast wildcard
    pub fn is_broadcast(&self) -> bool {
        [self.subsystem, self.node, self.component, self.instance].contains(&Self::BROADCAST)
    }

    /// True when no level is zero (zero is reserved as "unassigned")
    pub fn is_valid(&self) -> bool {
        ![self.subsystem, self.node, self.component, self.instance].contains(&0)
    }
}

impl WireValue for Address {
    const SIZE: usize = 4;

    fn put(self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&[self.instance, self.component, self.node, self.subsystem]);
    }

    fn get(bytes: &[u8]) -> Self {
        Self {
            instance: bytes[0],
            component: bytes[1],
            node: bytes[2],
            subsystem: bytes[3],
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.subsystem, self.node, self.component, self.instance
        )
    }
}
