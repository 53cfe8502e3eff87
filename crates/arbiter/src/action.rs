//! Proposed Action Identifiers

use serde::{Deserialize, Serialize};

/// Remediation action proposed by the upstream classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposedAction {
    /// No intervention
    DoNothing,
    /// Shift traffic to a standby path
    RerouteTraffic,
    /// Power-cycle the router
    RestartRouter,
    /// Provision additional capacity
    ScaleUpCapacity,
    /// Identifier outside the known action table
    Unknown(u8),
}

impl ProposedAction {
    /// Map a classifier output id to an action.
    ///
    /// Unrecognized ids are carried along rather than rejected; they match no
    /// guardrail and surface as "Unknown Action" downstream.
    pub fn from_id(id: u8) -> Self {
        match id {
            0 => Self::DoNothing,
            1 => Self::RerouteTraffic,
            2 => Self::RestartRouter,
            3 => Self::ScaleUpCapacity,
            other => Self::Unknown(other),
        }
    }

    /// Classifier output id for this action
    pub fn id(&self) -> u8 {
        match *self {
            Self::DoNothing => 0,
            Self::RerouteTraffic => 1,
            Self::RestartRouter => 2,
            Self::ScaleUpCapacity => 3,
            Self::Unknown(id) => id,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::DoNothing => "Do Nothing",
            Self::RerouteTraffic => "Reroute Traffic",
            Self::RestartRouter => "Restart Router",
            Self::ScaleUpCapacity => "Scale Up Capacity",
            Self::Unknown(_) => "Unknown Action",
        }
    }

    /// Whether this action changes the network (anything but Do Nothing)
    pub fn is_remediation(&self) -> bool {
        !matches!(self, Self::DoNothing)
    }
}
