//! Declarative design descriptions.
//!
//! A [`DesignDescription`] is what a user (or the editor importer) declares:
//! which IP cores to instantiate, which interfaces to connect, and which
//! interfaces to promote to top-level ports. Nothing here is validated yet;
//! that is the design builder's job.

use crate::direction::ExternalKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An `instance.interface` reference.
///
/// Serialized as the string `"instance.interface"`. The text is split on the
/// first `.`, so interface names may themselves contain dots.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint {
    /// Instance name.
    pub instance: String,
    /// Interface name on that instance.
    pub interface: String,
}

impl Endpoint {
    /// Creates an endpoint from its parts.
    pub fn new(instance: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            interface: interface.into(),
        }
    }

    /// Whether `name` can stand as the instance part of endpoint text.
    pub fn is_valid_instance(name: &str) -> bool {
        !name.is_empty() && !name.contains('.')
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.instance, self.interface)
    }
}

/// Error returned when endpoint text is not of the form `instance.interface`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid endpoint `{0}`: expected `instance.interface`")]
pub struct ParseEndpointError(pub String);

impl FromStr for Endpoint {
    type Err = ParseEndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((instance, interface)) if !instance.is_empty() && !interface.is_empty() => {
                Ok(Endpoint::new(instance, interface))
            }
            _ => Err(ParseEndpointError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Endpoint {
    type Error = ParseEndpointError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.to_string()
    }
}

/// Declares one IP-core instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDecl {
    /// Instance name.
    pub name: String,
    /// IP-core type to instantiate.
    #[serde(rename = "type")]
    pub ip_type: String,
}

/// Declares a connection between two instance interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDecl {
    /// One endpoint; by convention the driving side.
    pub from: Endpoint,
    /// The other endpoint.
    pub to: Endpoint,
}

/// Declares that an instance interface is exposed as a top-level port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDecl {
    /// Top-level port name.
    pub port: String,
    /// Whether the port is a chip input or output.
    pub kind: ExternalKind,
    /// The instance interface bound to the port.
    pub endpoint: Endpoint,
}

/// A complete declarative design.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignDescription {
    /// Instances in declaration order.
    #[serde(default)]
    pub instances: Vec<InstanceDecl>,
    /// Connections in declaration order.
    #[serde(default)]
    pub connections: Vec<ConnectionDecl>,
    /// External-port bindings in declaration order.
    #[serde(default)]
    pub externals: Vec<ExternalDecl>,
}

impl DesignDescription {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an instance.
    pub fn instance(mut self, name: impl Into<String>, ip_type: impl Into<String>) -> Self {
        self.instances.push(InstanceDecl {
            name: name.into(),
            ip_type: ip_type.into(),
        });
        self
    }

    /// Declares a connection.
    pub fn connect(mut self, from: Endpoint, to: Endpoint) -> Self {
        self.connections.push(ConnectionDecl { from, to });
        self
    }

    /// Declares an external-port binding.
    pub fn external(
        mut self,
        port: impl Into<String>,
        kind: ExternalKind,
        endpoint: Endpoint,
    ) -> Self {
        self.externals.push(ExternalDecl {
            port: port.into(),
            kind,
            endpoint,
        });
        self
    }
}
