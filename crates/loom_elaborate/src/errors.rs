//! Build failures and their diagnostic codes.
//!
//! Error codes `E300`--`E307` cover everything that stops a design from being
//! built. Every variant carries the instance/interface names needed to point
//! at the offending declaration.

use loom_diagnostics::{Category, Diagnostic, DiagnosticCode, Subject};
use loom_ir::{Direction, Endpoint};

/// Instance of an IP-core type missing from the catalog.
pub const E300: DiagnosticCode = DiagnosticCode::new(Category::Error, 300);

/// Endpoint names an instance that was never declared.
pub const E301: DiagnosticCode = DiagnosticCode::new(Category::Error, 301);

/// Two instances share a name.
pub const E302: DiagnosticCode = DiagnosticCode::new(Category::Error, 302);

/// Interface not declared by the instance's IP core, or an unresolvable graph id.
pub const E303: DiagnosticCode = DiagnosticCode::new(Category::Error, 303);

/// Endpoints with incompatible directions.
pub const E304: DiagnosticCode = DiagnosticCode::new(Category::Error, 304);

/// Second binding of a single-binding interface.
pub const E305: DiagnosticCode = DiagnosticCode::new(Category::Error, 305);

/// External port with more than one binding.
pub const E306: DiagnosticCode = DiagnosticCode::new(Category::Error, 306);

/// Instance name that cannot appear in `instance.interface` text.
pub const E307: DiagnosticCode = DiagnosticCode::new(Category::Error, 307);

/// Why a design could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesignError {
    /// An instance names an IP-core type the catalog does not know.
    #[error("unknown IP core type `{ip_type}` for instance `{instance}`")]
    UnknownIpCoreType {
        /// The instance being declared.
        instance: String,
        /// The unknown type.
        ip_type: String,
    },

    /// An endpoint names an instance that was never declared.
    #[error("unknown instance `{instance}`")]
    UnknownInstance {
        /// The missing instance name.
        instance: String,
    },

    /// Two instances are declared with the same name.
    #[error("instance `{instance}` is declared more than once")]
    DuplicateInstance {
        /// The repeated name.
        instance: String,
    },

    /// An endpoint names an interface its IP core does not declare.
    #[error("IP core `{ip_type}` has no interface `{interface}` (instance `{instance}`)")]
    UnknownInterface {
        /// The instance the endpoint refers to.
        instance: String,
        /// The instance's IP-core type.
        ip_type: String,
        /// The missing interface.
        interface: String,
    },

    /// A raw-graph connection references an interface id no IP core owns.
    #[error("connection references unknown interface id `{id}`")]
    UnknownInterfaceId {
        /// The unresolved id.
        id: String,
    },

    /// Two endpoints cannot be connected because of their directions.
    #[error(
        "direction mismatch: `{endpoint}` ({direction}) cannot connect to {peer} ({peer_direction})"
    )]
    DirectionMismatch {
        /// The instance interface being bound.
        endpoint: Endpoint,
        /// Its catalog direction.
        direction: Direction,
        /// What it was bound to: another endpoint or an external port.
        peer: String,
        /// The direction the peer presents.
        peer_direction: Direction,
    },

    /// A single-binding interface is used by a second connection or port.
    #[error("interface `{instance}.{interface}` is already bound")]
    InterfaceAlreadyBound {
        /// The instance.
        instance: String,
        /// The interface.
        interface: String,
    },

    /// An external port has more than one binding.
    #[error("external port `{port}` has {count} bindings; exactly one is allowed")]
    AmbiguousExternalBinding {
        /// The port (metanode) name.
        port: String,
        /// How many bindings were found.
        count: usize,
    },

    /// An instance name is empty or contains `.`, so its endpoints would not
    /// survive the `instance.interface` text form.
    #[error("invalid instance name `{instance}`")]
    InvalidInstanceName {
        /// The offending name.
        instance: String,
    },
}

impl DesignError {
    /// The stable diagnostic code of this failure.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            DesignError::UnknownIpCoreType { .. } => E300,
            DesignError::UnknownInstance { .. } => E301,
            DesignError::DuplicateInstance { .. } => E302,
            DesignError::UnknownInterface { .. } | DesignError::UnknownInterfaceId { .. } => E303,
            DesignError::DirectionMismatch { .. } => E304,
            DesignError::InterfaceAlreadyBound { .. } => E305,
            DesignError::AmbiguousExternalBinding { .. } => E306,
            DesignError::InvalidInstanceName { .. } => E307,
        }
    }

    /// The design element the failure is about.
    pub fn subject(&self) -> Option<Subject> {
        match self {
            DesignError::UnknownIpCoreType { instance, .. }
            | DesignError::UnknownInstance { instance }
            | DesignError::DuplicateInstance { instance }
            | DesignError::InvalidInstanceName { instance } => Some(Subject::node(instance)),
            DesignError::UnknownInterface {
                instance,
                interface,
                ..
            }
            | DesignError::InterfaceAlreadyBound {
                instance,
                interface,
            } => Some(Subject::interface(instance, interface)),
            DesignError::DirectionMismatch { endpoint, .. } => Some(Subject::interface(
                &endpoint.instance,
                &endpoint.interface,
            )),
            DesignError::AmbiguousExternalBinding { port, .. } => Some(Subject::node(port)),
            DesignError::UnknownInterfaceId { .. } => None,
        }
    }

    /// Converts the failure into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.to_string());
        if let Some(subject) = self.subject() {
            diag = diag.with_subject(subject);
        }
        match self {
            DesignError::UnknownIpCoreType { .. } => {
                diag.with_help("add the IP core's specification to the catalog")
            }
            DesignError::UnknownInstance { .. } => {
                diag.with_help("declare the instance before connecting it")
            }
            DesignError::DirectionMismatch { .. } => diag
                .with_note("inputs connect to outputs; inout interfaces connect to anything"),
            DesignError::InterfaceAlreadyBound { .. } => diag.with_help(
                "mark the interface `multi` in its IP-core specification to allow fan-out",
            ),
            DesignError::AmbiguousExternalBinding { .. } => {
                diag.with_note("an external port represents exactly one interface")
            }
            DesignError::UnknownInterfaceId { .. } => {
                diag.with_note("the graph contains a connection to a deleted or foreign interface")
            }
            DesignError::InvalidInstanceName { .. } => {
                diag.with_help("instance names must be non-empty and must not contain `.`")
            }
            DesignError::DuplicateInstance { .. } | DesignError::UnknownInterface { .. } => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_diagnostics::Severity;

    #[test]
    fn error_code_formats() {
        assert_eq!(format!("{E300}"), "E300");
        assert_eq!(format!("{E306}"), "E306");
        assert_eq!(format!("{E307}"), "E307");
    }

    #[test]
    fn invalid_instance_name_points_at_node() {
        let diag = DesignError::InvalidInstanceName {
            instance: "cpu.uart".into(),
        }
        .to_diagnostic();
        assert_eq!(diag.code, E307);
        assert_eq!(diag.subject.unwrap().to_string(), "cpu.uart");
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn unknown_type_message() {
        let err = DesignError::UnknownIpCoreType {
            instance: "s0".into(),
            ip_type: "spi".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown IP core type `spi` for instance `s0`"
        );
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, E300);
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.subject.unwrap().to_string(), "s0");
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn direction_mismatch_points_at_endpoint() {
        let err = DesignError::DirectionMismatch {
            endpoint: Endpoint::new("u1", "tx"),
            direction: Direction::Output,
            peer: "`u0.tx`".into(),
            peer_direction: Direction::Output,
        };
        assert_eq!(
            err.to_string(),
            "direction mismatch: `u1.tx` (output) cannot connect to `u0.tx` (output)"
        );
        assert_eq!(err.subject().unwrap().to_string(), "u1.tx");
        assert_eq!(err.to_diagnostic().notes.len(), 1);
    }

    #[test]
    fn unknown_interface_classes_share_code() {
        let by_name = DesignError::UnknownInterface {
            instance: "u0".into(),
            ip_type: "uart".into(),
            interface: "cts".into(),
        };
        let by_id = DesignError::UnknownInterfaceId { id: "42".into() };
        assert_eq!(by_name.code(), by_id.code());
        assert!(by_id.subject().is_none());
    }

    #[test]
    fn already_bound_subject() {
        let err = DesignError::InterfaceAlreadyBound {
            instance: "u0".into(),
            interface: "tx".into(),
        };
        assert_eq!(err.code(), E305);
        assert_eq!(err.to_string(), "interface `u0.tx` is already bound");
        assert_eq!(err.subject().unwrap(), Subject::interface("u0", "tx"));
    }
}
