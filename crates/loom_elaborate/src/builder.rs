//! Validation of a [`DesignDescription`] into a [`Design`].
//!
//! Declarations are processed in three passes: instances, then connections,
//! then external ports. Catalog lookups within a pass run in parallel; the
//! direction and fan-out checks that follow run in declaration order so the
//! first error reported is always the first offending declaration.

use std::collections::{HashMap, HashSet};

use loom_ir::{
    ConnectionDecl, Design, DesignDescription, Endpoint, ExternalBinding, ExternalDecl, Instance,
    InterfaceConnection, InterfaceSpec, IpCoreSpec,
};
use rayon::prelude::*;

use crate::errors::DesignError;
use crate::resolver::SpecResolver;

/// Instance name to its resolved IP-core specification.
type InstanceTypes<'d, 'c> = HashMap<&'d str, &'c IpCoreSpec>;

/// Builds validated designs against a fixed catalog.
#[derive(Debug, Clone, Copy)]
pub struct DesignBuilder<'c> {
    resolver: SpecResolver<'c>,
}

impl<'c> DesignBuilder<'c> {
    /// Creates a builder that resolves through `resolver`.
    pub fn new(resolver: SpecResolver<'c>) -> Self {
        Self { resolver }
    }

    /// Validates `desc` and produces a [`Design`], or the first error found.
    ///
    /// The description is not modified and the output keeps its declaration
    /// order, so building the same description twice yields equal designs.
    pub fn build(&self, desc: &DesignDescription) -> Result<Design, DesignError> {
        let (types, instances) = self.bind_instances(desc)?;
        let mut bindings = Bindings::default();
        let connections = self.bind_connections(&desc.connections, &types, &mut bindings)?;
        let externals = self.bind_externals(&desc.externals, &types, &mut bindings)?;
        Ok(Design {
            instances,
            connections,
            externals,
        })
    }

    fn resolve_endpoint(
        &self,
        types: &InstanceTypes<'_, 'c>,
        endpoint: &Endpoint,
    ) -> Result<&'c InterfaceSpec, DesignError> {
        let spec = types
            .get(endpoint.instance.as_str())
            .ok_or_else(|| DesignError::UnknownInstance {
                instance: endpoint.instance.clone(),
            })?;
        self.resolver
            .resolve(&spec.name, &endpoint.interface)
            .ok_or_else(|| DesignError::UnknownInterface {
                instance: endpoint.instance.clone(),
                ip_type: spec.name.clone(),
                interface: endpoint.interface.clone(),
            })
    }

    fn bind_instances<'d>(
        &self,
        desc: &'d DesignDescription,
    ) -> Result<(InstanceTypes<'d, 'c>, Vec<Instance>), DesignError> {
        let resolved: Vec<Option<&'c IpCoreSpec>> = desc
            .instances
            .par_iter()
            .map(|decl| self.resolver.ip_core(&decl.ip_type))
            .collect();

        let mut types = InstanceTypes::with_capacity(desc.instances.len());
        let mut instances = Vec::with_capacity(desc.instances.len());
        for (decl, spec) in desc.instances.iter().zip(resolved) {
            if !Endpoint::is_valid_instance(&decl.name) {
                return Err(DesignError::InvalidInstanceName {
                    instance: decl.name.clone(),
                });
            }
            if types.contains_key(decl.name.as_str()) {
                return Err(DesignError::DuplicateInstance {
                    instance: decl.name.clone(),
                });
            }
            let spec = spec.ok_or_else(|| DesignError::UnknownIpCoreType {
                instance: decl.name.clone(),
                ip_type: decl.ip_type.clone(),
            })?;
            types.insert(decl.name.as_str(), spec);
            instances.push(Instance {
                name: decl.name.clone(),
                ip_type: decl.ip_type.clone(),
            });
        }
        Ok((types, instances))
    }

    fn bind_connections<'d>(
        &self,
        decls: &'d [ConnectionDecl],
        types: &InstanceTypes<'d, 'c>,
        bindings: &mut Bindings<'d>,
    ) -> Result<Vec<InterfaceConnection>, DesignError> {
        let resolved: Vec<_> = decls
            .par_iter()
            .map(|decl| {
                let from = self.resolve_endpoint(types, &decl.from)?;
                let to = self.resolve_endpoint(types, &decl.to)?;
                Ok::<_, DesignError>((from, to))
            })
            .collect();

        let mut connections = Vec::with_capacity(decls.len());
        for (decl, ends) in decls.iter().zip(resolved) {
            let (from, to) = ends?;
            if !from.direction.is_compatible_with(to.direction) {
                return Err(DesignError::DirectionMismatch {
                    endpoint: decl.to.clone(),
                    direction: to.direction,
                    peer: format!("`{}`", decl.from),
                    peer_direction: from.direction,
                });
            }
            bindings.bind(&decl.from, from)?;
            bindings.bind(&decl.to, to)?;
            connections.push(InterfaceConnection {
                from: decl.from.clone(),
                to: decl.to.clone(),
            });
        }
        Ok(connections)
    }

    fn bind_externals<'d>(
        &self,
        decls: &'d [ExternalDecl],
        types: &InstanceTypes<'d, 'c>,
        bindings: &mut Bindings<'d>,
    ) -> Result<Vec<ExternalBinding>, DesignError> {
        let resolved: Vec<_> = decls
            .par_iter()
            .map(|decl| self.resolve_endpoint(types, &decl.endpoint))
            .collect();

        let mut ports = HashSet::with_capacity(decls.len());
        let mut externals = Vec::with_capacity(decls.len());
        for (decl, spec) in decls.iter().zip(resolved) {
            let spec = spec?;
            let presented = decl.kind.inner_direction();
            if !presented.is_compatible_with(spec.direction) {
                return Err(DesignError::DirectionMismatch {
                    endpoint: decl.endpoint.clone(),
                    direction: spec.direction,
                    peer: format!("{} `{}`", decl.kind, decl.port),
                    peer_direction: presented,
                });
            }
            bindings.bind(&decl.endpoint, spec)?;
            // A port fed by two declarations that each passed fan-out.
            if !ports.insert(decl.port.as_str()) {
                return Err(DesignError::AmbiguousExternalBinding {
                    port: decl.port.clone(),
                    count: decls.iter().filter(|d| d.port == decl.port).count(),
                });
            }
            externals.push(ExternalBinding {
                port: decl.port.clone(),
                kind: decl.kind,
                endpoint: decl.endpoint.clone(),
                direction: spec.direction,
            });
        }
        Ok(externals)
    }
}

/// Validates `desc` against `catalog`.
///
/// Shorthand for `DesignBuilder::new(SpecResolver::new(catalog)).build(desc)`.
pub fn build_design(
    desc: &DesignDescription,
    catalog: &loom_ir::Catalog,
) -> Result<Design, DesignError> {
    DesignBuilder::new(SpecResolver::new(catalog)).build(desc)
}

/// Per-endpoint use counts across connections and external bindings.
#[derive(Default)]
struct Bindings<'d> {
    counts: HashMap<(&'d str, &'d str), usize>,
}

impl<'d> Bindings<'d> {
    fn bind(&mut self, endpoint: &'d Endpoint, spec: &InterfaceSpec) -> Result<(), DesignError> {
        let count = self
            .counts
            .entry((endpoint.instance.as_str(), endpoint.interface.as_str()))
            .or_insert(0);
        if *count > 0 && !spec.multi {
            return Err(DesignError::InterfaceAlreadyBound {
                instance: endpoint.instance.clone(),
                interface: endpoint.interface.clone(),
            });
        }
        *count += 1;
        Ok(())
    }
}
