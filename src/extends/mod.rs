#[cfg(test)]
mod tests;

use crate::context::{ContextError, ParseContext};
use crate::model::{ModuleCoordinate, ModuleDescriptor};
use std::collections::HashSet;
use tracing::debug;

/// Which parent fields a child descriptor inherits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InheritScope {
    pub dependencies: bool,
    pub status: bool,
}

impl InheritScope {
    pub const ALL: InheritScope = InheritScope {
        dependencies: true,
        status: true,
    };
}

impl Default for InheritScope {
    fn default() -> Self {
        Self::ALL
    }
}

/// An `extends` clause found in a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendsDirective {
    pub parent: ModuleCoordinate,
    pub inherit: InheritScope,
}

impl ExtendsDirective {
    pub fn new(parent: ModuleCoordinate) -> Self {
        Self {
            parent,
            inherit: InheritScope::default(),
        }
    }

    pub fn with_scope(mut self, inherit: InheritScope) -> Self {
        self.inherit = inherit;
        self
    }
}

/// Merge the parent's fields into `child`
///
/// Parent dependencies go first, once each, skipping any the child already
/// declares.
/// In disconnected mode the parent is synthesized and contributes nothing
/// beyond its status.
pub fn apply_extends(
    ctx: &dyn ParseContext,
    mut child: ModuleDescriptor,
    directive: &ExtendsDirective,
) -> Result<ModuleDescriptor, ContextError> {
    let parent = ctx.resolve_parent_descriptor(&directive.parent)?;

    if directive.inherit.dependencies {
        let mut seen = HashSet::new();
        let inherited: Vec<ModuleCoordinate> = parent
            .dependencies
            .into_iter()
            .filter(|dep| !child.depends_on(dep) && seen.insert(dep.clone()))
            .collect();

        debug!(
            child = %child.coordinate,
            parent = %directive.parent,
            inherited = inherited.len(),
            mode = %ctx.mode(),
            "inheriting parent dependencies"
        );

        if !inherited.is_empty() {
            let own = std::mem::take(&mut child.dependencies);
            child.dependencies = inherited;
            child.dependencies.extend(own);
        }
    }

    if directive.inherit.status && child.status.is_empty() {
        child.status = parent.status;
    }

    Ok(child)
}

/// Coordinate of the module being parsed, if the context knows it
///
/// An unsupported query means the mode has no current module; any other
/// failure is returned to the caller.
pub fn describe_self(
    ctx: &dyn ParseContext,
) -> Result<Option<ModuleCoordinate>, ContextError> {
    match ctx.current_coordinate() {
        Ok(coordinate) => Ok(Some(coordinate)),
        Err(e) if e.is_unsupported() => Ok(None),
        Err(e) => Err(e),
    }
}
