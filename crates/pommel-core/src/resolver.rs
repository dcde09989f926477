//! Binding type resolution.
//!
//! Decides which type a generated module exposes for a class:
//!
//! 1. An explicit `bindingClass` always wins.
//! 2. With `bindSuperType = false` the class binds itself.
//! 3. Otherwise the declared supertypes decide. One interface or one
//!    superclass is bound; none means self-binding; anything more yields
//!    every [`BindingConflict`] that applies.
//!
//! An interface next to a real superclass is reported as "Multiple super
//! classes found" even when there is a single interface. Callers depend on
//! that trigger, so it is kept as is.

use pommel_model::{BindingClass, TypeConstruct, TypeName};
use std::fmt;

/// Everything the resolver looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingInputs<'a> {
    pub own_type: TypeName,
    pub binding_class: &'a BindingClass,
    /// Declared superclass, root type excluded
    pub superclass: Option<&'a TypeName>,
    pub interfaces: &'a [TypeName],
    pub bind_super_type: bool,
}

impl<'a> BindingInputs<'a> {
    pub fn for_type(construct: &'a TypeConstruct) -> Self {
        let supertypes = construct.declared_supertypes();
        Self {
            own_type: construct.own_type(),
            binding_class: &construct.solo_module.binding_class,
            superclass: supertypes.superclass,
            interfaces: supertypes.interfaces,
            bind_super_type: construct.solo_module.bind_super_type,
        }
    }
}

/// The decided exposed type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBinding {
    pub exposed_type: TypeName,
    /// `exposed_type` is the construct's own type
    pub self_binding: bool,
}

/// Supertype configurations that need an explicit `bindingClass`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingConflict {
    MultipleInterfaces {
        interfaces: Vec<TypeName>,
    },
    SuperclassAndInterfaces {
        superclass: TypeName,
        interfaces: Vec<TypeName>,
    },
}

impl BindingConflict {
    /// Diagnostic text naming the conflicting types
    pub fn message(&self) -> String {
        match self {
            BindingConflict::MultipleInterfaces { interfaces } => format!(
                "Multiple interfaces found. Binding type must be specified: {}",
                join_types(interfaces.iter())
            ),
            BindingConflict::SuperclassAndInterfaces {
                superclass,
                interfaces,
            } => format!(
                "Multiple super classes found. Binding type must be specified: {}",
                join_types(std::iter::once(superclass).chain(interfaces.iter()))
            ),
        }
    }
}

fn join_types<'a>(types: impl Iterator<Item = &'a TypeName>) -> String {
    types.map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for BindingConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Resolve the exposed type of a binding.
///
/// Every conflict found is returned, so a class with a superclass and two
/// interfaces reports both.
pub fn resolve_binding(
    inputs: &BindingInputs<'_>,
) -> Result<ResolvedBinding, Vec<BindingConflict>> {
    let exposed_type = match (inputs.binding_class.specified(), inputs.bind_super_type) {
        (Some(explicit), _) => explicit.clone(),
        (None, false) => inputs.own_type.clone(),
        (None, true) => infer_from_supertypes(inputs)?,
    };

    Ok(ResolvedBinding {
        self_binding: exposed_type == inputs.own_type,
        exposed_type,
    })
}

fn infer_from_supertypes(inputs: &BindingInputs<'_>) -> Result<TypeName, Vec<BindingConflict>> {
    let mut conflicts = Vec::new();

    if inputs.interfaces.len() > 1 {
        conflicts.push(BindingConflict::MultipleInterfaces {
            interfaces: inputs.interfaces.to_vec(),
        });
    }
    if let Some(superclass) = inputs.superclass
        && !inputs.interfaces.is_empty()
    {
        conflicts.push(BindingConflict::SuperclassAndInterfaces {
            superclass: superclass.clone(),
            interfaces: inputs.interfaces.to_vec(),
        });
    }
    if !conflicts.is_empty() {
        return Err(conflicts);
    }

    Ok(inputs
        .interfaces
        .first()
        .or(inputs.superclass)
        .unwrap_or(&inputs.own_type)
        .clone())
}
