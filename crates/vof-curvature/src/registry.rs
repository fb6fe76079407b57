//! Runtime selection of curvature models by type name.
//!
//! The process-wide table is built on first access from the built-in models
//! plus every [`CurvatureModelReg`] submitted with
//! [`register_curvature_model!`](crate::register_curvature_model). It is
//! read-only afterwards, so lookups from several threads are fine.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{CurvatureError, CurvatureResult, RegistryError};
use crate::interface::InterfaceProperties;
use crate::model::CurvatureModel;
use crate::models;

/// Top-level configuration key naming the model to use.
pub const MODEL_KEY: &str = "curvatureModel";

/// Constructor stored in the registry: `(name, interface, model_type)`.
pub type CurvatureModelCtor = for<'a> fn(
    &str,
    &'a dyn InterfaceProperties,
    &str,
) -> CurvatureResult<Box<dyn CurvatureModel + 'a>>;

/// Static registration record collected by `inventory`.
pub struct CurvatureModelReg {
    pub model_type: &'static str,
    pub ctor: CurvatureModelCtor,
}

impl CurvatureModelReg {
    pub const fn new(model_type: &'static str, ctor: CurvatureModelCtor) -> Self {
        Self { model_type, ctor }
    }
}

inventory::collect!(CurvatureModelReg);

/// Mapping from model type name to constructor.
#[derive(Default)]
pub struct CurvatureModelRegistry {
    ctors: HashMap<String, CurvatureModelCtor>,
}

impl CurvatureModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in models only.
    pub fn with_builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for (model_type, ctor) in models::builtins() {
            registry.register(model_type, ctor)?;
        }
        Ok(registry)
    }

    /// Built-in models plus every statically submitted registration.
    pub fn from_static() -> Result<Self, RegistryError> {
        let mut registry = Self::with_builtins()?;
        for reg in inventory::iter::<CurvatureModelReg> {
            registry.register(reg.model_type, reg.ctor)?;
        }
        Ok(registry)
    }

    /// Add a constructor. A type name can only be registered once.
    pub fn register(
        &mut self,
        model_type: impl Into<String>,
        ctor: CurvatureModelCtor,
    ) -> Result<(), RegistryError> {
        let model_type = model_type.into();
        if self.ctors.contains_key(&model_type) {
            return Err(RegistryError::Duplicate { model_type });
        }
        self.ctors.insert(model_type, ctor);
        Ok(())
    }

    pub fn contains(&self, model_type: &str) -> bool {
        self.ctors.contains_key(model_type)
    }

    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }

    /// Registered type names, sorted.
    pub fn model_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.ctors.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Construct a new model named after its type.
    pub fn create<'a>(
        &self,
        model_type: &str,
        interface: &'a dyn InterfaceProperties,
    ) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> {
        self.create_named(model_type, model_type, interface)
    }

    /// Construct a new model with an explicit instance name.
    ///
    /// Every call builds a fresh, independent instance.
    pub fn create_named<'a>(
        &self,
        name: &str,
        model_type: &str,
        interface: &'a dyn InterfaceProperties,
    ) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> {
        let Some(ctor) = self.ctors.get(model_type) else {
            return Err(CurvatureError::UnknownModel {
                requested: model_type.to_string(),
                known: self.model_types().into_iter().map(String::from).collect(),
            });
        };
        tracing::debug!(name, model_type, "selecting curvature model");
        ctor(name, interface, model_type)
    }

    /// Construct the model named by the `curvatureModel` entry of the
    /// interface's configuration root.
    pub fn select<'a>(
        &self,
        interface: &'a dyn InterfaceProperties,
    ) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> {
        let root = interface.config().load()?;
        let model_type: String = root.lookup(MODEL_KEY)?;
        self.create(&model_type, interface)
    }
}

static REGISTRY: LazyLock<CurvatureModelRegistry> =
    LazyLock::new(|| match CurvatureModelRegistry::from_static() {
        Ok(registry) => registry,
        Err(err) => panic!("curvature model registration failed: {err}"),
    });

/// The process-wide registry.
///
/// # Panics
/// Panics on first access if two registrations share a type name.
pub fn registry() -> &'static CurvatureModelRegistry {
    &REGISTRY
}

/// Construct a model from the process-wide registry.
pub fn create<'a>(
    model_type: &str,
    interface: &'a dyn InterfaceProperties,
) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> {
    registry().create(model_type, interface)
}

pub fn create_named<'a>(
    name: &str,
    model_type: &str,
    interface: &'a dyn InterfaceProperties,
) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> {
    registry().create_named(name, model_type, interface)
}

pub fn select<'a>(
    interface: &'a dyn InterfaceProperties,
) -> CurvatureResult<Box<dyn CurvatureModel + 'a>> {
    registry().select(interface)
}

/// Registered type names of the process-wide registry, sorted.
pub fn model_types() -> Vec<&'static str> {
    registry().model_types()
}
