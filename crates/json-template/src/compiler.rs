//! Binds field specs to formatter implementations ahead of any render pass.
use crate::error::JsonTemplateError;
use crate::functions::{DEFAULT_FORMATTER, FormatFunction, FormatterRegistry};
use vitae_template_core::FieldSpec;

/// A field spec with its formatter resolved. Compiling up front means a
/// render pass can never hit an unknown formatter name.
#[derive(Clone)]
pub struct CompiledField {
    pub spec: FieldSpec,
    pub formatter_name: String,
    pub formatter: FormatFunction,
}

impl std::fmt::Debug for CompiledField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledField")
            .field("spec", &self.spec)
            .field("formatter", &self.formatter_name)
            .finish()
    }
}

impl CompiledField {
    pub fn name(&self) -> &str {
        &self.spec.name
    }
}

pub struct Compiler<'a> {
    registry: &'a FormatterRegistry,
}

impl<'a> Compiler<'a> {
    pub fn new(registry: &'a FormatterRegistry) -> Self {
        Self { registry }
    }

    pub fn compile_field(&self, spec: &FieldSpec) -> Result<CompiledField, JsonTemplateError> {
        let name = spec.formatter.as_deref().unwrap_or(DEFAULT_FORMATTER);
        let formatter = self.registry.get(name).ok_or_else(|| {
            JsonTemplateError::Compilation(format!(
                "Field '{}' uses unknown formatter '{}'",
                spec.name, name
            ))
        })?;
        Ok(CompiledField {
            spec: spec.clone(),
            formatter_name: name.to_string(),
            formatter,
        })
    }

    pub fn compile(&self, specs: &[FieldSpec]) -> Result<Vec<CompiledField>, JsonTemplateError> {
        specs.iter().map(|s| self.compile_field(s)).collect()
    }
}
