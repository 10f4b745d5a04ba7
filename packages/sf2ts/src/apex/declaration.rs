/**
 * Class declaration compiler
 *
 * Walks a parsed apex class and emits TypeScript ambient declarations
 * through the position-aware builder: one `declare interface` block for the
 * fields, one `declare namespace` block wrapping nested classes, and one
 * `declare module` block per @AuraEnabled method. Emission order (fields,
 * nested classes, methods, each in declaration order) fixes the alignment
 * order.
 */
use indexmap::IndexMap;
use smallvec::SmallVec;
use thiserror::Error;

use super::ast::{
    ClassDeclaration, ClassMember, CompilationUnit, FieldDeclaration, MethodDeclaration,
    ModifierFlags,
};
use super::types::{map_type, TypeScope};
use crate::builder::{AlignmentPair, PositionAwareTextBuilder};
use crate::logging::Logger;

/// A required token was missing from the tree. Aborts the whole unit so no
/// partial declaration output or corrupt alignment is published.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StructuralError(pub String);

/// Compiles one class tree per instance; holds the per-call scope and
/// builder so repeated and concurrent compilations never share state.
pub struct DeclarationCompiler<'a> {
    builder: PositionAwareTextBuilder,
    scope: TypeScope,
    logger: &'a dyn Logger,
}

impl<'a> DeclarationCompiler<'a> {
    pub fn new(logger: &'a dyn Logger) -> Self {
        DeclarationCompiler {
            builder: PositionAwareTextBuilder::new(),
            scope: TypeScope::new(),
            logger,
        }
    }

    /// Compiles the unit's first top-level class. A unit without one (an
    /// enum or interface file, say) is not an error; it produces the empty
    /// declaration and empty alignment.
    pub fn compile(
        mut self,
        unit: &CompilationUnit,
        is_resource_context: bool,
    ) -> Result<(String, Vec<AlignmentPair>), StructuralError> {
        let Some(class) = unit.classes.first() else {
            return Ok((String::new(), Vec::new()));
        };
        self.process_class(class, is_resource_context)?;
        Ok((self.builder.build(), self.builder.alignment()))
    }

    fn process_class(
        &mut self,
        class: &ClassDeclaration,
        is_resource_context: bool,
    ) -> Result<(), StructuralError> {
        let class_name = &class.name;
        if self.scope.outer_class_name.is_none() {
            self.scope.outer_class_name = Some(class_name.text.clone());
        }

        let mut fields: Vec<&FieldDeclaration> = Vec::new();
        let mut classes: Vec<&ClassDeclaration> = Vec::new();
        let mut methods: Vec<&MethodDeclaration> = Vec::new();
        for member in &class.members {
            match member {
                ClassMember::Field(field) => fields.push(field),
                ClassMember::Class(nested) => {
                    // Registered at discovery, before any nested body is
                    // compiled, so later siblings in this pass can refer to
                    // the name.
                    self.scope
                        .known_nested_class_names
                        .insert(nested.name.text.clone());
                    classes.push(nested);
                }
                ClassMember::Method(method) => methods.push(method),
                _ => {}
            }
        }

        if !fields.is_empty() {
            self.builder.add_plain("declare interface ");
            self.builder
                .add_anchored(&class_name.text, class_name.start, class_name.end);
            self.builder.add_plain(" {\n");
            for field in fields {
                self.transform_field(field, is_resource_context)?;
            }
            self.builder.add_plain("}\n");
        }

        if !classes.is_empty() {
            self.builder.add_plain("declare namespace ");
            self.builder
                .add_anchored(&class_name.text, class_name.start, class_name.end);
            self.builder.add_plain(" {\n");
            for nested in classes {
                self.process_class(nested, is_resource_context)?;
            }
            self.builder.add_plain("}\n");
        }

        let owner = class_name.text.clone();
        for method in methods {
            self.transform_method(&owner, method)?;
        }
        Ok(())
    }

    /// Emits the field line, preceded by a deprecation comment when the
    /// member is not exposed. The line itself is emitted either way.
    fn transform_field(
        &mut self,
        field: &FieldDeclaration,
        is_resource_context: bool,
    ) -> Result<(), StructuralError> {
        let name = field
            .declarators
            .first()
            .ok_or_else(|| StructuralError("field declaration has no name".to_string()))?;
        let type_ref = field
            .type_ref
            .as_ref()
            .ok_or_else(|| StructuralError(format!("field {} has no type", name.text)))?;

        let mut reasons: SmallVec<[&str; 3]> = SmallVec::new();
        match &field.modifiers {
            None => reasons.push("public or global"),
            Some(modifiers) => {
                let aura_enabled =
                    is_resource_context || modifiers.annotation("AuraEnabled").is_some();
                if !aura_enabled {
                    reasons.push("@AuraEnabled");
                }
                if modifiers.flags.contains(ModifierFlags::STATIC) {
                    reasons.push("non-static");
                }
                if !modifiers
                    .flags
                    .intersects(ModifierFlags::PUBLIC | ModifierFlags::GLOBAL)
                {
                    reasons.push("public or global");
                }
            }
        }
        if !reasons.is_empty() {
            self.builder.add_plain(&format!(
                "  /** @deprecated not exposed; property must be {} */\n",
                reasons.join(", ")
            ));
        }

        let mapped = map_type(Some(type_ref), &self.scope, self.logger);
        self.builder.add_plain("  ");
        self.builder.add_anchored(&name.text, name.start, name.end);
        self.builder.add_plain("?: ");
        self.builder
            .add_anchored(&mapped, type_ref.start, type_ref.end);
        self.builder.add_plain(";\n");
        Ok(())
    }

    /// Emits one `declare module` block for an @AuraEnabled method; other
    /// methods are skipped without a trace.
    fn transform_method(
        &mut self,
        class_name: &str,
        method: &MethodDeclaration,
    ) -> Result<(), StructuralError> {
        let name = method
            .name
            .as_ref()
            .ok_or_else(|| StructuralError("method declaration has no name".to_string()))?;
        let Some(annotation) = method
            .modifiers
            .as_ref()
            .and_then(|modifiers| modifiers.annotation("AuraEnabled"))
        else {
            return Ok(());
        };
        let cacheable = annotation.bool_arg("cacheable");
        let continuation = annotation.bool_arg("continuation");
        let return_type = method
            .return_type
            .as_ref()
            .ok_or_else(|| StructuralError(format!("method {} has no return type", name.text)))?;

        let mut params: IndexMap<String, String> = IndexMap::new();
        for param in &method.params {
            params.insert(
                param.name.text.clone(),
                map_type(Some(&param.type_ref), &self.scope, self.logger),
            );
        }
        let mapped_return = map_type(Some(return_type), &self.scope, self.logger);

        let specifier = if continuation {
            format!("@salesforce/apexContinuation/{}.{}", class_name, name.text)
        } else {
            format!("@salesforce/apex/{}.{}", class_name, name.text)
        };

        let record = if params.is_empty() {
            String::new()
        } else {
            let entries: Vec<String> = params
                .iter()
                .map(|(param_name, param_type)| format!("{}: {}", param_name, param_type))
                .collect();
            format!("{{ {} }}", entries.join("; "))
        };
        let call_signature = if params.is_empty() {
            String::new()
        } else {
            format!("param: {}", record)
        };

        self.builder.add_plain("declare module ");
        self.builder
            .add_anchored(&format!("\"{}\"", specifier), name.start, name.end);
        self.builder.add_plain(" {\n  const ");
        self.builder.add_anchored(&name.text, name.start, name.end);

        let mut rest = format!(": {{\n    ({}): Promise<{}>;", call_signature, mapped_return);
        if cacheable {
            let adapter_input = if params.is_empty() {
                "never"
            } else {
                record.as_str()
            };
            rest.push_str(&format!(
                "\n    adapter: import(\"lwc\").WireAdapterConstructor<\n      {},\n      {{ error?: any; data?: {}; }}\n    >;",
                adapter_input, mapped_return
            ));
        }
        rest.push_str(&format!("\n  }};\n  export default {};\n}}\n", name.text));
        self.builder.add_plain(&rest);
        Ok(())
    }
}
