//! Dagger-Hilt module rendering

use crate::code_block::CodeBlock;
use crate::error::{CodegenError, CodegenResult};
use crate::java_file::{AnnotationDecl, JavaFile, MethodDecl, Modifier, ParameterDecl, TypeDecl};
use crate::naming;
use pommel_core::{
    Artifact, ArtifactRenderer, BindingDescriptor, GeneratorConfig, PommelError, PommelResult,
    ProvidedParameter, RenderStrategy, SourceConstruct,
};
use pommel_model::{ClassName, TypeName};
use tracing::trace;

fn module() -> ClassName {
    ClassName::new("dagger", "Module")
}

fn provides() -> ClassName {
    ClassName::new("dagger", "Provides")
}

fn binds() -> ClassName {
    ClassName::new("dagger", "Binds")
}

fn install_in() -> ClassName {
    ClassName::new("dagger.hilt", "InstallIn")
}

fn generated() -> ClassName {
    ClassName::new("javax.annotation", "Generated")
}

/// Renders one `@Module` class per accepted binding
#[derive(Debug, Clone, Default)]
pub struct JavaRenderer {
    config: GeneratorConfig,
}

impl JavaRenderer {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the declarations of the module for `descriptor`
    pub fn java_file(&self, descriptor: &BindingDescriptor) -> CodegenResult<JavaFile> {
        let (name, method) = match descriptor.source() {
            SourceConstruct::Type { name } => match descriptor.strategy() {
                RenderStrategy::Provides => (
                    naming::type_module_name(name),
                    constructor_provider(name, descriptor)?,
                ),
                RenderStrategy::Binds => (naming::type_module_name(name), binder(name, descriptor)?),
            },
            SourceConstruct::Function {
                container,
                name,
                receiver,
            } => {
                if descriptor.strategy() == RenderStrategy::Binds {
                    return Err(CodegenError::UnsupportedType {
                        type_name: descriptor.exposed_type().to_string(),
                        reason: "functions can only be provided, not bound".to_string(),
                    });
                }
                (
                    naming::function_module_name(container, name),
                    function_provider(container, name, receiver, descriptor)?,
                )
            }
        };
        naming::check_identifier(&name, "module name")?;
        naming::check_identifier(&method.name, "method name")?;

        trace!(module = %name, method = %method.name, "building module");

        Ok(JavaFile {
            package: descriptor.source().package().to_string(),
            type_decl: TypeDecl {
                name,
                annotations: self.module_annotations(descriptor),
                modifiers: vec![Modifier::Public, Modifier::Abstract],
                methods: vec![method],
            },
        })
    }

    fn module_annotations(&self, descriptor: &BindingDescriptor) -> Vec<AnnotationDecl> {
        let mut annotations = Vec::new();

        if self.config.generated_annotation {
            annotations.push(
                AnnotationDecl::new(generated())
                    .member("value", CodeBlock::new().string(&self.config.processor))
                    .member("comments", CodeBlock::new().string(&self.config.comments)),
            );
        }

        annotations.push(AnnotationDecl::new(module()));

        if descriptor.generation_enabled()
            && let Some(target) = descriptor.install_target()
        {
            annotations.push(
                AnnotationDecl::new(install_in())
                    .member("value", CodeBlock::new().class(target).text(".class")),
            );
        }

        annotations
    }
}

impl ArtifactRenderer for JavaRenderer {
    fn render(&self, descriptor: &BindingDescriptor) -> PommelResult<Artifact> {
        let file = self
            .java_file(descriptor)
            .map_err(|err| PommelError::RenderError {
                construct: descriptor.source().display_name(),
                reason: err.to_string(),
            })?;

        Ok(Artifact {
            package: file.package.clone(),
            type_name: file.type_decl.name.clone(),
            file_name: file.file_name(),
            contents: file.to_source(),
        })
    }
}

/// Entry point annotations: the binding kind, then scope, then qualifier
fn entry_point_annotations(kind: ClassName, descriptor: &BindingDescriptor) -> Vec<AnnotationDecl> {
    std::iter::once(AnnotationDecl::new(kind))
        .chain(descriptor.scope().map(AnnotationDecl::copy_of))
        .chain(descriptor.qualifier().map(AnnotationDecl::copy_of))
        .collect()
}

fn parameter_decls(parameters: &[ProvidedParameter]) -> CodegenResult<Vec<ParameterDecl>> {
    parameters
        .iter()
        .map(|parameter| {
            naming::check_identifier(&parameter.name, "parameter name")?;
            let mut decl = ParameterDecl::new(parameter.ty.clone(), parameter.name.clone());
            decl.annotations
                .extend(parameter.qualifier.iter().map(AnnotationDecl::copy_of));
            Ok(decl)
        })
        .collect()
}

/// `<callee>(` then one argument per line
fn call(callee: CodeBlock, parameters: &[ProvidedParameter]) -> CodeBlock {
    let arguments = CodeBlock::join(
        parameters.iter().map(|p| CodeBlock::of(p.name.clone())),
        ",\n",
    );
    CodeBlock::statement(
        CodeBlock::of("return ")
            .block(callee)
            .text("(\n")
            .block(arguments)
            .text(")"),
    )
}

fn constructor_provider(
    class: &ClassName,
    descriptor: &BindingDescriptor,
) -> CodegenResult<MethodDecl> {
    let own_type = TypeName::Class(class.clone());
    Ok(MethodDecl {
        name: naming::provides_method_name(class),
        annotations: entry_point_annotations(provides(), descriptor),
        modifiers: vec![Modifier::Public, Modifier::Static],
        return_type: descriptor.exposed_type().clone(),
        parameters: parameter_decls(descriptor.parameters())?,
        body: call(CodeBlock::of("new ").ty(&own_type), descriptor.parameters()),
    })
}

fn binder(class: &ClassName, descriptor: &BindingDescriptor) -> CodegenResult<MethodDecl> {
    let exposed = descriptor.exposed_type();
    if exposed.is_primitive() {
        return Err(CodegenError::UnsupportedType {
            type_name: exposed.to_string(),
            reason: "a primitive cannot be bound to an implementation".to_string(),
        });
    }

    let parameter_name = naming::decapitalize(class.simple_name());
    naming::check_identifier(&parameter_name, "parameter name")?;

    Ok(MethodDecl {
        name: naming::binds_method_name(class),
        annotations: entry_point_annotations(binds(), descriptor),
        modifiers: vec![Modifier::Public, Modifier::Abstract],
        return_type: exposed.clone(),
        parameters: vec![ParameterDecl::new(
            TypeName::Class(class.clone()),
            parameter_name,
        )],
        body: CodeBlock::new(),
    })
}

fn function_provider(
    container: &ClassName,
    function: &str,
    receiver: &str,
    descriptor: &BindingDescriptor,
) -> CodegenResult<MethodDecl> {
    naming::check_identifier(function, "function name")?;

    Ok(MethodDecl {
        name: naming::function_method_name(container, function),
        annotations: entry_point_annotations(provides(), descriptor),
        modifiers: vec![Modifier::Public, Modifier::Static],
        return_type: descriptor.exposed_type().clone(),
        parameters: parameter_decls(descriptor.parameters())?,
        body: call(
            CodeBlock::of(format!("{receiver}.{function}")),
            descriptor.parameters(),
        ),
    })
}

#[cfg(test)]
#[path = "renderer/renderer_tests.rs"]
mod renderer_tests;
