#![allow(non_snake_case)]

use super::*;
use pommel_core::DescriptorBuilder;
use pommel_model::{Annotation, names};

fn class(name: &str) -> ClassName {
    ClassName::best_guess(name).unwrap()
}

fn ty(name: &str) -> TypeName {
    TypeName::parse(name).unwrap()
}

fn singleton_component() -> Option<ClassName> {
    Some(class("dagger.hilt.components.SingletonComponent"))
}

fn singleton() -> Option<Annotation> {
    Some(Annotation::new(class(names::SINGLETON)))
}

fn named(value: &str) -> Annotation {
    Annotation::new(class(names::NAMED)).with_member("value", format!("\"{value}\""))
}

fn parameter(name: &str, type_name: &str) -> ProvidedParameter {
    ProvidedParameter {
        name: name.into(),
        ty: ty(type_name),
        qualifier: None,
    }
}

fn qualified(name: &str, type_name: &str, qualifier: &str) -> ProvidedParameter {
    ProvidedParameter {
        qualifier: Some(named(qualifier)),
        ..parameter(name, type_name)
    }
}

fn sample_parameters() -> Vec<ProvidedParameter> {
    vec![
        qualified("a", "int", "a"),
        parameter("b", "java.lang.String"),
        parameter("c", "double"),
        qualified("d", "byte", "b"),
    ]
}

fn provides_type(name: &str) -> DescriptorBuilder {
    BindingDescriptor::builder(
        SourceConstruct::Type { name: class(name) },
        ty(name),
        RenderStrategy::Provides,
    )
    .install_target(singleton_component())
}

fn binds_type(name: &str, exposed: &str) -> DescriptorBuilder {
    BindingDescriptor::builder(
        SourceConstruct::Type { name: class(name) },
        ty(exposed),
        RenderStrategy::Binds,
    )
    .install_target(singleton_component())
}

fn function(container: &str, function: &str, receiver: &str, returns: &str) -> DescriptorBuilder {
    BindingDescriptor::builder(
        SourceConstruct::Function {
            container: class(container),
            name: function.into(),
            receiver: receiver.into(),
        },
        ty(returns),
        RenderStrategy::Provides,
    )
    .install_target(singleton_component())
}

fn render(builder: DescriptorBuilder) -> String {
    render_with(JavaRenderer::default(), builder)
}

fn render_with(renderer: JavaRenderer, builder: DescriptorBuilder) -> String {
    renderer.render(&builder.build().unwrap()).unwrap().contents
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn JavaRenderer___unscoped_class___provides_new_instance() {
    let source = render(provides_type("test.SampleClass"));

    assert_eq!(
        source,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import dagger.hilt.InstallIn;
import dagger.hilt.components.SingletonComponent;
import javax.annotation.Generated;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(SingletonComponent.class)
public abstract class SampleClass_SoloModule {
  @Provides
  public static SampleClass provides_test_SampleClass() {
    return new SampleClass(
        );
  }
}
"#
    );
}

#[test]
fn JavaRenderer___activity_retained_scope___forwards_scope_and_target() {
    let source = render(
        provides_type("test.SampleClass")
            .install_target(Some(class(
                "dagger.hilt.android.components.ActivityRetainedComponent",
            )))
            .scope(Some(Annotation::new(class(names::ACTIVITY_RETAINED_SCOPED)))),
    );

    assert_eq!(
        source,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import dagger.hilt.InstallIn;
import dagger.hilt.android.components.ActivityRetainedComponent;
import dagger.hilt.android.scopes.ActivityRetainedScoped;
import javax.annotation.Generated;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(ActivityRetainedComponent.class)
public abstract class SampleClass_SoloModule {
  @Provides
  @ActivityRetainedScoped
  public static SampleClass provides_test_SampleClass() {
    return new SampleClass(
        );
  }
}
"#
    );
}

#[test]
fn JavaRenderer___custom_component_in_same_package___not_imported() {
    let source = render(
        provides_type("test.SampleClass")
            .install_target(Some(class("test.MyCustomComponent")))
            .scope(Some(
                Annotation::new(class("test.CustomScope")).with_meta(class(names::SCOPE)),
            )),
    );

    assert_eq!(
        source,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import dagger.hilt.InstallIn;
import javax.annotation.Generated;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(MyCustomComponent.class)
public abstract class SampleClass_SoloModule {
  @Provides
  @CustomScope
  public static SampleClass provides_test_SampleClass() {
    return new SampleClass(
        );
  }
}
"#
    );
}

#[test]
fn JavaRenderer___constructor_parameters___forwarded_one_per_line() {
    let source = render(
        provides_type("test.SampleClass")
            .scope(singleton())
            .parameters(vec![
                parameter("a", "int"),
                parameter("b", "java.lang.String"),
                parameter("c", "double"),
            ]),
    );

    assert_eq!(
        source,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import dagger.hilt.InstallIn;
import dagger.hilt.components.SingletonComponent;
import java.lang.String;
import javax.annotation.Generated;
import javax.inject.Singleton;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(SingletonComponent.class)
public abstract class SampleClass_SoloModule {
  @Provides
  @Singleton
  public static SampleClass provides_test_SampleClass(int a, String b, double c) {
    return new SampleClass(
        a,
        b,
        c);
  }
}
"#
    );
}

#[test]
fn JavaRenderer___qualified_parameters___wrap_past_column_limit() {
    let source = render(
        provides_type("test.SampleClass")
            .scope(singleton())
            .parameters(sample_parameters()),
    );

    assert_eq!(
        source,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import dagger.hilt.InstallIn;
import dagger.hilt.components.SingletonComponent;
import java.lang.String;
import javax.annotation.Generated;
import javax.inject.Named;
import javax.inject.Singleton;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(SingletonComponent.class)
public abstract class SampleClass_SoloModule {
  @Provides
  @Singleton
  public static SampleClass provides_test_SampleClass(@Named("a") int a, String b, double c,
      @Named("b") byte d) {
    return new SampleClass(
        a,
        b,
        c,
        d);
  }
}
"#
    );
}

#[test]
fn JavaRenderer___bind_interface___declares_abstract_binder() {
    let source = render(binds_type("test.SampleClass", "test.TestInterface").scope(singleton()));

    assert_eq!(
        source,
        r#"package test;

import dagger.Binds;
import dagger.Module;
import dagger.hilt.InstallIn;
import dagger.hilt.components.SingletonComponent;
import javax.annotation.Generated;
import javax.inject.Singleton;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(SingletonComponent.class)
public abstract class SampleClass_SoloModule {
  @Binds
  @Singleton
  public abstract TestInterface binds_test_SampleClass(SampleClass sampleClass);
}
"#
    );
}

#[test]
fn JavaRenderer___bind_with_qualifier___qualifier_after_scope() {
    let source = render(
        binds_type("test.SampleClass", "test.AbstractClass")
            .scope(singleton())
            .qualifier(Some(named("test"))),
    );

    assert!(source.contains(
        r#"  @Binds
  @Singleton
  @Named("test")
  public abstract AbstractClass binds_test_SampleClass(SampleClass sampleClass);
"#
    ));
    assert!(source.contains("import javax.inject.Named;\n"));
}

#[test]
fn JavaRenderer___nested_static_class___reflection_named_module() {
    let builder = provides_type("test.SampleClass$InnerClass");

    let artifact = JavaRenderer::default()
        .render(&builder.build().unwrap())
        .unwrap();

    assert_eq!(artifact.file_name, "SampleClass$InnerClass_SoloModule.java");
    assert_eq!(artifact.type_name, "SampleClass$InnerClass_SoloModule");
    assert_eq!(artifact.package, "test");
    assert_eq!(
        artifact.contents,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import dagger.hilt.InstallIn;
import dagger.hilt.components.SingletonComponent;
import javax.annotation.Generated;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(SingletonComponent.class)
public abstract class SampleClass$InnerClass_SoloModule {
  @Provides
  public static SampleClass.InnerClass provides_test_SampleClass$InnerClass() {
    return new SampleClass.InnerClass(
        );
  }
}
"#
    );
}

#[test]
fn JavaRenderer___installation_disabled___omits_install_in() {
    let source = render(
        provides_type("test.SampleClass")
            .install_target(None)
            .generation_enabled(false)
            .scope(Some(
                Annotation::new(class("test.CustomScope")).with_meta(class(names::SCOPE)),
            )),
    );

    assert_eq!(
        source,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import javax.annotation.Generated;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
public abstract class SampleClass_SoloModule {
  @Provides
  @CustomScope
  public static SampleClass provides_test_SampleClass() {
    return new SampleClass(
        );
  }
}
"#
    );
}

#[test]
fn JavaRenderer___generated_annotation_disabled___starts_with_module() {
    let renderer = JavaRenderer::new(GeneratorConfig {
        generated_annotation: false,
        ..GeneratorConfig::default()
    });

    let source = render_with(renderer, provides_type("test.SampleClass"));

    assert!(!source.contains("Generated"));
    assert!(source.contains("dagger.hilt.components.SingletonComponent;\n\n@Module\n@InstallIn"));
}

#[test]
fn JavaRenderer___custom_processor___written_into_generated() {
    let renderer = JavaRenderer::new(GeneratorConfig {
        processor: "com.example.Gen".into(),
        comments: "see \"docs\"".into(),
        ..GeneratorConfig::default()
    });

    let source = render_with(renderer, provides_type("test.SampleClass"));

    assert!(source.contains("    value = \"com.example.Gen\",\n    comments = \"see \\\"docs\\\"\"\n)"));
}

#[test]
fn JavaRenderer___binds_primitive___is_render_error() {
    let descriptor = binds_type("test.SampleClass", "int").build().unwrap();

    let result = JavaRenderer::default().render(&descriptor);

    assert!(matches!(result, Err(PommelError::RenderError { .. })));
}

#[test]
fn JavaRenderer___keyword_parameter_name___is_invalid_identifier() {
    let descriptor = provides_type("test.SampleClass")
        .parameters(vec![parameter("class", "int")])
        .build()
        .unwrap();

    let result = JavaRenderer::default().java_file(&descriptor);

    assert!(matches!(result, Err(CodegenError::InvalidIdentifier { .. })));
}

#[test]
fn JavaRenderer___same_descriptor___identical_bytes() {
    let descriptor = provides_type("test.SampleClass")
        .parameters(sample_parameters())
        .build()
        .unwrap();
    let renderer = JavaRenderer::default();

    let first = renderer.render(&descriptor).unwrap();
    let second = renderer.render(&descriptor).unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Functions and property getters
// ============================================================================

#[test]
fn JavaRenderer___top_level_function___calls_file_facade() {
    let source = render(function("test.SourceKt", "baseUrl", "SourceKt", "java.lang.String"));

    assert_eq!(
        source,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import dagger.hilt.InstallIn;
import dagger.hilt.components.SingletonComponent;
import java.lang.String;
import javax.annotation.Generated;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(SingletonComponent.class)
public abstract class SourceKt_baseUrl_SoloModule {
  @Provides
  public static String provides_test_SourceKt_baseUrl() {
    return SourceKt.baseUrl(
        );
  }
}
"#
    );
}

#[test]
fn JavaRenderer___function_parameters___forwarded_with_qualifiers() {
    let source = render(
        function("test.SourceKt", "baseUrl", "SourceKt", "java.lang.String")
            .parameters(vec![parameter("a", "int"), qualified("b", "byte", "b")]),
    );

    assert!(source.contains(
        r#"  @Provides
  public static String provides_test_SourceKt_baseUrl(int a, @Named("b") byte b) {
    return SourceKt.baseUrl(
        a,
        b);
  }
"#
    ));
}

#[test]
fn JavaRenderer___object_function___calls_through_instance() {
    let source = render(
        function("test.Sample", "baseUrl", "Sample.INSTANCE", "java.lang.String")
            .parameters(vec![parameter("a", "int"), qualified("b", "byte", "b")]),
    );

    assert!(source.contains("public abstract class Sample_baseUrl_SoloModule {\n"));
    assert!(source.contains(
        "  public static String provides_test_Sample_baseUrl(int a, @Named(\"b\") byte b) {\n    return Sample.INSTANCE.baseUrl(\n"
    ));
}

#[test]
fn JavaRenderer___named_companion_called_module___keeps_dagger_import() {
    let source = render(
        function("test.Sample$Module", "baseUrl", "Sample.Module", "java.lang.String")
            .parameters(vec![parameter("a", "int"), qualified("b", "byte", "b")]),
    );

    assert_eq!(
        source,
        r#"package test;

import dagger.Module;
import dagger.Provides;
import dagger.hilt.InstallIn;
import dagger.hilt.components.SingletonComponent;
import java.lang.String;
import javax.annotation.Generated;
import javax.inject.Named;

@Generated(
    value = "pommel.SoloModuleProcessor",
    comments = "https://github.com/JuulLabs/pommel"
)
@Module
@InstallIn(SingletonComponent.class)
public abstract class Sample_Module_baseUrl_SoloModule {
  @Provides
  public static String provides_test_Sample$Module_baseUrl(int a, @Named("b") byte b) {
    return Sample.Module.baseUrl(
        a,
        b);
  }
}
"#
    );
}

#[test_case::test_case("test.Sample$Companion", "Sample.Companion", "Sample_Companion_baseUrl_SoloModule", "provides_test_Sample$Companion_baseUrl" ; "companion")]
#[test_case::test_case("test.Sample$Module$Nested", "Sample.Module.Nested", "Sample_Module_Nested_baseUrl_SoloModule", "provides_test_Sample$Module$Nested_baseUrl" ; "nested companion")]
#[test_case::test_case("test.Sample$A$B", "Sample.A.B.INSTANCE", "Sample_A_B_baseUrl_SoloModule", "provides_test_Sample$A$B_baseUrl" ; "nested objects")]
#[test_case::test_case("test.HiltFunctions", "HiltFunctions", "HiltFunctions_baseUrl_SoloModule", "provides_test_HiltFunctions_baseUrl" ; "renamed file facade")]
fn JavaRenderer___function_containers___named_after_container_chain(
    container: &str,
    receiver: &str,
    module: &str,
    method: &str,
) {
    let source = render(
        function(container, "baseUrl", receiver, "java.lang.String")
            .parameters(vec![parameter("a", "int"), qualified("b", "byte", "b")]),
    );

    assert!(source.contains(&format!("public abstract class {module} {{\n")));
    assert!(source.contains(&format!(
        "  public static String {method}(int a, @Named(\"b\") byte b) {{\n    return {receiver}.baseUrl(\n        a,\n        b);\n"
    )));
}

#[test]
fn JavaRenderer___property_getter___calls_accessor() {
    let source = render(function("test.SourceKt", "getBaseUrl", "SourceKt", "java.lang.String"));

    assert!(source.contains("public abstract class SourceKt_getBaseUrl_SoloModule {\n"));
    assert!(source.contains(
        "  public static String provides_test_SourceKt_getBaseUrl() {\n    return SourceKt.getBaseUrl(\n        );\n"
    ));
}

#[test]
fn JavaRenderer___function_binding_type___returns_it() {
    let source = render(function(
        "test.SourceKt",
        "sampleClass",
        "SourceKt",
        "test.TestInterface",
    ));

    assert!(!source.contains("import java.lang.String;"));
    assert!(source.contains(
        "  public static TestInterface provides_test_SourceKt_sampleClass() {\n    return SourceKt.sampleClass(\n        );\n"
    ));
}

#[test]
fn JavaRenderer___function_qualifier___annotates_provider() {
    let source = render(
        function("test.SourceKt", "sampleClass", "SourceKt", "test.TestInterface")
            .qualifier(Some(named("sample"))),
    );

    assert!(source.contains(
        "  @Provides\n  @Named(\"sample\")\n  public static TestInterface provides_test_SourceKt_sampleClass() {\n"
    ));
}

#[test]
fn JavaRenderer___bound_function___is_unsupported() {
    let descriptor = BindingDescriptor::builder(
        SourceConstruct::Function {
            container: class("test.SourceKt"),
            name: "baseUrl".into(),
            receiver: "SourceKt".into(),
        },
        ty("java.lang.CharSequence"),
        RenderStrategy::Binds,
    )
    .install_target(singleton_component())
    .build()
    .unwrap();

    let result = JavaRenderer::default().java_file(&descriptor);

    assert!(matches!(result, Err(CodegenError::UnsupportedType { .. })));
}
