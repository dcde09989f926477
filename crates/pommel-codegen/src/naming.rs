//! Naming conventions for generated modules.
//!
//! | Source | Function | Output |
//! |--------|----------|--------|
//! | class `test.Outer$Inner` | [`type_module_name`] | `Outer$Inner_SoloModule` |
//! | function `baseUrl` in `test.Sample$Companion` | [`function_module_name`] | `Sample_Companion_baseUrl_SoloModule` |
//! | class `test.Outer$Inner` | [`provides_method_name`] | `provides_test_Outer$Inner` |
//! | class `test.Outer$Inner` | [`binds_method_name`] | `binds_test_Outer$Inner` |
//! | function `baseUrl` in `test.SourceKt` | [`function_method_name`] | `provides_test_SourceKt_baseUrl` |

use crate::error::{CodegenError, CodegenResult};
use pommel_model::ClassName;

/// Suffix of every generated module
pub const MODULE_SUFFIX: &str = "_SoloModule";

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null",
];

/// Lowercase the first character.
///
/// # Examples
///
/// ```
/// use pommel_codegen::naming::decapitalize;
///
/// assert_eq!(decapitalize("SampleClass"), "sampleClass");
/// assert_eq!(decapitalize("URL"), "uRL");
/// assert_eq!(decapitalize(""), "");
/// ```
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Module name of a class: its nesting kept with `$`, so the module is a
/// top-level peer of the outermost class.
///
/// # Examples
///
/// ```
/// use pommel_codegen::naming::type_module_name;
/// use pommel_model::ClassName;
///
/// let inner = ClassName::best_guess("test.SampleClass$InnerClass").unwrap();
/// assert_eq!(type_module_name(&inner), "SampleClass$InnerClass_SoloModule");
/// ```
pub fn type_module_name(class: &ClassName) -> String {
    format!("{}{MODULE_SUFFIX}", class.simple_names().join("$"))
}

/// Module name of a function: container names and the function joined by `_`
pub fn function_module_name(container: &ClassName, function: &str) -> String {
    format!(
        "{}_{function}{MODULE_SUFFIX}",
        container.simple_names().join("_")
    )
}

pub fn provides_method_name(class: &ClassName) -> String {
    format!("provides_{}", flatten(class))
}

pub fn binds_method_name(class: &ClassName) -> String {
    format!("binds_{}", flatten(class))
}

pub fn function_method_name(container: &ClassName, function: &str) -> String {
    format!("provides_{}_{function}", flatten(container))
}

/// Reflection name with package dots turned into underscores
fn flatten(class: &ClassName) -> String {
    class.reflection_name().replace('.', "_")
}

/// Check that `identifier` can be used as a Java name
pub fn check_identifier(identifier: &str, context: &str) -> CodegenResult<()> {
    let mut chars = identifier.chars();
    let well_formed = match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };

    if !well_formed || JAVA_KEYWORDS.contains(&identifier) {
        return Err(CodegenError::invalid_identifier(identifier, context));
    }
    Ok(())
}
