//! pommel-codegen - Java source emission for pommel modules
//!
//! [`JavaRenderer`] turns an accepted [`BindingDescriptor`](pommel_core::BindingDescriptor)
//! into a Dagger `@Module` class. Output is laid out the way JavaPoet lays
//! out Java: two-space indents, imports collected in a first pass, and
//! parameter lists wrapped at 100 columns.
//!
//! [`write_artifacts`] places the rendered files under an output root.

mod code_block;
mod code_writer;
mod error;
mod java_file;
mod line_wrapper;
pub mod naming;
mod renderer;
mod writer;

pub use code_block::CodeBlock;
pub use code_writer::INDENT;
pub use error::{CodegenError, CodegenResult};
pub use java_file::{AnnotationDecl, JavaFile, MethodDecl, Modifier, ParameterDecl, TypeDecl};
pub use line_wrapper::COLUMN_LIMIT;
pub use renderer::JavaRenderer;
pub use writer::{WriteReport, write_artifacts};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CodegenError, CodegenResult, JavaRenderer, WriteReport, write_artifacts};
}
