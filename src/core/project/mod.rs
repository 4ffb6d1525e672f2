pub mod model;

pub use model::{BuildSnapshot, Configuration, DeclaredDependency, Project, SourceSet};
