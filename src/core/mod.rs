// ─── Tweaker Assembler Core ───
// Builds the launcher version JSON for a tweaker-based client build.
//
// Architecture:
//   core/
//     project/      Build snapshot: projects, configurations, source sets
//     maven/        Coordinates, repository layout, HEAD probing
//     manifest/     Version JSON model + writer
//     assembler/    Candidate collection, classpath attribution, pipeline
//     settings      Assembler settings file + defaults

pub mod assembler;
pub mod error;
pub mod http;
pub mod manifest;
pub mod maven;
pub mod project;
pub mod settings;
