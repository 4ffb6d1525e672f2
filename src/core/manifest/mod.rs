pub mod model;
pub mod writer;

pub use model::{
    assemble_manifest, format_timestamp, ManifestArguments, ManifestLibrary, TweakerManifest,
    LAUNCH_WRAPPER_MAIN_CLASS, TWEAKER_CLASS,
};
pub use writer::write_manifest;
