// crates/shared-kernel/src/value_objects/mod.rs
pub mod version_tag;

pub use version_tag::VersionTag;
