//! sbom-seed - dependency manifest parsing and registry enrichment
//!
//! This crate parses a project's dependency manifest (requirements.txt,
//! pyproject.toml, pubspec.yaml), resolves each discovered package against
//! its ecosystem registry, and produces the enriched dependency records
//! that seed a Software Bill of Materials.

pub mod file_types;
pub mod parsers;
pub mod registries;
