//! # folio-check
//!
//! A front-matter schema checker for artwork portfolio catalogs. Each content
//! file under the catalog's content directory is one artwork: a YAML
//! front-matter block (title, slug, year, images, ...) followed by a
//! free-text body. folio-check loads every file into a structured record,
//! validates it against a fixed rule set, and verifies the image assets it
//! references exist — before a site generator ever renders the record.
//!
//! # Architecture: Load → Validate → Report
//!
//! The core is a synchronous, single-file pipeline of three independent
//! pieces, composed per file by the catalog scanner:
//!
//! ```text
//! 1. Load       work.mdx   →  Artwork         (front matter → record)
//! 2. Validate   Artwork    →  pass | problem  (fixed rule set, gate only)
//! 3. Assets     src paths  →  exist | missing (filesystem existence)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **A load failure and a validation failure mean different things**: the
//!   first says "this file is malformed, fix the source", the second says
//!   "this record is incomplete, do not publish it".
//! - **Testability**: each piece is a pure function of its input; unit tests
//!   probe individual rules without composing the whole pipeline.
//! - **Construction is not validation**: the loader may produce a transiently
//!   invalid record, which is exactly what a checker needs to inspect.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`schema`] | The two record shapes: `Artwork` and its nested `ImageRef`s |
//! | [`loader`] | One content file → one unvalidated `Artwork`, defaults applied |
//! | [`validate`] | The fixed rule set: required fields, year range, image refs |
//! | [`assets`] | Existence checks for referenced image files |
//! | [`catalog`] | Batch layer — walks the content dir, checks every work |
//! | [`config`] | `folio-check.toml` loading with stock defaults |
//! | [`output`] | CLI display of check results — pure `format_*` functions |
//!
//! # Design Decisions
//!
//! ## Typed Front Matter Over Keyed Maps
//!
//! The front-matter block deserializes into a typed intermediate with one
//! named field per recognized key, not into a generic map that code probes at
//! runtime. Required keys are non-optional fields, so "missing key" and
//! "wrong type" failures come straight from the deserializer with the field
//! name in the message, and the set of recognized keys is readable from one
//! struct definition. Image entries additionally reject unknown keys — a
//! typo'd `capton:` is a load error, not silently dropped data.
//!
//! ## Validation Is a Gate, Not a Transform
//!
//! `validate` takes a fully-constructed record and returns only pass/fail
//! with the violated rule. It never fixes values up, never partially
//! validates, and never fails for reasons outside its rule set. Callers
//! decide what a failure means; for the CLI that is a nonzero exit.
//!
//! ## Report Everything, Abort Nothing
//!
//! The batch scanner records per-file problems and keeps going. A catalog
//! QA run that stops at the first broken file makes fixing a catalog
//! O(files) runs; collecting every problem makes it one.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod loader;
pub mod output;
pub mod schema;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
