//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table row, any joined listing variant, and the conversion back into the
//! entity's form for pre-filling an edit page.

pub mod artist;
pub mod artwork;
pub mod collection;
pub mod dashboard;
pub mod museum;
