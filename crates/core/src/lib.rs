//! Museum catalog domain logic.
//!
//! Pure functions and types with no database or HTTP dependencies: entity
//! form validation, URL normalization, the query console statement builder,
//! CSV serialization and flash-message signing.

pub mod choices;
pub mod console;
pub mod csv_export;
pub mod error;
pub mod flash;
pub mod forms;
pub mod table;
pub mod types;
pub mod url;
