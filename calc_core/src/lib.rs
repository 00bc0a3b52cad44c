//! # timberfire_core - Timber Fire Design Engine
//!
//! `timberfire_core` sizes and verifies rectangular timber beams and columns
//! for standard (ISO 834) fire exposure using the two methods of
//! EN 1995-1-2: the reduced cross-section method and the reduced properties
//! method. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, one per member in a batch
//!
//! ## Quick Start
//!
//! ```rust
//! use timberfire_core::calculations::{BeamLoad, MemberLoad};
//! use timberfire_core::materials::{SectionCatalog, WoodType};
//! use timberfire_core::selector::{select, DesignBasis, MemberInput};
//!
//! // C24 sawn timber, 60 min, exposed on the bottom and both sides
//! let basis = DesignBasis::default();
//! let catalog = SectionCatalog::standard(WoodType::Sawn, false);
//!
//! let beam = MemberInput::span(
//!     "B-1",
//!     4.0,
//!     MemberLoad::Beam { support: None, load: BeamLoad::Line { kn_per_m: 2.0 } },
//! );
//! let result = select(&beam, &catalog, &basis).unwrap();
//! println!("{}x{} at {:.1}%", result.width_mm, result.height_mm, result.utilization_percent);
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Strength classes, species and section catalogs
//! - [`fire`] - Exposure configuration, charring and reduction factors
//! - [`equations`] - Residual section properties, moment and buckling formulas
//! - [`calculations`] - Beam bending and column buckling checks
//! - [`selector`] - Catalog search for one member or a batch
//! - [`problem`] - Batch problems loaded from JSON
//! - [`screening`] - Inertia screening and boolean pattern merge
//! - [`geometry`] - Member length and accepted-section seams
//! - [`settings`] - Default inputs loaded from TOML
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod fire;
pub mod geometry;
pub mod logging;
pub mod materials;
pub mod problem;
pub mod screening;
pub mod selector;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use problem::{BatchReport, SizingProblem};
pub use selector::{select, select_batch, DesignBasis, MemberInput, VerificationResult};
pub use settings::GlobalSettings;
