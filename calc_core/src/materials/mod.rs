//! # Materials Database
//!
//! Material definitions and standard section lists for timber fire design.
//!
//! - **Strength classes**: solid timber C14-C30 and glulam GL24h-GL32h
//! - **Species groups**: select the charring rate
//! - **Section catalogs**: sawn, planed and glulam standard sizes
//!
//! ## Example
//!
//! ```rust
//! use timberfire_core::materials::{StrengthClass, SectionCatalog, WoodType};
//!
//! let props = StrengthClass::C24.properties();
//! println!("fm = {} MPa, E = {} MPa", props.fm_mpa, props.e_mpa);
//!
//! let catalog = SectionCatalog::standard(WoodType::Glulam, false);
//! assert_eq!(catalog.entries[0].width_mm, 65.0);
//! ```

pub mod sections;
pub mod species;
pub mod strength_class;

pub use sections::{Candidate, SectionCatalog, SectionSource, WoodType};
pub use species::WoodSpecies;
pub use strength_class::{lookup, MaterialProperties, StrengthClass};
