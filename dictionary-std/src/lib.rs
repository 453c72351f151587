//! This crate implements standard DICOM dictionaries and constants.
//!
//! ## Run-time dictionaries
//!
//! - [`data_element`]: the attributes known to the codec
//!   and their typical value representations,
//!   used by default when reading implicit VR data sets.
//!   Group length and private creator elements
//!   are resolved generically.
//!
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for transfer syntax and SOP class unique identifiers
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
