//! Foundation types for the objspool persistence engine.
//!
//! This crate provides the value model shared by the wire codec and the
//! object registry. Every other objspool crate depends on `objspool-types`.
//!
//! # Key Types
//!
//! - [`ClassId`] — Bounded identifier of a registered object class
//! - [`PropKind`] — Wire type tag of a property value
//! - [`PropValue`] — A tagged property value (string, number, timestamp)
//! - [`Property`] — A named value exchanged during (de)serialization
//! - [`LogTime`] — Broken-down syslog timestamp with twelve sub-fields

pub mod class_id;
pub mod error;
pub mod property;
pub mod timestamp;
pub mod value;

pub use class_id::{ClassId, MAX_CLASS_IDS};
pub use error::TypeError;
pub use property::Property;
pub use timestamp::LogTime;
pub use value::{PropKind, PropValue};
