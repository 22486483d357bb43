//! Domain layer for the folio portfolio service.
//!
//! Pure types and logic shared by the database and HTTP crates: the profile
//! model, the store seams, upload naming, the crop exporter and the text
//! effect state machines.

pub mod crop;
pub mod effects;
pub mod error;
pub mod naming;
pub mod profile;
pub mod storage;
pub mod store;
pub mod types;
