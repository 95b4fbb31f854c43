//! Domain layer: report shapes, device records, export rows and the pure
//! rules that connect them. Nothing in here touches the filesystem.
pub mod domain;
pub mod policies;
pub mod services;
