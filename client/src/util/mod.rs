//! Utility helpers isolating browser/environment concerns from the
//! reactive state layer.

pub mod cookie;
pub mod local_store;
pub mod storage_bus;
pub mod theme_attr;
