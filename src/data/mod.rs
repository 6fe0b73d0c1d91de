//! Case-file and core-sheet ingestion.

pub mod case;
pub mod cores;
