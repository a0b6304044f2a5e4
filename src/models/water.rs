//! Water and steam models.

pub mod if97;
