//! Serialization round trips of `ndlattice` arrays through serde formats.
//! All of the content lives in `tests/`.
