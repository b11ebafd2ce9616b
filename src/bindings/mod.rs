//! FFI facade: the `_core` Python module.
mod python;
