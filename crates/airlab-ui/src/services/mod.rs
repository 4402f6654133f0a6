//! Browser bindings for the localization core.

pub(crate) mod dom;
pub(crate) mod storage;
