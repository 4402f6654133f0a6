//! Presentational components; state lives in the app shell.

pub(crate) mod header;
pub(crate) mod lang_switcher;
pub(crate) mod pages;
