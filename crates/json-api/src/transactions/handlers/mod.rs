//! Product transaction handlers

pub(crate) mod categories;
pub(crate) mod import;
pub(crate) mod index;
pub(crate) mod ranges;
pub(crate) mod sales;
