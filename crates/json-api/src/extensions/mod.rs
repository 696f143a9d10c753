//! Extension traits

mod depot;
mod result;
mod sale_date;

pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
pub(crate) use sale_date::SaleDateExt as _;

#[cfg(test)]
pub(crate) use sale_date::INVALID_DATE_MESSAGE;
