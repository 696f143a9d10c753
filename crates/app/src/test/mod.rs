//! Service-level test support.

mod db;

pub(crate) use context::{TestContext, make_transaction};
