//! Handler State

use std::{fmt, sync::Arc};

use salesboard_app::context::AppContext;

/// Services shared by every request, injected into the depot as `Arc<State>`.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self::from(app))
    }
}

impl From<AppContext> for State {
    fn from(app: AppContext) -> Self {
        Self { app }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}
