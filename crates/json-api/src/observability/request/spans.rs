//! Route labels for request spans and metrics.

use salvo::http::StatusCode;

const UNMATCHED_ROUTE: &str = "unmatched";

/// Label a request path for metrics; paths that matched no route share one
/// label so arbitrary URLs cannot grow the label set.
pub(super) fn route_label(path: &str, status: StatusCode) -> String {
    if status == StatusCode::NOT_FOUND {
        return UNMATCHED_ROUTE.to_owned();
    }

    match path.trim_end_matches('/') {
        "" => "/".to_owned(),
        trimmed => trimmed.to_owned(),
    }
}
