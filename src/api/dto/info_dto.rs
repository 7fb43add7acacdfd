//! Info API DTOs

use serde::{Deserialize, Deserializer};

use crate::domain::info::service::info_k8s_pod_service::DEFAULT_LOG_TAIL_LINES;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct PodLogQuery {
    #[serde(deserialize_with = "blank_as_none")]
    pub tail: Option<i64>,
}

/// `?tail=` with no value means "use the default"; anything else must be a number.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl PodLogQuery {
    /// Requested tail length; absent or non-positive falls back to the default.
    pub fn tail_lines(&self) -> i64 {
        self.tail.filter(|n| *n > 0).unwrap_or(DEFAULT_LOG_TAIL_LINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    #[test]
    fn tail_defaults_to_hundred_lines() {
        assert_eq!(PodLogQuery::default().tail_lines(), 100);
        assert_eq!(PodLogQuery { tail: Some(0) }.tail_lines(), 100);
        assert_eq!(PodLogQuery { tail: Some(20) }.tail_lines(), 20);
    }

    fn parse(uri: &str) -> Option<PodLogQuery> {
        let uri: Uri = uri.parse().unwrap();
        Query::<PodLogQuery>::try_from_uri(&uri).ok().map(|Query(q)| q)
    }

    #[test]
    fn blank_tail_uses_default() {
        assert_eq!(parse("/logs?tail=").unwrap().tail_lines(), 100);
        assert_eq!(parse("/logs").unwrap().tail_lines(), 100);
        assert_eq!(parse("/logs?tail=5").unwrap().tail_lines(), 5);
        assert!(parse("/logs?tail=abc").is_none());
    }
}
