//! Record endpoints: observations and projections indexed to nodes.

use chrono::{DateTime, Utc};

use crate::client::{ApiClient, Page, Query};
use crate::error::Error;
use crate::schemas::{Record, RecordPagination};

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub node_id: Option<String>,
    pub record_type: Option<String>,
    pub technology: Option<String>,
    pub source_slug: Option<String>,
    pub valid_timestamp_start: Option<DateTime<Utc>>,
    pub valid_timestamp_end: Option<DateTime<Utc>>,
    pub page: Page,
}

impl ApiClient {
    /// Search records.
    pub async fn search_records(&self, filter: &RecordFilter) -> Result<Vec<Record>, Error> {
        let mut query = Query::new();
        query
            .push_opt("node_id", filter.node_id.as_deref())
            .push_opt("record_type", filter.record_type.as_deref())
            .push_opt("technology", filter.technology.as_deref())
            .push_opt("source_slug", filter.source_slug.as_deref())
            .push_opt(
                "valid_timestamp_start",
                filter.valid_timestamp_start.map(|t| t.to_rfc3339()),
            )
            .push_opt(
                "valid_timestamp_end",
                filter.valid_timestamp_end.map(|t| t.to_rfc3339()),
            );
        filter.page.apply(&mut query);

        let resp: RecordPagination = self.get("records", &query).await?;
        Ok(resp.records.unwrap_or_default())
    }
}
