//! Record query handlers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tabled::Tabled;

use gridflow_api::{ApiClient, RecordFilter, schemas};
use gridflow_core::RecordCollection;

use crate::cli::{GlobalOpts, RecordsArgs, RecordsCommand};
use crate::error::CliError;
use crate::output::{opt, print_output, render_list};

use super::util;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "NODE")]
    node_id: String,
    #[tabled(rename = "TYPE")]
    record_type: String,
    #[tabled(rename = "TECHNOLOGY")]
    technology: String,
    #[tabled(rename = "FROM")]
    start: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

fn to_row(record: &schemas::Record) -> RecordRow {
    let value = match (record.value, record.unit.as_deref()) {
        (Some(v), Some(unit)) => format!("{v} {unit}"),
        (Some(v), None) => v.to_string(),
        _ => "-".into(),
    };
    RecordRow {
        node_id: record.node_id.clone(),
        record_type: opt(record.record_type.as_deref()).to_owned(),
        technology: opt(record.technology.as_deref()).to_owned(),
        start: match record.valid_timestamp_start {
            Some(t) => t.to_rfc3339(),
            None => "-".into(),
        },
        value,
    }
}

fn parse_timestamp(field: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>, CliError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(raw)
        .map(|t| Some(t.with_timezone(&Utc)))
        .map_err(|e| CliError::Validation {
            field: field.to_owned(),
            reason: format!("expected an RFC 3339 timestamp: {e}"),
        })
}

pub async fn handle(
    api: &Arc<ApiClient>,
    args: RecordsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RecordsCommand::Search {
            node_id,
            record_type,
            technology,
            source,
            start,
            end,
            list,
        } => {
            let filter = RecordFilter {
                node_id,
                record_type,
                technology,
                source_slug: source,
                valid_timestamp_start: parse_timestamp("start", start.as_deref())?,
                valid_timestamp_end: parse_timestamp("end", end.as_deref())?,
                page: util::page(&list),
            };
            let collection = RecordCollection::search(api, filter).await?;
            let rendered = render_list(&global.output, collection.records(), to_row, |r| {
                r.node_id.clone()
            });
            print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
