use std::io::Write;

use serde_json::{json, Value};

use crate::cli::input::{read_document, records, tree_entries};
use crate::cli::output::{print_json, print_table, StatusRow};
use crate::cli::Commands;
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::models::bulb::BulbStatus;
use crate::models::group::GroupStatus;
use crate::models::record::RecordKind;
use crate::render::{write_bulb, write_group};
use crate::style::provider_for;

enum DeviceStatus {
    Group(GroupStatus),
    Bulb(BulbStatus),
}

impl DeviceStatus {
    fn parse(kind: RecordKind, record: &Value) -> Option<Self> {
        let parsed = match kind {
            RecordKind::Group => GroupStatus::from_json(record).map(DeviceStatus::Group),
            RecordKind::Bulb => BulbStatus::from_json(record).map(DeviceStatus::Bulb),
        };
        match parsed {
            Ok(status) => Some(status),
            Err(err) => {
                tracing::debug!(kind = kind.as_str(), reason = %err, "skipping record");
                None
            }
        }
    }

    fn to_json(&self) -> Value {
        match self {
            DeviceStatus::Group(group) => group.to_json(),
            DeviceStatus::Bulb(bulb) => bulb.to_json(),
        }
    }

    fn to_row(&self) -> StatusRow {
        match self {
            DeviceStatus::Group(group) => StatusRow::from(group),
            DeviceStatus::Bulb(bulb) => StatusRow::from(bulb),
        }
    }
}

pub fn handle(cmd: &Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    let items = match cmd {
        Commands::Group { file } => tag_all(read_document(file.as_deref())?, RecordKind::Group)?,
        Commands::Bulb { file } => tag_all(read_document(file.as_deref())?, RecordKind::Bulb)?,
        Commands::Show { file } => records(read_document(file.as_deref())?)?
            .into_iter()
            .map(|record| (RecordKind::classify(&record), record))
            .collect(),
        Commands::Tree { file } => tree_entries(read_document(file.as_deref())?)?
            .into_iter()
            .flat_map(|entry| {
                std::iter::once((RecordKind::Group, entry.group)).chain(
                    entry
                        .bulbs
                        .into_iter()
                        .map(|bulb| (RecordKind::Bulb, bulb)),
                )
            })
            .collect(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    emit(&mut out, &items, config)?;
    out.flush()?;
    Ok(())
}

fn tag_all(document: Value, kind: RecordKind) -> Result<Vec<(RecordKind, Value)>, AppError> {
    Ok(records(document)?
        .into_iter()
        .map(|record| (kind, record))
        .collect())
}

/// Write every tagged record to `out` in the configured output mode.
pub fn emit<W: Write>(
    out: &mut W,
    items: &[(RecordKind, Value)],
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    match config.output_mode {
        OutputMode::Text => {
            let style = provider_for(config.color);
            let mut shown = 0usize;
            for (kind, record) in items {
                let written = match kind {
                    RecordKind::Group => write_group(out, record, style.as_ref())?,
                    RecordKind::Bulb => write_bulb(out, record, style.as_ref())?,
                };
                if written {
                    shown += 1;
                }
            }
            tracing::debug!(shown, skipped = items.len() - shown, "rendered records");
        }
        OutputMode::Json => {
            let values: Vec<Value> = items
                .iter()
                .filter_map(|(kind, record)| DeviceStatus::parse(*kind, record))
                .map(|status| status.to_json())
                .collect();
            print_json(out, &json!(values))?;
        }
        OutputMode::Table => {
            let rows: Vec<StatusRow> = items
                .iter()
                .filter_map(|(kind, record)| DeviceStatus::parse(*kind, record))
                .map(|status| status.to_row())
                .collect();
            print_table(out, &rows)?;
        }
    }
    Ok(())
}
