//! Initial data for the report tables: CSV import and built-in demo rows.

use contracts::dashboards::d405_app_level_retn_rem::columns::{
    find_column, ColumnDef, ColumnKind, APP_LEVEL_COLUMNS, ASSET_LEVEL_COLUMNS,
};
use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};
use serde_json::{json, Value};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::repository::{self, APP_LEVEL_TABLE, ASSET_LEVEL_TABLE};
use crate::shared::config::{resolve_path, SeedConfig};

/// Ошибки загрузки начальных данных
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown column '{0}' in CSV header")]
    UnknownColumn(String),

    #[error("Line {line}: column {column} expects an integer, got '{value}'")]
    InvalidInteger {
        line: u64,
        column: String,
        value: String,
    },

    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

/// Parse CSV with a header row of catalog column names (any order).
/// Columns absent from the file and empty cells become NULL.
pub fn parse_csv<R: Read>(reader: R, columns: &[ColumnDef]) -> Result<Vec<Vec<Value>>, SeedError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    // file column position -> catalog position
    let mut mapping = Vec::new();
    for header in rdr.headers()?.iter() {
        let position = columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(header))
            .ok_or_else(|| SeedError::UnknownColumn(header.to_string()))?;
        mapping.push(position);
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let mut row = vec![Value::Null; columns.len()];

        for (field, &target) in record.iter().zip(mapping.iter()) {
            if field.is_empty() {
                continue;
            }
            let column = &columns[target];
            row[target] = match column.kind {
                ColumnKind::Text => Value::String(field.to_string()),
                ColumnKind::Integer => {
                    let number = field.parse::<i64>().map_err(|_| SeedError::InvalidInteger {
                        line,
                        column: column.name.to_string(),
                        value: field.to_string(),
                    })?;
                    Value::from(number)
                }
            };
        }
        rows.push(row);
    }

    Ok(rows)
}

pub async fn import_csv<C>(
    db: &C,
    table: &str,
    columns: &[ColumnDef],
    path: &Path,
) -> Result<usize, SeedError>
where
    C: ConnectionTrait + TransactionTrait,
{
    let file = std::fs::File::open(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let rows = parse_csv(file, columns)?;
    let inserted = repository::insert_rows(db, table, columns, &rows).await?;
    Ok(inserted)
}

/// Build a catalog-ordered row from (column, value) pairs
fn row_from(columns: &[ColumnDef], pairs: &[(&str, Value)]) -> Vec<Value> {
    debug_assert!(pairs
        .iter()
        .all(|(name, _)| find_column(columns, name).is_some()));
    columns
        .iter()
        .map(|c| {
            pairs
                .iter()
                .find(|(name, _)| *name == c.name)
                .map(|(_, v)| v.clone())
                .unwrap_or(Value::Null)
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn demo_app(
    lob: &str,
    product: &str,
    id: &str,
    name: &str,
    obr: &str,
    legal_hold: &str,
    extended: &str,
    class_code_cmp: &str,
) -> Vec<Value> {
    row_from(
        APP_LEVEL_COLUMNS,
        &[
            ("LOB_FCTN_NM", json!(lob)),
            ("PROD_NM", json!(product)),
            ("APPL_SYS_ID", json!(id)),
            ("APPL_SYS_NM", json!(name)),
            ("APPL_SYS_STS_NM", json!("Operate")),
            ("ACTL_OPER_DT", json!("1980-01-01 00:00:00")),
            ("PLN_RTR_DT", json!("2025-12-31 00:00:00")),
            ("ACTL_RTR_DT", json!("1980-01-01 00:00:00")),
            ("PLN_DCMSN_DT", json!("2026-12-09 00:00:00")),
            ("ACTL_DCMSN_DT", json!("1980-01-01 00:00:00")),
            ("RETN_CLS_MV", json!(obr)),
            ("TYPE_CD", json!("DBU")),
            ("APPL_TECH_GP_OWNR_NM", json!("Sylvia Torres")),
            ("LGL_HLD_STS", json!(legal_hold)),
            ("DATA_RQR_DOC_STS_CD", json!("Under Assessment")),
            ("APPL_LVL_FLAG", json!("No")),
            ("RPT_EXEC_ID", json!("20231106133611")),
            ("APPROVED_EXTENDED_RETENTION", json!(extended)),
            ("CLS_CD_COMPARISION_IND", json!(class_code_cmp)),
        ],
    )
}

pub fn demo_app_level_rows() -> Vec<Vec<Value>> {
    vec![
        demo_app(
            "Cross AM",
            "209 AWM product",
            "14775",
            "Automated Credit Application Processing System-CAF",
            "CONFIG DATA ONLY",
            "No",
            "No",
            "No",
        ),
        demo_app(
            "Consumer",
            "Imaging",
            "20553",
            "Image Services Team",
            "DBU030D",
            "Yes",
            "No",
            "Yes",
        ),
        demo_app(
            "Corporate",
            "HR Platform",
            "30117",
            "Workforce Records Archive",
            "HR010",
            "Yes",
            "Yes",
            "No",
        ),
        demo_app(
            "Cross AM",
            "Payments",
            "41820",
            "Wire Transfer Ledger",
            "DBU030D",
            "No",
            "Yes",
            "Yes",
        ),
    ]
}

fn demo_asset(
    appl_sys_id: i64,
    appl_name: &str,
    asset_id: &str,
    asset_name: &str,
    matching: i64,
    not_matching: i64,
    extended: &str,
) -> Vec<Value> {
    let comparison = if not_matching > 0 { "No" } else { "Yes" };
    row_from(
        ASSET_LEVEL_COLUMNS,
        &[
            ("APPL_SYS_ID", json!(appl_sys_id)),
            ("APPL_SYS_NM", json!(appl_name)),
            ("ASET_ID", json!(asset_id)),
            ("ASET_NM", json!(asset_name)),
            ("RETN_CNTRY_NM", json!("None")),
            ("EFF_TS", json!("None")),
            ("RETN_CLS_MV", json!("DBU030D")),
            ("HAS_DATA_STOR_NM", json!("Yes")),
            ("DATA_STOR_HAS_CLS_CD", json!("Yes")),
            ("CLS_CD_COMPARISION_IND", json!(comparison)),
            ("AVLB_DATA_STOR_COUNT", json!(matching + not_matching)),
            ("DATA_STOR_COUNT_WITH_MATCHING_CLS_CD", json!(matching)),
            ("DATA_STOR_COUNT_WITH_NOT_MATCHING_CLS_CD", json!(not_matching)),
            ("HAS_DESTR_ELIG_DATA", json!("No")),
            ("APPROVED_EXTENDED_RETENTION", json!(extended)),
            ("REQ_DESTR_PROC_FREQ", json!("Annual")),
            ("DESTR_ENBL", json!("No")),
            ("APPL_OWNR_SID", json!("E128253")),
            ("APPL_OWNR_NM", json!("William Welch")),
            ("INFO_OWNR_SID", json!("N595287")),
            ("INFO_OWNR_NM", json!("Eukarlgen Rothe")),
            ("DATA_OWNR_SID", json!("-")),
            ("DATA_OWNR_NM", json!("-")),
            ("CRE_TS", json!("2024-06-11 13:25:36")),
        ],
    )
}

pub fn demo_asset_level_rows() -> Vec<Vec<Value>> {
    vec![
        demo_asset(14775, "Automated Credit Application Processing System-CAF", "AS-1001", "Credit Decisions DB", 2, 0, "No"),
        demo_asset(14775, "Automated Credit Application Processing System-CAF", "AS-1002", "Application Documents", 1, 1, "No"),
        demo_asset(20553, "Image Services Team", "AS-2001", "Check Images", 0, 1, "No"),
        demo_asset(30117, "Workforce Records Archive", "AS-3001", "Employee Files", 3, 0, "Yes"),
        demo_asset(41820, "Wire Transfer Ledger", "AS-4001", "Ledger Warehouse", 1, 0, "Yes"),
    ]
}

/// Fill one table if it is empty: CSV first, then demo rows
async fn seed_table<C>(
    db: &C,
    table: &str,
    columns: &[ColumnDef],
    csv_path: Option<&str>,
    demo_data: bool,
    demo_rows: fn() -> Vec<Vec<Value>>,
) -> Result<usize, SeedError>
where
    C: ConnectionTrait + TransactionTrait,
{
    if repository::count_rows(db, table).await? > 0 {
        return Ok(0);
    }

    if let Some(path) = csv_path {
        let path = resolve_path(path);
        let inserted = import_csv(db, table, columns, &path).await?;
        tracing::info!("Imported {} rows into {} from {}", inserted, table, path.display());
        return Ok(inserted);
    }

    if demo_data {
        let inserted = repository::insert_rows(db, table, columns, &demo_rows()).await?;
        tracing::info!("Inserted {} demo rows into {}", inserted, table);
        return Ok(inserted);
    }

    Ok(0)
}

pub async fn seed_if_empty<C>(db: &C, config: &SeedConfig) -> Result<(), SeedError>
where
    C: ConnectionTrait + TransactionTrait,
{
    seed_table(
        db,
        APP_LEVEL_TABLE,
        APP_LEVEL_COLUMNS,
        config.app_level_csv.as_deref(),
        config.demo_data,
        demo_app_level_rows,
    )
    .await?;
    seed_table(
        db,
        ASSET_LEVEL_TABLE,
        ASSET_LEVEL_COLUMNS,
        config.asset_level_csv.as_deref(),
        config.demo_data,
        demo_asset_level_rows,
    )
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_database;

    const CATALOG: &[ColumnDef] = ASSET_LEVEL_COLUMNS;

    #[test]
    fn test_parse_csv_maps_headers_in_any_order() {
        let data = "ASET_ID,APPL_SYS_ID,ASET_NM\nAS-1, 20553 ,Check Images\nAS-2,20553,\n";
        let rows = parse_csv(data.as_bytes(), CATALOG).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], json!(20553));
        assert_eq!(rows[0][2], json!("AS-1"));
        assert_eq!(rows[0][3], json!("Check Images"));
        assert_eq!(rows[1][3], Value::Null);
        assert_eq!(rows[0].len(), CATALOG.len());
    }

    #[test]
    fn test_parse_csv_rejects_unknown_column() {
        let data = "APPL_SYS_ID,NOT_A_COLUMN\n1,x\n";
        let err = parse_csv(data.as_bytes(), CATALOG).unwrap_err();
        assert!(matches!(err, SeedError::UnknownColumn(ref c) if c == "NOT_A_COLUMN"));
    }

    #[test]
    fn test_parse_csv_rejects_bad_integer() {
        let data = "APPL_SYS_ID\nabc\n";
        let err = parse_csv(data.as_bytes(), CATALOG).unwrap_err();
        match err {
            SeedError::InvalidInteger { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "APPL_SYS_ID");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_demo_rows_match_catalog_width() {
        assert!(demo_app_level_rows()
            .iter()
            .all(|row| row.len() == APP_LEVEL_COLUMNS.len()));
        assert!(demo_asset_level_rows()
            .iter()
            .all(|row| row.len() == ASSET_LEVEL_COLUMNS.len()));
    }

    #[tokio::test]
    async fn test_seed_only_fills_empty_tables() {
        let db = memory_database().await;
        let config = SeedConfig::default();

        seed_if_empty(&db, &config).await.unwrap();
        let apps = repository::count_rows(&db, APP_LEVEL_TABLE).await.unwrap();
        assert_eq!(apps as usize, demo_app_level_rows().len());

        seed_if_empty(&db, &config).await.unwrap();
        assert_eq!(repository::count_rows(&db, APP_LEVEL_TABLE).await.unwrap(), apps);
    }

    #[tokio::test]
    async fn test_seed_disabled_leaves_tables_empty() {
        let db = memory_database().await;
        let config = SeedConfig {
            demo_data: false,
            app_level_csv: None,
            asset_level_csv: None,
        };
        seed_if_empty(&db, &config).await.unwrap();
        assert_eq!(repository::count_rows(&db, ASSET_LEVEL_TABLE).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_import_missing_file() {
        let db = memory_database().await;
        let err = import_csv(
            &db,
            APP_LEVEL_TABLE,
            APP_LEVEL_COLUMNS,
            Path::new("definitely/missing/app_level.csv"),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }
}
