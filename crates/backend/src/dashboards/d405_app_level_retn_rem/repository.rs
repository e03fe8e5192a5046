use contracts::dashboards::d405_app_level_retn_rem::columns::{
    ColumnDef, ColumnKind, APPL_SYS_ID, APP_LEVEL_COLUMNS, ASSET_LEVEL_COLUMNS,
};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DbErr, QueryResult, Statement, TransactionTrait,
};
use serde_json::Value;

pub const APP_LEVEL_TABLE: &str = "d405_app_level_retn_rem";
pub const ASSET_LEVEL_TABLE: &str = "d405_asset_level_retn_rem";

fn sql_type(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Text => "TEXT",
        ColumnKind::Integer => "INTEGER",
    }
}

/// CREATE TABLE statement for a report table built from its catalog
pub fn create_table_sql(table: &str, columns: &[ColumnDef]) -> String {
    let column_sql: Vec<String> = columns
        .iter()
        .map(|c| format!("    {} {}", c.name, sql_type(c.kind)))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    row_id INTEGER PRIMARY KEY AUTOINCREMENT,\n{}\n);",
        table,
        column_sql.join(",\n")
    )
}

fn select_list(columns: &[ColumnDef]) -> String {
    columns
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub async fn ensure_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    for (table, columns) in [
        (APP_LEVEL_TABLE, APP_LEVEL_COLUMNS),
        (ASSET_LEVEL_TABLE, ASSET_LEVEL_COLUMNS),
    ] {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_table_sql(table, columns),
        ))
        .await?;
    }

    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        format!(
            "CREATE INDEX IF NOT EXISTS idx_{t}_appl_sys_id ON {t} ({c});",
            t = ASSET_LEVEL_TABLE,
            c = APPL_SYS_ID
        ),
    ))
    .await?;

    Ok(())
}

pub async fn count_rows<C: ConnectionTrait>(db: &C, table: &str) -> Result<i64, DbErr> {
    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        format!("SELECT COUNT(*) AS cnt FROM {}", table),
    );
    let row = db.query_one(stmt).await?;
    match row {
        Some(row) => row.try_get::<i64>("", "cnt"),
        None => Ok(0),
    }
}

/// Read one result row in catalog order
fn read_row(row: &QueryResult, columns: &[ColumnDef]) -> Result<Vec<Value>, DbErr> {
    columns
        .iter()
        .map(|c| match c.kind {
            ColumnKind::Text => row
                .try_get::<Option<String>>("", c.name)
                .map(|v| v.map(Value::String).unwrap_or(Value::Null)),
            ColumnKind::Integer => row
                .try_get::<Option<i64>>("", c.name)
                .map(|v| v.map(Value::from).unwrap_or(Value::Null)),
        })
        .collect()
}

/// Convert a JSON cell into a bind value of the column's kind
fn to_db_value(column: &ColumnDef, value: &Value) -> sea_orm::Value {
    match column.kind {
        ColumnKind::Text => {
            let text = match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            };
            text.into()
        }
        ColumnKind::Integer => {
            let number = value
                .as_i64()
                .or_else(|| value.as_str().and_then(|s| s.trim().parse::<i64>().ok()));
            number.into()
        }
    }
}

/// Application level rows, ordered by application id
pub async fn fetch_app_level<C: ConnectionTrait>(db: &C) -> Result<Vec<Vec<Value>>, DbErr> {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY {}, row_id",
        select_list(APP_LEVEL_COLUMNS),
        APP_LEVEL_TABLE,
        APPL_SYS_ID
    );
    let rows = db
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .await?;
    rows.iter()
        .map(|row| read_row(row, APP_LEVEL_COLUMNS))
        .collect()
}

/// Asset level rows of one application
pub async fn fetch_asset_level<C: ConnectionTrait>(
    db: &C,
    appl_sys_id: i64,
) -> Result<Vec<Vec<Value>>, DbErr> {
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = ? ORDER BY row_id",
        select_list(ASSET_LEVEL_COLUMNS),
        ASSET_LEVEL_TABLE,
        APPL_SYS_ID
    );
    let stmt =
        Statement::from_sql_and_values(DatabaseBackend::Sqlite, &sql, [appl_sys_id.into()]);
    let rows = db.query_all(stmt).await?;
    rows.iter()
        .map(|row| read_row(row, ASSET_LEVEL_COLUMNS))
        .collect()
}

/// Insert rows (catalog order) in one transaction; returns inserted count
pub async fn insert_rows<C>(
    db: &C,
    table: &str,
    columns: &[ColumnDef],
    rows: &[Vec<Value>],
) -> Result<usize, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        select_list(columns),
        placeholders
    );

    let txn = db.begin().await?;
    for row in rows {
        let values: Vec<sea_orm::Value> = columns
            .iter()
            .enumerate()
            .map(|(idx, c)| to_db_value(c, row.get(idx).unwrap_or(&Value::Null)))
            .collect();
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            values,
        ))
        .await?;
    }
    txn.commit().await?;

    Ok(rows.len())
}
