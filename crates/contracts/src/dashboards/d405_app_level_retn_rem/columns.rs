//! Column catalog for the retention remediation datasets.
//!
//! The backend builds its tables and SELECT lists from these definitions and
//! the frontend uses the labels for table headers and exports, so both sides
//! agree on names and order without any schema on the wire.

/// Storage kind of a column (affects DDL and how a cell is read back)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
}

/// Single column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Wire / SQL name, e.g. "APPL_SYS_ID"
    pub name: &'static str,
    /// Human readable header
    pub label: &'static str,
    pub kind: ColumnKind,
}

impl ColumnDef {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: ColumnKind::Text,
        }
    }

    const fn integer(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: ColumnKind::Integer,
        }
    }
}

pub const APPL_SYS_ID: &str = "APPL_SYS_ID";
pub const APPL_SYS_NM: &str = "APPL_SYS_NM";
/// Record class (OBR) the application is retained under
pub const RETN_CLS_MV: &str = "RETN_CLS_MV";
pub const LGL_HLD_STS: &str = "LGL_HLD_STS";
pub const APPROVED_EXTENDED_RETENTION: &str = "APPROVED_EXTENDED_RETENTION";
pub const CLS_CD_COMPARISION_IND: &str = "CLS_CD_COMPARISION_IND";

/// Application level report (one row per application)
pub const APP_LEVEL_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("LOB_FCTN_NM", "LOB / Function"),
    ColumnDef::text("PROD_NM", "Product"),
    ColumnDef::text(APPL_SYS_ID, "App ID"),
    ColumnDef::text(APPL_SYS_NM, "Application Name"),
    ColumnDef::text("APPL_SYS_STS_NM", "Application Status"),
    ColumnDef::text("ACTL_OPER_DT", "Actual Operate Date"),
    ColumnDef::text("PLN_RTR_DT", "Planned Retire Date"),
    ColumnDef::text("ACTL_RTR_DT", "Actual Retire Date"),
    ColumnDef::text("PLN_DCMSN_DT", "Planned Decommission Date"),
    ColumnDef::text("ACTL_DCMSN_DT", "Actual Decommission Date"),
    ColumnDef::text(RETN_CLS_MV, "OBR"),
    ColumnDef::text("TYPE_CD", "Type"),
    ColumnDef::text("APPL_TECH_GP_OWNR_NM", "Technology Group Owner"),
    ColumnDef::text(LGL_HLD_STS, "Legal Hold"),
    ColumnDef::text("DATA_RQR_DOC_STS_CD", "Data Requirement Doc Status"),
    ColumnDef::text("APPL_LVL_FLAG", "App Level Flag"),
    ColumnDef::text("RPT_EXEC_ID", "Report Execution ID"),
    ColumnDef::text(APPROVED_EXTENDED_RETENTION, "Approved Extended Retention"),
    ColumnDef::text(CLS_CD_COMPARISION_IND, "Class Code Comparison"),
];

/// Asset level report (children of one application)
pub const ASSET_LEVEL_COLUMNS: &[ColumnDef] = &[
    ColumnDef::integer(APPL_SYS_ID, "App ID"),
    ColumnDef::text(APPL_SYS_NM, "Application Name"),
    ColumnDef::text("ASET_ID", "Asset ID"),
    ColumnDef::text("ASET_NM", "Asset Name"),
    ColumnDef::text("PRPS_CLS_CD", "Purpose Class Code"),
    ColumnDef::text("RGST_STS_CD", "Registration Status"),
    ColumnDef::text("RETN_CNTRY_NM", "Retention Country"),
    ColumnDef::text("EFF_TS", "Effective Timestamp"),
    ColumnDef::text("RCRD_CLS_CD", "Record Class Code"),
    ColumnDef::text(RETN_CLS_MV, "OBR"),
    ColumnDef::text("HAS_DATA_STOR_NM", "Has Data Store"),
    ColumnDef::text("DATA_STOR_HAS_CLS_CD", "Data Store Has Class Code"),
    ColumnDef::text(CLS_CD_COMPARISION_IND, "Class Code Comparison"),
    ColumnDef::integer("AVLB_DATA_STOR_COUNT", "Available Data Stores"),
    ColumnDef::integer(
        "DATA_STOR_COUNT_WITH_MATCHING_CLS_CD",
        "Data Stores With Matching Class Code",
    ),
    ColumnDef::integer(
        "DATA_STOR_COUNT_WITH_NOT_MATCHING_CLS_CD",
        "Data Stores With Mismatched Class Code",
    ),
    ColumnDef::text("DESTR_DOCUMENTED_ON_DT", "Destruction Documented On"),
    ColumnDef::text("DESTR_DOCUMENTED_BY", "Destruction Documented By"),
    ColumnDef::text("DESTR_CONFIRMED_ON_DT", "Destruction Confirmed On"),
    ColumnDef::text("DESTR_CONFIRMED_BY", "Destruction Confirmed By"),
    ColumnDef::text("RETN_DOCUMENTED_ON_DT", "Retention Documented On"),
    ColumnDef::text("RETN_DOCUMENTED_BY", "Retention Documented By"),
    ColumnDef::text("RETN_CONFIRMED_ON_DT", "Retention Confirmed On"),
    ColumnDef::text("RETN_CONFIRMED_BY", "Retention Confirmed By"),
    ColumnDef::text("CALC_ERLST_DESTR_ELIG_DT", "Calculated Earliest Destruction"),
    ColumnDef::text("OVRL_ERLST_DESTR_ELIG_DT", "Overall Earliest Destruction"),
    ColumnDef::text("TIME_REMAINING", "Time Remaining"),
    ColumnDef::text("HAS_DESTR_ELIG_DATA", "Has Destruction Eligible Data"),
    ColumnDef::text(APPROVED_EXTENDED_RETENTION, "Approved Extended Retention"),
    ColumnDef::text("EXTENDED_RETENTION_DT", "Extended Retention Date"),
    ColumnDef::text("REQ_DESTR_PROC_FREQ", "Required Destruction Frequency"),
    ColumnDef::text("DESTR_ENBL", "Destruction Enabled"),
    ColumnDef::text("APPL_OWNR_SID", "App Owner SID"),
    ColumnDef::text("APPL_OWNR_NM", "App Owner"),
    ColumnDef::text("INFO_OWNR_SID", "Info Owner SID"),
    ColumnDef::text("INFO_OWNR_NM", "Info Owner"),
    ColumnDef::text("DATA_OWNR_SID", "Data Owner SID"),
    ColumnDef::text("DATA_OWNR_NM", "Data Owner"),
    ColumnDef::text("CRE_TS", "Created"),
];

/// Find a column definition by wire name
pub fn find_column<'a>(columns: &'a [ColumnDef], name: &str) -> Option<&'a ColumnDef> {
    columns.iter().find(|c| c.name == name)
}

/// Header label for a raw column name, falling back to the name itself
pub fn label_for(name: &str) -> &str {
    find_column(APP_LEVEL_COLUMNS, name)
        .or_else(|| find_column(ASSET_LEVEL_COLUMNS, name))
        .map(|c| c.label)
        .unwrap_or(name)
}

/// Column names of a catalog, in order
pub fn column_names(columns: &[ColumnDef]) -> Vec<String> {
    columns.iter().map(|c| c.name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        for catalog in [APP_LEVEL_COLUMNS, ASSET_LEVEL_COLUMNS] {
            let names: HashSet<&str> = catalog.iter().map(|c| c.name).collect();
            assert_eq!(names.len(), catalog.len());
        }
    }

    #[test]
    fn test_app_level_has_filter_columns() {
        for name in [
            APPL_SYS_ID,
            RETN_CLS_MV,
            LGL_HLD_STS,
            APPROVED_EXTENDED_RETENTION,
            CLS_CD_COMPARISION_IND,
        ] {
            assert!(find_column(APP_LEVEL_COLUMNS, name).is_some(), "{name}");
        }
        assert_eq!(APP_LEVEL_COLUMNS.len(), 19);
        assert_eq!(ASSET_LEVEL_COLUMNS.len(), 39);
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for("APPL_SYS_ID"), "App ID");
        assert_eq!(label_for("ASET_NM"), "Asset Name");
        assert_eq!(label_for("SOMETHING_ELSE"), "SOMETHING_ELSE");
    }
}
