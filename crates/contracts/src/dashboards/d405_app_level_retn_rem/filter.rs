use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use super::columns::{
    APPL_SYS_ID, APPROVED_EXTENDED_RETENTION, CLS_CD_COMPARISION_IND, LGL_HLD_STS, RETN_CLS_MV,
};
use super::dto::{cell_text, is_affirmative, TabularDataset};

/// Boolean toggles of the dashboard filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterToggle {
    LegalHold,
    ApprovedExtendedRetention,
    ClassCodeComparison,
}

impl FilterToggle {
    pub const ALL: [FilterToggle; 3] = [
        FilterToggle::LegalHold,
        FilterToggle::ApprovedExtendedRetention,
        FilterToggle::ClassCodeComparison,
    ];

    /// Column whose affirmative value lets a row through
    pub fn column(&self) -> &'static str {
        match self {
            FilterToggle::LegalHold => LGL_HLD_STS,
            FilterToggle::ApprovedExtendedRetention => APPROVED_EXTENDED_RETENTION,
            FilterToggle::ClassCodeComparison => CLS_CD_COMPARISION_IND,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterToggle::LegalHold => "Legal Hold",
            FilterToggle::ApprovedExtendedRetention => "Approved Extended Retention",
            FilterToggle::ClassCodeComparison => "Class Code Comparison",
        }
    }
}

/// Filter state of the retention remediation dashboard
///
/// All fields are independent and combine with AND. Empty sets and `false`
/// toggles put no constraint on a row. A non-empty set keeps rows matching any
/// of its values, so a second value selected in the same set widens the view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetnRemFilter {
    /// Selected `APPL_SYS_ID` values
    pub app_ids: BTreeSet<String>,
    /// Selected `RETN_CLS_MV` (OBR) values
    pub obr_classes: BTreeSet<String>,
    pub legal_hold: bool,
    pub approved_extended_retention: bool,
    pub class_code_comparison: bool,
}

impl RetnRemFilter {
    pub fn toggle_value(&self, toggle: FilterToggle) -> bool {
        match toggle {
            FilterToggle::LegalHold => self.legal_hold,
            FilterToggle::ApprovedExtendedRetention => self.approved_extended_retention,
            FilterToggle::ClassCodeComparison => self.class_code_comparison,
        }
    }

    pub fn set_toggle(&mut self, toggle: FilterToggle, on: bool) {
        match toggle {
            FilterToggle::LegalHold => self.legal_hold = on,
            FilterToggle::ApprovedExtendedRetention => self.approved_extended_retention = on,
            FilterToggle::ClassCodeComparison => self.class_code_comparison = on,
        }
    }

    /// Number of filters currently constraining rows (for the panel badge)
    pub fn active_count(&self) -> usize {
        let sets = [!self.app_ids.is_empty(), !self.obr_classes.is_empty()];
        let toggles = FilterToggle::ALL.map(|t| self.toggle_value(t));
        sets.iter().chain(toggles.iter()).filter(|on| **on).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `row` (aligned to `columns`) passes every active filter
    pub fn is_visible(&self, columns: &[String], row: &[Value]) -> bool {
        let cell = |name: &str| {
            columns
                .iter()
                .position(|c| c == name)
                .and_then(|idx| row.get(idx))
        };

        if !self.app_ids.is_empty() {
            let id = cell(APPL_SYS_ID).map(cell_text).unwrap_or_default();
            if !self.app_ids.contains(&id) {
                return false;
            }
        }

        if !self.obr_classes.is_empty() {
            let class = cell(RETN_CLS_MV).map(cell_text).unwrap_or_default();
            if !self.obr_classes.contains(&class) {
                return false;
            }
        }

        FilterToggle::ALL
            .iter()
            .filter(|toggle| self.toggle_value(**toggle))
            .all(|toggle| cell(toggle.column()).is_some_and(is_affirmative))
    }

    /// Visible subset of `dataset`; the source is left untouched
    pub fn apply(&self, dataset: &TabularDataset) -> TabularDataset {
        if self.is_empty() {
            return dataset.clone();
        }
        dataset.retain_rows(|row| self.is_visible(&dataset.columns, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d405_app_level_retn_rem::columns::{column_names, APP_LEVEL_COLUMNS};
    use serde_json::json;

    fn row(id: &str, obr: &str, hold: &str, ext: &str, cmp: &str) -> Vec<Value> {
        APP_LEVEL_COLUMNS
            .iter()
            .map(|c| match c.name {
                APPL_SYS_ID => json!(id),
                RETN_CLS_MV => json!(obr),
                LGL_HLD_STS => json!(hold),
                APPROVED_EXTENDED_RETENTION => json!(ext),
                CLS_CD_COMPARISION_IND => json!(cmp),
                _ => json!(null),
            })
            .collect()
    }

    fn dataset() -> TabularDataset {
        TabularDataset::new(
            column_names(APP_LEVEL_COLUMNS),
            vec![
                row("14775", "CONFIG DATA ONLY", "No", "No", "No"),
                row("20553", "DBU030D", "Yes", "No", "Yes"),
                row("30001", "DBU030D", "Yes", "Yes", "No"),
                row("40002", "HR010", "No", "Yes", "Yes"),
            ],
        )
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let data = dataset();
        let filter = RetnRemFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&data), data);
    }

    #[test]
    fn test_select_single_app_id() {
        let data = dataset();
        let mut filter = RetnRemFilter::default();
        filter.app_ids.insert("14775".to_string());
        let visible = filter.apply(&data);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.cell_text(&visible.rows[0], APPL_SYS_ID), "14775");
    }

    #[test]
    fn test_unknown_app_id_matches_nothing() {
        let data = dataset();
        let mut filter = RetnRemFilter::default();
        filter.app_ids.insert("99999".to_string());
        assert!(filter.apply(&data).is_empty());
    }

    #[test]
    fn test_numeric_id_matches_its_text() {
        let data = TabularDataset::new(vec![APPL_SYS_ID.into()], vec![vec![json!(20553)]]);
        let mut filter = RetnRemFilter::default();
        filter.app_ids.insert("20553".to_string());
        assert_eq!(filter.apply(&data).len(), 1);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let data = dataset();
        let mut filter = RetnRemFilter::default();
        filter.obr_classes.insert("DBU030D".to_string());
        assert_eq!(filter.apply(&data).len(), 2);
        filter.legal_hold = true;
        assert_eq!(filter.apply(&data).len(), 2);
        filter.approved_extended_retention = true;
        let visible = filter.apply(&data);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.cell_text(&visible.rows[0], APPL_SYS_ID), "30001");
    }

    #[test]
    fn test_toggle_on_missing_column_hides_rows() {
        let data = TabularDataset::new(vec![APPL_SYS_ID.into()], vec![vec![json!("1")]]);
        let mut filter = RetnRemFilter::default();
        filter.set_toggle(FilterToggle::ClassCodeComparison, true);
        assert!(filter.apply(&data).is_empty());
    }

    #[test]
    fn test_adding_constraints_never_grows_result() {
        let data = dataset();
        let steps: Vec<Box<dyn Fn(&mut RetnRemFilter)>> = vec![
            Box::new(|f: &mut RetnRemFilter| f.set_toggle(FilterToggle::ClassCodeComparison, true)),
            Box::new(|f: &mut RetnRemFilter| {
                f.obr_classes.insert("DBU030D".into());
            }),
            Box::new(|f: &mut RetnRemFilter| f.set_toggle(FilterToggle::LegalHold, true)),
            Box::new(|f: &mut RetnRemFilter| {
                f.app_ids.insert("20553".into());
            }),
            Box::new(|f: &mut RetnRemFilter| f.set_toggle(FilterToggle::ApprovedExtendedRetention, true)),
        ];

        let mut filter = RetnRemFilter::default();
        let mut previous = filter.apply(&data).len();
        for step in &steps {
            step(&mut filter);
            let current = filter.apply(&data).len();
            assert!(current <= previous);
            previous = current;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn test_second_value_in_same_selection_widens_view() {
        let data = dataset();
        let mut filter = RetnRemFilter::default();
        filter.app_ids.insert("14775".into());
        assert_eq!(filter.apply(&data).len(), 1);

        filter.app_ids.insert("20553".into());
        assert_eq!(filter.apply(&data).len(), 2);

        // still narrower than no selection at all
        assert!(filter.apply(&data).len() < data.len());
    }

    #[test]
    fn test_clear_restores_full_dataset() {
        let data = dataset();
        let mut filter = RetnRemFilter::default();
        filter.app_ids.insert("14775".into());
        filter.legal_hold = true;
        assert_eq!(filter.active_count(), 2);
        assert!(filter.apply(&data).is_empty());

        filter.clear();
        assert_eq!(filter.apply(&data), data);
        assert_eq!(filter.active_count(), 0);
    }
}
