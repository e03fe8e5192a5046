use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::columns::{APPL_SYS_ID, LGL_HLD_STS, RETN_CLS_MV};
use super::dto::{cell_text, is_affirmative, TabularDataset};

/// Summary tiles shown above the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetnRemTiles {
    /// Distinct applications
    pub total_apps: usize,
    /// Rows carrying an OBR record class
    pub total_obr_count: usize,
    /// Distinct applications under an active legal hold
    pub total_active_legal_hold: usize,
}

impl RetnRemTiles {
    /// Compute the tiles from the (already filtered) dataset
    pub fn compute(dataset: &TabularDataset) -> Self {
        let id_idx = dataset.column_index(APPL_SYS_ID);
        let obr_idx = dataset.column_index(RETN_CLS_MV);
        let hold_idx = dataset.column_index(LGL_HLD_STS);

        let mut apps = HashSet::new();
        let mut held_apps = HashSet::new();
        let mut obr_count = 0;

        for row in &dataset.rows {
            let id = id_idx
                .and_then(|i| row.get(i))
                .map(cell_text)
                .unwrap_or_default();

            if !id.trim().is_empty() {
                apps.insert(id.clone());
                if hold_idx.and_then(|i| row.get(i)).is_some_and(is_affirmative) {
                    held_apps.insert(id);
                }
            }

            let has_obr = obr_idx
                .and_then(|i| row.get(i))
                .map(cell_text)
                .is_some_and(|class| !class.trim().is_empty());
            if has_obr {
                obr_count += 1;
            }
        }

        Self {
            total_apps: apps.len(),
            total_obr_count: obr_count,
            total_active_legal_hold: held_apps.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d405_app_level_retn_rem::filter::RetnRemFilter;
    use serde_json::json;

    fn dataset() -> TabularDataset {
        TabularDataset::new(
            vec![APPL_SYS_ID.into(), RETN_CLS_MV.into(), LGL_HLD_STS.into()],
            vec![
                vec![json!("1"), json!("DBU030D"), json!("Yes")],
                vec![json!("1"), json!("HR010"), json!("Yes")],
                vec![json!("2"), json!(""), json!("No")],
                vec![json!("3"), json!(null), json!("yes")],
            ],
        )
    }

    #[test]
    fn test_compute_counts() {
        let tiles = RetnRemTiles::compute(&dataset());
        assert_eq!(
            tiles,
            RetnRemTiles {
                total_apps: 3,
                total_obr_count: 2,
                total_active_legal_hold: 2,
            }
        );
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(
            RetnRemTiles::compute(&TabularDataset::default()),
            RetnRemTiles::default()
        );
    }

    #[test]
    fn test_tiles_follow_filter() {
        let data = dataset();
        let mut filter = RetnRemFilter::default();
        filter.app_ids.insert("2".into());
        let tiles = RetnRemTiles::compute(&filter.apply(&data));
        assert_eq!(tiles.total_apps, 1);
        assert_eq!(tiles.total_obr_count, 0);
        assert_eq!(tiles.total_active_legal_hold, 0);
    }
}
