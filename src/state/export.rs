use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{ExchangeGroup, MealSlot};
use crate::state::PlanStateManager;

/// Write the group summary: one row per group with its totals and remainder.
pub fn write_group_csv(manager: &PlanStateManager, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "group", "servings", "cho_g", "protein_g", "fat_g", "fiber_g", "kcal", "remainder", "status",
    ])?;

    let breakdown = manager.group_breakdown();
    for (group, totals) in &breakdown {
        wtr.write_record([
            group.key().to_string(),
            format!("{:.2}", manager.servings().get(*group)),
            format!("{:.1}", totals.cho),
            format!("{:.1}", totals.protein),
            format!("{:.1}", totals.fat),
            format!("{:.1}", totals.fiber),
            format!("{:.0}", totals.kcal),
            format!("{:.2}", manager.remainder(*group)),
            manager.row_status(*group).label().to_string(),
        ])?;
    }

    let totals = manager.totals();
    wtr.write_record([
        "total".to_string(),
        format!("{:.2}", manager.servings().total()),
        format!("{:.1}", totals.cho),
        format!("{:.1}", totals.protein),
        format!("{:.1}", totals.fat),
        format!("{:.1}", totals.fiber),
        format!("{:.0}", totals.kcal),
        String::new(),
        String::new(),
    ])?;

    wtr.flush()?;
    info!(path = %path.display(), "wrote group summary");
    Ok(())
}

/// Write the distribution matrix: one row per group, one column per slot.
pub fn write_distribution_csv(manager: &PlanStateManager, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["group".to_string()];
    header.extend(MealSlot::ALL.iter().map(|s| s.key().to_string()));
    header.push("remainder".to_string());
    wtr.write_record(&header)?;

    for group in ExchangeGroup::ALL {
        let mut row = vec![group.key().to_string()];
        row.extend(
            manager
                .distribution()
                .row(group)
                .iter()
                .map(|v| format!("{:.2}", v)),
        );
        row.push(format!("{:.2}", manager.remainder(group)));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    info!(path = %path.display(), "wrote distribution matrix");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_manager() -> PlanStateManager {
        let mut manager = PlanStateManager::default();
        manager.set_serving(ExchangeGroup::Starch, 2.0);
        manager.set_serving(ExchangeGroup::MeatLean, 3.0);
        manager.set_cell(ExchangeGroup::Starch, MealSlot::Breakfast, 2.0);
        manager.set_cell(ExchangeGroup::MeatLean, MealSlot::Dinner, 1.0);
        manager
    }

    #[test]
    fn test_group_csv_rows() {
        let file = NamedTempFile::new().unwrap();
        write_group_csv(&sample_manager(), file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), ExchangeGroup::COUNT + 1);

        let starch = &rows[0];
        assert_eq!(&starch[0], "starch");
        assert_eq!(&starch[6], "160");
        assert_eq!(&starch[8], "complete");

        let lean = &rows[ExchangeGroup::MeatLean.index()];
        assert_eq!(&lean[7], "2.00");
        assert_eq!(&lean[8], "pending");

        let total = rows.last().unwrap();
        assert_eq!(&total[0], "total");
        assert_eq!(&total[6], "295");
    }

    #[test]
    fn test_distribution_csv_shape() {
        let file = NamedTempFile::new().unwrap();
        write_distribution_csv(&sample_manager(), file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.len(), MealSlot::COUNT + 2);
        assert_eq!(&headers[2], "breakfast");

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), ExchangeGroup::COUNT);
        assert_eq!(&rows[0][2], "2.00");
        assert_eq!(&rows[0][MealSlot::COUNT + 1], "0.00");
    }
}
