// src/report/mod.rs

use std::collections::HashSet;

use calamine::Data;

use crate::sheet::Sheet;

/// How the headcount estimate was obtained.
#[derive(Debug, PartialEq, Eq)]
pub enum Headcount {
    /// Distinct non-missing values in the named identifier column.
    Distinct { column: String, count: usize },
    /// No identifier column matched; raw row count, duplicates and all.
    Rows(usize),
}

fn is_missing(cell: &Data) -> bool {
    matches!(cell, Data::Empty | Data::Error(_))
}

/// Best-effort distinct personnel count. Candidates are checked in order and
/// the first column name present in the sheet wins; nothing verifies that the
/// match is semantically an identifier.
pub fn headcount(sheet: &Sheet, candidates: &[String]) -> Headcount {
    for name in candidates {
        if let Some(idx) = sheet.column_index(name) {
            let distinct: HashSet<String> = sheet
                .rows
                .iter()
                .filter_map(|row| row.get(idx))
                .filter(|cell| !is_missing(cell))
                .map(|cell| cell.to_string())
                .collect();
            return Headcount::Distinct {
                column: name.clone(),
                count: distinct.len(),
            };
        }
    }
    Headcount::Rows(sheet.row_count())
}

/// Print the per-file summary: name, shape, columns and headcount estimate.
pub fn quick_overview(sheet: &Sheet, name: &str, candidates: &[String]) {
    println!("\n=== {name} ===");
    println!(
        "- Size: {} rows x {} cols",
        sheet.row_count(),
        sheet.column_count()
    );
    println!("- Columns: {:?}", sheet.columns);
    match headcount(sheet, candidates) {
        Headcount::Distinct { column, count } => {
            println!("- Estimated headcount (unique by '{column}'): {count}");
        }
        Headcount::Rows(count) => {
            println!(
                "- No identifier column found; using row count as headcount \
                 (may contain duplicates): {count}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sheet(columns: &[&str], rows: Vec<Vec<Data>>) -> Sheet {
        Sheet {
            columns: strings(columns),
            rows,
        }
    }

    #[test]
    fn headcount_counts_distinct_non_missing_ids() {
        let s = sheet(
            &["EmployeeID", "Name"],
            vec![
                vec![Data::Int(1), Data::String("a".into())],
                vec![Data::Int(1), Data::String("b".into())],
                vec![Data::Int(2), Data::String("c".into())],
                vec![Data::Empty, Data::String("d".into())],
                vec![Data::Int(3), Data::String("e".into())],
            ],
        );
        assert_eq!(
            headcount(&s, &strings(&["Ma_Nhan_Vien", "EmployeeID", "ID"])),
            Headcount::Distinct {
                column: "EmployeeID".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn headcount_prefers_earlier_candidate() {
        let s = sheet(
            &["ID", "MaNV"],
            vec![vec![Data::Int(7), Data::Int(8)]],
        );
        // MaNV comes before ID in the candidate list, so it wins even though
        // ID is the first column of the sheet.
        assert_eq!(
            headcount(&s, &strings(&["MaNV", "ID"])),
            Headcount::Distinct {
                column: "MaNV".to_string(),
                count: 1
            }
        );
    }

    #[test]
    fn headcount_falls_back_to_row_count() {
        let rows = (0..10)
            .map(|i| vec![Data::String(format!("person {i}"))])
            .collect();
        let s = sheet(&["Ho_Ten"], rows);
        assert_eq!(headcount(&s, &strings(&["EmployeeID", "ID"])), Headcount::Rows(10));
    }

    #[test]
    fn headcount_ignores_error_cells() {
        let s = sheet(
            &["ID"],
            vec![
                vec![Data::Int(1)],
                vec![Data::Error(calamine::CellErrorType::NA)],
                vec![Data::Int(2)],
            ],
        );
        assert_eq!(
            headcount(&s, &strings(&["ID"])),
            Headcount::Distinct {
                column: "ID".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn empty_sheet_reports_zero() {
        let s = sheet(&[], vec![]);
        assert_eq!(headcount(&s, &strings(&["ID"])), Headcount::Rows(0));
    }
}
