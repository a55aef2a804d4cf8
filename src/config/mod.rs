// src/config/mod.rs

use std::time::Duration;

/// Where the HR spreadsheets live on GitHub and how to fetch them.
///
/// Immutable for the whole run; passed by reference into the fetcher and
/// loader so tests can substitute their own values.
#[derive(Debug, Clone)]
pub struct Source {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Repo-relative paths of the spreadsheets to load, in load order.
    pub files: Vec<String>,
    /// Total attempt budget per download, including the first try.
    pub max_attempts: u32,
    /// Pause between attempts after a transient failure.
    pub retry_delay: Duration,
    /// Per-request timeout for the HTTP client.
    pub timeout: Duration,
    /// Candidate identifier columns for the headcount estimate, checked in
    /// order; first name present in a sheet wins. Heuristic only.
    pub id_columns: Vec<String>,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            owner: "nguyenhuuthang1975-del".to_string(),
            repo: "intimex-bridge".to_string(),
            branch: "main".to_string(),
            files: vec![
                "data/Bang_nhan_su_mo_rong.xlsx".to_string(),
                "data/Mau_Thong_Tin_Nhan_Su_Intimex_DakMil.xlsx".to_string(),
            ],
            max_attempts: 3,
            retry_delay: Duration::from_millis(1500),
            timeout: Duration::from_secs(30),
            id_columns: [
                "Ma_Nhan_Vien",
                "Mã_Nhân_Viên",
                "EmployeeID",
                "Emp_ID",
                "MaNV",
                "ID",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}
