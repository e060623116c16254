//! Backup directory layout.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Directory name for one account's backup on one day,
/// e.g. `alice_backup_2024-05-01`.
pub fn backup_dir_name(username: &str, date: NaiveDate) -> Result<String> {
    let username = sanitize_path_component(username)?;
    Ok(format!("{}_backup_{}", username, date.format("%Y-%m-%d")))
}

/// Full path of the backup directory under `root`.
pub fn get_backup_dir(root: &Path, username: &str, date: NaiveDate) -> Result<PathBuf> {
    Ok(root.join(backup_dir_name(username, date)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_dir_name() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            backup_dir_name("alice", date).unwrap(),
            "alice_backup_2024-05-01"
        );
    }

    #[test]
    fn test_get_backup_dir() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let path = get_backup_dir(Path::new("./out"), "bob", date).unwrap();
        assert_eq!(path, PathBuf::from("./out/bob_backup_2023-12-31"));
    }

    #[test]
    fn test_unsafe_username_rejected() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(get_backup_dir(Path::new("out"), "..", date).is_err());
    }
}
