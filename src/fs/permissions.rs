//! Owner-only file and directory permissions.
//!
//! On non-Unix targets these helpers only create files and directories.

use std::io;
use std::path::Path;

use tokio::fs::{self, File, OpenOptions};

/// Mode for every file written into a backup.
pub const FILE_MODE: u32 = 0o600;

/// Mode for the backup directory.
pub const DIR_MODE: u32 = 0o700;

/// Create (or truncate) a file that only the owner can read and write.
pub async fn create_private_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    options.open(path).await
}

/// Re-apply owner-only permissions to a file.
///
/// Needed when a same-day run truncates a file that already existed, since
/// the create mode only applies to new files.
pub async fn restrict_file(path: &Path) -> io::Result<()> {
    set_mode(path, FILE_MODE).await
}

/// Create a directory (and parents) and restrict it to its owner.
pub async fn create_private_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path).await?;
    set_mode(path, DIR_MODE).await
}

#[cfg(unix)]
async fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).await
}

#[cfg(not(unix))]
async fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}
