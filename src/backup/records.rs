//! Line formats for each category file.

use crate::api::{Account, List, Status};

/// `{created_at}: {content}`, with the timestamp in UTC.
pub fn status_line(status: &Status) -> String {
    format!(
        "{}: {}",
        status.created_at.format("%Y-%m-%d %H:%M:%S%:z"),
        status.content
    )
}

/// `{url}: {content}`.
pub fn bookmark_line(status: &Status) -> String {
    format!("{}: {}", status.link(), status.content)
}

pub fn account_line(account: &Account) -> String {
    account.username.clone()
}

pub fn list_line(list: &List) -> String {
    list.title.clone()
}
