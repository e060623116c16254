//! Progress bar utilities.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const BAR_CHARS: &str = "#>-";

fn bar_style(template: &str) -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(template)
        .unwrap()
        .progress_chars(BAR_CHARS)
}

/// Spinner shown while a category is being fetched.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} ({elapsed})")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Byte progress for a single large attachment.
pub fn create_download_bar(total: u64) -> ProgressBar {
    ProgressBar::new(total).with_style(bar_style(
        "  [{bar:40.cyan/blue}] {bytes}/{total_bytes} {bytes_per_sec} ({eta})",
    ))
}

/// Item count progress, e.g. attachments downloaded so far.
pub fn create_item_bar(total: u64, label: &str) -> ProgressBar {
    ProgressBar::new(total).with_style(bar_style(&format!(
        "{{spinner:.green}} {} [{{bar:40.cyan/blue}}] {{pos}}/{{len}}",
        label
    )))
}
