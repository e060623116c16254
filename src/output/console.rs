//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Mastodon Backup                                   ║
║     Export your account to a local directory          ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(instance: &str, status_limit: Option<u32>, output_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Instance: {}", instance);
    match status_limit {
        Some(limit) => println!("  Statuses: last {}", limit),
        None => println!("  Statuses: all"),
    }
    println!("  Directory: {}", output_dir);
    println!();
}
