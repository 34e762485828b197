//! Terminal output helpers

/// Print a success message with a green check mark (when color is enabled).
pub fn print_success(message: &str) {
    if use_color() {
        println!("\x1b[32m✓\x1b[0m {message}");
    } else {
        println!("{message}");
    }
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    if use_color() {
        println!("\x1b[33mWarning:\x1b[0m {message}");
    } else {
        println!("Warning: {message}");
    }
}

/// Print an aligned `key: value` line.
pub fn print_key_value(key: &str, value: &str) {
    println!("{key}: {value}");
}

/// Print the first few items of a list, one per line, indented.
pub fn print_examples(label: &str, ids: &[String], limit: usize) {
    if ids.is_empty() {
        return;
    }
    println!("{label}:");
    for id in ids.iter().take(limit) {
        println!("  {id}");
    }
    if ids.len() > limit {
        println!("  ... and {} more", ids.len() - limit);
    }
}

fn use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}
