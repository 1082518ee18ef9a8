use crate::bump::Summary;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

pub fn red(text: &str) -> String {
    format!("{RED}{text}{RESET}")
}

pub fn green(text: &str) -> String {
    format!("{GREEN}{text}{RESET}")
}

pub fn yellow(text: &str) -> String {
    format!("{YELLOW}{text}{RESET}")
}

/// `[+] updated version : <previous> -> <current>` with the old value in red
/// and the new one in green.
pub fn update_line(summary: &Summary<'_>) -> String {
    format!(
        "[+] updated version : {} -> {}",
        red(&summary.previous()),
        green(&summary.current())
    )
}

pub fn warning_line(message: &str) -> String {
    format!("{} {}", yellow("[!]"), message)
}
