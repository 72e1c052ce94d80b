// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Plain-text rendering of hotspot listings

use std::fmt::Write;

use super::service::HotspotUser;

const HEADERS: [&str; 4] = ["No", "Name", "Profile", "Comment"];
const MISSING: &str = "-";

/// Renders users as an aligned `No / Name / Profile / Comment` table
pub fn render_user_table(users: &[HotspotUser]) -> String {
    if users.is_empty() {
        return "No hotspot users.\n".to_string();
    }

    let rows: Vec<[String; 4]> = users
        .iter()
        .enumerate()
        .map(|(i, u)| {
            [
                (i + 1).to_string(),
                u.name.clone(),
                u.profile.clone().unwrap_or_else(|| MISSING.to_string()),
                u.comment.clone().unwrap_or_else(|| MISSING.to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

/// Renders profile names as a bullet list
pub fn render_profile_list(profiles: &[String]) -> String {
    if profiles.is_empty() {
        return "No hotspot profiles.\n".to_string();
    }
    profiles.iter().map(|p| format!("  - {p}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, profile: Option<&str>, comment: Option<&str>) -> HotspotUser {
        HotspotUser {
            name: name.to_string(),
            profile: profile.map(str::to_string),
            comment: comment.map(str::to_string),
        }
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_user_table(&[]), "No hotspot users.\n");
    }

    #[test]
    fn test_render_user_table() {
        let table = render_user_table(&[
            user("alice", Some("default"), Some("staff")),
            user("bob", None, None),
        ]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "No  Name   Profile  Comment");
        assert_eq!(lines[1], "--  -----  -------  -------");
        assert_eq!(lines[2], "1   alice  default  staff");
        assert_eq!(lines[3], "2   bob    -        -");
    }

    #[test]
    fn test_render_profile_list() {
        let list = render_profile_list(&["default".to_string(), "students".to_string()]);
        assert_eq!(list, "  - default\n  - students\n");
        assert_eq!(render_profile_list(&[]), "No hotspot profiles.\n");
    }
}
