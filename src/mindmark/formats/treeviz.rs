//! Treeviz formatter
//!
//! Treeviz draws the statement forest one node per line, which makes the nesting easy to
//! scan. Nesting is shown with box-drawing connectors, two columns per level:
//!
//!     <prefix><connector> <icon> <label>     (label truncated to 30 characters)
//!
//! Example:
//!
//!     ⧉ document
//!     └─ § name
//!       ├─ ◦ name
//!       └─ § task
//!         └─ ƒ task
//!           └─ # 1
//!
//! Icons
//!     Composites:
//!         Statement: §
//!         Function: ƒ
//!     Terminals:
//!         Identity: ◦
//!         String: "
//!         Integer, Float: #
//!         Percentage: %
//!         Date, DateTime: ◷
//!         Symbol: ※
//!         Arrow: →
//!         Error: ⚠
//!
//! With `show_linum` every line starts with the node's starting row.

use crate::mindmark::ast::{snapshot_forest, NodeSnapshot, Statement};

const MAX_LABEL: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    let single_line = s.replace('\n', " ");
    if single_line.chars().count() > max_chars {
        let mut truncated = single_line.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        single_line
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "STATEMENT" => "§",
        "FUNCTION" => "ƒ",
        "IDENTITY" => "◦",
        "STRING" => "\"",
        "INTEGER" | "FLOAT" => "#",
        "PERCENTAGE" => "%",
        "DATE" | "DATETIME" => "◷",
        "SYMBOL" => "※",
        "ARROW" => "→",
        "ERROR" => "⚠",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &NodeSnapshot,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let linum_prefix = if show_linum {
        format!("{:02} ", snapshot.range.start.row)
    } else {
        String::new()
    };

    output.push_str(&format!(
        "{}{}{} {} {}\n",
        linum_prefix,
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, MAX_LABEL)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == child_count, show_linum, output);
    }
}

pub fn render_treeviz(forest: &[Statement], show_linum: bool) -> String {
    let snapshots = snapshot_forest(forest);
    let mut output = String::from("⧉ document\n");
    let count = snapshots.len();
    for (i, snapshot) in snapshots.iter().enumerate() {
        format_snapshot(snapshot, "", i + 1 == count, show_linum, &mut output);
    }
    output
}
