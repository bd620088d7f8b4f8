use crate::core::{cell, ListSnapshot};
use crate::models::{DraftValidation, EditMode, Field, Notice, User, UserDraft};

/// Columns of the user table, in display order
pub const COLUMNS: [Field; 7] = [
    Field::UserId,
    Field::UserName,
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Department,
    Field::UserStatus,
];

/// Render users as a fixed-width text table
pub fn format_table(rows: &[User]) -> String {
    let mut widths: Vec<usize> = COLUMNS.iter().map(|f| f.label().len()).collect();
    for row in rows {
        for (i, field) in COLUMNS.iter().enumerate() {
            widths[i] = widths[i].max(cell(row, *field).chars().count());
        }
    }

    let line = |values: Vec<String>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    output.push_str(&line(COLUMNS.iter().map(|f| f.label().to_string()).collect()));
    output.push('\n');
    output.push_str(&line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    output.push('\n');
    for row in rows {
        output.push_str(&line(COLUMNS.iter().map(|f| cell(row, *f)).collect()));
        output.push('\n');
    }
    output
}

pub fn print_list(snapshot: &ListSnapshot) {
    println!("=== Users ===\n");
    if let Some(notice) = &snapshot.notice {
        print_notice(notice);
    }

    if snapshot.rows.is_empty() {
        println!("No users found.");
    } else {
        print!("{}", format_table(&snapshot.rows));
    }

    println!(
        "\nPage {} of {} ({} matching, {} total)",
        snapshot.page_index + 1,
        snapshot.total_pages,
        snapshot.matching,
        snapshot.total
    );
    if let Some(at) = snapshot.loaded_at {
        println!("Loaded at {}", at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
}

pub fn print_draft(mode: EditMode, draft: &UserDraft) {
    println!("=== User ({}) ===\n", mode);
    for field in Field::ALL {
        let marker = if field.is_read_only() {
            " (read-only)"
        } else if field.is_required() {
            " *"
        } else {
            ""
        };
        println!("  {:<12} {}{}", format!("{}:", field.label()), draft.get(field), marker);
    }
}

pub fn print_validation(validation: &DraftValidation) {
    println!("Form is invalid:");
    for error in validation.errors() {
        println!("  - {}", error);
    }
}

pub fn print_notice(notice: &Notice) {
    println!("! {}\n", notice);
}
