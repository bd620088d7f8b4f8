//! Client-side projection of the user collection: filter, sort and paging.
//!
//! The full collection is held in memory; every view of it is computed on
//! demand so replacing the data never leaves stale pages behind.

use std::cmp::Ordering;

use crate::models::{Field, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Paginated, sortable, filterable table of users
#[derive(Debug, Clone)]
pub struct UserGrid {
    users: Vec<User>,
    filter: String,
    sort: Option<(Field, SortDirection)>,
    page_index: usize,
    page_size: usize,
}

impl UserGrid {
    pub fn new(page_size: usize) -> Self {
        Self {
            users: Vec::new(),
            filter: String::new(),
            sort: None,
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replace the whole collection
    pub fn set_data(&mut self, users: Vec<User>) {
        self.users = users;
        self.clamp_page();
    }

    pub fn data(&self) -> &[User] {
        &self.users
    }

    pub fn find(&self, user_id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    /// Case-insensitive match against every column. Resets to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into().trim().to_lowercase();
        self.page_index = 0;
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort_by(&mut self, field: Field, direction: SortDirection) {
        self.sort = Some((field, direction));
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn sort(&self) -> Option<(Field, SortDirection)> {
        self.sort
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page();
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to a zero-based page, clamped to the last page
    pub fn go_to_page(&mut self, page_index: usize) {
        self.page_index = page_index;
        self.clamp_page();
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Filtered and sorted rows, before paging
    pub fn filtered(&self) -> Vec<&User> {
        let mut rows: Vec<&User> = self
            .users
            .iter()
            .filter(|u| self.filter.is_empty() || matches_filter(u, &self.filter))
            .collect();

        if let Some((field, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare(a, b, field);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        rows
    }

    /// Rows on the current page
    pub fn rows(&self) -> Vec<&User> {
        self.filtered()
            .into_iter()
            .skip(self.page_index * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Number of pages; an empty table still has one (empty) page
    pub fn total_pages(&self) -> usize {
        let matching = self.filtered().len();
        matching.div_ceil(self.page_size).max(1)
    }

    fn clamp_page(&mut self) {
        let last = self.total_pages() - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }
}

/// Text of a column as displayed in the grid
pub fn cell(user: &User, field: Field) -> String {
    match field {
        Field::UserId => user.user_id.to_string(),
        Field::UserName => user.user_name.clone(),
        Field::FirstName => user.first_name.clone(),
        Field::LastName => user.last_name.clone(),
        Field::Email => user.email.clone(),
        Field::UserStatus => user.user_status.clone(),
        Field::Department => user.department.clone().unwrap_or_default(),
    }
}

fn matches_filter(user: &User, filter: &str) -> bool {
    Field::ALL
        .iter()
        .any(|f| cell(user, *f).to_lowercase().contains(filter))
}

fn compare(a: &User, b: &User, field: Field) -> Ordering {
    match field {
        Field::UserId => a.user_id.cmp(&b.user_id),
        _ => cell(a, field)
            .to_lowercase()
            .cmp(&cell(b, field).to_lowercase()),
    }
}
