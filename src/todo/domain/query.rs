//! Filter and sort vocabulary for task listings.

use super::Priority;
use std::fmt;

/// Conjunctive set of optional predicates narrowing a task listing.
///
/// An absent field means "no constraint" on that column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    /// Restrict to tasks with this completion state.
    pub completed: Option<bool>,
    /// Restrict to tasks with this priority.
    pub priority: Option<Priority>,
    /// Substring matched against title or description.
    pub search: Option<String>,
}

impl TaskFilter {
    /// Returns `true` when no predicate is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.completed.is_none() && self.priority.is_none() && self.search.is_none()
    }
}

/// Columns a task listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Order by task title.
    Title,
    /// Order by priority (text ordering, per the storage engine).
    Priority,
    /// Order by creation timestamp.
    #[default]
    CreatedAt,
    /// Order by last-update timestamp.
    UpdatedAt,
}

impl SortField {
    /// Parses a wire-format field name, falling back to [`Self::CreatedAt`]
    /// for anything not on the allow-list.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "priority" => Self::Priority,
            "updatedAt" => Self::UpdatedAt,
            _ => Self::CreatedAt,
        }
    }

    /// Returns the wire-format field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Priority => "priority",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

/// Result ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order, the default.
    #[default]
    Desc,
}

impl SortDirection {
    /// Parses a wire-format direction, falling back to [`Self::Desc`] for
    /// anything other than `asc` or `desc`.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }

    /// Returns the wire-format direction name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A validated (field, direction) ordering for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSort {
    /// Column to order by.
    pub field: SortField,
    /// Ordering direction.
    pub direction: SortDirection,
}

impl TaskSort {
    /// Creates a sort specification from validated components.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses wire-format parameters, falling back to `createdAt`/`desc`
    /// for unrecognized values.
    #[must_use]
    pub fn parse_or_default(field: &str, direction: &str) -> Self {
        Self {
            field: SortField::parse_or_default(field),
            direction: SortDirection::parse_or_default(direction),
        }
    }
}

impl fmt::Display for TaskSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field.as_str(), self.direction.as_str())
    }
}
