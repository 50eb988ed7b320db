use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentStatus {
    Assigned,
    Unassigned,
}

impl AssignmentStatus {
    pub fn from_assigned(is_assigned: bool) -> Self {
        if is_assigned {
            AssignmentStatus::Assigned
        } else {
            AssignmentStatus::Unassigned
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AssignmentStatus::Assigned => "Assigned",
            AssignmentStatus::Unassigned => "Unassigned",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge shown for territories that are currently being worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressBadge {
    InProgress,
}

impl ProgressBadge {
    pub fn label(self) -> &'static str {
        match self {
            ProgressBadge::InProgress => "In Progress",
        }
    }
}

impl fmt::Display for ProgressBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
