//! Route and tab domain model. Pure logic, no DOM access.

use std::fmt::Display;
use teampulse_shared::Role;

/// Application routes. Anything else in the address bar redirects to
/// `/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Login,
    Register,
    Manager,
    Employee,
}

impl AppRoute {
    /// Parses a URL path. `None` means unmatched; the router redirects
    /// those to `/login`.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/manager" => Some(Self::Manager),
            "/employee" => Some(Self::Employee),
            _ => None,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Manager => "/manager",
            Self::Employee => "/employee",
        }
    }

    /// The role a principal must hold to see this route; `None` for the
    /// public pages.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Manager => Some(Role::Manager),
            Self::Employee => Some(Role::Employee),
            Self::Login | Self::Register => None,
        }
    }

    /// Where a signed-in principal lands.
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Manager => Self::Manager,
            Role::Employee => Self::Employee,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// Dashboard tab identities (part of the UI contract)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagerTab {
    #[default]
    Team,
    Assignments,
    Announcements,
    Documents,
}

impl ManagerTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Assignments => "assignments",
            Self::Announcements => "announcements",
            Self::Documents => "documents",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Team => "Team",
            Self::Assignments => "Assignments",
            Self::Announcements => "Announcements",
            Self::Documents => "Team Documents",
        }
    }

    pub const ALL: [ManagerTab; 4] = [
        ManagerTab::Team,
        ManagerTab::Assignments,
        ManagerTab::Announcements,
        ManagerTab::Documents,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeTab {
    #[default]
    Manager,
    Peer,
    Announcements,
    Assignments,
    Documents,
}

impl EmployeeTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Peer => "peer",
            Self::Announcements => "announcements",
            Self::Assignments => "assignments",
            Self::Documents => "documents",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manager => "Manager Feedback",
            Self::Peer => "Peer Feedback",
            Self::Announcements => "Announcements",
            Self::Assignments => "Assignments",
            Self::Documents => "Documents",
        }
    }

    pub const ALL: [EmployeeTab; 5] = [
        EmployeeTab::Manager,
        EmployeeTab::Peer,
        EmployeeTab::Announcements,
        EmployeeTab::Assignments,
        EmployeeTab::Documents,
    ];
}

// =========================================================
// Role-scoped list endpoints
// =========================================================

/// Announcement feed for each side of the relationship. The authoring
/// manager lists through `/team` (announcements they published to the
/// team); an employee reads their feed through `/my`.
pub fn announcements_list_path(manager_view: bool) -> &'static str {
    if manager_view {
        "/announcements/team"
    } else {
        "/announcements/my"
    }
}

/// Assignment lists follow the same split as announcements: `/team` is
/// the manager's authored set (with submission counts), `/my` is the
/// employee's feed.
pub fn assignments_list_path(manager_view: bool) -> &'static str {
    if manager_view {
        "/assignments/team"
    } else {
        "/assignments/my"
    }
}

#[cfg(test)]
mod tests;
