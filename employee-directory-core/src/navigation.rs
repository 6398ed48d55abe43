//! Navigation intents and routes
//!
//! Controllers never switch screens themselves; they return a
//! [`NavigationIntent`] and the front end decides what to show.

use employee_directory_client::EmployeeId;

/// What a controller asks the surrounding application to display next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Back to the employee list.
    ShowList,
    /// Open the detail view for one employee.
    ShowDetail(EmployeeId),
}

/// Addressable screens: `/` and `/employee/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    EmployeeList,
    EmployeeDetail {
        id: EmployeeId,
    },
}

impl Route {
    /// Resolve a path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        if trimmed == "/" || trimmed.is_empty() {
            return Some(Self::EmployeeList);
        }

        match trimmed.strip_prefix("/employee/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Some(Self::EmployeeDetail {
                id: EmployeeId::new(id),
            }),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::EmployeeList => "/".to_string(),
            Self::EmployeeDetail { id } => format!("/employee/{id}"),
        }
    }
}

impl From<NavigationIntent> for Route {
    fn from(intent: NavigationIntent) -> Self {
        match intent {
            NavigationIntent::ShowList => Self::EmployeeList,
            NavigationIntent::ShowDetail(id) => Self::EmployeeDetail { id },
        }
    }
}
