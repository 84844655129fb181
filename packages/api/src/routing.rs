// ABOUTME: Action routing table for the persistence endpoint
// ABOUTME: Maps (HTTP method, action query parameter) to exactly one operation

use std::fmt;
use std::str::FromStr;

use axum::http::{Method, StatusCode};

/// Value of the `action` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Vision,
    Okrs,
    Stories,
    Comments,
    ArchElements,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Vision => "vision",
            Action::Okrs => "okrs",
            Action::Stories => "stories",
            Action::Comments => "comments",
            Action::ArchElements => "arch-elements",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vision" => Ok(Action::Vision),
            "okrs" => Ok(Action::Okrs),
            "stories" => Ok(Action::Stories),
            "comments" => Ok(Action::Comments),
            "arch-elements" => Ok(Action::ArchElements),
            _ => Err(()),
        }
    }
}

/// One routable persistence operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ReadVision,
    ReplaceVision,
    ListOkrs,
    CreateOkr,
    ReplaceOkr,
    DeleteOkr,
    ListStories,
    CreateStory,
    ListComments,
    CreateComment,
    ListElements,
    CreateElement,
    MoveElement,
}

impl Route {
    /// Resolve a request; `None` for any pair outside the table
    pub fn resolve(method: &Method, action: &str) -> Option<Route> {
        let action = action.parse::<Action>().ok()?;

        let route = match (method.as_str(), action) {
            ("GET", Action::Vision) => Route::ReadVision,
            ("PUT", Action::Vision) => Route::ReplaceVision,
            ("GET", Action::Okrs) => Route::ListOkrs,
            ("POST", Action::Okrs) => Route::CreateOkr,
            ("PUT", Action::Okrs) => Route::ReplaceOkr,
            ("DELETE", Action::Okrs) => Route::DeleteOkr,
            ("GET", Action::Stories) => Route::ListStories,
            ("POST", Action::Stories) => Route::CreateStory,
            ("GET", Action::Comments) => Route::ListComments,
            ("POST", Action::Comments) => Route::CreateComment,
            ("GET", Action::ArchElements) => Route::ListElements,
            ("POST", Action::ArchElements) => Route::CreateElement,
            ("PUT", Action::ArchElements) => Route::MoveElement,
            _ => return None,
        };

        Some(route)
    }

    /// Status code for a successful response
    pub fn success_status(&self) -> StatusCode {
        match self {
            Route::CreateOkr | Route::CreateStory | Route::CreateComment | Route::CreateElement => {
                StatusCode::CREATED
            }
            _ => StatusCode::OK,
        }
    }
}
