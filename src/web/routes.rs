//! Wiki route table.
//!
//! Every public path is declared once in [`ROUTES`], mapping a pattern to an
//! [`Operation`]. The axum router is built from the table and [`resolve`]
//! matches a request path against it without going through axum, so the
//! mapping can be checked on its own.

use axum::{
    Router,
    routing::{MethodRouter, get},
};
use std::sync::LazyLock;
use url::Url;

use crate::state::AppState;
use crate::web::handlers::{
    edit_handler, entry_handler, index_handler, new_entry_handler, random_handler,
    search_handler, submit_entry_handler,
};

/// User-facing wiki operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// List all entries.
    List,
    /// Show one entry rendered to HTML.
    View,
    /// Show the edit form pre-filled with an entry.
    EditPrefill,
    /// Blank creation form (GET) and form submission (POST).
    CreateOrEdit,
    /// Redirect to a random entry.
    Random,
    /// Title search.
    Search,
}

impl Operation {
    /// The handlers serving this operation, keyed by HTTP method.
    pub fn method_router(self) -> MethodRouter<AppState> {
        match self {
            Operation::List => get(index_handler),
            Operation::View => get(entry_handler),
            Operation::EditPrefill => get(edit_handler),
            Operation::CreateOrEdit => get(new_entry_handler).post(submit_entry_handler),
            Operation::Random => get(random_handler),
            Operation::Search => get(search_handler),
        }
    }
}

/// A path pattern and the operation it serves.
///
/// `{name}` segments match any single non-empty path segment.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub pattern: &'static str,
    pub operation: Operation,
}

/// # Endpoints
///
/// - `GET  /`                   - All entries
/// - `GET  /wiki/{title}`       - Entry page
/// - `GET  /wiki/{title}/edit`  - Edit form for an entry
/// - `GET  /entry_handler`      - Blank creation form
/// - `POST /entry_handler`      - Create or edit submission
/// - `GET  /random`             - Redirect to a random entry
/// - `GET  /search?q={text}`    - Title search
pub const ROUTES: &[Route] = &[
    Route {
        pattern: "/",
        operation: Operation::List,
    },
    Route {
        pattern: "/wiki/{title}",
        operation: Operation::View,
    },
    Route {
        pattern: "/wiki/{title}/edit",
        operation: Operation::EditPrefill,
    },
    Route {
        pattern: "/entry_handler",
        operation: Operation::CreateOrEdit,
    },
    Route {
        pattern: "/random",
        operation: Operation::Random,
    },
    Route {
        pattern: "/search",
        operation: Operation::Search,
    },
];

/// Builds the wiki router from [`ROUTES`].
pub fn routes() -> Router<AppState> {
    ROUTES.iter().fold(Router::new(), |router, route| {
        router.route(route.pattern, route.operation.method_router())
    })
}

/// Finds the operation serving `path`. Any query string is ignored.
pub fn resolve(path: &str) -> Option<Operation> {
    let path = path.split_once('?').map_or(path, |(path, _)| path);

    ROUTES
        .iter()
        .find(|route| pattern_matches(route.pattern, path))
        .map(|route| route.operation)
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut expected = pattern.split('/');
    let mut actual = path.split('/');

    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with('{') && p.ends_with('}') => {
                if s.is_empty() {
                    return false;
                }
            }
            (Some(p), Some(s)) if p == s => {}
            _ => return false,
        }
    }
}

/// Base used only to percent-encode path segments.
static BASE_URL: LazyLock<Url> = LazyLock::new(|| Url::parse("http://wiki.invalid/").unwrap());

fn encoded_path(segments: &[&str]) -> String {
    let mut url = BASE_URL.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

/// Path of the entry page for `title`, percent-encoded.
pub fn entry_path(title: &str) -> String {
    encoded_path(&["wiki", title])
}

/// Path of the edit page for `title`, percent-encoded.
pub fn edit_path(title: &str) -> String {
    encoded_path(&["wiki", title, "edit"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_each_route() {
        assert_eq!(resolve("/"), Some(Operation::List));
        assert_eq!(resolve("/wiki/Python"), Some(Operation::View));
        assert_eq!(resolve("/wiki/Python/edit"), Some(Operation::EditPrefill));
        assert_eq!(resolve("/entry_handler"), Some(Operation::CreateOrEdit));
        assert_eq!(resolve("/random"), Some(Operation::Random));
        assert_eq!(resolve("/search?q=py"), Some(Operation::Search));
    }

    #[test]
    fn test_resolve_unknown_paths() {
        assert_eq!(resolve("/wiki"), None);
        assert_eq!(resolve("/wiki/"), None);
        assert_eq!(resolve("/wiki/Python/history"), None);
        assert_eq!(resolve("/nope"), None);
    }

    #[test]
    fn test_every_operation_is_routed_once() {
        let operations = [
            Operation::List,
            Operation::View,
            Operation::EditPrefill,
            Operation::CreateOrEdit,
            Operation::Random,
            Operation::Search,
        ];

        for op in operations {
            let count = ROUTES.iter().filter(|r| r.operation == op).count();
            assert_eq!(count, 1, "{op:?} routed {count} times");
        }
        assert_eq!(ROUTES.len(), operations.len());
    }

    #[test]
    fn test_entry_paths_are_encoded() {
        assert_eq!(entry_path("Python"), "/wiki/Python");
        assert_eq!(entry_path("Hello World"), "/wiki/Hello%20World");
        assert_eq!(entry_path("C#"), "/wiki/C%23");
        assert_eq!(entry_path("What?"), "/wiki/What%3F");
        assert_eq!(edit_path("Hello World"), "/wiki/Hello%20World/edit");
    }

    #[test]
    fn test_encoded_paths_resolve() {
        assert_eq!(resolve(&entry_path("Hello World")), Some(Operation::View));
        assert_eq!(resolve(&edit_path("C#")), Some(Operation::EditPrefill));
    }
}
