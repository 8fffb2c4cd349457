//! Built-in demo routes.
//!
//! Seeded when the server starts without a routes file, so a fresh
//! install has something to plan over.

use crate::domain::{Route, RouteId, StopName};

use super::RouteCatalog;

const DEMO_ROUTES: &[(&str, &str, &[&str])] = &[
    (
        "D1",
        "D1路",
        &["火车站", "人民广场", "市政府", "图书馆", "大学城", "科技园"],
    ),
    (
        "101",
        "101路",
        &["动物园", "人民广场", "商业街", "市政府", "体育中心"],
    ),
    (
        "202",
        "202路",
        &["火车东站", "图书馆", "大学城", "科技园", "软件园"],
    ),
    (
        "303",
        "303路",
        &["机场", "火车站", "动物园", "体育中心", "软件园", "湿地公园"],
    ),
];

/// The four demo routes, each with 3-minute segments and the default
/// service window.
pub fn demo_catalog() -> RouteCatalog {
    let routes = DEMO_ROUTES
        .iter()
        .filter_map(|(id, name, stops)| {
            let id = RouteId::parse(id).ok()?;
            let stops = stops
                .iter()
                .map(|s| StopName::parse(s))
                .collect::<Result<Vec<_>, _>>()
                .ok()?;
            Some(Route::new(id, name.to_string(), stops))
        })
        .collect();
    RouteCatalog::new(routes)
}
