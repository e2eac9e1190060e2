use std::rc::Rc;

use serde::{Deserialize, Serialize};
use todos_core::TodoStore;
use todos_navigation::{Resolution, RouteError, RouteOptions, RouteTable};

/// Views the rendering layer knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppView {
    HomeView,
    StatsView,
}

pub fn app_routes(options: RouteOptions) -> Result<RouteTable<AppView>, RouteError> {
    let mut routes = RouteTable::new(options);
    routes.register("/", "HomeView", AppView::HomeView)?;
    routes.register("/stats", "StatsView", AppView::StatsView)?;
    Ok(routes)
}

/// Everything a view may touch, passed explicitly instead of imported globally.
#[derive(Clone)]
pub struct AppContext {
    pub routes: Rc<RouteTable<AppView>>,
    pub store: TodoStore,
}

impl AppContext {
    pub fn new(options: RouteOptions) -> Result<Self, RouteError> {
        Ok(Self {
            routes: Rc::new(app_routes(options)?),
            store: TodoStore::new(),
        })
    }

    /// Text stand-in for whatever the real renderer draws at `path`.
    pub fn render(&self, path: &str) -> String {
        match self.routes.resolve(path) {
            Resolution::Matched(route) => match route.view() {
                AppView::HomeView => format!("Home ({} todos)", self.store.total_todos()),
                AppView::StatsView => format!("Stats: totalTodos = {}", self.store.total_todos()),
            },
            Resolution::NotFound { path } => format!("404: {path}"),
        }
    }
}
