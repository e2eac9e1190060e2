//! Route table for client-side navigation.
//!
//! A [`RouteTable`] maps URL paths to opaque view keys. It never renders
//! anything: the rendering layer asks [`RouteTable::resolve`] which key
//! belongs to a path and turns that key into a view itself.
//!
//! ```rust
//! use todos_navigation::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Screen {
//!     Home,
//!     Stats,
//! }
//!
//! let mut table = RouteTable::new(RouteOptions::default());
//! table.register("/", "HomeView", Screen::Home).unwrap();
//! table.register("/stats", "StatsView", Screen::Stats).unwrap();
//!
//! assert_eq!(table.resolve("/stats").view(), Some(&Screen::Stats));
//! assert!(table.resolve("/missing").is_not_found());
//! assert_eq!(table.path_for("HomeView"), Some("/"));
//! ```
use std::{collections::HashMap, fmt::Debug};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub trait ViewKey: Clone + Debug + PartialEq + 'static {}
impl<T> ViewKey for T where T: Clone + Debug + PartialEq + 'static {}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("path {path:?} is already registered by route {existing:?}")]
    DuplicatePath { path: String, existing: String },
    #[error("route name {name:?} is already registered for path {existing:?}")]
    DuplicateName { name: String, existing: String },
    #[error("invalid route path {0:?}: must start with '/' and contain no query or fragment")]
    InvalidPath(String),
    #[error("route for path {0:?} has an empty name")]
    EmptyName(String),
    #[error("route definitions: {0}")]
    Json(#[from] serde_json::Error),
}

/// Matching behaviour shared by registration and resolution.
///
/// The default is lenient (trailing `/` and ASCII case ignored), like
/// vue-router; set `strict` and `sensitive` for exact-path matching.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// When false, a single trailing `/` is ignored (`/stats/` matches `/stats`).
    pub strict: bool,
    /// When false, paths compare ASCII case-insensitively.
    pub sensitive: bool,
    /// Prefix the application is mounted under, stripped before matching.
    pub base: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route<V> {
    path: String,
    name: String,
    view: V,
}

impl<V> Route<V> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
    pub fn path(&self) -> &str {
        &self.path
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Outcome of [`RouteTable::resolve`].
#[derive(Debug, PartialEq)]
pub enum Resolution<'a, V> {
    Matched(&'a Route<V>),
    NotFound { path: String },
}

impl<'a, V> Resolution<'a, V> {
    pub fn route(&self) -> Option<&'a Route<V>> {
        match self {
            Resolution::Matched(r) => Some(*r),
            Resolution::NotFound { .. } => None,
        }
    }
    pub fn view(&self) -> Option<&'a V> {
        self.route().map(Route::view)
    }
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }
}

pub struct RouteTable<V: ViewKey> {
    options: RouteOptions,
    routes: Vec<Route<V>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl<V: ViewKey> RouteTable<V> {
    pub fn new(options: RouteOptions) -> Self {
        Self {
            options,
            routes: Vec::new(),
            by_path: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Build a table from definitions, stopping at the first conflict.
    pub fn from_defs(
        options: RouteOptions,
        defs: impl IntoIterator<Item = Route<V>>,
    ) -> Result<Self, RouteError> {
        let mut table = Self::new(options);
        for Route { path, name, view } in defs {
            table.register(path, name, view)?;
        }
        Ok(table)
    }

    /// Load definitions from a JSON array of `{ "path", "name", "view" }`.
    pub fn from_json(options: RouteOptions, json: &str) -> Result<Self, RouteError>
    where
        V: DeserializeOwned,
    {
        let defs: Vec<Route<V>> = serde_json::from_str(json)?;
        Self::from_defs(options, defs)
    }

    pub fn to_json(&self) -> Result<String, RouteError>
    where
        V: Serialize,
    {
        Ok(serde_json::to_string(&self.routes)?)
    }

    pub fn register(
        &mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        view: V,
    ) -> Result<(), RouteError> {
        let path = path.into();
        let name = name.into();
        if !path.starts_with('/') || path.contains(['?', '#']) {
            return Err(RouteError::InvalidPath(path));
        }
        if name.is_empty() {
            return Err(RouteError::EmptyName(path));
        }
        let key = self.key_for(&path);
        if let Some(&idx) = self.by_path.get(&key) {
            return Err(RouteError::DuplicatePath {
                path,
                existing: self.routes[idx].name.clone(),
            });
        }
        if let Some(&idx) = self.by_name.get(&name) {
            return Err(RouteError::DuplicateName {
                name,
                existing: self.routes[idx].path.clone(),
            });
        }

        log::debug!("route {path} -> {name} ({view:?})");
        let idx = self.routes.len();
        self.by_path.insert(key, idx);
        self.by_name.insert(name.clone(), idx);
        self.routes.push(Route { path, name, view });
        Ok(())
    }

    pub fn resolve(&self, path: &str) -> Resolution<'_, V> {
        let found = self
            .strip_base(strip_query(path))
            .and_then(|p| self.by_path.get(&self.key_for(p)))
            .map(|&idx| &self.routes[idx]);
        match found {
            Some(route) => {
                log::trace!("resolved {path} -> {}", route.name);
                Resolution::Matched(route)
            }
            None => {
                log::warn!("no route for {path}");
                Resolution::NotFound {
                    path: path.to_string(),
                }
            }
        }
    }

    pub fn route_named(&self, name: &str) -> Option<&Route<V>> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// Reverse lookup for symbolic navigation.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.route_named(name).map(Route::path)
    }

    /// Entries in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    fn key_for(&self, path: &str) -> String {
        let path = if self.options.strict {
            path
        } else {
            match path.strip_suffix('/') {
                Some("") | None => path,
                Some(trimmed) => trimmed,
            }
        };
        if self.options.sensitive {
            path.to_string()
        } else {
            path.to_ascii_lowercase()
        }
    }

    fn strip_base<'p>(&self, path: &'p str) -> Option<&'p str> {
        let base = match self.options.base.as_deref().map(|b| b.trim_end_matches('/')) {
            None | Some("") => return Some(path),
            Some(b) => b,
        };
        let rest = if self.options.sensitive {
            path.strip_prefix(base)?
        } else {
            let head = path.get(..base.len())?;
            if !head.eq_ignore_ascii_case(base) {
                return None;
            }
            &path[base.len()..]
        };
        match rest {
            "" => Some("/"),
            r if r.starts_with('/') => Some(r),
            _ => None,
        }
    }
}

fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(i) => &path[..i],
        None => path,
    }
}
