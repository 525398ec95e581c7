//! Route manifest model and snapshotting.
//!
//! The routing table is consumed as the JSON emitted by
//! `artisan route:list --json`: an array of route objects whose `action`
//! field is either a `Class@method`-style string or `"Closure"`.

mod callback;
mod snapshot;

pub use callback::{parse_callback, CallbackTarget};
pub use snapshot::RouteSnapshot;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteTableError {
    #[error("failed to read route manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse route manifest {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single registered route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// HTTP verb(s), e.g. "GET|HEAD"
    #[serde(default)]
    pub method: Option<String>,

    #[serde(default)]
    pub uri: Option<String>,

    /// Route name, if named
    #[serde(default)]
    pub name: Option<String>,

    /// Handler target descriptor; `None` and `"Closure"` are unresolvable
    #[serde(default)]
    pub action: Option<String>,
}

impl Route {
    /// Convenience constructor for in-memory tables
    pub fn from_action(action: impl Into<String>) -> Self {
        Self {
            method: None,
            uri: None,
            name: None,
            action: Some(action.into()),
        }
    }

    /// A route whose handler is a closure (no statically resolvable target)
    pub fn closure() -> Self {
        Self::from_action("Closure")
    }
}

/// In-memory routing table
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Load a route manifest from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, RouteTableError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RouteTableError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let routes: Vec<Route> =
            serde_json::from_str(&contents).map_err(|source| RouteTableError::Json {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
