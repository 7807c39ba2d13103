//! Permission records associated with paths.
//!
//! Permission data arrives as JSON keyed by path literal; each record names
//! an HTTP verb and the scopes that authorize it under three grant schemes.
//! Scope lists sometimes carry leading whitespace or the sentinel
//! `"Not supported."`, so [`ApiPermission::supported_scopes`] is the lens
//! most callers want.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The grant scheme a scope list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionScheme {
    /// Delegated access on behalf of a work or school account.
    DelegatedWork,
    /// Delegated access on behalf of a personal account.
    DelegatedPersonal,
    /// Application-only access without a signed-in user.
    Application,
}

impl fmt::Display for PermissionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DelegatedWork => "DelegatedWork",
            Self::DelegatedPersonal => "DelegatedPersonal",
            Self::Application => "Application",
        };
        write!(f, "{name}")
    }
}

/// A single verb's permission record for one path.
///
/// # Examples
///
/// ```
/// use uripath::{ApiPermission, PermissionScheme};
///
/// let json = r#"{
///     "HttpVerb": "GET",
///     "DelegatedWork": ["User.Read.All"],
///     "DelegatedPersonal": ["Not supported."],
///     "Application": ["User.Read.All"]
/// }"#;
/// let permission: ApiPermission = serde_json::from_str(json).unwrap();
///
/// assert_eq!(permission.http_verb(), "GET");
/// assert!(permission
///     .supported_scopes(PermissionScheme::DelegatedPersonal)
///     .is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiPermission {
    http_verb: String,
    #[serde(default)]
    delegated_work: Vec<String>,
    #[serde(default)]
    delegated_personal: Vec<String>,
    #[serde(default)]
    application: Vec<String>,
    #[serde(default)]
    delegated_work_restricted_properties: IndexMap<String, HashSet<String>>,
    #[serde(default)]
    delegated_personal_restricted_properties: IndexMap<String, HashSet<String>>,
    #[serde(default)]
    application_restricted_properties: IndexMap<String, HashSet<String>>,
}

/// The sentinel used in place of a scope list when a scheme cannot grant
/// access to the path.
const NOT_SUPPORTED: &str = "Not supported.";

impl ApiPermission {
    /// Returns the HTTP verb this record covers.
    #[must_use]
    pub fn http_verb(&self) -> &str {
        &self.http_verb
    }

    /// Returns the raw scope list for a scheme, as it appeared in the data.
    #[must_use]
    pub fn scopes(&self, scheme: PermissionScheme) -> &[String] {
        match scheme {
            PermissionScheme::DelegatedWork => &self.delegated_work,
            PermissionScheme::DelegatedPersonal => &self.delegated_personal,
            PermissionScheme::Application => &self.application,
        }
    }

    /// Returns the property restrictions for a scheme, keyed by scope name.
    #[must_use]
    pub fn restricted_properties(
        &self,
        scheme: PermissionScheme,
    ) -> &IndexMap<String, HashSet<String>> {
        match scheme {
            PermissionScheme::DelegatedWork => &self.delegated_work_restricted_properties,
            PermissionScheme::DelegatedPersonal => &self.delegated_personal_restricted_properties,
            PermissionScheme::Application => &self.application_restricted_properties,
        }
    }

    /// Returns the usable scopes for a scheme, whitespace-trimmed and with
    /// the not-supported sentinel filtered out.
    #[must_use]
    pub fn supported_scopes(&self, scheme: PermissionScheme) -> Vec<PermissionScope> {
        self.scopes(scheme)
            .iter()
            .map(|raw| raw.trim())
            .filter(|name| !name.is_empty() && *name != NOT_SUPPORTED)
            .map(|name| PermissionScope {
                scope_name: name.to_string(),
                restricted_properties: self
                    .restricted_properties(scheme)
                    .get(name)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect()
    }
}

/// A resolved scope together with the properties it restricts access to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionScope {
    scope_name: String,
    #[serde(default)]
    restricted_properties: HashSet<String>,
}

impl PermissionScope {
    /// Returns the scope's name.
    #[must_use]
    pub fn scope_name(&self) -> &str {
        &self.scope_name
    }

    /// Returns the properties restricted under this scope.
    #[must_use]
    pub const fn restricted_properties(&self) -> &HashSet<String> {
        &self.restricted_properties
    }
}

/// Parses a JSON document mapping path literals to per-verb permission
/// records.
///
/// # Errors
///
/// Returns [`Error::PermissionData`](crate::Error::PermissionData) if the
/// text is not valid JSON or does not match the expected shape.
pub fn from_json(text: &str) -> Result<IndexMap<String, Vec<ApiPermission>>> {
    let parsed: IndexMap<String, Vec<ApiPermission>> = serde_json::from_str(text)?;
    log::debug!("loaded permission records for {} path(s)", parsed.len());
    Ok(parsed)
}
