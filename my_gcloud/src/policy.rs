use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GCloudError;

// https://cloud.google.com/iam/docs/reference/rest/v1/Policy
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn of(value: impl Into<String>) -> Self {
        Role(value.into())
    }

    pub fn viewer() -> Self {
        Role::of("roles/viewer")
    }

    pub fn editor() -> Self {
        Role::of("roles/editor")
    }

    pub fn owner() -> Self {
        Role::of("roles/owner")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member of a policy binding, in the IAM string form
/// ("allUsers", "user:alice@example.com", "serviceAccount:sa@project.iam", ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Identity {
    AllUsers,
    AllAuthenticatedUsers,
    User(String),
    ServiceAccount(String),
    Group(String),
    Domain(String),
}

impl Identity {
    pub fn all_users() -> Self {
        Identity::AllUsers
    }

    pub fn all_authenticated_users() -> Self {
        Identity::AllAuthenticatedUsers
    }

    pub fn user(email: impl Into<String>) -> Self {
        Identity::User(email.into())
    }

    pub fn service_account(email: impl Into<String>) -> Self {
        Identity::ServiceAccount(email.into())
    }

    pub fn group(email: impl Into<String>) -> Self {
        Identity::Group(email.into())
    }

    pub fn domain(name: impl Into<String>) -> Self {
        Identity::Domain(name.into())
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::AllUsers => f.write_str("allUsers"),
            Identity::AllAuthenticatedUsers => f.write_str("allAuthenticatedUsers"),
            Identity::User(email) => write!(f, "user:{}", email),
            Identity::ServiceAccount(email) => write!(f, "serviceAccount:{}", email),
            Identity::Group(email) => write!(f, "group:{}", email),
            Identity::Domain(name) => write!(f, "domain:{}", name),
        }
    }
}

impl FromStr for Identity {
    type Err = GCloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allUsers" => return Ok(Identity::AllUsers),
            "allAuthenticatedUsers" => return Ok(Identity::AllAuthenticatedUsers),
            _ => {}
        }
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| GCloudError::InvalidIdentity(s.to_string()))?;
        if value.is_empty() {
            return Err(GCloudError::InvalidIdentity(s.to_string()));
        }
        match kind {
            "user" => Ok(Identity::User(value.to_string())),
            "serviceAccount" => Ok(Identity::ServiceAccount(value.to_string())),
            "group" => Ok(Identity::Group(value.to_string())),
            "domain" => Ok(Identity::Domain(value.to_string())),
            _ => Err(GCloudError::InvalidIdentity(s.to_string())),
        }
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> String {
        identity.to_string()
    }
}

impl TryFrom<String> for Identity {
    type Error = GCloudError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An access-control policy: a set of role-to-identity bindings, plus the
/// opaque etag returned by the service for read-modify-write cycles.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    bindings: BTreeMap<Role, BTreeSet<Identity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    etag: Option<String>,
}

impl Policy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    pub fn to_builder(&self) -> PolicyBuilder {
        PolicyBuilder {
            bindings: self.bindings.clone(),
            etag: self.etag.clone(),
        }
    }

    pub fn bindings(&self) -> &BTreeMap<Role, BTreeSet<Identity>> {
        &self.bindings
    }

    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }
}

#[derive(Debug, Default, Clone)]
pub struct PolicyBuilder {
    bindings: BTreeMap<Role, BTreeSet<Identity>>,
    etag: Option<String>,
}

impl PolicyBuilder {
    pub fn add_identity(mut self, role: Role, identity: Identity) -> Self {
        self.bindings.entry(role).or_default().insert(identity);
        self
    }

    pub fn remove_identity(mut self, role: &Role, identity: &Identity) -> Self {
        if let Some(identities) = self.bindings.get_mut(role) {
            identities.remove(identity);
            if identities.is_empty() {
                self.bindings.remove(role);
            }
        }
        self
    }

    pub fn remove_role(mut self, role: &Role) -> Self {
        self.bindings.remove(role);
        self
    }

    pub fn etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }

    pub fn build(self) -> Policy {
        Policy {
            bindings: self.bindings,
            etag: self.etag,
        }
    }
}
