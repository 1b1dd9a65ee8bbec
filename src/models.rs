use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;

/// Username/password pair stored under one website key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credential {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username: {}\nPassword: {}", self.username, self.password)
    }
}

/// Website name -> credential. Serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialStore {
    entries: BTreeMap<String, Credential>,
}

impl CredentialStore {
    /// Replaces any previous record for `website` wholesale.
    pub fn insert(&mut self, website: impl Into<String>, credential: Credential) -> Option<Credential> {
        self.entries.insert(website.into(), credential)
    }

    pub fn get(&self, website: &str) -> Option<&Credential> {
        self.entries.get(website)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub website: String,
    pub username: String,
    pub password: String,
}

impl FormState {
    pub fn has_blank_field(&self) -> bool {
        self.website.is_empty() || self.username.is_empty() || self.password.is_empty()
    }

    pub fn clear(&mut self) {
        self.website.clear();
        self.username.clear();
        self.password.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_whole_record() {
        let mut store = CredentialStore::default();
        store.insert("example.com", Credential::new("alice", "first"));
        let previous = store.insert("example.com", Credential::new("bob", "second"));

        assert_eq!(previous, Some(Credential::new("alice", "first")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("example.com"), Some(&Credential::new("bob", "second")));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut store = CredentialStore::default();
        store.insert("Example.com", Credential::new("alice", "pw"));

        assert!(store.get("example.com").is_none());
        assert!(store.get("Example.com").is_some());
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut store = CredentialStore::default();
        store.insert("example.com", Credential::new("alice", "Xk9#pLm2"));

        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"example.com": {"username": "alice", "password": "Xk9#pLm2"}})
        );

        let back: CredentialStore = serde_json::from_value(value).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn blank_field_detection() {
        let mut form = FormState {
            website: "example.com".into(),
            username: "alice".into(),
            password: String::new(),
        };
        assert!(form.has_blank_field());

        form.password = "pw".into();
        assert!(!form.has_blank_field());

        form.clear();
        assert_eq!(form, FormState::default());
    }
}
