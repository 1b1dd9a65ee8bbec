use crate::error::{PassError, Result};
use crate::models::Credential;
use crate::storage::StoreFile;
use log::{info, warn};

/// Exact, case-sensitive lookup of `website` in the store file.
///
/// A missing file is `StoreAbsent`; a present file without the key is
/// `RecordNotFound`.
pub fn search(file: &StoreFile, website: &str) -> Result<Credential> {
    let store = match file.load()? {
        Some(store) => store,
        None => {
            warn!("search for {:?}: no store at {:?}", website, file.path());
            return Err(PassError::StoreAbsent);
        }
    };
    match store.get(website) {
        Some(credential) => {
            info!("found credentials for {:?}", website);
            Ok(credential.clone())
        }
        None => {
            warn!("no credentials for {:?}", website);
            Err(PassError::RecordNotFound(website.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_saved_record() {
        let dir = tempdir().unwrap();
        let file = StoreFile::new(dir.path().join("data.json"));
        file.add_record("example.com", Credential::new("alice", "Xk9#pLm2")).unwrap();

        let found = search(&file, "example.com").unwrap();
        assert_eq!(found, Credential::new("alice", "Xk9#pLm2"));
    }

    #[test]
    fn unknown_site_is_record_not_found() {
        let dir = tempdir().unwrap();
        let file = StoreFile::new(dir.path().join("data.json"));
        file.add_record("example.com", Credential::new("alice", "pw")).unwrap();

        match search(&file, "nowhere.com") {
            Err(PassError::RecordNotFound(site)) => assert_eq!(site, "nowhere.com"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(search(&file, "EXAMPLE.COM"), Err(PassError::RecordNotFound(_))));
        assert!(matches!(search(&file, ""), Err(PassError::RecordNotFound(_))));
    }

    #[test]
    fn missing_file_is_store_absent() {
        let dir = tempdir().unwrap();
        let file = StoreFile::new(dir.path().join("data.json"));

        assert!(matches!(search(&file, "example.com"), Err(PassError::StoreAbsent)));
    }

    #[test]
    fn corrupt_file_is_not_reported_as_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ broken").unwrap();

        assert!(matches!(
            search(&StoreFile::new(&path), "example.com"),
            Err(PassError::Malformed { .. })
        ));
    }
}
