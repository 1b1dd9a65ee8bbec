use crate::error::{PassError, Result};
use crate::generator;
use crate::lookup;
use crate::models::{Credential, FormState};
use crate::storage::StoreFile;
use log::{info, warn};

/// A validated save waiting for the user's OK. Dropping it cancels the save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSave {
    website: String,
    credential: Credential,
}

impl PendingSave {
    pub fn website(&self) -> &str {
        &self.website
    }

    pub fn confirmation_text(&self) -> String {
        format!(
            "These are the details entered:\n{}\nIs it okay to save?",
            self.credential
        )
    }
}

/// Owns the form fields and the store file; every action handler goes through it.
#[derive(Debug)]
pub struct FormController {
    form: FormState,
    store: StoreFile,
}

impl FormController {
    pub fn new(store: StoreFile) -> Self {
        FormController {
            form: FormState::default(),
            store,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn store(&self) -> &StoreFile {
        &self.store
    }

    /// Overwrites the password field with a fresh password and returns it.
    pub fn generate(&mut self) -> String {
        let password = generator::generate_password();
        self.form.password = password.clone();
        info!("generated a {}-character password", password.len());
        password
    }

    /// Validation only; no I/O happens here.
    pub fn prepare_save(&self) -> Result<PendingSave> {
        if self.form.has_blank_field() {
            warn!("save rejected: blank field");
            return Err(PassError::MissingFields);
        }
        Ok(PendingSave {
            website: self.form.website.clone(),
            credential: Credential::new(self.form.username.clone(), self.form.password.clone()),
        })
    }

    /// Persists a confirmed save. Fields are cleared only if the write succeeded.
    pub fn confirm_save(&mut self, pending: PendingSave) -> Result<()> {
        let PendingSave { website, credential } = pending;
        self.store.add_record(&website, credential)?;
        self.form.clear();
        Ok(())
    }

    /// Looks up the current website field. Returns the website alongside the
    /// record so the caller can title its dialog.
    pub fn search(&self) -> Result<(String, Credential)> {
        let website = self.form.website.clone();
        let credential = lookup::search(&self.store, &website)?;
        Ok((website, credential))
    }
}
