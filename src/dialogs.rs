//! Native modal dialogs. Each call blocks until the user dismisses it, so
//! callers run them inside a `Task::perform` future.

use crate::controller::PendingSave;
use crate::error::PassError;
use crate::models::Credential;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Returns the pending save back if the user pressed OK.
pub fn confirm_save(pending: PendingSave) -> Option<PendingSave> {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(pending.website())
        .set_description(pending.confirmation_text())
        .set_buttons(MessageButtons::OkCancel)
        .show();
    match answer {
        MessageDialogResult::Ok | MessageDialogResult::Yes => Some(pending),
        _ => None,
    }
}

pub fn show_credential(website: &str, credential: &Credential) {
    notice(MessageLevel::Info, website, &credential.to_string());
}

pub fn show_error(err: &PassError) {
    let (level, title) = match err {
        PassError::MissingFields | PassError::StoreAbsent => (MessageLevel::Info, "Oops"),
        PassError::RecordNotFound(_) => (MessageLevel::Info, "Error"),
        PassError::Io { .. } | PassError::Malformed { .. } => (MessageLevel::Error, "Error"),
    };
    notice(level, title, &err.to_string());
}

fn notice(level: MessageLevel, title: &str, body: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(body)
        .set_buttons(MessageButtons::Ok)
        .show();
}
