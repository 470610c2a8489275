use crate::models::notification::Notification;
use events::Fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Events the frame loop drains at the top of every update.
#[derive(Debug)]
pub enum UIEvent {
    Notification(Notification),
    Listing(Arc<Fs>),
    ShowFile { path: PathBuf, content: String },
}
