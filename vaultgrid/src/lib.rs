use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

pub mod models;
pub mod views;

use events::FileEvent;
use models::notification::Notification;
use models::ui::UIEvent;

pub struct Senders {
    pub ui_tx: Arc<Mutex<Sender<UIEvent>>>,
    pub notification_tx: Arc<Mutex<Sender<Notification>>>,
    pub file_tx: Arc<Mutex<Sender<FileEvent>>>,
}

impl Senders {
    pub fn ui_tx(&self) -> Sender<UIEvent> {
        self.ui_tx.lock().unwrap().clone()
    }

    pub fn notification_tx(&self) -> Sender<Notification> {
        self.notification_tx.lock().unwrap().clone()
    }

    pub fn file_tx(&self) -> Sender<FileEvent> {
        self.file_tx.lock().unwrap().clone()
    }
}

pub struct Receivers {
    pub ui_rx: Arc<Mutex<Receiver<UIEvent>>>,
    pub notification_rx: Arc<Mutex<Receiver<Notification>>>,
    pub file_rx: Arc<Mutex<Receiver<FileEvent>>>,
}

impl Receivers {
    pub fn ui_rx(&self) -> Result<UIEvent, String> {
        let ui_rx = self.ui_rx.lock().unwrap();
        ui_rx
            .try_recv()
            .map_err(|_| "Failed to receive UI event".to_string())
    }

    pub fn notification_recv_blocking(&self) -> Result<Notification, std::sync::mpsc::RecvError> {
        self.notification_rx.lock().unwrap().recv()
    }

    pub fn file_recv_blocking(&self) -> Result<FileEvent, std::sync::mpsc::RecvError> {
        self.file_rx.lock().unwrap().recv()
    }
}

pub struct Channels {
    pub senders: Arc<Senders>,
    pub receivers: Arc<Receivers>,
}

impl Channels {
    pub fn new() -> Self {
        let (ui_tx, ui_rx) = std::sync::mpsc::channel();
        let (notification_tx, notification_rx) = std::sync::mpsc::channel();
        let (file_tx, file_rx) = std::sync::mpsc::channel();

        Channels {
            senders: Arc::new(Senders {
                ui_tx: Arc::new(Mutex::new(ui_tx)),
                notification_tx: Arc::new(Mutex::new(notification_tx)),
                file_tx: Arc::new(Mutex::new(file_tx)),
            }),
            receivers: Arc::new(Receivers {
                ui_rx: Arc::new(Mutex::new(ui_rx)),
                notification_rx: Arc::new(Mutex::new(notification_rx)),
                file_rx: Arc::new(Mutex::new(file_rx)),
            }),
        }
    }

    pub fn senders(&self) -> Arc<Senders> {
        Arc::clone(&self.senders)
    }

    pub fn receivers(&self) -> Arc<Receivers> {
        Arc::clone(&self.receivers)
    }

    /// Forwards worker notifications into the UI event stream so the frame
    /// loop can turn them into toasts.
    pub fn notification_thread(&self) {
        let ui_tx = Arc::clone(&self.senders.ui_tx);
        let receivers = Arc::clone(&self.receivers);
        thread::spawn(move || {
            log::info!("Waiting for notification events...");
            while let Ok(notification) = receivers.notification_recv_blocking() {
                let _ = ui_tx
                    .lock()
                    .unwrap()
                    .send(UIEvent::Notification(notification));
            }
        });
    }

    /// The file-system worker. Owns the vault root, executes `FileEvent`
    /// requests, surfaces failures as error toasts and follows every
    /// successful mutation with a fresh directory listing.
    pub fn file_thread(&self, root: PathBuf) {
        let senders = Arc::clone(&self.senders);
        let receivers = Arc::clone(&self.receivers);
        thread::spawn(move || {
            log::info!("File worker serving vault at {}", root.display());
            while let Ok(event) = receivers.file_recv_blocking() {
                log::info!("File event received: {:?}", event);
                match event.execute(&root) {
                    Ok(response) => dispatch_file_response(response, &root, &senders),
                    Err(message) => {
                        log::error!("File operation failed: {}", message);
                        let _ = senders.notification_tx().send(Notification::Error(message));
                    }
                }
            }
        });
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

fn dispatch_file_response(response: FileEvent, root: &Path, senders: &Senders) {
    match response {
        FileEvent::DirectoryListing {
            listing: Some(listing),
            ..
        } => {
            let _ = senders.ui_tx().send(UIEvent::Listing(Arc::new(listing)));
        }
        FileEvent::FileContent { path, content } => {
            let _ = senders.ui_tx().send(UIEvent::ShowFile { path, content });
        }
        FileEvent::Move { from, to_dir } => {
            let _ = senders.notification_tx().send(Notification::Success(format!(
                "Moved {} into {}",
                entry_name(&from),
                entry_name(&to_dir)
            )));
            refresh_listing(root, senders);
        }
        FileEvent::Rename { path, new_name } => {
            let _ = senders.notification_tx().send(Notification::Success(format!(
                "Renamed {} to {}",
                entry_name(&path),
                new_name
            )));
            refresh_listing(root, senders);
        }
        FileEvent::Delete { path } => {
            let _ = senders
                .notification_tx()
                .send(Notification::Success(format!(
                    "Deleted {}",
                    entry_name(&path)
                )));
            refresh_listing(root, senders);
        }
        other => {
            log::warn!("Unexpected file worker response: {:?}", other);
        }
    }
}

fn refresh_listing(root: &Path, senders: &Senders) {
    match FileEvent::GetDirectoryListing.execute(root) {
        Ok(FileEvent::DirectoryListing {
            listing: Some(listing),
            ..
        }) => {
            let _ = senders.ui_tx().send(UIEvent::Listing(Arc::new(listing)));
        }
        Ok(_) => {}
        Err(message) => {
            log::error!("Failed to rescan vault: {}", message);
            let _ = senders.notification_tx().send(Notification::Error(message));
        }
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
