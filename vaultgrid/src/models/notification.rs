use egui_notify::Toasts;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Notification {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Notification {
    pub fn create_toast(&self, toasts: &mut Toasts) {
        match self {
            Notification::Success(msg) => {
                toasts.success(msg).duration(Some(Duration::from_secs(3)));
            }
            Notification::Info(msg) => {
                toasts.info(msg).duration(Some(Duration::from_secs(3)));
            }
            Notification::Warning(msg) => {
                toasts.warning(msg).duration(Some(Duration::from_secs(4)));
            }
            Notification::Error(msg) => {
                toasts.error(msg).duration(Some(Duration::from_secs(5)));
            }
        };
    }
}
