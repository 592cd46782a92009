use na_news::ReportManager;
use tokio::sync::Mutex;

/// Shared server state. The manager sits behind one lock so reports are
/// generated one request at a time.
#[derive(Debug)]
pub struct AppState {
    pub manager: Mutex<ReportManager>,
}

impl AppState {
    pub fn new(manager: ReportManager) -> Self {
        Self {
            manager: Mutex::new(manager),
        }
    }
}
