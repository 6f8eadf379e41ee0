use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use nr_core::{AnchorNavigation, DisplayState, Navigation};

pub struct AppState {
    pub display: Arc<RwLock<DisplayState>>,
    pub navigation: Arc<dyn Navigation>,
    pub data_file: Option<PathBuf>,
}

impl AppState {
    pub fn new(data_file: Option<PathBuf>) -> Self {
        Self::with_display(DisplayState::Loading, data_file)
    }

    pub fn with_display(display: DisplayState, data_file: Option<PathBuf>) -> Self {
        Self {
            display: Arc::new(RwLock::new(display)),
            navigation: Arc::new(AnchorNavigation),
            data_file,
        }
    }
}
