use std::sync::Arc;

use drivethru_core::application::DriveThruService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DriveThruService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DriveThruService) -> Self {
        Self { args, service }
    }
}
