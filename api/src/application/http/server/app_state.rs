use std::sync::Arc;

use sift_core::application::SiftService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SiftService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SiftService) -> Self {
        Self { args, service }
    }
}
