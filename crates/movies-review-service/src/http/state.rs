use std::sync::Arc;

use crate::board::ReviewBoard;

#[derive(Clone)]
pub struct AppState {
    board: Arc<dyn ReviewBoard>,
}

impl AppState {
    pub fn new(board: Arc<dyn ReviewBoard>) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &dyn ReviewBoard {
        self.board.as_ref()
    }
}
