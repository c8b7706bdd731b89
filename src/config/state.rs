// src/config/state.rs
use super::options::{AppOptions, SourceKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab
    pub current: SourceKind,

    pub window_w: u32,
    pub window_h: u32,

    /// Efficiency tab -> show the Tempo vs AdjO chart above the table
    pub show_chart: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current: SourceKind::Efficiency,
            window_w: 1100,
            window_h: 760,
            show_chart: true,
        }
    }
}

impl GuiState {
    /// Initial window size for the viewport builder.
    pub fn inner_size(&self) -> [f32; 2] {
        [self.window_w as f32, self.window_h as f32]
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
