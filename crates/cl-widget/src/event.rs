use cl_model::Level;
use serde::Serialize;

/// Emitted each time a selector's visible list is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    pub level: Level,
    /// Selection after the rebuild.
    pub selected: Option<String>,
    /// Number of visible options after the rebuild.
    pub visible: usize,
}
