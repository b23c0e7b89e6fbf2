//! Dashboard state: the current dataset snapshot, the latest summary, the
//! upload history and transient UI flags.

use web_sys::File;
use yew::prelude::*;

use common::model::history::HistoryEntry;
use common::model::record::Dataset;
use common::model::summary::Summary;

/// State container for the dashboard.
///
/// `dataset` and `summary` are replaced wholesale on every successful upload
/// and cleared wholesale on a clear. Chart series are recomputed from the
/// snapshot on each render, never cached here.
pub struct DashboardComponent {
    /// Preview rows of the most recent upload. `None` until the first one.
    pub dataset: Option<Dataset>,

    /// Aggregate statistics of the most recent upload.
    pub summary: Option<Summary>,

    /// Recent uploads, newest first.
    pub history: Vec<HistoryEntry>,

    /// The file picked in the upload form, not yet submitted.
    pub file: Option<File>,

    /// An upload request is outstanding. The submit button stays disabled
    /// while this is set so a double submit cannot create duplicate history
    /// entries.
    pub loading: bool,

    /// Reference to the file input so it can be reset after an upload.
    pub file_input_ref: NodeRef,

    /// Guard so the first-render history fetch runs once.
    pub loaded: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            dataset: None,
            summary: None,
            history: Vec::new(),
            file: None,
            loading: false,
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
