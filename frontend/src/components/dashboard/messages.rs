use common::model::history::HistoryEntry;
use common::requests::UploadResponse;
use web_sys::File;

pub enum Msg {
    FileSelected(Option<File>),
    Upload,
    UploadFinished(UploadResponse),
    UploadFailed(String),
    HistoryLoaded(Vec<HistoryEntry>),
    Clear,
    Cleared,
    DownloadReport,
}
