// src/config/consts.rs

// Published sheets (File > Share > Publish to web, CSV output)
const SHEET_BASE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSuwd0G4OttPpfKAJiKuYhR1ZEPEyZ2wi8ToyN4vnUgXBhvhQuI_kGKszR5zkox45zbkKSrFCWFCHga/pub";

pub const CONTENT_GID: &str = "193117699";
pub const PROJECTS_GID: &str = "0";
pub const MODELS_GID: &str = "293113482";
pub const DETAILS_GID: &str = "483496592";

pub fn sheet_csv_url(gid: &str) -> String {
    format!("{SHEET_BASE}?gid={gid}&single=true&output=csv")
}

// Net config
pub const USER_AGENT: &str = concat!("valtti_cms/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local config
pub const CONFIG_FILE: &str = "cms.conf";

// Presentation fallbacks
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";
pub const DEFAULT_STATUS_TEXT: &str = "Ennakkomarkkinointi";
pub const DEFAULT_LINK: &str = "#";
pub const LOW_PROGRESS_THRESHOLD: u8 = 20;
