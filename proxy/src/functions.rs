/// Operation selected by the `x-function-name` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFunction {
    GetItem,
    ListMemoriesByItemId,
    DownloadFile,
    Unknown(String),
}

impl ApiFunction {
    pub fn name(&self) -> &str {
        match self {
            ApiFunction::GetItem => "getItem",
            ApiFunction::ListMemoriesByItemId => "listMemoriesByItemId",
            ApiFunction::DownloadFile => "downloadFile",
            ApiFunction::Unknown(name) => name,
        }
    }
}

impl From<Option<&str>> for ApiFunction {
    fn from(value: Option<&str>) -> ApiFunction {
        match value {
            Some("getItem") => ApiFunction::GetItem,
            Some("listMemoriesByItemId") => ApiFunction::ListMemoriesByItemId,
            Some("downloadFile") => ApiFunction::DownloadFile,
            Some(other) => ApiFunction::Unknown(other.to_string()),
            None => ApiFunction::Unknown(String::new()),
        }
    }
}
