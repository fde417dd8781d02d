use serde::{Deserialize, Serialize};

pub const UNKNOWN_RUNTIME: &str = "Unknown";
pub const RUNTIME_ERROR: &str = "Error retrieving";
pub const UNKNOWN_STATUS: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionReportRow {
    pub account_id: String,
    pub region: String,
    pub function_name: String,
    pub function_arn: String,
    pub runtime: String,
    #[serde(rename = "DeprecationInfo")]
    pub deprecation_status: String,
}

/// Outcome of resolving the runtime of a single function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeResolution {
    Declared(String),
    Undeclared,
    Failed,
}

impl RuntimeResolution {
    /// The runtime column and its deprecation status.
    pub fn into_columns(self) -> (String, String) {
        match self {
            RuntimeResolution::Declared(runtime) => {
                let status = runtime_catalog::lookup(&runtime);
                (runtime, status)
            }
            RuntimeResolution::Undeclared => {
                (UNKNOWN_RUNTIME.to_string(), runtime_catalog::lookup(UNKNOWN_RUNTIME))
            }
            RuntimeResolution::Failed => (RUNTIME_ERROR.to_string(), UNKNOWN_STATUS.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListFunctionsResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: Vec<FunctionReportRow>,
}

impl ListFunctionsResponse {
    pub fn ok(body: Vec<FunctionReportRow>) -> Self {
        Self { status_code: 200, body }
    }
}
