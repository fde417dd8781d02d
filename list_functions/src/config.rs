pub const DEFAULT_ROLE_NAME: &str = "CrossAccountLambdaListerRole";
pub const DEFAULT_SESSION_NAME: &str = "ListLambdaFunctionsSession";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListerConfig {
    /// Role assumed in every member account; it must exist under the same
    /// name everywhere.
    pub role_name: String,
    pub session_name: String,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            role_name: DEFAULT_ROLE_NAME.to_string(),
            session_name: DEFAULT_SESSION_NAME.to_string(),
        }
    }
}

impl ListerConfig {
    pub fn role_arn(&self, account_id: &str) -> String {
        format!("arn:aws:iam::{}:role/{}", account_id, self.role_name)
    }
}
