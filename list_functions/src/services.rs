use async_trait::async_trait;
use lambda_runtime::Error;
use std::fmt::{Debug, Formatter};
use tracing::debug;

/// Temporary credentials issued by STS for a single account.
#[derive(Clone)]
pub struct TemporaryCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl Debug for TemporaryCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemporaryCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &"** redacted **")
            .finish()
    }
}

/// Credentials for one account, held only while that account is scanned.
///
/// The session is dropped once every region of the account has been visited,
/// whether or not the visits succeeded, and is never shared with another
/// account.
#[derive(Debug)]
pub struct AssumedSession {
    account_id: String,
    credentials: TemporaryCredentials,
}

impl AssumedSession {
    pub fn new(account_id: impl Into<String>, credentials: TemporaryCredentials) -> Self {
        Self { account_id: account_id.into(), credentials }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn credentials(&self) -> &TemporaryCredentials {
        &self.credentials
    }
}

impl Drop for AssumedSession {
    fn drop(&mut self) {
        debug!("releasing credentials for account {}", self.account_id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSummary {
    pub function_name: Option<String>,
    pub function_arn: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FunctionPage {
    pub functions: Vec<FunctionSummary>,
    pub next_marker: Option<String>,
}

/// The organization-level services used from the caller's own account.
#[async_trait]
pub trait OrganizationServices {
    /// Every account in the organization, in directory order.
    async fn account_ids(&self) -> Result<Vec<String>, Error>;

    /// Regions available to the caller's account.
    async fn region_names(&self) -> Result<Vec<String>, Error>;

    async fn assume_role(&self, role_arn: &str, session_name: &str) -> Result<TemporaryCredentials, Error>;
}

/// Function inventory of one account in one region.
#[async_trait]
pub trait FunctionInventory {
    /// One page of the function listing. `marker` is the `next_marker` of the
    /// previous page, `None` for the first one.
    async fn list_functions_page(&self, marker: Option<String>) -> Result<FunctionPage, Error>;

    /// Declared runtime of a function, `None` when the configuration has none
    /// (container image functions).
    async fn function_runtime(&self, function_name: &str) -> Result<Option<String>, Error>;
}

pub trait InventoryConnector {
    type Inventory: FunctionInventory + Send + Sync;

    fn connect(&self, session: &AssumedSession, region: &str) -> Self::Inventory;
}
