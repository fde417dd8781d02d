use crate::config::ListerConfig;
use crate::enumerate::list_functions_in_region;
use crate::report::FunctionReportRow;
use crate::services::{AssumedSession, InventoryConnector, OrganizationServices};
use lambda_runtime::Error;
use tracing::{error, info};

#[derive(Debug)]
pub enum AccountScan {
    Scanned { account_id: String, rows: Vec<FunctionReportRow> },
    Skipped { account_id: String, reason: String },
}

pub async fn scan_account<O, C>(
    organization: &O,
    connector: &C,
    config: &ListerConfig,
    account_id: &str,
    regions: &[String],
) -> AccountScan
where
    O: OrganizationServices + Sync,
    C: InventoryConnector + Sync,
{
    let role_arn = config.role_arn(account_id);
    let credentials = match organization.assume_role(&role_arn, &config.session_name).await {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("Error assuming role in account {}: {}", account_id, e);
            return AccountScan::Skipped { account_id: account_id.to_string(), reason: e.to_string() };
        }
    };
    let session = AssumedSession::new(account_id, credentials);
    let mut rows = Vec::new();
    for region in regions {
        let inventory = connector.connect(&session, region);
        rows.extend(list_functions_in_region(&inventory, account_id, region).await.rows);
    }
    AccountScan::Scanned { account_id: account_id.to_string(), rows }
}

/// Lists the functions of every organization account in every region.
///
/// Accounts are visited in directory order and regions in catalog order, one
/// call at a time. Only the account and region listings can fail the run.
pub async fn list_all_functions<O, C>(
    organization: &O,
    connector: &C,
    config: &ListerConfig,
) -> Result<Vec<FunctionReportRow>, Error>
where
    O: OrganizationServices + Sync,
    C: InventoryConnector + Sync,
{
    let accounts = organization.account_ids().await?;
    let regions = organization.region_names().await?;
    info!("scanning {} accounts across {} regions", accounts.len(), regions.len());

    let mut all_functions = Vec::new();
    for account_id in &accounts {
        match scan_account(organization, connector, config, account_id, &regions).await {
            AccountScan::Scanned { account_id, rows } => {
                info!("account {}: {} functions", account_id, rows.len());
                all_functions.extend(rows);
            }
            AccountScan::Skipped { .. } => {}
        }
    }
    Ok(all_functions)
}
