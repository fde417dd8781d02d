pub mod aws;
pub mod config;
pub mod enumerate;
pub mod orchestrate;
pub mod report;
pub mod services;

use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::aws::{AwsLambdaConnector, AwsOrganization};
use crate::config::ListerConfig;
use crate::orchestrate::list_all_functions;
use crate::report::ListFunctionsResponse;
use crate::services::{InventoryConnector, OrganizationServices};

pub async fn list_functions<O, C>(
    organization: &O,
    connector: &C,
    config: &ListerConfig,
) -> Result<ListFunctionsResponse, Error>
where
    O: OrganizationServices + Sync,
    C: InventoryConnector + Sync,
{
    let rows = list_all_functions(organization, connector, config).await?;
    info!("listed {} functions", rows.len());
    Ok(ListFunctionsResponse::ok(rows))
}

pub async fn function_handler(_event: LambdaEvent<Value>) -> Result<ListFunctionsResponse, Error> {
    let region_provider = RegionProviderChain::default_provider().or_else("us-east-1");
    let config = aws_config::defaults(BehaviorVersion::latest()).region(region_provider).load().await;
    let lister_config = ListerConfig::default();
    let organization = AwsOrganization::new(&config);
    let connector = AwsLambdaConnector::new(config);
    list_functions(&organization, &connector, &lister_config).await
}
