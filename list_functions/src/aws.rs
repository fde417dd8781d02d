use crate::services::{
    AssumedSession, FunctionInventory, FunctionPage, FunctionSummary, InventoryConnector, OrganizationServices,
    TemporaryCredentials,
};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ec2 as ec2;
use aws_sdk_lambda as lambda;
use aws_sdk_lambda::config::{Credentials, Region};
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_organizations as org;
use aws_sdk_sts as sts;
use lambda_runtime::Error;

const CREDENTIALS_PROVIDER_NAME: &str = "CrossAccountAssumeRole";

fn sdk_error<E: std::error::Error>(operation: &str, e: E) -> Error {
    Error::from(format!("{} failed: {}", operation, DisplayErrorContext(e)))
}

/// Organizations, EC2 and STS clients of the account the function runs in.
pub struct AwsOrganization {
    org_client: org::Client,
    ec2_client: ec2::Client,
    sts_client: sts::Client,
}

impl AwsOrganization {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            org_client: org::Client::new(config),
            ec2_client: ec2::Client::new(config),
            sts_client: sts::Client::new(config),
        }
    }
}

#[async_trait]
impl OrganizationServices for AwsOrganization {
    async fn account_ids(&self) -> Result<Vec<String>, Error> {
        let mut pages = self.org_client.list_accounts().into_paginator().send();
        let mut accounts = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| sdk_error("ListAccounts", e))?;
            accounts.extend(page.accounts().iter().filter_map(|account| account.id().map(str::to_string)));
        }
        Ok(accounts)
    }

    async fn region_names(&self) -> Result<Vec<String>, Error> {
        let result = self.ec2_client.describe_regions()
            .send()
            .await
            .map_err(|e| sdk_error("DescribeRegions", e))?;
        Ok(result.regions().iter().filter_map(|r| r.region_name().map(str::to_string)).collect())
    }

    async fn assume_role(&self, role_arn: &str, session_name: &str) -> Result<TemporaryCredentials, Error> {
        let result = self.sts_client.assume_role()
            .role_arn(role_arn)
            .role_session_name(session_name)
            .send()
            .await
            .map_err(|e| sdk_error("AssumeRole", e))?;
        let credentials = result.credentials()
            .ok_or_else(|| Error::from(format!("AssumeRole for {} returned no credentials", role_arn)))?;
        Ok(TemporaryCredentials {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: credentials.secret_access_key().to_string(),
            session_token: credentials.session_token().to_string(),
        })
    }
}

/// Builds region scoped Lambda clients from assumed credentials.
pub struct AwsLambdaConnector {
    config: SdkConfig,
}

impl AwsLambdaConnector {
    pub fn new(config: SdkConfig) -> Self {
        Self { config }
    }
}

impl InventoryConnector for AwsLambdaConnector {
    type Inventory = AwsFunctionInventory;

    fn connect(&self, session: &AssumedSession, region: &str) -> AwsFunctionInventory {
        let credentials = session.credentials();
        let lambda_config = lambda::config::Builder::from(&self.config)
            .region(Region::new(region.to_string()))
            .credentials_provider(Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.clone(),
                Some(credentials.session_token.clone()),
                None,
                CREDENTIALS_PROVIDER_NAME,
            ))
            .build();
        AwsFunctionInventory { client: lambda::Client::from_conf(lambda_config) }
    }
}

pub struct AwsFunctionInventory {
    client: lambda::Client,
}

#[async_trait]
impl FunctionInventory for AwsFunctionInventory {
    async fn list_functions_page(&self, marker: Option<String>) -> Result<FunctionPage, Error> {
        let result = self.client.list_functions()
            .set_marker(marker)
            .send()
            .await
            .map_err(|e| sdk_error("ListFunctions", e))?;
        Ok(FunctionPage {
            functions: result.functions().iter()
                .map(|f| FunctionSummary {
                    function_name: f.function_name().map(str::to_string),
                    function_arn: f.function_arn().map(str::to_string),
                })
                .collect(),
            next_marker: result.next_marker().map(str::to_string),
        })
    }

    async fn function_runtime(&self, function_name: &str) -> Result<Option<String>, Error> {
        let result = self.client.get_function_configuration()
            .function_name(function_name)
            .send()
            .await
            .map_err(|e| sdk_error("GetFunctionConfiguration", e))?;
        Ok(result.runtime().map(|runtime| runtime.as_str().to_string()))
    }
}
