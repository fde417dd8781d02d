use crate::report::{FunctionReportRow, RuntimeResolution};
use crate::services::FunctionInventory;
use std::collections::HashSet;
use tracing::{debug, error, warn};

#[derive(Debug, Default)]
pub struct RegionScan {
    pub rows: Vec<FunctionReportRow>,
    /// Set when the listing stopped early; `rows` holds what was read before.
    pub listing_error: Option<String>,
}

async fn resolve_runtime<I: FunctionInventory + Sync + ?Sized>(
    inventory: &I,
    account_id: &str,
    region: &str,
    function_name: &str,
) -> RuntimeResolution {
    match inventory.function_runtime(function_name).await {
        Ok(Some(runtime)) => RuntimeResolution::Declared(runtime),
        Ok(None) => RuntimeResolution::Undeclared,
        Err(e) => {
            error!(
                "Error getting configuration for function {} in account {}, region {}: {}",
                function_name, account_id, region, e
            );
            RuntimeResolution::Failed
        }
    }
}

/// Lists every function of `account_id` in `region` and resolves its runtime.
///
/// Configuration failures only affect the function concerned. A listing
/// failure ends the scan of this region and keeps the rows already built.
pub async fn list_functions_in_region<I: FunctionInventory + Sync + ?Sized>(
    inventory: &I,
    account_id: &str,
    region: &str,
) -> RegionScan {
    let mut scan = RegionScan::default();
    let mut marker: Option<String> = None;
    let mut seen_markers = HashSet::new();
    loop {
        let page = match inventory.list_functions_page(marker.take()).await {
            Ok(page) => page,
            Err(e) => {
                error!("Error listing functions in account {}, region {}: {}", account_id, region, e);
                scan.listing_error = Some(e.to_string());
                break;
            }
        };
        for function in page.functions {
            let Some(function_name) = function.function_name else {
                warn!(
                    "skipping unnamed function {:?} in account {}, region {}",
                    function.function_arn, account_id, region
                );
                continue;
            };
            let (runtime, deprecation_status) = resolve_runtime(inventory, account_id, region, &function_name)
                .await
                .into_columns();
            scan.rows.push(FunctionReportRow {
                account_id: account_id.to_string(),
                region: region.to_string(),
                function_name,
                function_arn: function.function_arn.unwrap_or_default(),
                runtime,
                deprecation_status,
            });
        }
        match page.next_marker {
            Some(next) if next.is_empty() => break,
            Some(next) if !seen_markers.insert(next.clone()) => {
                error!(
                    "Error listing functions in account {}, region {}: marker {} was already returned",
                    account_id, region, next
                );
                scan.listing_error = Some(format!("ListFunctions returned marker {} more than once", next));
                break;
            }
            Some(next) => marker = Some(next),
            None => break,
        }
    }
    debug!("found {} functions in account {}, region {}", scan.rows.len(), account_id, region);
    scan
}
