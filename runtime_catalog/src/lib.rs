use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

pub const NO_DEPRECATION_INFO: &str = "No deprecation information available";
pub const NO_SCHEDULED_DEPRECATION: &str = "No scheduled deprecation";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeprecationDate {
    Scheduled(&'static str),
    NotScheduled,
}

impl Display for DeprecationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeprecationDate::Scheduled(date) => write!(f, "{}", date),
            DeprecationDate::NotScheduled => write!(f, "N/A"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RuntimeDeprecation {
    pub deprecated: bool,
    pub date: DeprecationDate,
}

const fn deprecated(date: &'static str) -> RuntimeDeprecation {
    RuntimeDeprecation { deprecated: true, date: DeprecationDate::Scheduled(date) }
}

const fn scheduled(date: &'static str) -> RuntimeDeprecation {
    RuntimeDeprecation { deprecated: false, date: DeprecationDate::Scheduled(date) }
}

const fn not_scheduled() -> RuntimeDeprecation {
    RuntimeDeprecation { deprecated: false, date: DeprecationDate::NotScheduled }
}

// Curated from https://docs.aws.amazon.com/lambda/latest/dg/lambda-runtimes.html
const RUNTIME_DEPRECATIONS: &[(&str, RuntimeDeprecation)] = &[
    ("dotnet6", scheduled("2024-11-12")),
    ("dotnet7", not_scheduled()),
    ("dotnetcore1.0", deprecated("2019-07-30")),
    ("dotnetcore2.0", deprecated("2019-05-30")),
    ("dotnetcore2.1", deprecated("2022-01-05")),
    ("dotnetcore3.1", deprecated("2023-04-03")),
    ("go1.x", scheduled("2024-07-12")),
    ("go2.x", not_scheduled()),
    ("java8", scheduled("2024-01-08")),
    ("java8.al2", scheduled("2025-05-30")),
    ("java11", scheduled("2025-01-08")),
    ("java17", scheduled("2026-09-14")),
    ("java21", not_scheduled()),
    ("nodejs", deprecated("2016-10-31")),
    ("nodejs4.3", deprecated("2020-04-06")),
    ("nodejs4.3-edge", deprecated("2019-04-30")),
    ("nodejs6.10", deprecated("2019-08-12")),
    ("nodejs8.10", deprecated("2020-03-06")),
    ("nodejs10.x", deprecated("2022-02-14")),
    ("nodejs12.x", deprecated("2023-03-31")),
    ("nodejs14.x", scheduled("2024-11-27")),
    ("nodejs16.x", scheduled("2025-06-12")),
    ("nodejs18.x", scheduled("2025-06-12")),
    ("nodejs20.x", not_scheduled()),
    ("provided", not_scheduled()),
    ("provided.al2", not_scheduled()),
    ("provided.al2023", not_scheduled()),
    ("python2.7", deprecated("2021-07-15")),
    ("python3.6", deprecated("2022-07-18")),
    ("python3.7", deprecated("2023-11-27")),
    ("python3.8", scheduled("2024-10-14")),
    ("python3.9", scheduled("2025-08-24")),
    ("python3.10", scheduled("2026-07-30")),
    ("python3.11", scheduled("2027-09-24")),
    ("python3.12", not_scheduled()),
    ("ruby2.5", deprecated("2022-07-30")),
    ("ruby2.6", deprecated("2022-05-30")),
    ("ruby2.7", scheduled("2023-11-07")),
    ("ruby3.2", scheduled("2026-04-09")),
];

fn catalog() -> &'static HashMap<&'static str, RuntimeDeprecation> {
    static CATALOG: OnceLock<HashMap<&'static str, RuntimeDeprecation>> = OnceLock::new();
    CATALOG.get_or_init(|| RUNTIME_DEPRECATIONS.iter().copied().collect())
}

/// Raw deprecation record for a runtime identifier such as `python3.12`.
pub fn deprecation(runtime: &str) -> Option<&'static RuntimeDeprecation> {
    catalog().get(runtime)
}

/// Runtime identifiers in the order they appear in the lifecycle table.
pub fn known_runtimes() -> impl Iterator<Item = &'static str> {
    RUNTIME_DEPRECATIONS.iter().map(|(runtime, _)| *runtime)
}

/// Human readable deprecation status for `runtime`.
///
/// Deprecated runtimes report the date support ended, runtimes with a
/// published end of support report that date, and everything else in the
/// table has no scheduled deprecation. Identifiers missing from the table
/// (including the empty string) yield [`NO_DEPRECATION_INFO`].
pub fn lookup(runtime: &str) -> String {
    match deprecation(runtime) {
        Some(RuntimeDeprecation { deprecated: true, date }) => format!("Deprecated since {}", date),
        Some(RuntimeDeprecation { deprecated: false, date: DeprecationDate::NotScheduled }) => {
            NO_SCHEDULED_DEPRECATION.to_string()
        }
        Some(RuntimeDeprecation { deprecated: false, date: DeprecationDate::Scheduled(date) }) => {
            format!("Will be deprecated on {}", date)
        }
        None => NO_DEPRECATION_INFO.to_string(),
    }
}
