#![warn(clippy::pedantic)]

use std::io::Write;

use anyhow::Context;
use log::debug;
use tread_domain::{self as domain, Package};

pub mod logger;

/// Sensor packages processed by the `tread` binary.
#[must_use]
pub fn packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Write one report line per package, in order.
///
/// # Errors
///
/// Stops at the first package that cannot be read or summarized, or if writing
/// to `out` fails.
pub fn run(packages: &[Package], out: &mut impl Write) -> anyhow::Result<()> {
    for (index, package) in packages.iter().enumerate() {
        let summary = package
            .read()
            .and_then(|workout| domain::summarize(&workout))
            .with_context(|| format!("package {index} ({})", package.code))?;
        writeln!(out, "{}", domain::format(&summary))?;
    }

    debug!("reported {} packages", packages.len());

    Ok(())
}
