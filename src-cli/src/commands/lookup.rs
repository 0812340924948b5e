//! `eros lookup <CNPJ>`

use super::{write_company, write_json};
use crate::error::CommandError;
use anyhow::{Context, Result};
use eros_core::{AppConfig, Cnpj};
use eros_lead::{messages, FlowError};
use eros_registry::{normalize, CompanyLookup, CompanyRecord, OpenCnpjClient};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct LookupOutput<'a> {
    cnpj: &'a Cnpj,
    provider: &'a str,
    company: &'a CompanyRecord,
}

pub async fn run(config: &AppConfig, raw: &str, json: bool) -> Result<()> {
    let client =
        OpenCnpjClient::new(&config.registry).context("failed to create registry client")?;
    lookup_with(&client, raw, json, &mut std::io::stdout().lock()).await
}

pub(crate) async fn lookup_with(
    lookup: &dyn CompanyLookup,
    raw: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let cnpj = Cnpj::parse(raw).map_err(|_| {
        CommandError::from(FlowError::Validation(
            messages::CNPJ_DIGITS_REQUIRED.to_string(),
        ))
    })?;

    let payload = lookup
        .lookup(&cnpj)
        .await
        .map_err(|e| CommandError::from(FlowError::from(&e)))?;
    let company = normalize(&payload);

    if json {
        write_json(
            out,
            &LookupOutput {
                cnpj: &cnpj,
                provider: lookup.provider_id(),
                company: &company,
            },
        )?;
    } else {
        writeln!(out, "CNPJ {}", cnpj.formatted())?;
        write_company(out, &company)?;
    }
    Ok(())
}
