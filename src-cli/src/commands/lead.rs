//! `eros lead [--popup]`: drive one lead form over stdin.

use super::{write_company, write_json};
use anyhow::{bail, Context, Result};
use eros_core::AppConfig;
use eros_lead::{
    messages, FlowError, FlowStage, Lead, LeadFlow, PageEvent, PageVisit, StepState, STEPS,
};
use eros_registry::OpenCnpjClient;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

const CONFIRM_PROMPT: &str = "Confirmar dados? [S/n] ('alterar' para outro CNPJ): ";
const RESTART_PROMPT: &str = "Fazer nova consulta? [s/N]: ";

pub async fn run(config: &AppConfig, popup: bool, json: bool) -> Result<()> {
    let client =
        OpenCnpjClient::new(&config.registry).context("failed to create registry client")?;
    let mut visit = PageVisit::new(config, Arc::new(client));

    let flow = if popup {
        // The terminal has no pointer; leaving the page is the only signal.
        if !visit.observe(PageEvent::VisibilityHidden) {
            bail!("the exit popup is disabled (popup.enabled = false)");
        }
        visit
            .popup_flow_mut()
            .context("exit popup did not open")?
    } else {
        visit
            .contact_flow_mut()
            .context("the contact section form is disabled (lead.contact_section_enabled = false)")?
    };
    debug!(kind = %flow.kind(), "starting interactive lead capture");

    // JSON goes to stdout, so prompts move to stderr.
    let mut prompts: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let input = BufReader::new(tokio::io::stdin());
    let leads = drive(flow, input, &mut prompts).await?;

    if json {
        write_json(&mut io::stdout().lock(), &leads)?;
    }
    Ok(())
}

/// Run the flow until it finishes or input ends. Returns captured leads.
pub(crate) async fn drive<R, W>(flow: &mut LeadFlow, input: R, out: &mut W) -> Result<Vec<Lead>>
where
    R: AsyncBufRead + Unpin,
    W: Write + ?Sized,
{
    let mut lines = input.lines();
    let mut leads = Vec::new();

    loop {
        write_progress(out, flow.stage())?;
        match flow.stage() {
            FlowStage::IdentifierEntry => {
                let Some(raw) = prompt(out, &mut lines, "CNPJ: ").await? else {
                    break;
                };
                if let Err(e) = flow.submit_identifier(&raw).await {
                    report(out, &e)?;
                }
            }
            FlowStage::DetailsConfirmation => {
                if let Some(company) = flow.company() {
                    write_company(out, company)?;
                }
                let Some(answer) = prompt(out, &mut lines, CONFIRM_PROMPT).await? else {
                    break;
                };
                match answer.trim().to_lowercase().as_str() {
                    "" | "s" | "sim" => flow.confirm_details()?,
                    "alterar" | "n" | "nao" | "não" => flow.change_identifier()?,
                    _ => writeln!(out, "Responda 's' para confirmar ou 'alterar'.")?,
                }
            }
            FlowStage::ContactEntry => {
                let allows_back = flow.kind().allows_back();
                let phone_prompt = if allows_back {
                    "Telefone ('voltar' para revisar os dados): "
                } else {
                    "Telefone: "
                };
                let Some(phone) = prompt(out, &mut lines, phone_prompt).await? else {
                    break;
                };
                if allows_back && phone.trim().eq_ignore_ascii_case("voltar") {
                    flow.back()?;
                    continue;
                }
                let Some(email) = prompt(out, &mut lines, "E-mail: ").await? else {
                    break;
                };
                match flow.submit_contact(&phone, &email) {
                    Ok(lead) => leads.push(lead),
                    Err(e) => report(out, &e)?,
                }
            }
            FlowStage::Completed => {
                if let Some(notice) = flow.lead().and_then(|lead| lead.notice.as_deref()) {
                    writeln!(out, "{notice}")?;
                }
                writeln!(out, "{}", messages::COMPLETED_HEADLINE)?;
                writeln!(out, "{}", flow.kind().completed_message())?;
                if !flow.kind().offers_restart() {
                    break;
                }
                let Some(answer) = prompt(out, &mut lines, RESTART_PROMPT).await? else {
                    break;
                };
                if matches!(answer.trim().to_lowercase().as_str(), "s" | "sim") {
                    flow.reset();
                } else {
                    break;
                }
            }
        }
    }

    Ok(leads)
}

async fn prompt<R, W>(out: &mut W, lines: &mut Lines<R>, text: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write + ?Sized,
{
    write!(out, "{text}")?;
    out.flush()?;
    Ok(lines.next_line().await?)
}

fn report<W: Write + ?Sized>(out: &mut W, err: &FlowError) -> io::Result<()> {
    if err.is_user_facing() {
        writeln!(out, "! {err}")
    } else {
        debug!(error = %err, "ignored out-of-stage action");
        Ok(())
    }
}

fn write_progress<W: Write + ?Sized>(out: &mut W, stage: FlowStage) -> io::Result<()> {
    let marks: Vec<String> = STEPS
        .iter()
        .zip(stage.progress())
        .map(|(step, state)| {
            let mark = match state {
                StepState::Complete => "✓",
                StepState::Active => "●",
                StepState::Pending => "○",
            };
            format!("{mark} {}", step.title)
        })
        .collect();
    writeln!(out, "\n[{}]", marks.join("  "))?;
    if let Some(title) = stage.title() {
        writeln!(out, "{} - {title}", stage.step_number())?;
    }
    Ok(())
}
