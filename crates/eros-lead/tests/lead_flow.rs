//! End-to-end tests for the lookup flows against a canned registry.

use async_trait::async_trait;
use eros_core::{AppConfig, Cnpj};
use eros_lead::messages::{
    CNPJ_DIGITS_REQUIRED, CNPJ_NOT_FOUND, CONTACT_REQUIRED, LOOKUP_UNAVAILABLE,
};
use eros_lead::{FlowError, FlowKind, FlowStage, LeadFlow, PageEvent, PageVisit};
use eros_registry::{interpret_response, CompanyLookup, RawRegistryPayload, PLACEHOLDER};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Registry stand-in answering every lookup with the same status and body.
struct CannedRegistry {
    status: u16,
    body: &'static str,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl CannedRegistry {
    fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn slow(status: u16, body: &'static str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompanyLookup for CannedRegistry {
    async fn lookup(&self, _cnpj: &Cnpj) -> eros_registry::Result<RawRegistryPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        interpret_response(self.status, self.body.as_bytes())
    }

    fn provider_id(&self) -> &str {
        "canned"
    }
}

const ACME: &str = r#"{"razaoSocial":"ACME LTDA","situacaoCadastral":"ATIVA"}"#;
const VALID_CNPJ: &str = "11.222.333/0001-81";

fn contact_flow(registry: &Arc<CannedRegistry>) -> LeadFlow {
    LeadFlow::new(FlowKind::ContactSection, registry.clone())
}

#[tokio::test]
async fn happy_path_reaches_completed() {
    let registry = CannedRegistry::new(200, ACME);
    let mut flow = contact_flow(&registry);

    let company = flow
        .submit_identifier(VALID_CNPJ)
        .await
        .expect("lookup succeeds");
    assert_eq!(company.razao_social, "ACME LTDA");
    assert_eq!(company.situacao_cadastral, "ATIVA");
    assert_eq!(company.cnae_principal, PLACEHOLDER);
    assert_eq!(flow.stage(), FlowStage::DetailsConfirmation);
    assert_eq!(flow.cnpj().map(Cnpj::as_str), Some("11222333000181"));

    flow.confirm_details().expect("confirm details");
    assert_eq!(flow.stage(), FlowStage::ContactEntry);

    let lead = flow
        .submit_contact("11999999999", "a@b.com")
        .expect("contact accepted");
    assert_eq!(flow.stage(), FlowStage::Completed);
    assert_eq!(lead.kind, FlowKind::ContactSection);
    assert_eq!(lead.company.razao_social, "ACME LTDA");
    assert_eq!(lead.contact.email, "a@b.com");
    assert!(lead.notice.is_some());
    assert_eq!(flow.lead().map(|l| l.id), Some(lead.id));
    assert_eq!(flow.error_message(), None);
    assert_eq!(registry.calls(), 1);
}

#[tokio::test]
async fn short_identifier_is_rejected_without_lookup() {
    let registry = CannedRegistry::new(200, ACME);
    let mut flow = contact_flow(&registry);

    let err = flow.submit_identifier("123").await.expect_err("too short");
    assert_eq!(err, FlowError::Validation(CNPJ_DIGITS_REQUIRED.to_string()));
    assert_eq!(flow.stage(), FlowStage::IdentifierEntry);
    assert_eq!(flow.error_message(), Some(CNPJ_DIGITS_REQUIRED));
    assert_eq!(flow.identifier(), "123");
    assert_eq!(registry.calls(), 0);
}

#[tokio::test]
async fn not_found_surfaces_registry_message() {
    let registry = CannedRegistry::new(404, "{\"message\":\"CNPJ não encontrado.\"}");
    let mut flow = contact_flow(&registry);

    let err = flow
        .submit_identifier(VALID_CNPJ)
        .await
        .expect_err("not found");
    assert_eq!(err, FlowError::LookupNotFound("CNPJ não encontrado.".to_string()));
    assert_eq!(flow.stage(), FlowStage::IdentifierEntry);
    assert_eq!(flow.error_message(), Some("CNPJ não encontrado."));
    assert!(flow.company().is_none());
    assert!(!flow.is_loading());
}

#[tokio::test]
async fn not_found_without_message_uses_fallback() {
    let registry = CannedRegistry::new(500, "<html>oops</html>");
    let mut flow = contact_flow(&registry);

    let err = flow.submit_identifier(VALID_CNPJ).await.expect_err("500");
    assert_eq!(err, FlowError::LookupNotFound(CNPJ_NOT_FOUND.to_string()));
}

#[tokio::test]
async fn unusable_success_body_is_unavailable() {
    let registry = CannedRegistry::new(200, "not json");
    let mut flow = contact_flow(&registry);

    let err = flow.submit_identifier(VALID_CNPJ).await.expect_err("garbage");
    assert_eq!(err, FlowError::LookupUnavailable(LOOKUP_UNAVAILABLE.to_string()));
    assert_eq!(flow.stage(), FlowStage::IdentifierEntry);
}

#[tokio::test]
async fn failed_attempt_can_be_retried_by_caller() {
    let registry = CannedRegistry::new(200, ACME);
    let mut flow = contact_flow(&registry);

    flow.submit_identifier("1122233300018").await.expect_err("13 digits");
    flow.submit_identifier(VALID_CNPJ).await.expect("retry succeeds");
    assert_eq!(flow.stage(), FlowStage::DetailsConfirmation);
    assert_eq!(flow.error_message(), None);
}

#[tokio::test]
async fn change_identifier_discards_record() {
    let registry = CannedRegistry::new(200, ACME);
    let mut flow = contact_flow(&registry);

    for _ in 0..2 {
        flow.submit_identifier(VALID_CNPJ).await.expect("lookup");
        flow.change_identifier().expect("change identifier");
        assert_eq!(flow.stage(), FlowStage::IdentifierEntry);
        assert!(flow.company().is_none());
        assert!(flow.cnpj().is_none());
        assert_eq!(flow.identifier(), "");
    }

    let err = flow.change_identifier().expect_err("not in details");
    assert!(matches!(err, FlowError::InvalidTransition { .. }));
}

#[tokio::test]
async fn back_keeps_record_in_contact_section_only() {
    let registry = CannedRegistry::new(200, ACME);

    let mut section = contact_flow(&registry);
    section.submit_identifier(VALID_CNPJ).await.expect("lookup");
    section.confirm_details().expect("confirm");
    section.back().expect("back allowed");
    assert_eq!(section.stage(), FlowStage::DetailsConfirmation);
    assert_eq!(
        section.company().map(|c| c.razao_social.as_str()),
        Some("ACME LTDA")
    );

    let mut popup = LeadFlow::new(FlowKind::ExitPopup, registry.clone());
    popup.submit_identifier(VALID_CNPJ).await.expect("lookup");
    popup.confirm_details().expect("confirm");
    let err = popup.back().expect_err("popup has no back");
    assert!(matches!(err, FlowError::InvalidTransition { .. }));
    assert_eq!(popup.stage(), FlowStage::ContactEntry);
}

#[tokio::test]
async fn blank_contact_stays_in_contact_entry() {
    let registry = CannedRegistry::new(200, ACME);
    let mut flow = LeadFlow::new(FlowKind::ExitPopup, registry.clone());
    flow.submit_identifier(VALID_CNPJ).await.expect("lookup");
    flow.confirm_details().expect("confirm");

    let err = flow.submit_contact("  ", "a@b.com").expect_err("blank phone");
    assert_eq!(err, FlowError::Validation(CONTACT_REQUIRED.to_string()));
    assert_eq!(flow.stage(), FlowStage::ContactEntry);
    assert_eq!(flow.error_message(), Some(CONTACT_REQUIRED));

    let lead = flow
        .submit_contact(" 11999999999 ", "a@b.com")
        .expect("contact accepted");
    assert_eq!(lead.contact.phone, "11999999999");
    assert_eq!(lead.notice, None);
    assert_eq!(flow.error_message(), None);
}

#[tokio::test]
async fn out_of_order_operations_are_rejected() {
    let registry = CannedRegistry::new(200, ACME);
    let mut flow = contact_flow(&registry);

    assert!(matches!(
        flow.confirm_details(),
        Err(FlowError::InvalidTransition {
            stage: FlowStage::IdentifierEntry,
            ..
        })
    ));
    assert!(flow.submit_contact("1", "a@b.com").is_err());
    assert_eq!(flow.error_message(), None);

    flow.submit_identifier(VALID_CNPJ).await.expect("lookup");
    let err = flow
        .submit_identifier(VALID_CNPJ)
        .await
        .expect_err("already looked up");
    assert!(!err.is_user_facing());
    assert_eq!(registry.calls(), 1);
}

#[tokio::test]
async fn reset_clears_everything() {
    let registry = CannedRegistry::new(200, ACME);
    let mut flow = contact_flow(&registry);
    flow.submit_identifier(VALID_CNPJ).await.expect("lookup");
    flow.confirm_details().expect("confirm");
    flow.submit_contact("11999999999", "a@b.com").expect("contact");

    flow.reset();
    let snapshot = flow.snapshot();
    assert_eq!(snapshot.stage, FlowStage::IdentifierEntry);
    assert_eq!(snapshot.identifier, "");
    assert_eq!(snapshot.phone, "");
    assert_eq!(snapshot.email, "");
    assert!(snapshot.company.is_none());
    assert!(flow.lead().is_none());
}

#[tokio::test]
async fn subscribers_see_every_change() {
    let registry = CannedRegistry::new(200, ACME);
    let mut flow = contact_flow(&registry);
    let mut updates = flow.subscribe();

    flow.set_identifier("11.222");
    assert!(updates.has_changed().expect("sender alive"));
    assert_eq!(updates.borrow_and_update().identifier, "11.222");

    flow.submit_identifier(VALID_CNPJ).await.expect("lookup");
    let latest = updates.borrow_and_update().clone();
    assert_eq!(latest.stage, FlowStage::DetailsConfirmation);
    assert!(!latest.loading);
    assert_eq!(
        latest.company.map(|c| c.razao_social),
        Some("ACME LTDA".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn loading_flag_is_published_while_in_flight() {
    let registry = CannedRegistry::slow(200, ACME, Duration::from_secs(5));
    let mut flow = contact_flow(&registry);
    let mut updates = flow.subscribe();

    let (result, saw_loading) = tokio::join!(flow.submit_identifier(VALID_CNPJ), async {
        updates.wait_for(|s| s.loading).await.is_ok()
    });

    result.expect("lookup succeeds");
    assert!(saw_loading);
    assert!(!flow.is_loading());
}

#[tokio::test(start_paused = true)]
async fn abandoned_lookup_leaves_flow_untouched() {
    let registry = CannedRegistry::slow(200, ACME, Duration::from_secs(60));
    let mut flow = LeadFlow::new(FlowKind::ExitPopup, registry.clone());

    let outcome =
        tokio::time::timeout(Duration::from_secs(1), flow.submit_identifier(VALID_CNPJ)).await;
    assert!(outcome.is_err(), "lookup should still be pending");

    assert_eq!(flow.stage(), FlowStage::IdentifierEntry);
    assert!(flow.company().is_none());
    assert!(!flow.is_loading());
    assert_eq!(registry.calls(), 1);
}

#[tokio::test]
async fn page_visit_flows_are_independent() {
    let registry = CannedRegistry::new(200, ACME);
    let mut visit = PageVisit::new(&AppConfig::default(), registry.clone());

    assert!(visit.popup_flow_mut().is_none());
    assert!(visit.observe(PageEvent::VisibilityHidden));
    assert!(visit.popup_visible());

    visit
        .popup_flow_mut()
        .expect("popup visible")
        .submit_identifier(VALID_CNPJ)
        .await
        .expect("popup lookup");

    let section = visit.contact_flow_mut().expect("section enabled");
    assert_eq!(section.stage(), FlowStage::IdentifierEntry);
    section.submit_identifier("123").await.expect_err("short");

    assert_eq!(visit.popup_flow().stage(), FlowStage::DetailsConfirmation);
    assert_eq!(visit.popup_flow().error_message(), None);

    visit.close_popup();
    assert!(visit.popup_flow_mut().is_none());
    assert!(!visit.observe(PageEvent::VisibilityHidden));
}

#[test]
fn disabled_popup_never_opens() {
    let registry = CannedRegistry::new(200, ACME);
    let mut config = AppConfig::default();
    config.popup.enabled = false;
    config.lead.contact_section_enabled = false;

    let mut visit = PageVisit::new(&config, registry);
    assert!(!visit.observe(PageEvent::VisibilityHidden));
    assert!(visit.contact_flow().is_none());
}

#[test]
fn page_events_decode_from_browser_json() {
    let event: PageEvent = serde_json::from_str(
        r#"{"type":"pointer_out","x":12,"y":-1,"viewport_width":1024,"has_related_target":false}"#,
    )
    .expect("pointer event");
    assert!(matches!(event, PageEvent::PointerOut { y: -1, .. }));

    let hidden: PageEvent =
        serde_json::from_str(r#"{"type":"visibility_hidden"}"#).expect("visibility event");
    assert_eq!(hidden, PageEvent::VisibilityHidden);
}

#[test]
fn snapshot_serializes_for_views() {
    let registry = CannedRegistry::new(200, ACME);
    let flow = contact_flow(&registry);
    let json = serde_json::to_value(flow.snapshot()).expect("serialize snapshot");
    assert_eq!(json["kind"], "contact_section");
    assert_eq!(json["loading"], false);
    assert!(json["company"].is_null());
}
