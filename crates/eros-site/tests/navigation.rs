//! Every link on the standard page lands somewhere.

use eros_site::content::{BRANDS, CONTACT, STATS};
use eros_site::{Page, SectionKind};

#[test]
fn standard_page_has_no_dangling_links() {
    let page = Page::standard().expect("standard page");
    assert!(page.dangling_links().is_empty());
}

#[test]
fn nav_links_follow_header_order() {
    let page = Page::standard().expect("standard page");
    let labels: Vec<_> = page.nav_links().iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        [
            "Início",
            "Marcas",
            "Categorias",
            "Sobre Nós",
            "Seja um Revendedor",
            "Contato"
        ]
    );
}

#[test]
fn stats_block_is_not_addressable() {
    let page = Page::standard().expect("standard page");
    let stats = page
        .sections()
        .iter()
        .find(|s| s.kind == SectionKind::Stats)
        .expect("stats block");
    assert!(stats.id.is_none());

    let anchored = page.sections().iter().filter(|s| s.id.is_some()).count();
    assert_eq!(anchored, 6);
}

#[test]
fn reseller_call_to_action_reaches_lead_form() {
    let page = Page::standard().expect("standard page");
    let cta = page
        .calls_to_action()
        .iter()
        .find(|l| l.label == "Cadastre seu CNPJ")
        .expect("cta");
    assert_eq!(page.resolve(cta.target).map(|s| s.kind), Some(SectionKind::Contact));
}

#[test]
fn outline_serializes() {
    let page = Page::standard().expect("standard page");
    let json = serde_json::to_value(&page).expect("serialize page");
    assert_eq!(json["sections"][0]["id"], "inicio");
    assert_eq!(json["sections"][4]["id"], serde_json::Value::Null);
    assert_eq!(json["sections"][6]["kind"], "contact");
}

#[test]
fn content_matches_storefront() {
    assert_eq!(BRANDS[0], "Dolce & Gabbana");
    assert_eq!(STATS[1].value, "1000+");
    assert!(CONTACT.address.contains("Blumenau - SC"));
}
