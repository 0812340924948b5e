//! Page outline and in-page navigation.

use eros_core::{Result, SectionId};
use serde::Serialize;
use tracing::debug;

/// What a section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Opening banner with the main calls to action
    Hero,
    /// Brand carousel
    Brands,
    /// Product categories
    Categories,
    /// Reseller programme and benefits
    Reseller,
    /// Headline figures
    Stats,
    /// Company history
    About,
    /// Contact details and the lead form
    Contact,
}

/// One block of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Anchor, if the section can be navigated to
    pub id: Option<SectionId>,
    /// Heading shown in outlines
    pub title: &'static str,
    /// Content shown
    pub kind: SectionKind,
}

/// A link that scrolls to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// In-page href (`#contato`)
    pub target: &'static str,
}

const NAV_LINKS: [NavLink; 6] = [
    NavLink {
        label: "Início",
        target: "#inicio",
    },
    NavLink {
        label: "Marcas",
        target: "#marcas",
    },
    NavLink {
        label: "Categorias",
        target: "#categorias",
    },
    NavLink {
        label: "Sobre Nós",
        target: "#sobre",
    },
    NavLink {
        label: "Seja um Revendedor",
        target: "#revendedor",
    },
    NavLink {
        label: "Contato",
        target: "#contato",
    },
];

const CALLS_TO_ACTION: [NavLink; 4] = [
    NavLink {
        label: "Portal do Lojista",
        target: "#revendedor",
    },
    NavLink {
        label: "Quero ser um parceiro",
        target: "#revendedor",
    },
    NavLink {
        label: "Conheça nossas marcas",
        target: "#marcas",
    },
    NavLink {
        label: "Cadastre seu CNPJ",
        target: "#contato",
    },
];

/// The storefront page: ordered sections plus the links that point into it.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    sections: Vec<Section>,
    nav_links: Vec<NavLink>,
    calls_to_action: Vec<NavLink>,
}

impl Page {
    /// Build a page from parts.
    #[must_use]
    pub fn new(
        sections: Vec<Section>,
        nav_links: Vec<NavLink>,
        calls_to_action: Vec<NavLink>,
    ) -> Self {
        Self {
            sections,
            nav_links,
            calls_to_action,
        }
    }

    /// The storefront as published.
    pub fn standard() -> Result<Self> {
        let anchored = |id: &str, title, kind| -> Result<Section> {
            Ok(Section {
                id: Some(SectionId::new(id)?),
                title,
                kind,
            })
        };

        let sections = vec![
            anchored("inicio", "Início", SectionKind::Hero)?,
            anchored("marcas", "Marcas", SectionKind::Brands)?,
            anchored("categorias", "Categorias", SectionKind::Categories)?,
            anchored("revendedor", "Seja um Revendedor", SectionKind::Reseller)?,
            Section {
                id: None,
                title: "Números que falam por nós",
                kind: SectionKind::Stats,
            },
            anchored("sobre", "Sobre Nós", SectionKind::About)?,
            anchored("contato", "Contato", SectionKind::Contact)?,
        ];

        Ok(Self::new(
            sections,
            NAV_LINKS.to_vec(),
            CALLS_TO_ACTION.to_vec(),
        ))
    }

    /// Sections in document order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Header and footer navigation.
    #[must_use]
    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    /// Buttons that scroll elsewhere on the page.
    #[must_use]
    pub fn calls_to_action(&self) -> &[NavLink] {
        &self.calls_to_action
    }

    /// Find the section an href scrolls to.
    ///
    /// Accepts `#id` or a bare `id`. Anything that names no section returns
    /// `None` and navigation does nothing.
    #[must_use]
    pub fn resolve(&self, href: &str) -> Option<&Section> {
        let Ok(id) = SectionId::new(href.trim()) else {
            debug!(href, "ignoring malformed anchor");
            return None;
        };
        let found = self
            .sections
            .iter()
            .find(|section| section.id.as_ref() == Some(&id));
        if found.is_none() {
            debug!(href, "anchor matches no section");
        }
        found
    }

    /// Links whose target resolves to no section. Empty for a sound page.
    #[must_use]
    pub fn dangling_links(&self) -> Vec<&NavLink> {
        self.nav_links
            .iter()
            .chain(&self.calls_to_action)
            .filter(|link| self.resolve(link.target).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        let page = Page::standard().expect("standard page");
        let kinds: Vec<_> = page.sections().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Hero,
                SectionKind::Brands,
                SectionKind::Categories,
                SectionKind::Reseller,
                SectionKind::Stats,
                SectionKind::About,
                SectionKind::Contact,
            ]
        );
    }

    #[test]
    fn test_resolve_accepts_both_forms() {
        let page = Page::standard().expect("standard page");
        assert_eq!(page.resolve("#marcas").map(|s| s.kind), Some(SectionKind::Brands));
        assert_eq!(page.resolve("marcas").map(|s| s.kind), Some(SectionKind::Brands));
    }

    #[test]
    fn test_resolve_unknown_is_noop() {
        let page = Page::standard().expect("standard page");
        assert!(page.resolve("#precos").is_none());
        assert!(page.resolve("").is_none());
        assert!(page.resolve("#").is_none());
        assert!(page.resolve("#Contato").is_none());
    }

    #[test]
    fn test_dangling_links_reported() {
        let page = Page::new(
            Vec::new(),
            vec![NavLink {
                label: "Contato",
                target: "#contato",
            }],
            Vec::new(),
        );
        let dangling = page.dangling_links();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].label, "Contato");
    }
}
