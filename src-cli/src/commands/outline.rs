//! `eros outline`

use super::write_json;
use anyhow::{Context, Result};
use eros_site::content::{BENEFITS, BRANDS, CATEGORIES, CONTACT, STATS};
use eros_site::{Benefit, Category, ContactInfo, Page, SectionKind, Stat};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct Outline<'a> {
    #[serde(flatten)]
    page: &'a Page,
    content: Content,
}

#[derive(Serialize)]
struct Content {
    brands: &'static [&'static str],
    categories: &'static [Category],
    benefits: &'static [Benefit],
    stats: &'static [Stat],
    contact: ContactLinks,
}

#[derive(Serialize)]
struct ContactLinks {
    #[serde(flatten)]
    info: ContactInfo,
    phone_href: String,
    email_href: String,
}

impl Content {
    fn storefront() -> Self {
        Self {
            brands: &BRANDS,
            categories: &CATEGORIES,
            benefits: &BENEFITS,
            stats: &STATS,
            contact: ContactLinks {
                info: CONTACT,
                phone_href: CONTACT.phone_href(),
                email_href: CONTACT.email_href(),
            },
        }
    }
}

pub fn run(json: bool) -> Result<()> {
    let page = Page::standard().context("failed to build page outline")?;
    write_outline(&mut io::stdout().lock(), &page, json)
}

pub(crate) fn write_outline<W: Write + ?Sized>(
    out: &mut W,
    page: &Page,
    json: bool,
) -> Result<()> {
    let content = Content::storefront();
    if json {
        return write_json(out, &Outline { page, content });
    }

    writeln!(out, "Seções:")?;
    for section in page.sections() {
        let anchor = section
            .id
            .as_ref()
            .map_or_else(|| "(sem âncora)".to_string(), |id| id.href());
        writeln!(out, "  {anchor:<14} {}", section.title)?;
        write_section_content(out, section.kind, &content)?;
    }

    writeln!(out, "Navegação:")?;
    for link in page.nav_links() {
        writeln!(out, "  {:<20} -> {}", link.label, link.target)?;
    }

    let dangling = page.dangling_links();
    if !dangling.is_empty() {
        writeln!(out, "Links sem destino:")?;
        for link in dangling {
            writeln!(out, "  {:<20} -> {}", link.label, link.target)?;
        }
    }
    Ok(())
}

fn write_section_content<W: Write + ?Sized>(
    out: &mut W,
    kind: SectionKind,
    content: &Content,
) -> io::Result<()> {
    const INDENT: &str = "                  ";
    match kind {
        SectionKind::Hero | SectionKind::About => {}
        SectionKind::Brands => writeln!(out, "{INDENT}{}", content.brands.join(", "))?,
        SectionKind::Categories => {
            for category in content.categories {
                writeln!(out, "{INDENT}{}: {}", category.title, category.description)?;
            }
        }
        SectionKind::Reseller => {
            for benefit in content.benefits {
                writeln!(out, "{INDENT}{}: {}", benefit.title, benefit.description)?;
            }
        }
        SectionKind::Stats => {
            for stat in content.stats {
                writeln!(out, "{INDENT}{} {}", stat.value, stat.label)?;
            }
        }
        SectionKind::Contact => {
            let contact = &content.contact;
            writeln!(out, "{INDENT}{} <{}>", contact.info.phone, contact.phone_href)?;
            writeln!(out, "{INDENT}{} <{}>", contact.info.email, contact.email_href)?;
            writeln!(out, "{INDENT}{}", contact.info.address)?;
        }
    }
    Ok(())
}
