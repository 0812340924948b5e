//! Static storefront content.

use serde::Serialize;

/// Brands carried, in carousel order.
pub const BRANDS: [&str; 12] = [
    "Dolce & Gabbana",
    "Carolina Herrera",
    "Paco Rabanne",
    "Jean Paul Gaultier",
    "Valentino",
    "Versace",
    "Hugo Boss",
    "Montblanc",
    "Calvin Klein",
    "Lancôme",
    "Givenchy",
    "Armani",
];

/// A product category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Card title
    pub title: &'static str,
    /// One-line pitch
    pub description: &'static str,
}

/// Product categories, in display order.
pub const CATEGORIES: [Category; 5] = [
    Category {
        title: "Perfumaria Masculina",
        description: "Fragrâncias sofisticadas para homens exigentes",
    },
    Category {
        title: "Perfumaria Feminina",
        description: "Aromas únicos que expressam personalidade",
    },
    Category {
        title: "Cosméticos e Skincare",
        description: "Cuidados para uma pele radiante e saudável",
    },
    Category {
        title: "Cuidados Capilares",
        description: "Produtos profissionais para cabelos impecáveis",
    },
    Category {
        title: "Kits e Presentes",
        description: "Combinações perfeitas para momentos especiais",
    },
];

/// A reseller benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Benefit {
    /// Benefit title
    pub title: &'static str,
    /// What the reseller gets
    pub description: &'static str,
}

/// Benefits listed in the reseller section.
pub const BENEFITS: [Benefit; 4] = [
    Benefit {
        title: "Estoque Local",
        description: "Produtos prontos para pronta entrega em nosso centro de distribuição",
    },
    Benefit {
        title: "Entrega Rápida",
        description: "Logística eficiente para todo o Brasil com rastreamento completo",
    },
    Benefit {
        title: "Marcas Exclusivas",
        description: "Acesso a fragrâncias e cosméticos de marcas premium internacionais",
    },
    Benefit {
        title: "Garantia de Origem",
        description: "Produtos 100% originais com nota fiscal e garantia de procedência",
    },
];

/// A headline figure. Values are display text, not numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    /// Figure as shown (`+14`, `1000+`)
    pub value: &'static str,
    /// What it counts
    pub label: &'static str,
}

/// Figures for the statistics block.
pub const STATS: [Stat; 4] = [
    Stat {
        value: "+14",
        label: "Anos de mercado",
    },
    Stat {
        value: "1000+",
        label: "Pontos de venda atendidos",
    },
    Stat {
        value: "50+",
        label: "Marcas exclusivas",
    },
    Stat {
        value: "27",
        label: "Estados atendidos",
    },
];

/// How to reach the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    /// Commercial phone
    pub phone: &'static str,
    /// Commercial e-mail
    pub email: &'static str,
    /// Street address
    pub address: &'static str,
    /// Instagram profile
    pub instagram: &'static str,
}

/// Contact details shown in the contact section and the footer.
pub const CONTACT: ContactInfo = ContactInfo {
    phone: "(47) 3037-4250",
    email: "comercial@erosdistribuidora.com.br",
    address: "Rua Caiçara, 116, Sala 01 - Garcia, Blumenau - SC, CEP 89020-410",
    instagram: "https://www.instagram.com/erosdistribuidorasc/",
};

impl ContactInfo {
    /// `tel:` link for the phone number.
    #[must_use]
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        format!("tel:+55{digits}")
    }

    /// `mailto:` link for the e-mail address.
    #[must_use]
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(BRANDS.len(), 12);
        assert_eq!(CATEGORIES.len(), 5);
        assert_eq!(BENEFITS.len(), 4);
        assert_eq!(STATS.len(), 4);
    }

    #[test]
    fn test_no_blank_entries() {
        assert!(BRANDS.iter().all(|b| !b.trim().is_empty()));
        assert!(CATEGORIES
            .iter()
            .all(|c| !c.title.is_empty() && !c.description.is_empty()));
        assert!(BENEFITS
            .iter()
            .all(|b| !b.title.is_empty() && !b.description.is_empty()));
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(CONTACT.phone_href(), "tel:+554730374250");
        assert_eq!(
            CONTACT.email_href(),
            "mailto:comercial@erosdistribuidora.com.br"
        );
    }
}
