//! User-facing messages shown inline by the lookup forms.

/// Identifier did not reduce to 14 digits.
pub const CNPJ_DIGITS_REQUIRED: &str = "Informe os 14 dígitos do CNPJ.";

/// Registry rejected the identifier without a message of its own.
pub const CNPJ_NOT_FOUND: &str = "CNPJ não encontrado.";

/// The registry could not be reached or answered with garbage.
pub const LOOKUP_UNAVAILABLE: &str = "Não foi possível buscar o CNPJ.";

/// Phone or e-mail left blank.
pub const CONTACT_REQUIRED: &str = "Informe telefone e e-mail para continuar.";

/// Acknowledgement shown by the contact section after capture.
pub const LEAD_RECEIVED: &str = "Recebemos seus dados e em breve entraremos em contato.";

/// Heading of the completed view.
pub const COMPLETED_HEADLINE: &str = "Tudo certo!";

/// Body of the completed view in the contact section.
pub const COMPLETED_SECTION: &str = "Recebemos suas informações e em breve nosso time \
    entrará em contato com um catálogo dedicado à sua empresa.";

/// Body of the completed view in the exit popup.
pub const COMPLETED_POPUP: &str = "Recebemos suas informações e em breve nosso time \
    entrará em contato com o catálogo dedicado à sua empresa.";
