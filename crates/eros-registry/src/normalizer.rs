//! Normalization of raw registry payloads into [`CompanyRecord`]s.
//!
//! The registry is not under our control: the same field may arrive as
//! `razao_social` or `razaoSocial`, owners may be a `QSA` list or a single
//! top-level name, and anything may be missing. [`normalize`] is total and
//! never fails; every field it cannot fill renders as [`PLACEHOLDER`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw JSON object as returned by the registry.
pub type RawRegistryPayload = Map<String, Value>;

/// Text shown for any field the registry did not provide.
pub const PLACEHOLDER: &str = "-";

const OWNER_LIST_KEY: &str = "QSA";
const OWNER_NAME_KEYS: &[&str] = &["nome_socio", "nomeSocio"];

/// Display-ready company record.
///
/// Every field is non-empty: a missing value holds [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Legal name
    pub razao_social: String,
    /// Registration status (e.g. `ATIVA`)
    pub situacao_cadastral: String,
    /// Primary economic activity code
    pub cnae_principal: String,
    /// Street
    pub logradouro: String,
    /// Street number
    pub numero: String,
    /// Municipality
    pub municipio: String,
    /// Company-size classification
    pub porte_empresa: String,
    /// Owner name(s), comma separated
    pub nome_socio: String,
}

impl CompanyRecord {
    /// Labelled fields in the order the site displays them.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Razão social", self.razao_social.as_str()),
            ("Situação cadastral", self.situacao_cadastral.as_str()),
            ("CNAE principal", self.cnae_principal.as_str()),
            ("Logradouro", self.logradouro.as_str()),
            ("Número", self.numero.as_str()),
            ("Município", self.municipio.as_str()),
            ("Porte da empresa", self.porte_empresa.as_str()),
            ("Sócio / Sócios", self.nome_socio.as_str()),
        ]
    }
}

/// Normalize a registry payload into a [`CompanyRecord`].
#[must_use]
pub fn normalize(payload: &RawRegistryPayload) -> CompanyRecord {
    CompanyRecord {
        razao_social: field(payload, &["razao_social", "razaoSocial"]),
        situacao_cadastral: field(payload, &["situacao_cadastral", "situacaoCadastral"]),
        cnae_principal: field(payload, &["cnae_principal", "cnaePrincipal"]),
        logradouro: field(payload, &["logradouro"]),
        numero: field(payload, &["numero"]),
        municipio: field(payload, &["municipio"]),
        porte_empresa: field(payload, &["porte_empresa", "porteEmpresa"]),
        nome_socio: or_placeholder(owner_names(payload)),
    }
}

/// Normalize any JSON value; non-objects are treated as an empty payload.
#[must_use]
pub fn normalize_value(value: &Value) -> CompanyRecord {
    match value {
        Value::Object(payload) => normalize(payload),
        _ => normalize(&Map::new()),
    }
}

fn field(source: &RawRegistryPayload, keys: &[&str]) -> String {
    or_placeholder(pick(source, keys))
}

fn or_placeholder(value: String) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}

/// First candidate holding a non-blank string or a number, as text.
/// Empty when no candidate qualifies.
fn pick(source: &RawRegistryPayload, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| source.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(number_text(n)),
            _ => None,
        })
        .unwrap_or_default()
}

// Same text a browser shows for the number: integral floats drop the
// fraction (`12.0` -> `12`), `-0` prints as `0`, and magnitudes from 1e21
// up or below 1e-6 switch to exponent form (`1e+21`, `1e-7`).
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let Some(f) = n.as_f64() else {
        return String::new();
    };
    if f == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.5e-7`.
    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the digit string.
    let point = exp + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let frac = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let sign = if exp >= 0 { "+" } else { "-" };
        format!("{lead}{frac}e{sign}{}", exp.abs())
    };

    if f.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

fn owner_names(payload: &RawRegistryPayload) -> String {
    match payload.get(OWNER_LIST_KEY) {
        Some(Value::Array(owners)) if !owners.is_empty() => owners
            .iter()
            .filter_map(Value::as_object)
            .map(|owner| pick(owner, OWNER_NAME_KEYS))
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => pick(payload, OWNER_NAME_KEYS),
    }
}
