//! Structural QA checks for scraped statute text.
//!
//! Every check is independent and advisory: the report surfaces problems
//! for a human content reviewer, it never blocks ingestion by itself. A
//! document is considered acceptable when it scores at least
//! [`MIN_ACCEPT_SCORE`] percent and no check reported a hard failure.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::articles::{extract_articles, find_duplicates, find_gaps, Article};
use crate::config::MIN_ACCEPT_SCORE;
use crate::text::normalize;

/// Act identifier line: "LEI Nº 14.133, DE 1º DE ABRIL DE 2021" and the
/// decreto / medida provisória variants.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static IDENTIFICATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(LEI(?:\s+COMPLEMENTAR)?|DECRETO(?:-LEI)?|MEDIDA\s+PROVISÓRIA)\s+N[º°o.]?\s*[\d.]+\s*,\s*DE\s+\d{1,2}[º°o]?\s+DE\s+\p{L}+\s+DE\s+\d{4}",
    )
    .expect("valid regex")
});

/// Opening verbs that introduce an ementa (purpose clause).
const EMENTA_VERBS: [&str; 12] = [
    "Altera",
    "Institui",
    "Dispõe",
    "Regulamenta",
    "Estabelece",
    "Cria",
    "Acrescenta",
    "Revoga",
    "Autoriza",
    "Aprova",
    "Define",
    "Modifica",
];

/// Presidents expected in signature blocks, uppercase.
///
/// Distinctive full forms are used instead of bare surnames to avoid
/// matching ordinary words ("temer" is also a verb).
const PRESIDENTS: [&str; 19] = [
    "LULA DA SILVA",
    "BOLSONARO",
    "MICHEL TEMER",
    "DILMA ROUSSEFF",
    "FERNANDO HENRIQUE CARDOSO",
    "ITAMAR FRANCO",
    "FERNANDO COLLOR",
    "JOSÉ SARNEY",
    "JOÃO FIGUEIREDO",
    "ERNESTO GEISEL",
    "COSTA E SILVA",
    "CASTELLO BRANCO",
    "JOÃO GOULART",
    "JÂNIO QUADROS",
    "JUSCELINO KUBITSCHEK",
    "CAFÉ FILHO",
    "GETÚLIO VARGAS",
    "EURICO GASPAR DUTRA",
    "HUMBERTO DE ALENCAR",
];

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Success,
    Warning,
    Error,
}

impl CheckStatus {
    /// Contribution to the overall score.
    #[must_use]
    pub fn weight(&self) -> f64 {
        match self {
            Self::Success => 1.0,
            Self::Warning => 0.5,
            Self::Error => 0.0,
        }
    }

    /// Get the string value for display.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Result of one structural check.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

impl Check {
    fn success(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Success,
            message: message.into(),
        }
    }

    fn warning(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.into(),
        }
    }

    fn error(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.into(),
        }
    }
}

/// Full QA report for one document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether the document meets the acceptance bar.
    #[serde(rename = "isValid")]
    pub is_valid: bool,

    /// Percentage of the maximum possible score.
    pub score: f64,

    /// Individual check results.
    pub checks: Vec<Check>,

    /// Articles extracted from the document.
    pub artigos: Vec<Article>,

    /// Article numbers appearing more than once.
    pub duplicatas: Vec<String>,

    /// Suspected missing article numbers.
    pub lacunas: Vec<u64>,
}

/// Run all structural checks against raw statute text.
#[must_use]
pub fn validate_document(text: &str) -> ValidationReport {
    let text = normalize(text);
    let upper = text.to_uppercase();

    let artigos = extract_articles(&text);
    let duplicatas = find_duplicates(&artigos);
    let lacunas = find_gaps(&artigos);

    let checks = vec![
        check_header(&upper),
        check_identification(&text),
        check_ementa(&text),
        check_preamble(&upper),
        check_articles(&artigos, &duplicatas, &lacunas),
        check_signature(&upper),
    ];

    let max = checks.len() as f64;
    let total: f64 = checks.iter().map(|c| c.status.weight()).sum();
    let score = ((total / max) * 1000.0).round() / 10.0;

    let has_hard_failure = checks.iter().any(|c| c.status == CheckStatus::Error);
    let is_valid = score >= MIN_ACCEPT_SCORE && !has_hard_failure;

    tracing::debug!(score, is_valid, articles = artigos.len(), "document validated");

    ValidationReport {
        is_valid,
        score,
        checks,
        artigos,
        duplicatas,
        lacunas,
    }
}

/// Header block: executive-office and chief-of-staff-office markers.
fn check_header(upper: &str) -> Check {
    let has_presidencia = upper.contains("PRESIDÊNCIA DA REPÚBLICA");
    let has_casa_civil = upper.contains("CASA CIVIL");

    match (has_presidencia, has_casa_civil) {
        (true, true) => Check::success(
            "cabecalho",
            "Cabeçalho com Presidência da República e Casa Civil",
        ),
        (true, false) => Check::warning("cabecalho", "Cabeçalho sem marcador da Casa Civil"),
        (false, true) => Check::warning(
            "cabecalho",
            "Cabeçalho sem marcador da Presidência da República",
        ),
        (false, false) => Check::error("cabecalho", "Nenhum marcador de cabeçalho encontrado"),
    }
}

/// Act identifier line with number and full date.
fn check_identification(text: &str) -> Check {
    match IDENTIFICATION_PATTERN.find(text) {
        Some(m) => Check::success(
            "identificacao",
            format!("Identificação encontrada: {}", m.as_str().trim()),
        ),
        None => Check::error(
            "identificacao",
            "Nenhuma linha de identificação (LEI/DECRETO/MEDIDA PROVISÓRIA Nº ..., DE ...) encontrada",
        ),
    }
}

/// Ementa detected via its opening verb.
fn check_ementa(text: &str) -> Check {
    match EMENTA_VERBS.iter().find(|verb| text.contains(*verb)) {
        Some(verb) => Check::success("ementa", format!("Ementa iniciada por '{verb}'")),
        None => Check::warning(
            "ementa",
            "Nenhum verbo de abertura de ementa encontrado (Altera, Institui, Dispõe, ...)",
        ),
    }
}

/// Enacting formula ("O PRESIDENTE DA REPÚBLICA ... Faço saber").
fn check_preamble(upper: &str) -> Check {
    let has_president = upper.contains("O PRESIDENTE DA REPÚBLICA")
        || upper.contains("A PRESIDENTA DA REPÚBLICA")
        || upper.contains("A PRESIDENTE DA REPÚBLICA");
    let has_faco_saber = upper.contains("FAÇO SABER");

    match (has_president, has_faco_saber) {
        (true, true) => Check::success("preambulo", "Fórmula de promulgação completa"),
        (true, false) => Check::warning("preambulo", "Preâmbulo sem a fórmula 'Faço saber'"),
        (false, true) => Check::warning(
            "preambulo",
            "Fórmula 'Faço saber' sem menção ao Presidente da República",
        ),
        (false, false) => Check::error("preambulo", "Nenhuma fórmula de promulgação encontrada"),
    }
}

/// Article presence and sequence integrity.
fn check_articles(artigos: &[Article], duplicatas: &[String], lacunas: &[u64]) -> Check {
    if artigos.is_empty() {
        return Check::error("artigos", "Nenhum artigo encontrado");
    }

    let mut issues = Vec::new();
    if !duplicatas.is_empty() {
        issues.push(format!("duplicados: {}", duplicatas.join(", ")));
    }
    if !lacunas.is_empty() {
        let listed: Vec<String> = lacunas.iter().map(u64::to_string).collect();
        issues.push(format!("lacunas: {}", listed.join(", ")));
    }

    if issues.is_empty() {
        Check::success(
            "artigos",
            format!("{} artigo(s) em sequência consistente", artigos.len()),
        )
    } else {
        Check::warning(
            "artigos",
            format!("{} artigo(s); {}", artigos.len(), issues.join("; ")),
        )
    }
}

/// Signature block near the document tail: Brasília plus a known president.
fn check_signature(upper: &str) -> Check {
    let chars: Vec<char> = upper.chars().collect();
    // The tail is the last fifth of the document, but at least 1500 chars
    let tail_len = (chars.len() / 5).max(1500).min(chars.len());
    let tail: String = chars[chars.len() - tail_len..].iter().collect();

    let has_brasilia = tail.contains("BRASÍLIA");
    let president = PRESIDENTS.iter().find(|p| tail.contains(*p));

    match (has_brasilia, president) {
        (true, Some(name)) => Check::success(
            "fecho",
            format!("Fecho com Brasília e assinatura de {name}"),
        ),
        (true, None) => Check::warning(
            "fecho",
            "Fecho menciona Brasília mas nenhum presidente conhecido",
        ),
        (false, Some(name)) => Check::warning(
            "fecho",
            format!("Assinatura de {name} sem menção a Brasília"),
        ),
        (false, None) => Check::error("fecho", "Nenhum bloco de assinatura encontrado"),
    }
}
