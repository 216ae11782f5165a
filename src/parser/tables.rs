//! Lookup tables and patterns the line classifiers run against.
//!
//! Exclusion phrases are compared as substrings of the lowercased line. This
//! also rejects names that merely embed an excluded word ("CAMPOS" holds "mp",
//! "VARANDA" holds "vara"); the list and the matching rule are kept as they are
//! so that parses stay reproducible across versions.

use std::sync::LazyLock;

use regex::Regex;

/// CNJ unified case number: `NNNNNNN-NN.NNNN.N.NN.NNNN`.
pub const CNJ_PATTERN: &str = r"\d{7}-\d{2}\.\d{4}\.\d\.\d{2}\.\d{4}";

/// Line openers that announce how the document was dispatched.
pub const DISPATCH_PREFIXES: &[&str] = &["Expedição eletrônica", "Diário Eletrônico", "Edital"];

/// Process class abbreviations that open case header lines.
pub const PROCESS_TYPE_PREFIXES: &[&str] = &[
    "Juri", "InsanAc", "LibProv", "PetCrim", "EP", "VD", "MPUMPCrim", "APOrd", "APSum", "APri",
    "AuPrFl", "APFD",
];

/// Institutional and procedural phrases that never name a recipient.
pub const EXCLUDED_PHRASES: &[&str] = &[
    "ministério público",
    "ministério publico",
    "mp",
    "vara",
    "comarca",
    "tribunal",
    "justiça",
    "sentença",
    "decisão",
    "despacho",
    "certidão",
    "intimação",
    "expedição",
    "prazo",
    "data limite",
    "defensor",
    "defensoria",
    "último movimento",
    "conclusos",
    "juntada",
    "mandado",
    "edital",
    "publicado",
    "decorrido",
    "termo de sessão",
    "ato ordinatório",
    "pendentes de ciência",
    "ciência dada",
    "sem prazo",
    "respondidos",
    "camaçari",
    "candeias",
    "salvador",
    "lauro de freitas",
    "ilhéus",
    "caixa de entrada",
    "resultados encontrados",
    "expedientes",
    "diário eletrônico",
    "coordenação de polícia",
    "estado da bahia",
    "homicídio",
    "prisão preventiva",
    "competência",
    "tráfico",
    "liberdade provisória",
    "você tomou ciência",
    "o sistema registrou",
    "data limite prevista",
    "peticionar",
    "novo processo",
    "consulta",
    "configuração",
    "download",
    "painel do defensor",
    "selecione",
    "doença terminal",
    "idoso",
    "réu preso",
    "criança e adolescente",
    "pessoa em situação de rua",
    "pessoa com deficiência",
    "violência doméstica",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

pub const MIN_NAME_WORDS: usize = 2;
pub const MAX_NAME_WORDS: usize = 10;
/// Exclusive character bounds for a name line.
pub const MIN_NAME_CHARS: usize = 5;
pub const MAX_NAME_CHARS: usize = 80;

pub static CNJ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("({CNJ_PATTERN})")).unwrap());

pub static ANY_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}/\d{2}/\d{4}").unwrap());

pub static DISPATCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    let prefixes = DISPATCH_PREFIXES
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?i)(?:{prefixes})\s*\((\d{{2}}/\d{{2}}/\d{{4}})(?:\s+(\d{{2}}:\d{{2}}))?\)"
    ))
    .unwrap()
});

/// Zero-padded `DD/MM/YYYY`, nothing else.
pub static ISSUANCE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").unwrap());

pub static PROCESS_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^({})\s", PROCESS_TYPE_PREFIXES.join("|"))).unwrap()
});

pub static DOCUMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*\((\d+)\)").unwrap());

pub fn contains_excluded_phrase(line: &str) -> bool {
    let lower = line.to_lowercase();
    EXCLUDED_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
