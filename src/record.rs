use serde::{Deserialize, Serialize};

/// Linking words kept lowercase in names unless they open the name.
const LINKING_WORDS: &[&str] = &["de", "da", "do", "dos", "das", "e", "a", "o", "as", "os"];

/// One notification reconstructed from the export text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intimation {
    pub recipient_name: String,
    /// `DD/MM/YYYY`
    pub issuance_date: String,
    /// `HH:MM`, when the dispatch line carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuance_time: Option<String>,
    pub case_number: String,
    /// Class abbreviation from the case line (`APOrd`, `MPUMPCrim`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
}

/// Identity of a record for deduplication. Document fields and the process
/// class are not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntimationKey<'a> {
    pub recipient_name: &'a str,
    pub case_number: &'a str,
    pub issuance_date: &'a str,
}

impl Intimation {
    pub fn key(&self) -> IntimationKey<'_> {
        IntimationKey {
            recipient_name: &self.recipient_name,
            case_number: &self.case_number,
            issuance_date: &self.issuance_date,
        }
    }

    pub fn same_identity(&self, other: &Intimation) -> bool {
        self.key() == other.key()
    }
}

pub fn is_linking_word(word: &str) -> bool {
    LINKING_WORDS.contains(&word)
}

/// "MARIA DA SILVA" -> "Maria da Silva". The first word is always capitalised.
pub fn to_title_case(name: &str) -> String {
    name.to_lowercase()
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && is_linking_word(word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, doc: Option<&str>) -> Intimation {
        Intimation {
            recipient_name: name.into(),
            issuance_date: "06/02/2026".into(),
            issuance_time: None,
            case_number: "8005252-02.2026.8.05.0039".into(),
            process_type: Some("MPUMPCrim".into()),
            document_id: doc.map(Into::into),
            document_type: doc.map(|_| "Intimação".into()),
        }
    }

    #[test]
    fn title_case_keeps_linking_words_lowercase() {
        assert_eq!(to_title_case("MARIA DAS DORES DE JESUS"), "Maria das Dores de Jesus");
        assert_eq!(to_title_case("JOAO VICTOR MOURA RAMOS"), "Joao Victor Moura Ramos");
    }

    #[test]
    fn title_case_capitalises_leading_linking_word() {
        assert_eq!(to_title_case("DA SILVA PEREIRA"), "Da Silva Pereira");
    }

    #[test]
    fn title_case_handles_accents() {
        assert_eq!(to_title_case("ÂNGELA CONCEIÇÃO"), "Ângela Conceição");
        assert_eq!(to_title_case("josé e joão"), "José e João");
    }

    #[test]
    fn identity_ignores_document_fields() {
        let a = sample("Ana Souza", Some("111"));
        let b = sample("Ana Souza", Some("222"));
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&sample("Ana Lima", Some("111"))));
    }

    #[test]
    fn optional_fields_are_skipped_in_json() {
        let json = serde_json::to_string(&sample("Ana Souza", None)).unwrap();
        assert!(!json.contains("document_id"));
        assert!(!json.contains("issuance_time"));
        assert!(json.contains(r#""process_type":"MPUMPCrim""#));
    }

    #[test]
    fn records_without_class_still_deserialize() {
        let json = r#"{"recipient_name":"Ana Souza","issuance_date":"06/02/2026","case_number":"8005252-02.2026.8.05.0039"}"#;
        let rec: Intimation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.process_type, None);
    }
}
