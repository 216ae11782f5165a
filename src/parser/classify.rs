use crate::record::{is_linking_word, to_title_case};

use super::tables::{
    contains_excluded_phrase, ANY_DATE_RE, CNJ_RE, DISPATCH_RE, DOCUMENT_RE, MAX_NAME_CHARS,
    MAX_NAME_WORDS, MIN_NAME_CHARS, MIN_NAME_WORDS, PROCESS_TYPE_RE,
};

/// What a single export line contributes to the block being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineField {
    /// Recipient name, already title-cased. Opens a new block.
    Name(String),
    IssuanceDate { date: String, time: Option<String> },
    /// CNJ number, with the class abbreviation when the line opens with one.
    CaseNumber { number: String, process_type: Option<String> },
    Document { kind: String, id: String },
}

pub struct Classifier {
    pub name: &'static str,
    pub classify: fn(&str) -> Option<LineField>,
}

/// Evaluated top to bottom. A match whose field is already filled in the
/// current block falls through to the next entry.
pub const CLASSIFIERS: &[Classifier] = &[
    Classifier { name: "name", classify: classify_name },
    Classifier { name: "issuance_date", classify: classify_issuance_date },
    Classifier { name: "case_number", classify: classify_case_number },
    Classifier { name: "document", classify: classify_document },
];

pub fn classify_name(line: &str) -> Option<LineField> {
    is_name_line(line).then(|| LineField::Name(to_title_case(line)))
}

pub fn classify_issuance_date(line: &str) -> Option<LineField> {
    let caps = DISPATCH_RE.captures(line)?;
    Some(LineField::IssuanceDate {
        date: caps[1].to_string(),
        time: caps.get(2).map(|m| m.as_str().to_string()),
    })
}

pub fn classify_case_number(line: &str) -> Option<LineField> {
    let caps = CNJ_RE.captures(line)?;
    Some(LineField::CaseNumber {
        number: caps[1].to_string(),
        process_type: PROCESS_TYPE_RE.captures(line).map(|c| c[1].to_string()),
    })
}

pub fn classify_document(line: &str) -> Option<LineField> {
    let caps = DOCUMENT_RE.captures(line)?;
    Some(LineField::Document {
        kind: caps[1].to_string(),
        id: caps[2].to_string(),
    })
}

/// A recipient line: a person's name alone on its line, either shouted in
/// capitals or capitalised word by word.
pub fn is_name_line(line: &str) -> bool {
    let chars = line.chars().count();
    let words = line.split(' ').count();

    (is_all_caps(line) || is_capitalised_words(line))
        && !CNJ_RE.is_match(line)
        && !ANY_DATE_RE.is_match(line)
        && !line.contains('(')
        && !contains_excluded_phrase(line)
        && !line.starts_with('/')
        && !line.starts_with("X ")
        && !PROCESS_TYPE_RE.is_match(line)
        && chars > MIN_NAME_CHARS
        && chars < MAX_NAME_CHARS
        && !line.starts_with(|c: char| c.is_ascii_digit())
        && (MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&words)
}

fn is_all_caps(line: &str) -> bool {
    line == line.to_uppercase()
}

fn is_capitalised_words(line: &str) -> bool {
    line.split(' ')
        .filter(|w| !w.is_empty())
        .all(|w| is_linking_word(w) || w.starts_with(char::is_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_case_name() {
        assert_eq!(
            classify_name("JOAO VICTOR MOURA RAMOS"),
            Some(LineField::Name("Joao Victor Moura Ramos".into()))
        );
    }

    #[test]
    fn capitalised_name_with_linking_words() {
        assert_eq!(
            classify_name("Maria das Dores de Jesus"),
            Some(LineField::Name("Maria das Dores de Jesus".into()))
        );
    }

    #[test]
    fn lowercase_words_are_not_names() {
        assert!(!is_name_line("Maria dores Jesus"));
        assert!(!is_name_line("Pendentes de ciência"));
    }

    #[test]
    fn single_word_and_overlong_lines_rejected() {
        assert!(!is_name_line("JOAOZINHO"));
        assert!(!is_name_line("ANA B"));
        let long = "NOME ".repeat(20);
        assert!(!is_name_line(long.trim()));
        assert!(!is_name_line("A B C D E F G H I J K L"));
    }

    #[test]
    fn institutional_lines_rejected() {
        assert!(!is_name_line("MINISTÉRIO PÚBLICO DO ESTADO DA BAHIA"));
        assert!(!is_name_line("VARA DO JÚRI E EXECUÇÕES PENAIS"));
        assert!(!is_name_line("Termo de Sessão"));
        assert!(!is_name_line("DEFENSORIA PÚBLICA"));
    }

    #[test]
    fn structural_lines_rejected() {
        assert!(!is_name_line("APOrd 8011331-31.2025.8.05.0039 Ameaça"));
        assert!(!is_name_line("JURI SUMARIO ANTIGO"));
        assert!(!is_name_line("X JOSE CARLOS SOUZA"));
        assert!(!is_name_line("/VARA CRIMINAL DE SIMOES FILHO"));
        assert!(!is_name_line("12 RESULTADOS NA LISTA"));
        assert!(!is_name_line("JOSE SOUZA (REU)"));
        assert!(!is_name_line("ATUALIZADO EM 06/02/2026"));
    }

    #[test]
    fn embedded_excluded_word_blocks_real_name() {
        assert!(!is_name_line("JOAO CAMPOS FILHO"));
    }

    #[test]
    fn issuance_date_with_time() {
        assert_eq!(
            classify_issuance_date("Expedição eletrônica (06/02/2026 11:00)"),
            Some(LineField::IssuanceDate {
                date: "06/02/2026".into(),
                time: Some("11:00".into())
            })
        );
    }

    #[test]
    fn case_number_inside_line() {
        assert_eq!(
            classify_case_number("MPUMPCrim 8005252-02.2026.8.05.0039 Maus Tratos"),
            Some(LineField::CaseNumber {
                number: "8005252-02.2026.8.05.0039".into(),
                process_type: Some("MPUMPCrim".into()),
            })
        );
        assert_eq!(classify_case_number("Processo 123"), None);
    }

    #[test]
    fn bare_case_number_has_no_class() {
        assert_eq!(
            classify_case_number("8000001-11.2025.8.05.0039"),
            Some(LineField::CaseNumber {
                number: "8000001-11.2025.8.05.0039".into(),
                process_type: None,
            })
        );
        let Some(LineField::CaseNumber { process_type, .. }) =
            classify_case_number("Processo APOrd 8011331-31.2025.8.05.0039")
        else {
            panic!("case number not found");
        };
        assert_eq!(process_type, None);
    }

    #[test]
    fn class_keeps_export_spelling() {
        let Some(LineField::CaseNumber { process_type, .. }) =
            classify_case_number("libprov 8000789-01.2026.8.05.0039")
        else {
            panic!("case number not found");
        };
        assert_eq!(process_type.as_deref(), Some("libprov"));
    }

    #[test]
    fn document_kind_and_id() {
        assert_eq!(
            classify_document("Ato Ordinatório (63261696)"),
            Some(LineField::Document {
                kind: "Ordinatório".into(),
                id: "63261696".into()
            })
        );
        assert_eq!(classify_document("Expedição eletrônica (06/02/2026)"), None);
    }

    #[test]
    fn classifier_order_is_fixed() {
        let names: Vec<_> = CLASSIFIERS.iter().map(|c| c.name).collect();
        assert_eq!(names, ["name", "issuance_date", "case_number", "document"]);
    }
}
