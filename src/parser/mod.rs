pub mod blocks;
pub mod classify;
pub mod dedup;
pub mod tables;

use tracing::debug;

use crate::record::Intimation;

/// Two-pass pipeline: export text → assembled blocks → deduplicated records.
pub fn parse_intimations(text: &str) -> Vec<Intimation> {
    let assembled = blocks::assemble_blocks(text);
    let found = assembled.len();
    let intimations = dedup::dedup_intimations(assembled);
    debug!(found, kept = intimations.len(), "parsed intimations");
    intimations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.txt", name)).unwrap()
    }

    #[test]
    fn juri_fixture() {
        let out = parse_intimations(&fixture("juri"));
        let names: Vec<&str> = out.iter().map(|r| r.recipient_name.as_str()).collect();
        assert_eq!(
            names,
            ["Joao Victor Moura Ramos", "Cleydson Manoel Bomfim Pereira", "Maria das Dores de Jesus"]
        );
        assert_eq!(out[0].case_number, "8000123-45.2024.8.05.0039");
        assert_eq!(out[0].issuance_date, "19/02/2026");
        assert_eq!(out[0].document_type.as_deref(), Some("Ordinatório"));
        assert_eq!(out[0].process_type.as_deref(), Some("Juri"));
        assert_eq!(out[2].process_type.as_deref(), Some("LibProv"));
        assert_eq!(out[1].issuance_time.as_deref(), Some("11:00"));
        assert_eq!(out[2].document_id.as_deref(), Some("62096897"));
    }

    #[test]
    fn every_record_is_complete() {
        for name in ["juri", "noise"] {
            for rec in parse_intimations(&fixture(name)) {
                assert!(!rec.recipient_name.is_empty());
                assert!(!rec.issuance_date.is_empty());
                assert!(tables::CNJ_RE.is_match(&rec.case_number));
            }
        }
    }

    #[test]
    fn doubled_text_parses_the_same() {
        let text = fixture("juri");
        let once = parse_intimations(&text);
        let twice = parse_intimations(&format!("{text}\n{text}"));
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_dispatch_line_yields_nothing() {
        let text = "ANA PAULA SOUZA\n\
            Intimação (62889857)\n\
            Data limite prevista 06/02/2026\n\
            APOrd 8011331-31.2025.8.05.0039 Ameaça\n";
        assert!(parse_intimations(text).is_empty());
    }

    #[test]
    fn noise_only_blocks_are_skipped() {
        let out = parse_intimations(&fixture("noise"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].recipient_name, "Ana Paula Souza");
    }

    #[test]
    fn empty_input() {
        assert!(parse_intimations("").is_empty());
        assert!(parse_intimations("\n\n   \n").is_empty());
    }

    #[test]
    fn windows_line_endings() {
        let text = "ANA PAULA SOUZA\r\nExpedição eletrônica (02/02/2026)\r\n8000001-11.2025.8.05.0039\r\n";
        assert_eq!(parse_intimations(text).len(), 1);
    }
}
