use serde::Serialize;

/// Practice area guessed from the court names in an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaMatch {
    pub area: &'static str,
    pub court: &'static str,
}

struct AreaRule {
    area: &'static str,
    court: &'static str,
    keywords: &'static [&'static str],
}

// Order matters: a domestic violence court export also mentions "vara criminal".
const AREA_RULES: &[AreaRule] = &[
    AreaRule {
        area: "Violência Doméstica",
        court: "Vara de Violência Doméstica",
        keywords: &["violência doméstica", "violencia domestica"],
    },
    AreaRule {
        area: "Júri",
        court: "Vara do Júri",
        keywords: &["vara do júri", "vara do juri", "júri e execuções", "juri e execucoes"],
    },
    AreaRule {
        area: "Execução Penal",
        court: "Vara de Execuções Penais",
        keywords: &["execuções penais", "execucoes penais", "vara de execução", "vep"],
    },
    AreaRule {
        area: "Criminal",
        court: "Vara Criminal",
        keywords: &["vara criminal"],
    },
    AreaRule {
        area: "Infância",
        court: "Vara da Infância e Juventude",
        keywords: &["infância", "infancia", "juventude", "infracional"],
    },
    AreaRule {
        area: "Família",
        court: "Vara de Família",
        keywords: &["vara de família", "vara de familia"],
    },
    AreaRule {
        area: "Cível",
        court: "Vara Cível",
        keywords: &["vara cível", "vara civel"],
    },
    AreaRule {
        area: "Fazenda Pública",
        court: "Vara da Fazenda Pública",
        keywords: &["fazenda pública", "fazenda publica"],
    },
];

pub fn detect_area(text: &str) -> Option<AreaMatch> {
    let lower = text.to_lowercase();
    AREA_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| AreaMatch {
            area: rule.area,
            court: rule.court,
        })
}
