//! Statutory base periods per act type, in days before the defender doubling.
//!
//! A zero entry marks acts with no fixed period (urgent or on request).

pub const ACT_BASE_PERIODS: &[(&str, u32)] = &[
    // criminal procedure
    ("Resposta à Acusação", 10),
    ("Alegações Finais", 5),
    ("Memoriais", 5),
    // appeals
    ("Apelação", 5),
    ("Razões de Apelação", 8),
    ("Contrarrazões de Apelação", 8),
    ("RESE", 5),
    ("Recurso em Sentido Estrito", 5),
    ("Razões de RESE", 2),
    ("Contrarrazões de RESE", 2),
    ("Embargos de Declaração", 2),
    ("Contrarrazões de RE", 15),
    ("Contrarrazões de REsp", 15),
    ("Contrarrazões de ED", 2),
    // sentence enforcement
    ("Agravo em Execução", 5),
    ("Razões de Agravo", 5),
    ("Contrarrazões de Agravo", 5),
    ("Requerimento de Progressão", 0),
    ("Indulto", 0),
    ("Audiência de Justificação", 3),
    ("Designação Admonitória", 3),
    ("Transferência de Unidade", 5),
    ("Cumprimento ANPP", 5),
    // jury
    ("Diligências", 5),
    ("Diligências do Réu", 5),
    ("Diligências do 422", 5),
    ("Quesitos", 3),
    ("Testemunhas", 3),
    ("Testemunhas do Réu", 3),
    ("Desaforamento", 10),
    // liberty requests
    ("Habeas Corpus", 0),
    ("HC", 0),
    ("Liberdade Provisória", 2),
    ("Relaxamento de Prisão", 2),
    ("Relaxamento da Prisão", 2),
    ("Relaxamento", 2),
    ("Revogação de Prisão Preventiva", 2),
    ("Revogação da Prisão", 2),
    ("Revogação", 2),
    ("Revogação de Medidas", 2),
    ("Revogação de Monitoração", 2),
    ("Revogação de MPU", 2),
    ("Relaxamento e Revogação", 2),
    // domestic violence
    ("Modulação de MPU", 5),
    ("Manifestação Contrarrazões", 5),
    // other
    ("Contestação", 10),
    ("Incidente de Insanidade", 5),
    ("Petição Intermediária", 5),
    ("Prosseguimento do Feito", 5),
    ("Atualização de Endereço", 2),
    ("Endereço do Réu", 2),
    ("Restituição de Coisa", 5),
    ("Requerimento Audiência", 5),
];

/// Case-insensitive lookup; surrounding whitespace is ignored.
pub fn base_period_for_act(act: &str) -> Option<u32> {
    let wanted = act.trim().to_lowercase();
    ACT_BASE_PERIODS
        .iter()
        .find(|(name, _)| name.to_lowercase() == wanted)
        .map(|&(_, days)| days)
}
