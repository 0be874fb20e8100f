use serde::{Deserialize, Serialize};

/// Belt awarded with a dan rank, used on option labels and printed summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeltColor {
    Black,
    RedWhite,
}

impl BeltColor {
    pub const fn label(self) -> &'static str {
        match self {
            BeltColor::Black => "Faixa Preta",
            BeltColor::RedWhite => "Faixa Vermelha e Branca",
        }
    }
}

/// Dan ranks a candidate can be examined for, in federation notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DanGrade {
    #[serde(rename = "1º DAN")]
    Shodan,
    #[serde(rename = "2º DAN")]
    Nidan,
    #[serde(rename = "3º DAN")]
    Sandan,
    #[serde(rename = "4º DAN")]
    Yondan,
    #[serde(rename = "5º DAN")]
    Godan,
    #[serde(rename = "6º DAN")]
    Rokudan,
    #[serde(rename = "7º DAN")]
    Shichidan,
    #[serde(rename = "8º DAN")]
    Hachidan,
}

impl DanGrade {
    pub const fn ordered() -> [DanGrade; 8] {
        [
            DanGrade::Shodan,
            DanGrade::Nidan,
            DanGrade::Sandan,
            DanGrade::Yondan,
            DanGrade::Godan,
            DanGrade::Rokudan,
            DanGrade::Shichidan,
            DanGrade::Hachidan,
        ]
    }

    /// Short federation notation, as stored on candidate sheets.
    pub const fn value(self) -> &'static str {
        match self {
            DanGrade::Shodan => "1º DAN",
            DanGrade::Nidan => "2º DAN",
            DanGrade::Sandan => "3º DAN",
            DanGrade::Yondan => "4º DAN",
            DanGrade::Godan => "5º DAN",
            DanGrade::Rokudan => "6º DAN",
            DanGrade::Shichidan => "7º DAN",
            DanGrade::Hachidan => "8º DAN",
        }
    }

    /// Full option label shown on selection lists and printed headers.
    pub const fn label(self) -> &'static str {
        match self {
            DanGrade::Shodan => "1º DAN (Sho Dan) - Faixa Preta",
            DanGrade::Nidan => "2º DAN (Ni Dan) - Faixa Preta",
            DanGrade::Sandan => "3º DAN (San Dan) - Faixa Preta",
            DanGrade::Yondan => "4º DAN (Yon Dan) - Faixa Preta",
            DanGrade::Godan => "5º DAN (Go Dan) - Faixa Preta",
            DanGrade::Rokudan => "6º DAN (Roku Dan) - Faixa Vermelha e Branca",
            DanGrade::Shichidan => "7º DAN (Shiti Dan) - Faixa Vermelha e Branca",
            DanGrade::Hachidan => "8º DAN (Hati Dan) - Faixa Vermelha e Branca",
        }
    }

    pub const fn belt(self) -> BeltColor {
        match self {
            DanGrade::Shodan
            | DanGrade::Nidan
            | DanGrade::Sandan
            | DanGrade::Yondan
            | DanGrade::Godan => BeltColor::Black,
            DanGrade::Rokudan | DanGrade::Shichidan | DanGrade::Hachidan => BeltColor::RedWhite,
        }
    }

    /// Parse the federation notation ("1º DAN") leniently on whitespace and case.
    pub fn parse(raw: &str) -> Option<DanGrade> {
        let trimmed = raw.trim();
        DanGrade::ordered()
            .into_iter()
            .find(|grade| grade.value().eq_ignore_ascii_case(trimmed))
    }
}

/// The two halves of a dan examination summary sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamSection {
    Theoretical,
    Practical,
}

impl ExamSection {
    pub const fn label(self) -> &'static str {
        match self {
            ExamSection::Theoretical => "Prova Teórica",
            ExamSection::Practical => "Prova Prática",
        }
    }
}

/// One scored dimension of the summary sheet.
///
/// The serde names double as the storage keys used on persisted records, so a
/// serialized score map reads like the original summary columns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Criterion {
    #[serde(rename = "teoria_historico")]
    History,
    #[serde(rename = "teoria_filosofia")]
    Philosophy,
    #[serde(rename = "teoria_etica")]
    Ethics,
    #[serde(rename = "teoria_atualidades")]
    CurrentAffairs,
    #[serde(rename = "teoria_tecnicas")]
    TechniqueClassification,
    #[serde(rename = "teoria_vocabulario")]
    TechnicalVocabulary,
    #[serde(rename = "teoria_kata")]
    KataEssay,
    #[serde(rename = "teoria_arbitragem")]
    RefereeingTheory,
    #[serde(rename = "pratica_nage_no_kata")]
    NageNoKata,
    #[serde(rename = "pratica_katame_no_kata")]
    KatameNoKata,
    #[serde(rename = "pratica_ju_no_kata")]
    JuNoKata,
    #[serde(rename = "pratica_kime_no_kata")]
    KimeNoKata,
    #[serde(rename = "pratica_goshin_jutsu")]
    GoshinJutsu,
    #[serde(rename = "pratica_nage_waza")]
    NageWaza,
    #[serde(rename = "pratica_renraku_waza")]
    RenrakuWaza,
    #[serde(rename = "pratica_kaeshi_waza")]
    KaeshiWaza,
    #[serde(rename = "pratica_katame_waza")]
    KatameWaza,
    #[serde(rename = "pratica_arbitragem")]
    RefereeingPractice,
    #[serde(rename = "pratica_pedagogia")]
    Pedagogy,
}

impl Criterion {
    pub const fn all() -> [Criterion; 19] {
        [
            Criterion::History,
            Criterion::Philosophy,
            Criterion::Ethics,
            Criterion::CurrentAffairs,
            Criterion::TechniqueClassification,
            Criterion::TechnicalVocabulary,
            Criterion::KataEssay,
            Criterion::RefereeingTheory,
            Criterion::NageNoKata,
            Criterion::KatameNoKata,
            Criterion::JuNoKata,
            Criterion::KimeNoKata,
            Criterion::GoshinJutsu,
            Criterion::NageWaza,
            Criterion::RenrakuWaza,
            Criterion::KaeshiWaza,
            Criterion::KatameWaza,
            Criterion::RefereeingPractice,
            Criterion::Pedagogy,
        ]
    }

    /// Reverse lookup from the storage key.
    pub fn from_key(raw: &str) -> Option<Criterion> {
        let trimmed = raw.trim();
        Criterion::all()
            .into_iter()
            .find(|criterion| criterion.key() == trimmed)
    }

    pub const fn section(self) -> ExamSection {
        match self {
            Criterion::History
            | Criterion::Philosophy
            | Criterion::Ethics
            | Criterion::CurrentAffairs
            | Criterion::TechniqueClassification
            | Criterion::TechnicalVocabulary
            | Criterion::KataEssay
            | Criterion::RefereeingTheory => ExamSection::Theoretical,
            Criterion::NageNoKata
            | Criterion::KatameNoKata
            | Criterion::JuNoKata
            | Criterion::KimeNoKata
            | Criterion::GoshinJutsu
            | Criterion::NageWaza
            | Criterion::RenrakuWaza
            | Criterion::KaeshiWaza
            | Criterion::KatameWaza
            | Criterion::RefereeingPractice
            | Criterion::Pedagogy => ExamSection::Practical,
        }
    }

    /// Storage key, identical to the serde rename.
    pub const fn key(self) -> &'static str {
        match self {
            Criterion::History => "teoria_historico",
            Criterion::Philosophy => "teoria_filosofia",
            Criterion::Ethics => "teoria_etica",
            Criterion::CurrentAffairs => "teoria_atualidades",
            Criterion::TechniqueClassification => "teoria_tecnicas",
            Criterion::TechnicalVocabulary => "teoria_vocabulario",
            Criterion::KataEssay => "teoria_kata",
            Criterion::RefereeingTheory => "teoria_arbitragem",
            Criterion::NageNoKata => "pratica_nage_no_kata",
            Criterion::KatameNoKata => "pratica_katame_no_kata",
            Criterion::JuNoKata => "pratica_ju_no_kata",
            Criterion::KimeNoKata => "pratica_kime_no_kata",
            Criterion::GoshinJutsu => "pratica_goshin_jutsu",
            Criterion::NageWaza => "pratica_nage_waza",
            Criterion::RenrakuWaza => "pratica_renraku_waza",
            Criterion::KaeshiWaza => "pratica_kaeshi_waza",
            Criterion::KatameWaza => "pratica_katame_waza",
            Criterion::RefereeingPractice => "pratica_arbitragem",
            Criterion::Pedagogy => "pratica_pedagogia",
        }
    }

    /// Human-readable label printed on the summary sheet.
    pub const fn label(self) -> &'static str {
        match self {
            Criterion::History => "Histórico",
            Criterion::Philosophy => "Filosofia",
            Criterion::Ethics => "Ética e Disciplina",
            Criterion::CurrentAffairs => "Atualidades",
            Criterion::TechniqueClassification => "Divisão e Classificação das Técnicas",
            Criterion::TechnicalVocabulary => "Ortografia do Vocabulário Técnico",
            Criterion::KataEssay => "Descrição Escrita sobre Kata",
            Criterion::RefereeingTheory => "Conhecimento de Arbitragem",
            Criterion::NageNoKata => "Nage no Kata",
            Criterion::KatameNoKata => "Katame no Kata",
            Criterion::JuNoKata => "Ju no Kata",
            Criterion::KimeNoKata => "Kime no Kata",
            Criterion::GoshinJutsu => "Kodokan Goshin Jutsu",
            Criterion::NageWaza => "Nage Waza",
            Criterion::RenrakuWaza => "Renraku Waza / Henka Waza",
            Criterion::KaeshiWaza => "Kaeshi Waza",
            Criterion::KatameWaza => "Katame Waza",
            Criterion::RefereeingPractice => "Apresentação Prática de Arbitragem",
            Criterion::Pedagogy => "Conhecimentos Didáticos e Pedagógicos",
        }
    }
}

/// Criteria examined when no grade-specific requirements apply. Unrecognized
/// or senior grades (6º DAN and above) fall back to these sets instead of
/// failing: the commission always has a sheet to fill in.
const BASE_THEORETICAL: &[Criterion] = &[
    Criterion::History,
    Criterion::Philosophy,
    Criterion::Ethics,
    Criterion::TechniqueClassification,
    Criterion::TechnicalVocabulary,
];

const BASE_PRACTICAL: &[Criterion] = &[
    Criterion::NageWaza,
    Criterion::RenrakuWaza,
    Criterion::KaeshiWaza,
    Criterion::KatameWaza,
];

/// Ordered criteria required for a target grade, per examination regulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeCriteria {
    pub theoretical: &'static [Criterion],
    pub practical: &'static [Criterion],
}

impl GradeCriteria {
    pub const fn for_grade(grade: DanGrade) -> GradeCriteria {
        match grade {
            DanGrade::Shodan => GradeCriteria {
                theoretical: &[
                    Criterion::History,
                    Criterion::Philosophy,
                    Criterion::Ethics,
                    Criterion::TechniqueClassification,
                    Criterion::TechnicalVocabulary,
                    Criterion::CurrentAffairs,
                    Criterion::KataEssay,
                ],
                practical: &[
                    Criterion::NageNoKata,
                    Criterion::NageWaza,
                    Criterion::RenrakuWaza,
                    Criterion::KaeshiWaza,
                    Criterion::KatameWaza,
                    Criterion::RefereeingPractice,
                ],
            },
            DanGrade::Nidan => GradeCriteria {
                theoretical: &[
                    Criterion::History,
                    Criterion::Philosophy,
                    Criterion::Ethics,
                    Criterion::TechniqueClassification,
                    Criterion::TechnicalVocabulary,
                    Criterion::CurrentAffairs,
                    Criterion::KataEssay,
                    Criterion::RefereeingTheory,
                ],
                practical: &[
                    Criterion::KatameNoKata,
                    Criterion::NageNoKata,
                    Criterion::NageWaza,
                    Criterion::RenrakuWaza,
                    Criterion::KaeshiWaza,
                    Criterion::KatameWaza,
                    Criterion::Pedagogy,
                ],
            },
            DanGrade::Sandan => GradeCriteria {
                theoretical: &[
                    Criterion::History,
                    Criterion::Philosophy,
                    Criterion::Ethics,
                    Criterion::TechniqueClassification,
                    Criterion::TechnicalVocabulary,
                    Criterion::KataEssay,
                    Criterion::RefereeingTheory,
                ],
                practical: &[
                    Criterion::JuNoKata,
                    Criterion::KatameNoKata,
                    Criterion::Pedagogy,
                ],
            },
            DanGrade::Yondan => GradeCriteria {
                theoretical: &[
                    Criterion::History,
                    Criterion::Philosophy,
                    Criterion::Ethics,
                    Criterion::TechniqueClassification,
                    Criterion::TechnicalVocabulary,
                    Criterion::KataEssay,
                    Criterion::RefereeingTheory,
                ],
                practical: &[
                    Criterion::KimeNoKata,
                    Criterion::JuNoKata,
                    Criterion::Pedagogy,
                ],
            },
            DanGrade::Godan => GradeCriteria {
                theoretical: &[
                    Criterion::History,
                    Criterion::Philosophy,
                    Criterion::Ethics,
                    Criterion::TechniqueClassification,
                    Criterion::TechnicalVocabulary,
                    Criterion::KataEssay,
                    Criterion::RefereeingTheory,
                ],
                practical: &[
                    Criterion::GoshinJutsu,
                    Criterion::KimeNoKata,
                    Criterion::Pedagogy,
                ],
            },
            DanGrade::Rokudan | DanGrade::Shichidan | DanGrade::Hachidan => GradeCriteria {
                theoretical: BASE_THEORETICAL,
                practical: BASE_PRACTICAL,
            },
        }
    }

    /// Lookup from the federation notation; unknown text gets the base sets.
    pub fn for_value(raw: &str) -> GradeCriteria {
        match DanGrade::parse(raw) {
            Some(grade) => GradeCriteria::for_grade(grade),
            None => GradeCriteria {
                theoretical: BASE_THEORETICAL,
                practical: BASE_PRACTICAL,
            },
        }
    }
}
