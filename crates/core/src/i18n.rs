//! Interface localisation.
//!
//! A fixed label set per supported interface language. Patient-facing
//! text is generated separately (the AI client targets the patient's own
//! language); this table only covers the provider UI chrome.

use serde::{Deserialize, Serialize};

/// Interface languages offered in settings.
///
/// `EnglishUk` shares the English label table; it exists only as a
/// locale choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    #[serde(rename = "English-UK")]
    EnglishUk,
    Hausa,
    Igbo,
    Yoruba,
    French,
    Swahili,
    Portuguese,
}

impl Language {
    /// Parses a settings value; unknown names fall back to English.
    pub fn from_name(name: &str) -> Self {
        match name {
            "English" => Language::English,
            "English-UK" => Language::EnglishUk,
            "Hausa" => Language::Hausa,
            "Igbo" => Language::Igbo,
            "Yoruba" => Language::Yoruba,
            "French" => Language::French,
            "Swahili" => Language::Swahili,
            "Portuguese" => Language::Portuguese,
            _ => Language::English,
        }
    }
}

/// The fixed set of UI labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translations {
    pub dashboard: &'static str,
    pub patients: &'static str,
    pub communication: &'static str,
    pub analytics: &'static str,
    pub settings: &'static str,
    pub logout: &'static str,
    pub overview: &'static str,
    pub export_report: &'static str,
    pub add_patient: &'static str,
    pub active_patients: &'static str,
    pub avg_adherence: &'static str,
    pub refills_due: &'static str,
    pub critical_status: &'static str,
    pub patient_directory: &'static str,
    pub search_placeholder: &'static str,
    pub push_survey: &'static str,
    pub manage_loyalty: &'static str,
}

const ENGLISH: Translations = Translations {
    dashboard: "Dashboard",
    patients: "Patients",
    communication: "Communication",
    analytics: "Analytics",
    settings: "Settings",
    logout: "Logout",
    overview: "Overview",
    export_report: "Export Report",
    add_patient: "Add Patient",
    active_patients: "Active Patients",
    avg_adherence: "Avg. Adherence",
    refills_due: "Refills Due",
    critical_status: "Critical Status",
    patient_directory: "Patient Directory",
    search_placeholder: "Search by name or condition...",
    push_survey: "Push Survey",
    manage_loyalty: "Manage Loyalty",
};

const HAUSA: Translations = Translations {
    dashboard: "Allon Bayani",
    patients: "Marasa lafiya",
    communication: "Sadarwa",
    analytics: "Bincike",
    settings: "Saituna",
    logout: "Fita",
    overview: "Taƙaitawa",
    export_report: "Fitar da Rahoto",
    add_patient: "Ƙara Majiyyaci",
    active_patients: "Majiyyata masu aiki",
    avg_adherence: "Matsakaicin Riƙo",
    refills_due: "Sake cikawa",
    critical_status: "Hali mai tsanani",
    patient_directory: "Jerin Marasa lafiya",
    search_placeholder: "Nema da suna ko yanayi...",
    push_survey: "Aika Bincike",
    manage_loyalty: "Sarrafa Aminci",
};

const IGBO: Translations = Translations {
    dashboard: "Ebe Nchịkọta",
    patients: "Ndị ọrịa",
    communication: "Nkwurịta okwu",
    analytics: "Nyocha",
    settings: "Ntọala",
    logout: "Pụọ",
    overview: "Nchịkọta",
    export_report: "Bupụ Akụkọ",
    add_patient: "Tinye Onye ọrịa",
    active_patients: "Ndị ọrịa nọ n'ọrụ",
    avg_adherence: "Nkezi Nrube isi",
    refills_due: "Mmejupụta ruru",
    critical_status: "Ọnọdụ dị egwu",
    patient_directory: "Ndekọ Ndị ọrịa",
    search_placeholder: "Chọọ site n'aha ma ọ bụ ọnọdụ...",
    push_survey: "Zipu Ajụjụ",
    manage_loyalty: "Jikwaa Iguzosi ike",
};

const YORUBA: Translations = Translations {
    dashboard: "Pátákó Ìròyìn",
    patients: "Àwọn aláìsàn",
    communication: "Ìbánisọ̀rọ̀",
    analytics: "Ìtúpalẹ̀",
    settings: "Ètò",
    logout: "Jáde",
    overview: "Àkópọ̀",
    export_report: "Gbé Ìròyìn jáde",
    add_patient: "Fi Aláìsàn kún",
    active_patients: "Àwọn aláìsàn tó ń ṣiṣẹ́",
    avg_adherence: "Ìpín Ìfaramọ́",
    refills_due: "Àtúnkún tó yẹ",
    critical_status: "Ipò pàtàkì",
    patient_directory: "Àkójọ Aláìsàn",
    search_placeholder: "Wá pẹ̀lú orúkọ tàbí àìsàn...",
    push_survey: "Fi Ìwádìí ránṣẹ́",
    manage_loyalty: "Ṣàkóso Ìdúróṣinṣin",
};

const FRENCH: Translations = Translations {
    dashboard: "Tableau de bord",
    patients: "Patients",
    communication: "Communication",
    analytics: "Analytique",
    settings: "Paramètres",
    logout: "Déconnexion",
    overview: "Aperçu",
    export_report: "Exporter le rapport",
    add_patient: "Ajouter un patient",
    active_patients: "Patients actifs",
    avg_adherence: "Adhésion moyenne",
    refills_due: "Renouvellements dus",
    critical_status: "État critique",
    patient_directory: "Répertoire des patients",
    search_placeholder: "Rechercher par nom ou pathologie...",
    push_survey: "Envoyer un sondage",
    manage_loyalty: "Gérer la fidélité",
};

const SWAHILI: Translations = Translations {
    dashboard: "Dashibodi",
    patients: "Wagonjwa",
    communication: "Mawasiliano",
    analytics: "Uchambuzi",
    settings: "Mipangilio",
    logout: "Ondoka",
    overview: "Muhtasari",
    export_report: "Hamisha Ripoti",
    add_patient: "Ongeza Mgonjwa",
    active_patients: "Wagonjwa hai",
    avg_adherence: "Wastani wa Ufuasi",
    refills_due: "Dawa za kujazwa",
    critical_status: "Hali mbaya",
    patient_directory: "Orodha ya Wagonjwa",
    search_placeholder: "Tafuta kwa jina au hali...",
    push_survey: "Tuma Utafiti",
    manage_loyalty: "Simamia Uaminifu",
};

const PORTUGUESE: Translations = Translations {
    dashboard: "Painel",
    patients: "Pacientes",
    communication: "Comunicação",
    analytics: "Análises",
    settings: "Configurações",
    logout: "Sair",
    overview: "Visão geral",
    export_report: "Exportar relatório",
    add_patient: "Adicionar paciente",
    active_patients: "Pacientes ativos",
    avg_adherence: "Adesão média",
    refills_due: "Reposições devidas",
    critical_status: "Estado crítico",
    patient_directory: "Diretório de pacientes",
    search_placeholder: "Pesquisar por nome ou condição...",
    push_survey: "Enviar pesquisa",
    manage_loyalty: "Gerir fidelidade",
};

/// Looks up the label table for an interface language.
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::English | Language::EnglishUk => &ENGLISH,
        Language::Hausa => &HAUSA,
        Language::Igbo => &IGBO,
        Language::Yoruba => &YORUBA,
        Language::French => &FRENCH,
        Language::Swahili => &SWAHILI,
        Language::Portuguese => &PORTUGUESE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_english_shares_the_english_table() {
        assert_eq!(translations(Language::EnglishUk), translations(Language::English));
    }

    #[test]
    fn unknown_names_fall_back_to_english() {
        assert_eq!(Language::from_name("Twi"), Language::English);
        assert_eq!(Language::from_name("French"), Language::French);
        assert_eq!(Language::from_name("English-UK"), Language::EnglishUk);
    }

    #[test]
    fn every_language_has_a_table() {
        for lang in [
            Language::English,
            Language::EnglishUk,
            Language::Hausa,
            Language::Igbo,
            Language::Yoruba,
            Language::French,
            Language::Swahili,
            Language::Portuguese,
        ] {
            assert!(!translations(lang).dashboard.is_empty());
        }
    }
}
