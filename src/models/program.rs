//! Majors and transfer destinations a student can choose from.
//!
//! The `value` of each option is the identifier used by
//! [`PlanPreferences`](crate::config::PlanPreferences) and as a key of
//! [`TransferAgreements`](super::TransferAgreements). The university value
//! `"none"` means no specific transfer target.

use serde::Serialize;

/// A selectable option with a display name and a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramOption {
    /// Display name.
    pub name: &'static str,
    /// Identifier.
    pub value: &'static str,
}

/// A group of related majors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AreaOfStudy {
    /// Display name of the area.
    pub name: &'static str,
    /// Majors offered in the area.
    pub majors: &'static [ProgramOption],
}

impl AreaOfStudy {
    /// Finds a major in this area by identifier.
    pub fn major(&self, value: &str) -> Option<&'static ProgramOption> {
        self.majors.iter().find(|m| m.value == value)
    }
}

const fn opt(name: &'static str, value: &'static str) -> ProgramOption {
    ProgramOption { name, value }
}

const TRANSFER_UNIVERSITIES: &[ProgramOption] = &[
    opt("No Specific Transfer", "none"),
    opt("CSU Fullerton (CSUF)", "csuf"),
    opt("CSU San Bernardino (CSUSB)", "csusb"),
    opt("Cal Poly Pomona (CPP)", "cpp"),
    opt("San Diego State University (SDSU)", "sdsu"),
    opt("UC Riverside (UCR)", "ucr"),
    opt("UC Irvine (UCI)", "uci"),
    opt("UC Los Angeles (UCLA)", "ucla"),
];

const AREAS_OF_STUDY: &[AreaOfStudy] = &[
    AreaOfStudy {
        name: "Arts & Humanities",
        majors: &[
            opt("Art History (ADT)", "art-history-adt"),
            opt("English (ADT)", "english-adt"),
            opt("History (ADT)", "history-adt"),
            opt("Music (AA)", "music-aa"),
            opt("Philosophy (ADT)", "philosophy-adt"),
            opt("Studio Arts (ADT)", "studio-arts-adt"),
        ],
    },
    AreaOfStudy {
        name: "Business & Management",
        majors: &[
            opt("Business Administration (ADT)", "business-admin-adt"),
            opt("Accounting (AS)", "accounting-as"),
            opt("Management (AS)", "management-as"),
            opt("Marketing (AS)", "marketing-as"),
        ],
    },
    AreaOfStudy {
        name: "Health & Wellness",
        majors: &[
            opt("Kinesiology (ADT)", "kinesiology-adt"),
            opt("Nursing (AS)", "nursing-as"),
            opt("Nutrition and Dietetics (ADT)", "nutrition-adt"),
            opt("Public Health Science (ADT)", "public-health-adt"),
        ],
    },
    AreaOfStudy {
        name: "Public Safety",
        majors: &[
            opt("Administration of Justice (ADT)", "admin-justice-adt"),
            opt("Corrections (Cert)", "corrections-cert"),
        ],
    },
    AreaOfStudy {
        name: "STEM (Science, Tech, Engineering, Math)",
        majors: &[
            opt("Biology (ADT)", "biology-adt"),
            opt("Chemistry (ADT)", "chemistry-adt"),
            opt("Computer Science (ADT)", "computer-science-adt"),
            opt("Engineering (AS)", "engineering-as"),
            opt("Geology (ADT)", "geology-adt"),
            opt("Mathematics (ADT)", "math-adt"),
        ],
    },
    AreaOfStudy {
        name: "Technology & Digital Media",
        majors: &[
            opt("Computer Programming (Cert)", "computer-programming-cert"),
            opt("Cyber Defense (AS)", "cyber-defense-as"),
            opt("Web Developer (Cert)", "web-developer-cert"),
            opt("Graphic Design & Digital Media (AS)", "graphic-design-as"),
        ],
    },
];

/// Universities a plan can target, starting with the "none" option.
pub fn transfer_universities() -> &'static [ProgramOption] {
    TRANSFER_UNIVERSITIES
}

/// Areas of study with their majors.
pub fn areas_of_study() -> &'static [AreaOfStudy] {
    AREAS_OF_STUDY
}

/// Looks up a major across every area.
pub fn find_major(value: &str) -> Option<(&'static AreaOfStudy, &'static ProgramOption)> {
    AREAS_OF_STUDY
        .iter()
        .find_map(|area| area.major(value).map(|m| (area, m)))
}

/// Looks up a university by identifier.
pub fn find_university(value: &str) -> Option<&'static ProgramOption> {
    TRANSFER_UNIVERSITIES.iter().find(|u| u.value == value)
}
