use std::{fmt, str::FromStr};

use crate::Error;

#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize,
)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,

    #[serde(rename = "en-US")]
    EnUs,
}

/// Fixed UI strings of a post, in one language
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Labels {
    pub feedback_heading: &'static str,
    pub comment_placeholder: &'static str,
    pub publish: &'static str,
    pub required_field: &'static str,
    pub delete_comment: &'static str,
}

const LABELS_PT_BR: Labels = Labels {
    feedback_heading: "Deixe seu feedback",
    comment_placeholder: "Deixe um comentário",
    publish: "Publicar",
    required_field: "esse campo é obrigatório!",
    delete_comment: "Deletar comentário",
};

const LABELS_EN_US: Labels = Labels {
    feedback_heading: "Leave your feedback",
    comment_placeholder: "Leave a comment",
    publish: "Publish",
    required_field: "this field is required!",
    delete_comment: "Delete comment",
};

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_EN_US: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::PtBr, Locale::EnUs];

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::PtBr => "Português (Brasil)",
            Locale::EnUs => "English (US)",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::PtBr => &LABELS_PT_BR,
            Locale::EnUs => &LABELS_EN_US,
        }
    }

    /// Standalone month name, `month` being 1-based like `chrono::Datelike::month`
    pub fn month_name(&self, month: u32) -> &'static str {
        let months = match self {
            Locale::PtBr => &MONTHS_PT_BR,
            Locale::EnUs => &MONTHS_EN_US,
        };
        months[(month as usize + 11) % 12]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Locale, Error> {
        Locale::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("en-us".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!(
            "fr-FR".parse::<Locale>(),
            Err(Error::UnknownLocale(String::from("fr-FR"))),
        );
    }

    #[test]
    fn tag_round_trips_through_display() {
        for l in Locale::ALL {
            assert_eq!(l.to_string().parse::<Locale>(), Ok(l));
        }
    }

    #[test]
    fn month_names() {
        assert_eq!(Locale::PtBr.month_name(1), "janeiro");
        assert_eq!(Locale::PtBr.month_name(3), "março");
        assert_eq!(Locale::EnUs.month_name(12), "December");
    }

    #[test]
    fn serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), r#""pt-BR""#);
        assert_eq!(
            serde_json::from_str::<Locale>(r#""en-US""#).unwrap(),
            Locale::EnUs,
        );
    }

    #[test]
    fn default_is_pt_br() {
        assert_eq!(Locale::default(), Locale::PtBr);
        assert_eq!(Locale::default().labels().required_field, "esse campo é obrigatório!");
    }
}
