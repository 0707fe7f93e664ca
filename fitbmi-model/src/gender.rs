use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Code used for this gender in the reference dataset.
    pub fn code(&self) -> GenderCode {
        match self {
            Gender::Male => GenderCode::M,
            Gender::Female => GenderCode::F,
        }
    }
}

/// Gender column of the reference dataset.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenderCode {
    M,
    F,
}
