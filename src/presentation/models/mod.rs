use poem_openapi::Enum;

use crate::domain::value_objects::SortOrder;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum SortOrderKind {
    #[oai(rename = "asc")]
    Asc,
    #[oai(rename = "desc")]
    Desc,
}

impl From<SortOrderKind> for SortOrder {
    fn from(value: SortOrderKind) -> Self {
        match value {
            SortOrderKind::Asc => SortOrder::Asc,
            SortOrderKind::Desc => SortOrder::Desc,
        }
    }
}
