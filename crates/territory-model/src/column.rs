//! Positional column layout of a territory file.

/// The ten columns of a territory file, in file order.
///
/// Header names are never matched; a cell's meaning comes from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerritoryColumn {
    TerritoryId,
    CategoryCode,
    Category,
    Number,
    Suffix,
    DateCompleted,
    DateAssigned,
    CampaignId,
    Publisher,
    FieldServiceGroup,
}

impl TerritoryColumn {
    pub const ALL: [TerritoryColumn; 10] = [
        TerritoryColumn::TerritoryId,
        TerritoryColumn::CategoryCode,
        TerritoryColumn::Category,
        TerritoryColumn::Number,
        TerritoryColumn::Suffix,
        TerritoryColumn::DateCompleted,
        TerritoryColumn::DateAssigned,
        TerritoryColumn::CampaignId,
        TerritoryColumn::Publisher,
        TerritoryColumn::FieldServiceGroup,
    ];

    /// Zero-based position in a data line.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Conventional header text for this column.
    pub fn header(self) -> &'static str {
        match self {
            TerritoryColumn::TerritoryId => "territoryId",
            TerritoryColumn::CategoryCode => "categoryCode",
            TerritoryColumn::Category => "category",
            TerritoryColumn::Number => "number",
            TerritoryColumn::Suffix => "suffix",
            TerritoryColumn::DateCompleted => "dateCompleted",
            TerritoryColumn::DateAssigned => "dateAssigned",
            TerritoryColumn::CampaignId => "campaignId",
            TerritoryColumn::Publisher => "publisher",
            TerritoryColumn::FieldServiceGroup => "fieldServiceGroup",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TerritoryColumn::TerritoryId => "Territory identifier (rows without one are skipped)",
            TerritoryColumn::CategoryCode => "Category code",
            TerritoryColumn::Category => "Category name",
            TerritoryColumn::Number => "Territory number",
            TerritoryColumn::Suffix => "Number suffix, appended without separator",
            TerritoryColumn::DateCompleted => "Date the last assignment was completed",
            TerritoryColumn::DateAssigned => "Date the territory was last assigned",
            TerritoryColumn::CampaignId => "Campaign identifier",
            TerritoryColumn::Publisher => "Publisher holding the territory",
            TerritoryColumn::FieldServiceGroup => "Field service group",
        }
    }

    /// The full header line, comma-joined.
    pub fn header_line() -> String {
        Self::ALL
            .iter()
            .map(|column| column.header())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_file_order() {
        for (position, column) in TerritoryColumn::ALL.iter().enumerate() {
            assert_eq!(column.index(), position);
        }
        assert_eq!(TerritoryColumn::FieldServiceGroup.index(), 9);
    }

    #[test]
    fn header_line_matches_expected_layout() {
        assert_eq!(
            TerritoryColumn::header_line(),
            "territoryId,categoryCode,category,number,suffix,dateCompleted,\
             dateAssigned,campaignId,publisher,fieldServiceGroup"
        );
    }
}
