use clap::ValueEnum;
use serde::Serialize;

/// The three named groups of the schedule. An entry belongs to exactly one
/// collection for its lifetime; there is no move operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKind {
    /// Cheques issued but not yet presented
    Unpresented,
    /// Cheques/payments awaiting approval
    Approval,
    /// Weekly cash requisitions
    #[value(alias = "weekly")]
    WeeklyRequisition,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Unpresented,
        CollectionKind::Approval,
        CollectionKind::WeeklyRequisition,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Unpresented => "unpresented",
            CollectionKind::Approval => "approval",
            CollectionKind::WeeklyRequisition => "weekly-requisition",
        }
    }

    /// Section title as it appears on screen and in exported documents.
    pub fn title(self) -> &'static str {
        match self {
            CollectionKind::Unpresented => "UNPRESENTED CHEQUES",
            CollectionKind::Approval => "CHEQUES/PAYMENTS FOR APPROVAL",
            CollectionKind::WeeklyRequisition => "WEEKLY REQUISITION",
        }
    }

    /// Label of the totals row under each section.
    pub fn total_label(self) -> &'static str {
        match self {
            CollectionKind::Unpresented => "TOTAL UNPRESENTED CHEQUES",
            CollectionKind::Approval => "TOTAL CHEQUES/PAYMENTS FOR APPROVAL",
            CollectionKind::WeeklyRequisition => "TOTAL WEEKLY REQUISITIONS",
        }
    }

    /// Short label used in the expense-breakdown summary.
    pub fn short_label(self) -> &'static str {
        match self {
            CollectionKind::Unpresented => "Unpresented",
            CollectionKind::Approval => "For Approval",
            CollectionKind::WeeklyRequisition => "Weekly Req.",
        }
    }
}
