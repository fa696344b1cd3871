use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Agreement,
    Schedule,
    Credit,
    Financial,
    Modification,
    Notice,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Agreement => "agreement",
            Self::Schedule => "schedule",
            Self::Credit => "credit",
            Self::Financial => "financial",
            Self::Modification => "modification",
            Self::Notice => "notice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Analyzed,
    Reviewing,
}

impl AnalysisStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Analyzed => "analyzed",
            Self::Reviewing => "reviewing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    pub id: u32,
    pub name: String,
    pub kind: DocumentKind,
    pub status: AnalysisStatus,
}

impl DocumentDescriptor {
    pub fn new(id: u32, name: impl Into<String>, kind: DocumentKind, status: AnalysisStatus) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            status,
        }
    }
}

/// Loan terms shown next to the document list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub loan_amount: &'static str,
    pub current_balance: &'static str,
    pub interest_rate: &'static str,
    pub maturity_date: &'static str,
    pub prepayment_penalty: &'static str,
}

impl LoanSummary {
    /// Label/value pairs in display order
    pub fn rows(&self) -> [(&'static str, &'static str); 5] {
        [
            ("Loan Amount", self.loan_amount),
            ("Current Balance", self.current_balance),
            ("Interest Rate", self.interest_rate),
            ("Maturity Date", self.maturity_date),
            ("Prepayment Penalty", self.prepayment_penalty),
        ]
    }
}
