use crate::models::{split_address, AnalysisStatus, DocumentDescriptor, DocumentKind, LoanSummary};

use AnalysisStatus::{Analyzed, Reviewing};
use DocumentKind::{Agreement, Credit, Financial, Modification, Notice, Schedule};

type DocumentRow = (u32, &'static str, DocumentKind, AnalysisStatus);

const BESPOKE_DOCUMENTS: &[(u32, &[DocumentRow])] = &[
    (
        1,
        &[
            (1, "Loan Agreement - LC-2024-0158.pdf", Agreement, Analyzed),
            (2, "Payment Schedule - LC-2024-0158.xlsx", Schedule, Analyzed),
            (3, "Credit Report - TechCorp.pdf", Credit, Analyzed),
            (4, "Financial Statements - Q3 2024.pdf", Financial, Reviewing),
        ],
    ),
    (
        2,
        &[
            (5, "Loan Agreement - LC-2023-0892.pdf", Agreement, Analyzed),
            (6, "Modification Request - LC-2023-0892.pdf", Modification, Analyzed),
            (7, "Credit Report - RetailPlus.pdf", Credit, Analyzed),
            (8, "Cash Flow Analysis - RetailPlus.xlsx", Financial, Analyzed),
        ],
    ),
    (
        3,
        &[
            (9, "Loan Agreement - LC-2024-0245.pdf", Agreement, Analyzed),
            (10, "Payment Schedule - LC-2024-0245.xlsx", Schedule, Analyzed),
            (11, "Credit Report - ConstructCo.pdf", Credit, Analyzed),
            (12, "Project Delay Notice - ConstructCo.pdf", Notice, Analyzed),
        ],
    ),
];

const LOAN_SUMMARY: LoanSummary = LoanSummary {
    loan_amount: "$500,000",
    current_balance: "$487,250",
    interest_rate: "6.25%",
    maturity_date: "March 15, 2029",
    prepayment_penalty: "2% of remaining principal",
};

/// Documents on file for an inbox item, in display order
pub fn documents_for(item_id: u32, sender: &str, loan_account: &str) -> Vec<DocumentDescriptor> {
    if let Some((_, rows)) = BESPOKE_DOCUMENTS.iter().find(|(id, _)| *id == item_id) {
        return rows
            .iter()
            .map(|&(id, name, kind, status)| DocumentDescriptor::new(id, name, kind, status))
            .collect();
    }

    let (_, domain) = split_address(sender);
    vec![
        DocumentDescriptor::new(13, format!("Loan Agreement - {loan_account}.pdf"), Agreement, Analyzed),
        DocumentDescriptor::new(14, format!("Credit Report - {domain}.pdf"), Credit, Analyzed),
        DocumentDescriptor::new(15, "Financial Statements - Current.pdf", Financial, Analyzed),
    ]
}

/// Loan terms panel. Every request shows the same figures.
pub fn loan_summary() -> LoanSummary {
    LOAN_SUMMARY
}
