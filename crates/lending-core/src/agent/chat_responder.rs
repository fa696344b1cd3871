//! Keyword-matched chat answers.
//!
//! [`RESPONSE_RULES`] is evaluated in order and the first rule with a trigger
//! contained in the lower-cased input wins. The order is the tie-break: an
//! input mentioning both "payment" and "credit" gets the payment answer.

use serde::Serialize;

use crate::models::DocumentDescriptor;

/// Suggestions offered before the first question is asked
pub const QUICK_QUESTIONS: [&str; 5] = [
    "What's the current loan balance?",
    "Show me the payment terms",
    "What are the prepayment penalties?",
    "When is the loan maturity date?",
    "What documents are available?",
];

/// Facts about the request the answers are rendered from
#[derive(Debug, Clone, Copy)]
pub struct ChatContext<'a> {
    pub sender: &'a str,
    pub loan_account: &'a str,
    pub documents: &'a [DocumentDescriptor],
}

impl ChatContext<'_> {
    fn document_names(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RelatedDocuments {
    Fixed(&'static [&'static str]),
    AllDocuments,
}

impl RelatedDocuments {
    fn resolve(&self, ctx: &ChatContext<'_>) -> Vec<String> {
        match self {
            Self::Fixed(names) => names.iter().map(|n| n.to_string()).collect(),
            Self::AllDocuments => ctx.document_names(),
        }
    }
}

pub struct ResponseRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub related: RelatedDocuments,
    render: fn(&ChatContext<'_>) -> String,
}

impl ResponseRule {
    /// `lowered` must already be lower-case
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

pub const RESPONSE_RULES: [ResponseRule; 6] = [
    ResponseRule {
        name: "balance",
        triggers: &["balance", "amount"],
        related: RelatedDocuments::Fixed(&["Loan Agreement", "Payment Schedule"]),
        render: render_balance,
    },
    ResponseRule {
        name: "payment_terms",
        triggers: &["payment", "term"],
        related: RelatedDocuments::Fixed(&["Loan Agreement", "Payment Schedule"]),
        render: render_payment_terms,
    },
    ResponseRule {
        name: "prepayment",
        triggers: &["prepayment", "penalty"],
        related: RelatedDocuments::Fixed(&["Loan Agreement"]),
        render: render_prepayment,
    },
    ResponseRule {
        name: "maturity",
        triggers: &["maturity", "end date"],
        related: RelatedDocuments::Fixed(&["Loan Agreement"]),
        render: render_maturity,
    },
    ResponseRule {
        name: "documents",
        triggers: &["document", "file"],
        related: RelatedDocuments::AllDocuments,
        render: render_documents,
    },
    ResponseRule {
        name: "credit",
        triggers: &["credit", "score"],
        related: RelatedDocuments::Fixed(&["Credit Report"]),
        render: render_credit,
    },
];

/// Agent answer plus the documents it cites
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CannedAnswer {
    /// Name of the matched rule; `None` for the clarification fallback
    pub rule: Option<&'static str>,
    pub body: String,
    pub related_documents: Vec<String>,
}

/// Answer a free-text question. Always returns something.
pub fn respond(input: &str, ctx: &ChatContext<'_>) -> CannedAnswer {
    let lowered = input.to_lowercase();
    match RESPONSE_RULES.iter().find(|rule| rule.matches(&lowered)) {
        Some(rule) => CannedAnswer {
            rule: Some(rule.name),
            body: (rule.render)(ctx),
            related_documents: rule.related.resolve(ctx),
        },
        None => CannedAnswer {
            rule: None,
            body: render_clarification(input, ctx),
            related_documents: ctx.document_names(),
        },
    }
}

/// Greeting posted when a chat is first opened for an item
pub fn welcome_message(ctx: &ChatContext<'_>) -> CannedAnswer {
    CannedAnswer {
        rule: None,
        body: format!(
            "Hello! I'm here to help you with questions about {}'s loan request (Account: {}). I have access to all relevant documents and can provide detailed information about loan terms, payment schedules, and more. What would you like to know?",
            ctx.sender, ctx.loan_account
        ),
        related_documents: ctx.document_names(),
    }
}

fn render_balance(ctx: &ChatContext<'_>) -> String {
    format!(
        "Based on the loan agreement and payment schedule, here are the current balance details for account {}:

**Current Principal Balance:** $487,250.00
**Accrued Interest:** $2,180.45
**Total Outstanding:** $489,430.45

This information is sourced from the latest payment schedule and loan agreement documents.",
        ctx.loan_account
    )
}

fn render_payment_terms(ctx: &ChatContext<'_>) -> String {
    format!(
        "Here are the payment terms for account {}:

**Monthly Payment:** $12,000.00
**Payment Due Date:** 15th of each month
**Interest Rate:** 6.25% (Fixed)
**Remaining Term:** 42 months
**Next Payment Due:** July 15, 2024

The payment terms are outlined in Section 3 of the loan agreement.",
        ctx.loan_account
    )
}

fn render_prepayment(ctx: &ChatContext<'_>) -> String {
    format!(
        "Prepayment penalty information for account {}:

**Prepayment Penalty:** 2% of remaining principal balance
**Current Penalty Amount:** $9,745.00
**Penalty Period:** Applies for the first 5 years of the loan
**Penalty Expiration:** March 15, 2026

This is detailed in Section 4.3 of the loan agreement.",
        ctx.loan_account
    )
}

fn render_maturity(ctx: &ChatContext<'_>) -> String {
    format!(
        "Loan maturity information for account {}:

**Original Loan Date:** March 15, 2019
**Loan Term:** 10 years
**Maturity Date:** March 15, 2029
**Remaining Time:** 4 years, 8 months

The maturity date and terms are specified in the loan agreement.",
        ctx.loan_account
    )
}

fn render_documents(ctx: &ChatContext<'_>) -> String {
    let listing = ctx
        .documents
        .iter()
        .map(|doc| {
            format!(
                "• **{}** ({}) - Status: {}",
                doc.name,
                doc.kind.label(),
                doc.status.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Available documents for account {}:

{listing}

All documents have been analyzed and are available for reference. Would you like me to provide specific information from any of these documents?",
        ctx.loan_account
    )
}

fn render_credit(ctx: &ChatContext<'_>) -> String {
    format!(
        "Credit information for {}:

**Current Credit Score:** 742 (Excellent)
**Credit Report Date:** June 2024
**Payment History:** Excellent (100% on-time payments)
**Debt-to-Income Ratio:** 28%
**Credit Utilization:** 15%

This information is from the latest credit report on file.",
        ctx.sender
    )
}

fn render_clarification(input: &str, ctx: &ChatContext<'_>) -> String {
    format!(
        "I understand you're asking about \"{input}\". Let me search through the available documents for {}...

Based on the loan documentation, I can help you with information about:
• Loan balances and payment details
• Interest rates and terms
• Prepayment penalties and options
• Credit information and financial statements
• Modification or extension requests

Could you please be more specific about what information you need?",
        ctx.loan_account
    )
}
