//! Hardcoded demo data: the initial inbox and the queue of future arrivals.

use crate::models::{InboxItem, ItemStatus, Priority, RequestType};

#[allow(clippy::too_many_arguments)]
fn item(
    id: u32,
    from: &str,
    subject: &str,
    timestamp: &str,
    priority: Priority,
    status: ItemStatus,
    loan_account: &str,
    request_type: RequestType,
    preview: &str,
    is_new: bool,
) -> InboxItem {
    InboxItem {
        id,
        from: from.to_string(),
        subject: subject.to_string(),
        timestamp: timestamp.to_string(),
        priority,
        status,
        loan_account: loan_account.to_string(),
        request_type,
        preview: preview.to_string(),
        is_new,
    }
}

/// Items visible when the demo starts
pub fn seed_inbox() -> Vec<InboxItem> {
    vec![
        item(
            1,
            "john.smith@techcorp.com",
            "Request for Early Loan Payoff - Account #LC-2024-0158",
            "2 hours ago",
            Priority::High,
            ItemStatus::Pending,
            "LC-2024-0158",
            RequestType::EarlyPayoff,
            "Hi, I would like to discuss paying off my commercial loan early. Could you please provide me with the payoff amount and any prepayment penalties?",
            false,
        ),
        item(
            2,
            "sarah.jones@retailplus.com",
            "Loan Modification Request - Account #LC-2023-0892",
            "4 hours ago",
            Priority::High,
            ItemStatus::Completed,
            "LC-2023-0892",
            RequestType::Modification,
            "We are requesting a modification to our loan terms due to changes in our business cash flow. Please review our request.",
            false,
        ),
        item(
            3,
            "mike.williams@constructco.com",
            "Payment Extension Request - Account #LC-2024-0245",
            "1 day ago",
            Priority::Low,
            ItemStatus::Completed,
            "LC-2024-0245",
            RequestType::Extension,
            "Due to unexpected project delays, we are requesting a 30-day payment extension on our next installment.",
            false,
        ),
    ]
}

/// Items the arrival simulator injects, in order
pub fn pending_arrivals() -> Vec<InboxItem> {
    vec![
        item(
            4,
            "lisa.chen@manufactureplus.com",
            "Credit Line Increase Request - Account #LC-2024-0089",
            "Just now",
            Priority::High,
            ItemStatus::Pending,
            "LC-2024-0089",
            RequestType::CreditIncrease,
            "We would like to request an increase to our credit line from $500K to $750K to support our expansion plans.",
            true,
        ),
        item(
            5,
            "robert.kim@logistics.com",
            "Loan Restructuring Request - Account #LC-2023-0456",
            "Just now",
            Priority::High,
            ItemStatus::Pending,
            "LC-2023-0456",
            RequestType::Restructure,
            "Due to market changes, we need to restructure our loan terms. Please review our updated financial statements.",
            true,
        ),
        item(
            7,
            "david.thompson@realestatedev.com",
            "Construction Loan Extension - Account #LC-2023-0334",
            "Just now",
            Priority::High,
            ItemStatus::Pending,
            "LC-2023-0334",
            RequestType::LoanExtension,
            "Our construction project needs a 6-month extension due to permit delays. Please review our request.",
            true,
        ),
    ]
}
