use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Lifecycle of an inbox item.
///
/// `Processing` covers everything from the first analysis stage until the
/// drafted reply is sent; finer-grained milestones only appear in the
/// activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Pending,
    Processing,
    Completed,
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    EarlyPayoff,
    Modification,
    Extension,
    CreditIncrease,
    Restructure,
    LoanExtension,
}

impl RequestType {
    /// Human-readable label ("early payoff", "credit increase", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::EarlyPayoff => "early payoff",
            Self::Modification => "modification",
            Self::Extension => "extension",
            Self::CreditIncrease => "credit increase",
            Self::Restructure => "restructure",
            Self::LoanExtension => "loan extension",
        }
    }
}

/// A simulated inbound loan request email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxItem {
    pub id: u32,
    pub from: String,
    pub subject: String,
    /// Display string only ("2 hours ago"), never parsed
    pub timestamp: String,
    pub priority: Priority,
    pub status: ItemStatus,
    pub loan_account: String,
    pub request_type: RequestType,
    pub preview: String,
    /// Set when the arrival simulator injects the item, cleared once processing starts
    pub is_new: bool,
}

impl InboxItem {
    /// Requests that still need attention (anything not yet completed)
    pub fn is_active(&self) -> bool {
        self.status != ItemStatus::Completed
    }
}

/// Split a sender address into (local part, domain).
///
/// Addresses without an `@` are treated as all local part and all domain, so
/// neither half is ever empty for a non-empty address.
pub fn split_address(address: &str) -> (&str, &str) {
    match address.split_once('@') {
        Some((local, domain)) => {
            let domain = domain.split('@').next().unwrap_or(domain);
            (local, domain)
        }
        None => (address, address),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_address() {
        assert_eq!(split_address("jane.doe@x.com"), ("jane.doe", "x.com"));
        assert_eq!(split_address("ops"), ("ops", "ops"));
        assert_eq!(split_address("a@b@c"), ("a", "b"));
    }

    #[test]
    fn test_request_type_labels_use_spaces() {
        assert_eq!(RequestType::CreditIncrease.label(), "credit increase");
        assert_eq!(RequestType::LoanExtension.label(), "loan extension");
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ItemStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let json = serde_json::to_string(&RequestType::EarlyPayoff).unwrap();
        assert_eq!(json, "\"early_payoff\"");
    }
}
