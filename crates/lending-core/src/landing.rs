//! Landing page catalogue: feature tiles and the static recent-activity list.

use serde::Serialize;

pub const EMAIL_AGENT_TILE: &str = "email-agent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStatus {
    Active,
    ComingSoon,
}

impl TileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingTile {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: TileStatus,
    /// Notice shown when an inactive tile is opened
    pub unavailable_notice: &'static str,
}

pub const LANDING_TILES: [LandingTile; 6] = [
    LandingTile {
        id: EMAIL_AGENT_TILE,
        title: "Email Request Processing",
        description: "AI-powered email processing for loan requests, modifications, and customer inquiries",
        status: TileStatus::Active,
        unavailable_notice: "",
    },
    LandingTile {
        id: "qc-validation",
        title: "Quality Control & Validation",
        description: "Post-booking QC processes, loan validation, and compliance checking",
        status: TileStatus::ComingSoon,
        unavailable_notice: "QC Module - Coming Soon",
    },
    LandingTile {
        id: "document-analysis",
        title: "Document Analysis",
        description: "AI-powered document review, extraction, and risk assessment",
        status: TileStatus::ComingSoon,
        unavailable_notice: "Document Analysis - Coming Soon",
    },
    LandingTile {
        id: "risk-assessment",
        title: "Risk Assessment",
        description: "Automated risk scoring, credit analysis, and decision support",
        status: TileStatus::ComingSoon,
        unavailable_notice: "Risk Assessment - Coming Soon",
    },
    LandingTile {
        id: "compliance-monitoring",
        title: "Compliance Monitoring",
        description: "Real-time compliance checks, regulatory reporting, and audit trails",
        status: TileStatus::ComingSoon,
        unavailable_notice: "Compliance Monitoring - Coming Soon",
    },
    LandingTile {
        id: "analytics-dashboard",
        title: "Analytics & Reporting",
        description: "Performance metrics, trend analysis, and business intelligence",
        status: TileStatus::ComingSoon,
        unavailable_notice: "Analytics Dashboard - Coming Soon",
    },
];

/// (message, when) pairs for the landing page feed
pub const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("Email request processed for TechCorp Industries", "2 minutes ago"),
    ("New loan modification request received", "15 minutes ago"),
    ("Document analysis completed for 3 loan applications", "1 hour ago"),
];

pub fn tile(id: &str) -> Option<&'static LandingTile> {
    LANDING_TILES.iter().find(|t| t.id == id)
}

/// Stats line under a tile
pub fn tile_stats(tile: &LandingTile, inbox_len: usize) -> String {
    match tile.status {
        TileStatus::Active => format!("{inbox_len} active requests"),
        TileStatus::ComingSoon => TileStatus::ComingSoon.label().to_string(),
    }
}

/// Initials for the operator badge ("Rachel Ji" -> "RJ")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
