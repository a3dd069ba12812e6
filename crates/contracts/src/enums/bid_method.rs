use serde::{Deserialize, Serialize};

/// How the winning bidder is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidMethod {
    #[serde(rename = "electronic")]
    Electronic,
    #[serde(rename = "direct")]
    Direct,
}

impl BidMethod {
    pub fn code(&self) -> &'static str {
        match self {
            BidMethod::Electronic => "electronic",
            BidMethod::Direct => "direct",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BidMethod::Electronic => "전자입찰",
            BidMethod::Direct => "직접입찰",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "electronic" => Some(BidMethod::Electronic),
            "direct" => Some(BidMethod::Direct),
            _ => None,
        }
    }
}
