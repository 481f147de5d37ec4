//! Company tier classification against a static registry of well-known enterprises.

use serde::{Deserialize, Serialize};

pub const ENTERPRISE_SIZE: &str = "Enterprise";
pub const STARTUP_SIZE: &str = "Startup / Mid-size";
pub const UNKNOWN_COMPANY: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyIntel {
    pub name: String,
    pub size: String,
    pub industry: String,
    pub focus: String,
}

impl CompanyIntel {
    pub fn is_enterprise(&self) -> bool {
        self.size == ENTERPRISE_SIZE
    }
}

const KNOWN_ENTERPRISES: &[&str] = &[
    "Google",
    "Microsoft",
    "Amazon",
    "Apple",
    "Meta",
    "Facebook",
    "Netflix",
    "TCS",
    "Infosys",
    "Wipro",
    "Accenture",
    "Cognizant",
    "HCL",
    "Capgemini",
    "IBM",
    "Oracle",
    "SAP",
    "Cisco",
    "Intel",
    "Adobe",
    "Salesforce",
    "Uber",
    "LinkedIn",
    "Twitter",
    "X",
    "Airbnb",
    "Flipkart",
    "Myntra",
    "Swiggy",
    "Zomato",
    "Paytm",
    "PhonePe",
    "Razorpay",
    "Ola",
    "Jio",
    "Reliance",
    "Tata",
];

/// Names that mark a company as enterprise-tier when they appear anywhere in the
/// company string (case-insensitive).
#[derive(Debug, Clone, Copy)]
pub struct CompanyRegistry {
    enterprises: &'static [&'static str],
}

impl CompanyRegistry {
    pub const fn new(enterprises: &'static [&'static str]) -> Self {
        Self { enterprises }
    }

    pub const fn reference() -> Self {
        Self::new(KNOWN_ENTERPRISES)
    }

    pub fn is_enterprise(&self, company: &str) -> bool {
        let company_lower = company.to_lowercase();
        self.enterprises
            .iter()
            .any(|e| company_lower.contains(&e.to_lowercase()))
    }
}

impl Default for CompanyRegistry {
    fn default() -> Self {
        Self::reference()
    }
}

/// Classifies `company` into the enterprise or startup/mid-size tier.
/// A blank company is named "Unknown" and lands in the startup tier.
pub fn classify_company(registry: &CompanyRegistry, company: &str) -> CompanyIntel {
    let trimmed = company.trim();
    let (name, enterprise) = if trimmed.is_empty() {
        (UNKNOWN_COMPANY.to_string(), false)
    } else {
        (company.to_string(), registry.is_enterprise(company))
    };

    if enterprise {
        CompanyIntel {
            name,
            size: ENTERPRISE_SIZE.to_string(),
            industry: "Global Tech / Service".to_string(),
            focus: "Structured Process: Strong emphasis on DSA, CS Fundamentals, and consistency."
                .to_string(),
        }
    } else {
        CompanyIntel {
            name,
            size: STARTUP_SIZE.to_string(),
            industry: "Product / Agile Tech".to_string(),
            focus: "Practical Skills: Emphasis on problem solving, building things, and adaptability."
                .to_string(),
        }
    }
}
