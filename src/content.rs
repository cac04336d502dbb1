//! The fixed labels drawn on the placemat, kept apart from the layout code.

use placemat_style::{Palette, Tone};
use placemat_types::Color;

/// A titled group of product labels packed into a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupContent {
    pub id: &'static str,
    pub title: &'static str,
    pub tone: Tone,
    /// Grid columns. For the infrastructure row this is also the group's width in units.
    pub columns: usize,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendKind {
    Entitled,
    Opportunity,
    Explore,
    AtRisk,
}

impl LegendKind {
    pub fn label(self) -> &'static str {
        match self {
            LegendKind::Entitled => "Entitled",
            LegendKind::Opportunity => "Opportunity",
            LegendKind::Explore => "Explore",
            LegendKind::AtRisk => "No Interest/At Risk",
        }
    }

    pub fn color(self, palette: &Palette) -> Color {
        match self {
            LegendKind::Entitled => palette.legend_entitled,
            LegendKind::Opportunity => palette.legend_opportunity,
            LegendKind::Explore => palette.legend_explore,
            LegendKind::AtRisk => palette.legend_at_risk,
        }
    }
}

pub const LEGEND: [LegendKind; 4] = [
    LegendKind::Entitled,
    LegendKind::Opportunity,
    LegendKind::Explore,
    LegendKind::AtRisk,
];

pub const ELA_BADGE: &str = "★ ELA Product";
pub const CLIENT_ENGINEERING: &str = "IBM Client Engineering (CE)";
pub const SECURITY: &str = "Security";
pub const RED_HAT: &str = "Red Hat OpenShift";
pub const FOOTER: [&str; 2] = [
    "IBM Technology Lifecycle Services (TLS)",
    "IBM Expert Labs (EL)",
];

pub static DATA_SECURITY: GroupContent = GroupContent {
    id: "data-security",
    title: "Data Security",
    tone: Tone::Blue,
    columns: 1,
    items: &[
        "Guardium Data Encryption",
        "Guardium Data Protection",
        "Guardium Data Security Center",
        "Guardium Discover and Classify",
        "Guardium Key Lifecycle Management",
    ],
};

pub static IDENTITY_ACCESS: GroupContent = GroupContent {
    id: "identity-access",
    title: "Identity & Access Mgmt",
    tone: Tone::Purple,
    columns: 1,
    items: &[
        "HashiCorp Boundary",
        "HashiCorp Consul",
        "HashiCorp Vault",
        "ILMT",
        "Security Verify (IAM)",
        "Security MaaS 360",
        "Trusteer (Anti-fraud)",
    ],
};

pub static CLIENT_APPLICATIONS: GroupContent = GroupContent {
    id: "client-applications",
    title: "Client Applications",
    tone: Tone::Grey,
    columns: 8,
    items: &[
        "ERP",
        "CRM",
        "B2B",
        "B2C",
        "B2E",
        "Omnichannel",
        "CRM (on-prem)",
        "IA",
        "Fraud",
        "Credit",
        "PCP",
        "Supply Chain",
        "Engineering / Network",
        "Portal / Mobile / APP",
        "Payment Instantaneous",
        "Customer Service",
    ],
};

pub static PILLARS: [GroupContent; 6] = [
    GroupContent {
        id: "pillar-1",
        title: "AI Assistants",
        tone: Tone::Blue,
        columns: 2,
        items: &[
            "Automation",
            "Blueworks Live",
            "Business Analytics",
            "Business Automation",
            "CP4BA",
            "Cognos Analytics",
            "Decision Mgmt",
            "Planning Analytics",
            "Process Mining",
            "RPA",
            "SPSS Modeler",
            "watsonx Assistants",
            "watsonx BI Assistant",
            "watsonx Code Assistant",
            "watsonx Orchestrate",
            "Workflow Automation",
        ],
    },
    GroupContent {
        id: "pillar-2",
        title: "AI/MLOps",
        tone: Tone::Blue,
        columns: 1,
        items: &[
            "CP4D",
            "OpenPages",
            "Orchestrate (SaaS)",
            "WCA Ansible & Java",
            "WCAz",
            "watsonx.ai",
            "watsonx.governance",
        ],
    },
    GroupContent {
        id: "pillar-3",
        title: "Databases",
        tone: Tone::Blue,
        columns: 2,
        items: &[
            "CM8",
            "CMOD",
            "CP4D",
            "Capture",
            "Cloudera",
            "Content",
            "DB2",
            "Database Eco",
            "FileNet",
            "Hadoop",
            "Informix",
            "Netezza",
            "watsonx.data",
            "watsonx.ai (SaaS)",
        ],
    },
    GroupContent {
        id: "pillar-4",
        title: "Data Intelligence",
        tone: Tone::Blue,
        columns: 1,
        items: &[
            "CP4D",
            "Data Product Hub",
            "Decision Optimization",
            "Knowledge Catalog",
            "Manta Data Lineage",
            "Optim & Master Data Mgmt",
            "SPSS Stats",
        ],
    },
    GroupContent {
        id: "pillar-5",
        title: "Data Integration",
        tone: Tone::Blue,
        columns: 1,
        items: &[
            "CP4D",
            "Data Fabric",
            "Data Integration",
            "DataStage",
            "Databand",
            "Replication",
            "StreamSets",
        ],
    },
    GroupContent {
        id: "pillar-6",
        title: "Asset Lifecycle Mgmt",
        tone: Tone::Purple,
        columns: 1,
        items: &[
            "EI",
            "Envizi",
            "HashiCorp Terraform",
            "Maximo",
            "Sterling Order & Inventory Mgmt",
            "Supply Chain",
            "TRIRIGA",
        ],
    },
];

pub static APP_ROW: [GroupContent; 2] = [
    GroupContent {
        id: "application-development",
        title: "Application Development",
        tone: Tone::Purple,
        columns: 4,
        items: &[
            "App Run",
            "CP4Apps",
            "CP4Systems",
            "DevOps",
            "ELM",
            "Project Harmony",
            "Runtimes",
            "Spectrum LSF",
            "UnifyBlue",
            "WAS",
            "WCA Java",
            "Web Hybrid ED",
        ],
    },
    GroupContent {
        id: "application-integration",
        title: "Application Integration",
        tone: Tone::Purple,
        columns: 4,
        items: &[
            "API Connect",
            "APP Connect",
            "Aspera",
            "CP4I",
            "Connect:Direct",
            "DataPower",
            "DataPower Dashboard",
            "Event Automation",
            "FTM",
            "MQ",
            "Sterling B2B Integrator",
            "WebMethods",
        ],
    },
];

pub static IT_AUTOMATION: GroupContent = GroupContent {
    id: "it-automation",
    title: "IT Automation & Finops",
    tone: Tone::Purple,
    columns: 1,
    items: &[
        "Ansible",
        "Apptio",
        "Cloud Pak for AIOps",
        "Cloudability",
        "Concert",
        "Flexera One",
        "HashiCorp Terraform",
        "Instana",
        "Kubecost",
        "Operations Insights",
        "Targetprocess",
        "Turbonomic",
        "Workload Automation",
    ],
};

pub static NETWORK_MANAGEMENT: GroupContent = GroupContent {
    id: "network-management",
    title: "Network Mgmt",
    tone: Tone::Purple,
    columns: 1,
    items: &[
        "CP4NA",
        "Cloud Network Security",
        "Content Delivery Network",
        "Edge Application Manager",
        "HashiCorp Nomad",
        "Hybrid Cloud Mesh",
        "NS1 Connect",
        "SevOne",
    ],
};

pub static ENTERPRISE_STORAGE: GroupContent = GroupContent {
    id: "enterprise-storage",
    title: "Enterprise Storage",
    tone: Tone::Grey,
    columns: 1,
    items: &["DS8000 Series", "SAN Directors", "Tape (Hydra & Jaguar)/VTS"],
};

pub static INFRASTRUCTURE: [GroupContent; 4] = [
    GroupContent {
        id: "infrastructure-1",
        title: "Data Resilience Storage",
        tone: Tone::Grey,
        columns: 3,
        items: &[
            "Scale",
            "Scale System",
            "Ceph",
            "CoS",
            "Defender/Protect",
            "Flash",
            "Fusion",
            "Fusion HCI",
            "Fusion HCI (on-prem)",
            "Hyperscaler",
            "SVC",
            "Ceph System",
            "Storage Insight",
            "Storage Virtualize",
            "Tape",
        ],
    },
    GroupContent {
        id: "infrastructure-2",
        title: "Power",
        tone: Tone::Grey,
        columns: 2,
        items: &["AIX", "IBM i", "Linux", "Oracle", "Red Hat OpenShift", "SAP"],
    },
    GroupContent {
        id: "infrastructure-3",
        title: "Z System",
        tone: Tone::Grey,
        columns: 2,
        items: &[
            "AI on Z",
            "IBM LinuxOne",
            "IBM zOS",
            "Z Monitoring Suite",
            "Z Security",
            "Z Software",
        ],
    },
    GroupContent {
        id: "infrastructure-4",
        title: "Cloud",
        tone: Tone::Grey,
        columns: 2,
        items: &[
            "Cloud Financial Server",
            "Cloud Satellite",
            "Power Virtual Server",
            "Red Hat OpenShift",
            "SAP",
            "VMware",
        ],
    },
];

/// Every group with a packed grid, in drawing order.
pub fn all_groups() -> impl Iterator<Item = &'static GroupContent> {
    [&DATA_SECURITY, &IDENTITY_ACCESS, &CLIENT_APPLICATIONS]
        .into_iter()
        .chain(PILLARS.iter())
        .chain(APP_ROW.iter())
        .chain([&IT_AUTOMATION, &NETWORK_MANAGEMENT, &ENTERPRISE_STORAGE])
        .chain(INFRASTRUCTURE.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_counts() {
        let counts: Vec<(&str, usize)> = all_groups().map(|g| (g.title, g.items.len())).collect();
        assert_eq!(
            counts,
            vec![
                ("Data Security", 5),
                ("Identity & Access Mgmt", 7),
                ("Client Applications", 16),
                ("AI Assistants", 16),
                ("AI/MLOps", 7),
                ("Databases", 14),
                ("Data Intelligence", 7),
                ("Data Integration", 7),
                ("Asset Lifecycle Mgmt", 7),
                ("Application Development", 12),
                ("Application Integration", 12),
                ("IT Automation & Finops", 13),
                ("Network Mgmt", 8),
                ("Enterprise Storage", 3),
                ("Data Resilience Storage", 15),
                ("Power", 6),
                ("Z System", 6),
                ("Cloud", 6),
            ]
        );
    }

    #[test]
    fn test_ids_are_unique_and_columns_positive() {
        let mut seen = HashSet::new();
        for group in all_groups() {
            assert!(seen.insert(group.id), "duplicate id {}", group.id);
            assert!(group.columns >= 1);
        }
    }

    #[test]
    fn test_infrastructure_spans_nine_units() {
        let units: usize = INFRASTRUCTURE.iter().map(|g| g.columns).sum();
        assert_eq!(units, 9);
    }
}
