//! Static content of the computing paradigms deck.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    /// Bold lead-in, e.g. "COTS:"; empty for plain bullets.
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub cluster: &'static str,
    pub grid: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Dabhi Pranav",
        id: "1036",
    },
    TeamMember {
        name: "Parekh Ishit",
        id: "1183",
    },
    TeamMember {
        name: "Dodiya Manav",
        id: "1160",
    },
    TeamMember {
        name: "Yagnik Krupali",
        id: "1173",
    },
    TeamMember {
        name: "Pari",
        id: "----",
    },
];

pub const REFERENCES: &[&str] = &[
    "Tanenbaum, A. S., & Van Steen, M. (2007). Distributed Systems: Principles and Paradigms.",
    "Foster, I., & Kesselman, C. (2003). The Grid 2: Blueprint for a New Computing Infrastructure.",
    "Buyya, R. (1999). High Performance Cluster Computing: Architectures and Systems.",
    "Top500.org. (2024). TOP500 Supercomputer Sites.",
];

pub const HPC_DEFINITION: &str = "The use of supercomputers and parallel processing \
    techniques to solve complex computational problems.";

pub const HPC_BULLETS: &[Bullet] = &[
    Bullet {
        label: "",
        text: "Focuses on performance (FLOPS).",
    },
    Bullet {
        label: "",
        text: "Used for weather forecasting, molecular modeling, and physical simulations.",
    },
    Bullet {
        label: "",
        text: "Historically relies on specialized hardware (Vector processors, GPUs).",
    },
];

pub const DISTRIBUTED_DEFINITION: &str = "A field of computer science that studies systems \
    consisting of autonomous computers that communicate through a computer network.";

pub const DISTRIBUTED_CARDS: &[FeatureCard] = &[
    FeatureCard {
        title: "Transparency",
        description: "System appears as a single entity to users.",
    },
    FeatureCard {
        title: "Scalability",
        description: "Easily add resources to handle load.",
    },
    FeatureCard {
        title: "Reliability",
        description: "No single point of failure.",
    },
];

pub const CLUSTER_DEFINITION: &str = "A set of loosely or tightly connected computers that \
    work together so that, in many respects, they can be viewed as a single system.";

pub const CLUSTER_BULLETS: &[Bullet] = &[
    Bullet {
        label: "COTS:",
        text: "Commercial Off-The-Shelf hardware.",
    },
    Bullet {
        label: "LAN:",
        text: "Typically connected via high-speed local networks.",
    },
    Bullet {
        label: "SSI:",
        text: "Single System Image middleware.",
    },
    Bullet {
        label: "Examples:",
        text: "Beowulf clusters.",
    },
];

pub const GRID_DEFINITION: &str = "A distributed architecture of large numbers of distinct \
    systems to solve a single complex problem.";

pub const GRID_BULLETS: &[Bullet] = &[
    Bullet {
        label: "Heterogeneous:",
        text: "Different OS, hardware, policies.",
    },
    Bullet {
        label: "Virtual Orgs:",
        text: "Dynamic collections of individuals/institutions.",
    },
    Bullet {
        label: "Wide Area:",
        text: "Distributed across geography.",
    },
];

pub const COMPARISON_HEADERS: [&str; 3] = ["Feature", "Cluster Computing", "Grid Computing"];

pub const COMPARISON: &[ComparisonRow] = &[
    ComparisonRow {
        feature: "Coupling",
        cluster: "Tightly Coupled",
        grid: "Loosely Coupled",
    },
    ComparisonRow {
        feature: "Hardware",
        cluster: "Homogeneous (mostly)",
        grid: "Heterogeneous",
    },
    ComparisonRow {
        feature: "Management",
        cluster: "Centralized",
        grid: "Decentralized",
    },
    ComparisonRow {
        feature: "Network",
        cluster: "LAN (Low Latency)",
        grid: "WAN (High Latency)",
    },
    ComparisonRow {
        feature: "Security",
        cluster: "Single Domain trust",
        grid: "Cross-Domain trust",
    },
];

pub const CONCLUSION: &[&str] = &[
    "While HPC pushes the boundaries of raw processing speed, distributed paradigms like \
     Grid and Cluster computing allow us to scale beyond the physical limits of a single \
     machine.",
    "Understanding these paradigms is essential for modern cloud architecture, big data \
     processing, and scientific research.",
];

pub const CONCLUSION_QUOTE: &str = "\u{201C}The network is the computer.\u{201D}";
