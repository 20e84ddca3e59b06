pub mod content;

use thiserror::Error;

use content::{Bullet, ComparisonRow, FeatureCard, TeamMember};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a slide registry needs at least one slide")]
    Empty,
}

/// Which animated diagram a slide embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    ProcessingBars,
    Cluster,
    Grid,
}

/// What a slide shows. Each variant has a dedicated layout in `render::layouts`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideContent {
    Intro {
        headline: &'static str,
        tagline: &'static str,
        team: &'static [TeamMember],
    },
    Definition {
        subtitle: &'static str,
        definition: &'static str,
        bullets: &'static [Bullet],
        diagram: DiagramKind,
        diagram_first: bool,
    },
    Cards {
        subtitle: &'static str,
        lead: &'static str,
        cards: &'static [FeatureCard],
    },
    Comparison {
        subtitle: &'static str,
        headers: [&'static str; 3],
        rows: &'static [ComparisonRow],
    },
    Conclusion {
        paragraphs: &'static [&'static str],
        quote: &'static str,
    },
    References {
        entries: &'static [&'static str],
    },
    Closing {
        headline: &'static str,
        prompt: &'static str,
    },
}

impl SlideContent {
    pub fn diagram(&self) -> Option<DiagramKind> {
        match self {
            Self::Definition { diagram, .. } => Some(*diagram),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub content: SlideContent,
}

/// Ordered, immutable list of slides. Position is the only identity a slide has.
#[derive(Debug, Clone)]
pub struct SlideRegistry {
    slides: Vec<Slide>,
}

impl SlideRegistry {
    pub fn new(slides: Vec<Slide>) -> Result<Self, RegistryError> {
        if slides.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { slides })
    }

    /// The computing paradigms deck.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin_slides())
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

}

fn builtin_slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Computing Paradigms",
            content: SlideContent::Intro {
                headline: "Computing Paradigms",
                tagline: "High-Performance, Distributed, Cluster, and Grid",
                team: content::TEAM,
            },
        },
        Slide {
            title: "High-Performance Computing (HPC)",
            content: SlideContent::Definition {
                subtitle: "The Quest for Speed",
                definition: content::HPC_DEFINITION,
                bullets: content::HPC_BULLETS,
                diagram: DiagramKind::ProcessingBars,
                diagram_first: false,
            },
        },
        Slide {
            title: "Distributed Computing",
            content: SlideContent::Cards {
                subtitle: "Divide and Conquer",
                lead: content::DISTRIBUTED_DEFINITION,
                cards: content::DISTRIBUTED_CARDS,
            },
        },
        Slide {
            title: "Cluster Computing",
            content: SlideContent::Definition {
                subtitle: "Strength in Numbers",
                definition: content::CLUSTER_DEFINITION,
                bullets: content::CLUSTER_BULLETS,
                diagram: DiagramKind::Cluster,
                diagram_first: false,
            },
        },
        Slide {
            title: "Grid Computing",
            content: SlideContent::Definition {
                subtitle: "The Virtual Supercomputer",
                definition: content::GRID_DEFINITION,
                bullets: content::GRID_BULLETS,
                diagram: DiagramKind::Grid,
                diagram_first: true,
            },
        },
        Slide {
            title: "Cluster vs. Grid",
            content: SlideContent::Comparison {
                subtitle: "Key Differences",
                headers: content::COMPARISON_HEADERS,
                rows: content::COMPARISON,
            },
        },
        Slide {
            title: "Conclusion",
            content: SlideContent::Conclusion {
                paragraphs: content::CONCLUSION,
                quote: content::CONCLUSION_QUOTE,
            },
        },
        Slide {
            title: "References",
            content: SlideContent::References {
                entries: content::REFERENCES,
            },
        },
        Slide {
            title: "Thank You",
            content: SlideContent::Closing {
                headline: "Thank You",
                prompt: "Any Questions?",
            },
        },
    ]
}
