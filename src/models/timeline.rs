/// One era shown as an orb in the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub title: &'static str,
    pub era: &'static str,
    pub description: &'static str,
}

pub const TIMELINE_EVENTS: [TimelineEvent; 5] = [
    TimelineEvent {
        title: "Ancient Civilizations",
        era: "3000 BCE",
        description: "The foundation stones of eternal knowledge",
    },
    TimelineEvent {
        title: "Medieval Mysticism",
        era: "1200 CE",
        description: "Gothic spires reaching toward the infinite",
    },
    TimelineEvent {
        title: "Renaissance Innovation",
        era: "1500 CE",
        description: "Art and science merge in perfect harmony",
    },
    TimelineEvent {
        title: "Digital Revolution",
        era: "2000 CE",
        description: "Information flows like rivers of light",
    },
    TimelineEvent {
        title: "Quantum Future",
        era: "2500 CE",
        description: "Reality bends to consciousness itself",
    },
];
