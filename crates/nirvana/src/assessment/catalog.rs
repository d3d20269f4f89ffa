use super::domain::{AssessmentError, Definition, Item, Scale};
use std::sync::OnceLock;
use tracing::debug;

pub const BUSS_PERRY: &str = "buss-perry";
pub const BUSS_DURKEE: &str = "buss-durkee";
pub const ANGER_SELF_REPORT: &str = "anger-self-report";

/// Read-only set of questionnaires available to every attempt.
#[derive(Debug)]
pub struct Catalog {
    definitions: Vec<Definition>,
}

impl Catalog {
    /// The three questionnaires shipped with the app, built on first use.
    pub fn bundled() -> &'static Catalog {
        static BUNDLED: OnceLock<Catalog> = OnceLock::new();
        BUNDLED.get_or_init(|| {
            let catalog = Catalog {
                definitions: bundled_definitions(),
            };
            debug!(
                definitions = catalog.definitions.len(),
                "bundled assessment catalog initialized"
            );
            catalog
        })
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn get(&self, definition_id: &str) -> Option<&Definition> {
        self.definitions
            .iter()
            .find(|definition| definition.id() == definition_id)
    }

    pub fn require(&self, definition_id: &str) -> Result<&Definition, AssessmentError> {
        self.get(definition_id)
            .ok_or_else(|| AssessmentError::UnknownDefinition(definition_id.to_string()))
    }
}

type ItemSpec = (&'static str, &'static str, bool);

fn definition(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    items: &[ItemSpec],
) -> Definition {
    let items = items
        .iter()
        .map(|&(item_id, text, reverse)| Item {
            id: item_id.to_string(),
            text: text.to_string(),
            reverse,
        })
        .collect();

    Definition::new(id, title, description, Scale::LIKERT_FIVE, items)
        .expect("bundled questionnaires are well-formed")
}

fn bundled_definitions() -> Vec<Definition> {
    vec![
        definition(
            BUSS_PERRY,
            "Buss-Perry Aggression Questionnaire",
            "Measures physical aggression, verbal anger, and hostility.",
            BUSS_PERRY_ITEMS,
        ),
        definition(
            BUSS_DURKEE,
            "Buss-Durkee Hostility Inventory",
            "Assesses various aspects of hostility and aggression.",
            BUSS_DURKEE_ITEMS,
        ),
        definition(
            ANGER_SELF_REPORT,
            "Anger Self-Report Questionnaire",
            "Evaluates your personal experiences and expressions of anger.",
            ANGER_SELF_REPORT_ITEMS,
        ),
    ]
}

const BUSS_PERRY_ITEMS: &[ItemSpec] = &[
    ("bp1", "I sometimes find it hard to control my temper.", false),
    ("bp2", "I tell my friends openly when I disagree with them.", false),
    ("bp3", "I flare up quickly but get over it quickly.", false),
    ("bp4", "I am sometimes eaten up with jealousy.", false),
    ("bp5", "Given enough provocation, I may hit another person.", false),
    ("bp6", "I often find myself disagreeing with people.", false),
    ("bp7", "When frustrated, I let my irritation show.", false),
    ("bp8", "At times I feel I have gotten a raw deal out of life.", false),
    ("bp9", "If somebody hits me, I hit back.", false),
    ("bp10", "When people annoy me, I may tell them what I think of them.", false),
    ("bp11", "I sometimes feel like a powder keg ready to explode.", false),
    ("bp12", "Other people always seem to get the breaks.", false),
    ("bp13", "I get into fights a little more than the average person.", false),
    ("bp14", "I can't help getting into arguments when people disagree with me.", false),
    ("bp15", "I am an even-tempered person.", true),
    ("bp16", "I wonder why sometimes I feel so bitter about things.", false),
    ("bp17", "If I have to resort to violence to protect my rights, I will.", false),
    ("bp18", "My friends say that I'm somewhat argumentative.", false),
    ("bp19", "Some of my friends think I'm a hothead.", false),
    ("bp20", "I know that friends talk about me behind my back.", false),
    ("bp21", "There are people who pushed me so far that we came to blows.", false),
    ("bp22", "Sometimes I fly off the handle for no good reason.", false),
    ("bp23", "I am suspicious of overly friendly strangers.", false),
    ("bp24", "I can think of no good reason for ever hitting a person.", true),
    ("bp25", "I have trouble controlling my temper.", false),
    ("bp26", "I sometimes feel that people are laughing at me behind my back.", false),
    ("bp27", "I have threatened people I know.", false),
    ("bp28", "When people are especially nice, I wonder what they want.", false),
    ("bp29", "I have become so mad that I have broken things.", false),
];

const BUSS_DURKEE_ITEMS: &[ItemSpec] = &[
    ("bd1", "I rarely strike back, even if someone hits me first.", true),
    ("bd2", "I sometimes spread gossip about people I don't like.", false),
    ("bd3", "Unless somebody asks me in a nice way, I won't do what they want.", false),
    ("bd4", "I lose my temper easily but get over it quickly.", false),
    ("bd5", "I don't seem to get what's coming to me.", false),
    ("bd6", "I know that people tend to talk about me behind my back.", false),
    ("bd7", "When I disapprove of my friends' behavior, I let them know it.", false),
    ("bd8", "The few times I have cheated, I have suffered unbearable feelings of remorse.", false),
    ("bd9", "Once in a while I cannot control my urge to harm others.", false),
    ("bd10", "I never get mad enough to throw things.", true),
    ("bd11", "Sometimes people bother me just by being around.", false),
    ("bd12", "When someone makes a rule I don't like, I am tempted to break it.", false),
    ("bd13", "Other people always seem to get the breaks.", false),
    (
        "bd14",
        "I tend to be on my guard with people who are somewhat more friendly than I expected.",
        false,
    ),
    ("bd15", "I often find myself disagreeing with people.", false),
    ("bd16", "I sometimes have bad thoughts which make me feel ashamed of myself.", false),
    ("bd17", "I can think of no good reason for ever hitting anyone.", true),
    ("bd18", "When I am angry, I sometimes sulk.", false),
    ("bd19", "When someone is bossy, I do the opposite of what he asks.", false),
    ("bd20", "I am irritated a great deal more than people are aware of.", false),
];

const ANGER_SELF_REPORT_ITEMS: &[ItemSpec] = &[
    ("asr1", "I am quick tempered.", false),
    ("asr2", "I have a fiery temper.", false),
    ("asr3", "I am a hotheaded person.", false),
    ("asr4", "I get angry when I'm slowed down by others' mistakes.", false),
    ("asr5", "I feel annoyed when I am not given recognition for doing good work.", false),
    ("asr6", "I fly off the handle easily.", false),
    ("asr7", "When I get mad, I say nasty things.", false),
    ("asr8", "It makes me furious when I am criticized in front of others.", false),
    ("asr9", "When I get frustrated, I feel like hitting someone.", false),
    ("asr10", "I feel infuriated when I do a good job and get a poor evaluation.", false),
    ("asr11", "I get angry quickly but get over it quickly.", false),
    ("asr12", "When frustrated, I let my irritation show.", false),
    ("asr13", "I sometimes feel like a powder keg ready to explode.", false),
    ("asr14", "I am an even-tempered person.", true),
    ("asr15", "Some of my friends think I'm a hothead.", false),
];
