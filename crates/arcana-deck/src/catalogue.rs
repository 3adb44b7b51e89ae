//! The standard card catalogue.
//!
//! Read-only reference data: all 22 Major Arcana plus sample pips from each
//! minor suit. Lookups go through [`Catalogue::standard`], which is built
//! once and shared for the life of the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::card::{Card, MeaningBundle, Suit};

/// The card catalogue: an immutable set of cards with name-keyed lookup.
#[derive(Debug)]
pub struct Catalogue {
    cards: Vec<Card>,
    by_name: HashMap<String, usize>,
}

impl Catalogue {
    /// Build a catalogue from a card list. Later duplicates shadow earlier
    /// entries in the name index.
    pub fn new(cards: Vec<Card>) -> Self {
        let by_name = cards
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        Self { cards, by_name }
    }

    /// The shared standard catalogue.
    pub fn standard() -> &'static Catalogue {
        static STANDARD: LazyLock<Catalogue> = LazyLock::new(|| Catalogue::new(standard_cards()));
        &STANDARD
    }

    /// Look up a card by its exact name.
    pub fn card_by_name(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).map(|&i| &self.cards[i])
    }

    /// Every card name, in catalogue order.
    pub fn all_card_names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name.as_str()).collect()
    }

    /// All cards, in catalogue order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the catalogue.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards belonging to a suit, in catalogue order.
    pub fn cards_by_suit(&self, suit: Suit) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.suit == suit).collect()
    }

    /// Cards whose name, keywords, or upright meanings mention a keyword
    /// (case-insensitive substring match).
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&Card> {
        let needle = keyword.to_lowercase();
        self.cards
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.keywords.iter().any(|k| k.to_lowercase().contains(&needle))
                    || c.upright.meaning.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// Shorthand card constructor for the static data below. The two meaning
/// arrays are ordered general, love, career, health.
fn card(
    name: &str,
    number: u32,
    suit: Suit,
    keywords: [&str; 4],
    upright: [&str; 4],
    reversed: [&str; 4],
) -> Card {
    let bundle = |m: [&str; 4]| MeaningBundle {
        meaning: m[0].to_string(),
        love: m[1].to_string(),
        career: m[2].to_string(),
        health: m[3].to_string(),
    };
    Card {
        name: name.to_string(),
        number,
        suit,
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        upright: bundle(upright),
        reversed: bundle(reversed),
    }
}

fn standard_cards() -> Vec<Card> {
    use Suit::*;
    vec![
        card(
            "The Fool", 0, MajorArcana,
            ["new beginnings", "innocence", "spontaneity", "adventure"],
            [
                "A fresh start full of possibility, an open heart and a free spirit",
                "A new romance beginning, a relationship rich with potential",
                "A new opportunity, fresh ideas, the courage to try",
                "A clean slate for body and mind, leaving old habits behind",
            ],
            [
                "Recklessness, lack of planning, rash decisions, missed chances",
                "An immature attachment lacking commitment",
                "Inexperience and unrealistic plans",
                "Lack of discipline, neglected wellbeing",
            ],
        ),
        card(
            "The Magician", 1, MajorArcana,
            ["power", "skill", "focus", "action"],
            [
                "Every tool needed to realize the goal is at hand, with sharp focus",
                "The power to shape the relationship you want, pursued with intent",
                "The skills for success and the will to lead",
                "Renewed vitality and balance of body and mind",
            ],
            [
                "Self-doubt, wasted talent, manipulation, scattered energy",
                "Controlling behavior, a relationship built on half-truths",
                "Talents misapplied, direction lost",
                "Energy out of balance, mounting pressure",
            ],
        ),
        card(
            "The High Priestess", 2, MajorArcana,
            ["intuition", "mystery", "wisdom", "inner voice"],
            [
                "Listen to inner wisdom and trust intuition over appearances",
                "A connection on a deeper, almost wordless level",
                "Work that rewards instinct, research, and quiet study",
                "Attend to the body's subtle signals, seek inner balance",
            ],
            [
                "Intuition ignored, surfaces mistaken for depth, secrets surfacing",
                "A relationship that never goes below the surface",
                "Decisions made against one's better judgment",
                "Warning signs overlooked, inner rhythms disturbed",
            ],
        ),
        card(
            "The Empress", 3, MajorArcana,
            ["abundance", "creativity", "nurturing", "nature"],
            [
                "Creative abundance, generosity, and harmony with the natural world",
                "A relationship overflowing with warmth, possibly new family",
                "Creative work flourishing, a team in harmony, a rich harvest",
                "Fertility and flourishing physical health",
            ],
            [
                "Creative block, smothering care, dependence on others",
                "Affection that suffocates rather than supports",
                "Ideas that will not come, effort without fruit",
                "Depleted vitality, neglected self-care",
            ],
        ),
        card(
            "The Emperor", 4, MajorArcana,
            ["authority", "structure", "control", "stability"],
            [
                "Steady leadership, order established, structure that protects",
                "A stable, committed relationship built on responsibility",
                "Recognition of authority, success through structure",
                "A disciplined routine, systematic recovery",
            ],
            [
                "Power abused, control gripped too tightly, rigidity",
                "Domination in place of warmth",
                "Power struggles, leadership missing",
                "Stress from over-control, discipline collapsed",
            ],
        ),
        card(
            "The Hierophant", 5, MajorArcana,
            ["tradition", "guidance", "morality", "learning"],
            [
                "Conventional wisdom, spiritual guidance, the value of tradition",
                "Traditional values in a relationship, thoughtful commitment",
                "Institutions, mentorship, and established ways of working",
                "Proven remedies and care for the spirit",
            ],
            [
                "Rebellion against convention, authority questioned, rules upended",
                "An unconventional bond that tests expectations",
                "Challenging the system, innovation over precedent",
                "Alternative approaches, old habits rejected",
            ],
        ),
        card(
            "The Lovers", 6, MajorArcana,
            ["love", "choice", "harmony", "union"],
            [
                "Deep affection, a meaningful choice, two paths becoming one",
                "A profound bond and an important decision of the heart",
                "A strong partnership, values aligned, a choice that matters",
                "Harmony of body and heart, supported by a partner",
            ],
            [
                "Imbalance, a wrong turn, values in conflict, separation",
                "A relationship at a crossroads, values clashing",
                "A partnership fraying, choices avoided",
                "Disharmony, support missing",
            ],
        ),
        card(
            "The Chariot", 7, MajorArcana,
            ["willpower", "determination", "control", "victory"],
            [
                "Will strong enough to steer opposing forces toward victory",
                "Working hard for the relationship and pulling through",
                "Obstacles overcome by sheer determination",
                "The will to recover, strength winning through",
            ],
            [
                "Control slipping, direction unclear, momentum lost",
                "Wavering commitment, a relationship adrift",
                "Resolve faltering, goals out of focus",
                "Willpower flagging, persistence needed",
            ],
        ),
        card(
            "Strength", 8, MajorArcana,
            ["inner strength", "courage", "patience", "gentleness"],
            [
                "Quiet courage, patience taming what force cannot",
                "Gentle strength, understanding that holds a bond together",
                "Influence through composure rather than command",
                "The body's own healing power, patient recovery",
            ],
            [
                "Self-doubt, inner fear, control lost to temper",
                "Insecurity and flaring emotions",
                "Confidence shaken, a short fuse",
                "Strain on the nerves, patience exhausted",
            ],
        ),
        card(
            "The Hermit", 9, MajorArcana,
            ["introspection", "searching", "wisdom", "guidance"],
            [
                "A withdrawal inward to find wisdom by one's own lamp",
                "Time alone to understand what the heart truly wants",
                "Reflection before the next step, deep study",
                "Rest, retreat, and inner repair",
            ],
            [
                "Isolation, help refused, lost in one's own maze",
                "Withdrawal that shuts love out",
                "Working sealed off from all counsel",
                "Healing attempted without guidance",
            ],
        ),
        card(
            "Wheel of Fortune", 10, MajorArcana,
            ["fate", "change", "cycles", "opportunity"],
            [
                "The wheel turns: luck arrives, cycles close, a chance appears",
                "A turning point in the relationship, fate lending a hand",
                "A break in the clouds, opportunity knocking",
                "A turn for the better, recovery beginning",
            ],
            [
                "A downturn, events beyond control, a chance slipping by",
                "A low ebb, timing working against the heart",
                "Plans stalled, opportunity missed",
                "A setback, progress paused",
            ],
        ),
        card(
            "Justice", 11, MajorArcana,
            ["fairness", "balance", "truth", "consequence"],
            [
                "Truth weighed fairly, actions meeting their consequences",
                "Honesty and fairness deciding the relationship's course",
                "A fair outcome, contracts and judgments resolved",
                "Balance restored through honest assessment",
            ],
            [
                "Unfairness, accounts unsettled, truth bent",
                "An imbalance of give and take",
                "An unjust result, responsibility dodged",
                "Imbalance ignored, habits unexamined",
            ],
        ),
        card(
            "The Hanged Man", 12, MajorArcana,
            ["surrender", "new perspective", "pause", "sacrifice"],
            [
                "A willing pause that turns the world over and shows it anew",
                "Patience and a fresh way of seeing the other",
                "Progress through letting go rather than pushing",
                "Rest that heals more than effort would",
            ],
            [
                "Stalling without purpose, sacrifice without meaning",
                "Waiting that has become avoidance",
                "Delay draining momentum",
                "Recovery postponed needlessly",
            ],
        ),
        card(
            "Death", 13, MajorArcana,
            ["endings", "transformation", "transition", "renewal"],
            [
                "An ending that clears the ground for what must come next",
                "One chapter closing so a truer one can open",
                "An old role ending, transformation at work",
                "An old pattern dying, renewal beginning",
            ],
            [
                "Change resisted, an ending dragged out, stagnation",
                "Clinging to what has already finished",
                "Refusing a necessary change of course",
                "Holding to habits that no longer serve",
            ],
        ),
        card(
            "Temperance", 14, MajorArcana,
            ["balance", "moderation", "patience", "blending"],
            [
                "Opposites blended with patience into something greater",
                "A measured, harmonious partnership",
                "Cooperation and the long steady road",
                "Moderation restoring equilibrium",
            ],
            [
                "Excess, impatience, elements refusing to mix",
                "Extremes pulling the relationship apart",
                "Haste undoing careful work",
                "Imbalance from overindulgence",
            ],
        ),
        card(
            "The Devil", 15, MajorArcana,
            ["bondage", "temptation", "materialism", "shadow"],
            [
                "Chains accepted willingly: attachment, temptation, the shadow side",
                "Passion shading into possession or dependence",
                "Golden handcuffs, ambition serving appetite",
                "A habit that has taken the reins",
            ],
            [
                "Chains examined and loosened, a pattern broken",
                "Breaking free of an unhealthy dynamic",
                "Walking away from a gilded cage",
                "An addiction confronted at last",
            ],
        ),
        card(
            "The Tower", 16, MajorArcana,
            ["upheaval", "revelation", "collapse", "awakening"],
            [
                "A sudden collapse of what was built on false ground",
                "A shock that exposes the relationship's true foundation",
                "Abrupt disruption, structures falling away",
                "A jolt that demands immediate attention",
            ],
            [
                "Disaster narrowly averted, or collapse postponed and feared",
                "A crisis dreaded more than faced",
                "Clinging to a structure already cracked",
                "A warning heeded just in time",
            ],
        ),
        card(
            "The Star", 17, MajorArcana,
            ["hope", "renewal", "inspiration", "serenity"],
            [
                "Hope restored after the storm, quiet faith in the future",
                "Healing and renewed faith in love",
                "Inspiration returning, a guiding light for the work",
                "Gentle recovery, spirits lifting",
            ],
            [
                "Hope dimmed, faith wavering, inspiration out of reach",
                "Discouragement clouding the heart",
                "A creative well run dry",
                "Recovery slower than hoped",
            ],
        ),
        card(
            "The Moon", 18, MajorArcana,
            ["illusion", "uncertainty", "dreams", "subconscious"],
            [
                "A path lit only by moonlight: illusion, anxiety, hidden currents",
                "Doubts and things left unsaid between two people",
                "A situation less clear than it appears",
                "Unease whose source hides below the surface",
            ],
            [
                "Fog lifting, fears named, confusion resolving",
                "Misunderstandings clearing at last",
                "Hidden matters coming to light",
                "Anxiety easing as causes emerge",
            ],
        ),
        card(
            "The Sun", 19, MajorArcana,
            ["joy", "success", "vitality", "clarity"],
            [
                "Warmth, success, and everything seen in full daylight",
                "Open-hearted happiness shared freely",
                "Achievement recognized, work in full bloom",
                "Vitality high, health shining",
            ],
            [
                "Clouds over the sun: joy delayed, confidence dipped",
                "Happiness dimmed by small shadows",
                "Success present but not yet felt",
                "Energy lower than usual",
            ],
        ),
        card(
            "Judgement", 20, MajorArcana,
            ["reckoning", "awakening", "renewal", "calling"],
            [
                "A summons to rise, take stock, and answer a higher call",
                "An honest reckoning renewing the relationship",
                "A career calling heard clearly, past work redeemed",
                "A wake-up call taken to heart",
            ],
            [
                "The call unheard, self-judgment too harsh or absent",
                "Old grievances replayed instead of released",
                "Doubt drowning out the calling",
                "Warnings dismissed, renewal refused",
            ],
        ),
        card(
            "The World", 21, MajorArcana,
            ["completion", "fulfillment", "integration", "wholeness"],
            [
                "The circle closed: completion, fulfillment, the journey whole",
                "A relationship reaching deep fulfillment",
                "A long effort crowned with success",
                "Wholeness of body and mind achieved",
            ],
            [
                "The last step unfinished, closure just out of reach",
                "Something unresolved keeping hearts apart",
                "A project stalled at the finish line",
                "Recovery incomplete, persistence required",
            ],
        ),
        card(
            "Ace of Wands", 1, Wands,
            ["new beginnings", "creativity", "inspiration", "opportunity"],
            [
                "A spark of creative fire, an enterprise eager to begin",
                "A new attraction burning bright",
                "A fresh venture or role full of promise",
                "New energy for a new regimen",
            ],
            [
                "The spark sputtering, direction missing, chances wasted",
                "Passion failing to catch",
                "A project delayed, inspiration dry",
                "Motivation absent, plans abandoned",
            ],
        ),
        card(
            "Two of Wands", 2, Wands,
            ["planning", "decision", "personal power", "waiting"],
            [
                "The world in hand and a plan forming, waiting for the moment",
                "Weighing the future of the relationship",
                "Long-range planning, a choice of direction",
                "A long-term plan for wellbeing",
            ],
            [
                "No plan, hesitation, fear of the wider world",
                "Unable to choose a direction for the heart",
                "Short sight and cold feet",
                "Plans half-made and half-kept",
            ],
        ),
        card(
            "Three of Wands", 3, Wands,
            ["expansion", "foresight", "leadership", "enterprise"],
            [
                "Ships sent out and horizons widening, foresight rewarded",
                "A relationship growing, perhaps across distance",
                "Expansion, trade, leadership stepping forward",
                "Broadening the approach to health",
            ],
            [
                "Horizons shrinking, ventures delayed, vision narrowed",
                "A relationship that has stopped growing",
                "Expansion stalled, leadership missing",
                "Progress blocked, perspective lost",
            ],
        ),
        card(
            "Ace of Cups", 1, Cups,
            ["new love", "emotion", "intuition", "fulfillment"],
            [
                "The heart's cup filled to overflowing, love freely given",
                "A new love, a deep emotional connection",
                "Satisfaction in work, warmth in the team",
                "Emotional healing, a lighter heart",
            ],
            [
                "The cup tipped: feelings blocked, love withheld, emptiness",
                "Affection dammed up, connection missing",
                "Discontent and strained relations at work",
                "Emotional weight pressing on health",
            ],
        ),
        card(
            "Two of Cups", 2, Cups,
            ["partnership", "union", "attraction", "harmony"],
            [
                "Two cups raised together: mutual attraction, honest exchange",
                "A matched pair, partnership, perhaps marriage",
                "A working alliance built on trust",
                "Harmony sustained by a partner's support",
            ],
            [
                "The toast broken: imbalance, separation, words unspoken",
                "A couple out of step, communication failing",
                "A partnership pulling in two directions",
                "Disharmony without support",
            ],
        ),
        card(
            "Ace of Swords", 1, Swords,
            ["clarity", "breakthrough", "truth", "intellect"],
            [
                "A blade of clarity cutting to the truth of the matter",
                "Seeing the relationship clearly, speaking plainly",
                "A breakthrough idea, a sharp analysis",
                "A mental breakthrough, clear-eyed treatment",
            ],
            [
                "The blade clouded: confusion, miscommunication, a blunted mind",
                "Misunderstanding and crossed words",
                "Muddled thinking, decisions misfiring",
                "A clouded mind, reason overruled",
            ],
        ),
        card(
            "Two of Swords", 2, Swords,
            ["stalemate", "difficult choice", "balance", "avoidance"],
            [
                "Blindfolded between two blades: a truce that cannot hold",
                "A choice in the relationship weighed coolly",
                "A career decision balanced on its edge",
                "A treatment choice weighed with care",
            ],
            [
                "The blindfold slipping: indecision, overload, inner conflict",
                "Unable to choose, the heart divided",
                "A decision dodged too long",
                "Treatment postponed by hesitation",
            ],
        ),
        card(
            "Ace of Pentacles", 1, Pentacles,
            ["opportunity", "prosperity", "practicality", "security"],
            [
                "A coin offered from the clouds: material opportunity, solid ground",
                "A relationship with a stable, practical foundation",
                "A new position or income, tangible gain",
                "Practical steps improving physical health",
            ],
            [
                "The coin dropped: a chance lost, foundations shaky",
                "Material worries straining the bond",
                "An opportunity fumbled, finances uncertain",
                "Practical care neglected",
            ],
        ),
        card(
            "Two of Pentacles", 2, Pentacles,
            ["balance", "adaptability", "juggling", "flexibility"],
            [
                "Two coins kept dancing: priorities juggled with grace",
                "Balancing love with life's other demands",
                "Many tasks kept aloft, adaptable and nimble",
                "Balancing rest and exertion",
            ],
            [
                "A coin about to fall: overcommitment, balance lost",
                "The relationship squeezed out by busyness",
                "Too many tasks, all of them slipping",
                "Overextension taking its toll",
            ],
        ),
    ]
}
