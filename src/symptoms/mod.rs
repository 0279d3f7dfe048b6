mod loader;

use std::fmt;

pub use loader::{load_symptom_file, parse_symptom_lines, SymptomInput};

pub const SYMPTOM_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symptom {
    PersistentCough,
    ChestPain,
    ShortnessOfBreath,
    UnexplainedWeightLoss,
    Fatigue,
    Hoarseness,
    CoughingUpBlood,
    FrequentLungInfections,
    LossOfAppetite,
    SwellingInNeckOrFace,
}

impl Symptom {
    /// Checklist order.
    pub const ALL: [Symptom; SYMPTOM_COUNT] = [
        Symptom::PersistentCough,
        Symptom::ChestPain,
        Symptom::ShortnessOfBreath,
        Symptom::UnexplainedWeightLoss,
        Symptom::Fatigue,
        Symptom::Hoarseness,
        Symptom::CoughingUpBlood,
        Symptom::FrequentLungInfections,
        Symptom::LossOfAppetite,
        Symptom::SwellingInNeckOrFace,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Symptom::PersistentCough => "Persistent Cough",
            Symptom::ChestPain => "Chest Pain",
            Symptom::ShortnessOfBreath => "Shortness of Breath",
            Symptom::UnexplainedWeightLoss => "Unexplained Weight Loss",
            Symptom::Fatigue => "Fatigue",
            Symptom::Hoarseness => "Hoarseness",
            Symptom::CoughingUpBlood => "Coughing up Blood",
            Symptom::FrequentLungInfections => "Frequent Lung Infections",
            Symptom::LossOfAppetite => "Loss of Appetite",
            Symptom::SwellingInNeckOrFace => "Swelling in Neck or Face",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Symptom::PersistentCough => "persistent-cough",
            Symptom::ChestPain => "chest-pain",
            Symptom::ShortnessOfBreath => "shortness-of-breath",
            Symptom::UnexplainedWeightLoss => "unexplained-weight-loss",
            Symptom::Fatigue => "fatigue",
            Symptom::Hoarseness => "hoarseness",
            Symptom::CoughingUpBlood => "coughing-up-blood",
            Symptom::FrequentLungInfections => "frequent-lung-infections",
            Symptom::LossOfAppetite => "loss-of-appetite",
            Symptom::SwellingInNeckOrFace => "swelling-in-neck-or-face",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Symptom::PersistentCough => "Persistent cough lasting more than 3 weeks",
            Symptom::ChestPain => "Chest pain, especially when breathing deeply or coughing",
            Symptom::ShortnessOfBreath => "Shortness of breath",
            Symptom::UnexplainedWeightLoss => "Unexplained weight loss",
            Symptom::Fatigue => "Feeling unusually tired all the time",
            Symptom::Hoarseness => "Hoarseness or voice changes",
            Symptom::CoughingUpBlood => "Coughing up blood, even small amounts",
            Symptom::FrequentLungInfections => "Frequent lung infections (pneumonia, bronchitis)",
            Symptom::LossOfAppetite => "Loss of appetite",
            Symptom::SwellingInNeckOrFace => "Swelling in neck or face",
        }
    }

    /// Matches a label ("Chest Pain") or id ("chest-pain"), ignoring case and
    /// surrounding whitespace.
    pub fn lookup(name: &str) -> Option<Symptom> {
        let needle = name.trim();
        if needle.is_empty() {
            return None;
        }
        Symptom::ALL.into_iter().find(|s| {
            s.label().eq_ignore_ascii_case(needle) || s.id().eq_ignore_ascii_case(needle)
        })
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presence flags over the fixed symptom checklist. Built fresh for every
/// interaction and never mutated in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SymptomSet {
    flags: [bool; SYMPTOM_COUNT],
}

impl SymptomSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            flags: [true; SYMPTOM_COUNT],
        }
    }

    pub fn with(mut self, symptom: Symptom) -> Self {
        self.flags[symptom.index()] = true;
        self
    }

    pub fn with_flag(mut self, symptom: Symptom, present: bool) -> Self {
        self.flags[symptom.index()] = present;
        self
    }

    pub fn is_present(&self, symptom: Symptom) -> bool {
        self.flags[symptom.index()]
    }

    pub fn present(&self) -> impl Iterator<Item = Symptom> + '_ {
        Symptom::ALL.into_iter().filter(|s| self.is_present(*s))
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Builds a set from named flags. Names outside the checklist are
    /// returned separately and do not affect the set.
    pub fn from_named_flags<I, S>(entries: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut set = SymptomSet::new();
        let mut unknown = Vec::new();
        for (name, present) in entries {
            match Symptom::lookup(name.as_ref()) {
                Some(symptom) => {
                    if present {
                        set = set.with(symptom);
                    }
                }
                None => unknown.push(name.as_ref().trim().to_string()),
            }
        }
        (set, unknown)
    }
}

impl FromIterator<Symptom> for SymptomSet {
    fn from_iter<T: IntoIterator<Item = Symptom>>(iter: T) -> Self {
        iter.into_iter().fold(SymptomSet::new(), SymptomSet::with)
    }
}
