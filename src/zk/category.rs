use clap::ValueEnum;
use std::fmt;
use std::ops::Index;

/// The kinds of note zk knows how to write. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum NoteCategory {
    Fleeting,
    Literature,
    Daily,
    Meeting,
    Permanent,
}

/// Compile-time defaults for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDefaults {
    /// Option name used in the `[Template Names]` and
    /// `[Note Destination Directory Names]` sections.
    pub key: &'static str,
    pub template_name: &'static str,
    pub folder: &'static str,
}

const DEFAULTS: [CategoryDefaults; 5] = [
    CategoryDefaults {
        key: "fleeting",
        template_name: "fleetingYYMMDD-HHMMtopic.md",
        folder: "Fleeting",
    },
    CategoryDefaults {
        key: "literature",
        template_name: "literature.md",
        folder: "Literature",
    },
    CategoryDefaults {
        key: "daily",
        template_name: "dailyYYMMDD.md",
        folder: "Fleeting",
    },
    CategoryDefaults {
        key: "meeting",
        template_name: "meetingYYMMDDtopic.md",
        folder: "Fleeting",
    },
    CategoryDefaults {
        key: "permanent",
        template_name: "permanent.md",
        folder: "Permanent",
    },
];

impl NoteCategory {
    /// All categories, in the order they appear in a config file.
    pub const ALL: [NoteCategory; 5] = [
        NoteCategory::Fleeting,
        NoteCategory::Literature,
        NoteCategory::Daily,
        NoteCategory::Meeting,
        NoteCategory::Permanent,
    ];

    fn slot(self) -> usize {
        match self {
            NoteCategory::Fleeting => 0,
            NoteCategory::Literature => 1,
            NoteCategory::Daily => 2,
            NoteCategory::Meeting => 3,
            NoteCategory::Permanent => 4,
        }
    }

    pub fn defaults(self) -> &'static CategoryDefaults {
        &DEFAULTS[self.slot()]
    }

    pub fn key(self) -> &'static str {
        self.defaults().key
    }
}

impl fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A fixed-size map with exactly one value per [`NoteCategory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap<T> {
    slots: [T; 5],
}

impl<T> CategoryMap<T> {
    /// Builds a map by calling `f` once per category, in [`NoteCategory::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(NoteCategory) -> T) -> Self {
        Self {
            slots: NoteCategory::ALL.map(&mut f),
        }
    }

    /// Like [`CategoryMap::from_fn`], stopping at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(NoteCategory) -> Result<T, E>) -> Result<Self, E> {
        let mut values = Vec::with_capacity(NoteCategory::ALL.len());
        for category in NoteCategory::ALL {
            values.push(f(category)?);
        }
        let slots = match values.try_into() {
            Ok(slots) => slots,
            Err(_) => unreachable!("one value per category"),
        };
        Ok(Self { slots })
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteCategory, &T)> {
        NoteCategory::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T> Index<NoteCategory> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: NoteCategory) -> &T {
        &self.slots[category.slot()]
    }
}
