use std::fmt;
use std::str::FromStr;

/// What the tree builder does when several records share a component name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later record takes over the name; children attach under it
    #[default]
    LastWins,
    /// The build fails with `DuplicateComponentName`
    Reject,
}

/// What the tree builder does with a record whose parent name resolves to nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// The record is left out of the forest and listed in the diagnostics
    #[default]
    Drop,
    /// The build fails with `OrphanRecord`
    Reject,
}

/// BuildPolicy bundles the structural policies applied by the tree builder
///
/// The default reproduces the lenient behavior the record API has always
/// been browsed with: last duplicate wins, orphans are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildPolicy {
    pub duplicates: DuplicatePolicy,
    pub orphans: OrphanPolicy,
}

impl BuildPolicy {
    pub fn new(duplicates: DuplicatePolicy, orphans: OrphanPolicy) -> Self {
        Self {
            duplicates,
            orphans,
        }
    }

    /// Rejects both duplicates and orphans
    pub fn strict() -> Self {
        Self::new(DuplicatePolicy::Reject, OrphanPolicy::Reject)
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "last-wins" | "last_wins" | "lastwins" => Ok(DuplicatePolicy::LastWins),
            "reject" => Ok(DuplicatePolicy::Reject),
            _ => Err(format!(
                "Invalid duplicate policy: {}. Please specify 'last-wins' or 'reject'",
                s
            )),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::LastWins => write!(f, "last-wins"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for OrphanPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drop" => Ok(OrphanPolicy::Drop),
            "reject" => Ok(OrphanPolicy::Reject),
            _ => Err(format!(
                "Invalid orphan policy: {}. Please specify 'drop' or 'reject'",
                s
            )),
        }
    }
}

impl fmt::Display for OrphanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrphanPolicy::Drop => write!(f, "drop"),
            OrphanPolicy::Reject => write!(f, "reject"),
        }
    }
}
