//! Aggregate states of chemical species.

use crate::charge::parse_charge;

/// Physical grouping of a species (aqueous, gaseous, ion exchange, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AggregateState {
    Gas,
    Liquid,
    Solid,
    Plasma,
    CondensedPhase,
    Fluid,
    LiquidCrystal,
    CrystallineSolid,
    AmorphousSolid,
    Vitreous,
    Adsorbed,
    Monomeric,
    Polymeric,
    SolidSolution,
    IonExchange,
    Aqueous,
    #[default]
    Undefined,
}

impl AggregateState {
    pub const ALL: [AggregateState; 17] = [
        AggregateState::Gas,
        AggregateState::Liquid,
        AggregateState::Solid,
        AggregateState::Plasma,
        AggregateState::CondensedPhase,
        AggregateState::Fluid,
        AggregateState::LiquidCrystal,
        AggregateState::CrystallineSolid,
        AggregateState::AmorphousSolid,
        AggregateState::Vitreous,
        AggregateState::Adsorbed,
        AggregateState::Monomeric,
        AggregateState::Polymeric,
        AggregateState::SolidSolution,
        AggregateState::IonExchange,
        AggregateState::Aqueous,
        AggregateState::Undefined,
    ];

    /// Short tag used in species name suffixes, e.g. `ex` in `NaX(ex)`.
    ///
    /// Returns `None` for `Undefined`.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            AggregateState::Gas => Some("g"),
            AggregateState::Liquid => Some("l"),
            AggregateState::Solid => Some("s"),
            AggregateState::Plasma => Some("pl"),
            AggregateState::CondensedPhase => Some("cd"),
            AggregateState::Fluid => Some("fl"),
            AggregateState::LiquidCrystal => Some("lc"),
            AggregateState::CrystallineSolid => Some("cr"),
            AggregateState::AmorphousSolid => Some("am"),
            AggregateState::Vitreous => Some("vit"),
            AggregateState::Adsorbed => Some("ads"),
            AggregateState::Monomeric => Some("mon"),
            AggregateState::Polymeric => Some("pol"),
            AggregateState::SolidSolution => Some("ss"),
            AggregateState::IonExchange => Some("ex"),
            AggregateState::Aqueous => Some("aq"),
            AggregateState::Undefined => None,
        }
    }

    /// Map a short tag to its state; unknown tags are `Undefined`.
    pub fn from_symbol(symbol: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|state| state.symbol() == Some(symbol.trim()))
            .unwrap_or(AggregateState::Undefined)
    }

    /// Identify the aggregate state of a species from its name.
    ///
    /// A trailing tag like `(g)` or `(ex)` wins. Otherwise a charged name
    /// is taken as aqueous, and anything else is `Undefined`.
    pub fn identify(name: &str) -> Self {
        if let (_, Some(tag)) = split_state_suffix(name) {
            let state = Self::from_symbol(tag);
            if state != AggregateState::Undefined {
                return state;
            }
        }
        match parse_charge(name) {
            Ok(charge) if charge != 0 => AggregateState::Aqueous,
            _ => AggregateState::Undefined,
        }
    }
}

impl std::fmt::Display for AggregateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            AggregateState::Gas => "Gas",
            AggregateState::Liquid => "Liquid",
            AggregateState::Solid => "Solid",
            AggregateState::Plasma => "Plasma",
            AggregateState::CondensedPhase => "CondensedPhase",
            AggregateState::Fluid => "Fluid",
            AggregateState::LiquidCrystal => "LiquidCrystal",
            AggregateState::CrystallineSolid => "CrystallineSolid",
            AggregateState::AmorphousSolid => "AmorphousSolid",
            AggregateState::Vitreous => "Vitreous",
            AggregateState::Adsorbed => "Adsorbed",
            AggregateState::Monomeric => "Monomeric",
            AggregateState::Polymeric => "Polymeric",
            AggregateState::SolidSolution => "SolidSolution",
            AggregateState::IonExchange => "IonExchange",
            AggregateState::Aqueous => "Aqueous",
            AggregateState::Undefined => "Undefined",
        };
        f.write_str(text)
    }
}

/// Split a trailing aggregate-state tag off a formula or species name.
///
/// The tag is a parenthesized run of lowercase letters at the very end:
/// `"CO2(g)"` splits into `("CO2", Some("g"))`. Groups holding anything
/// else (`"Ca(OH)"`, `"Cl(-)"`) are left alone.
pub fn split_state_suffix(text: &str) -> (&str, Option<&str>) {
    let trimmed = text.trim_end();
    if !trimmed.ends_with(')') {
        return (trimmed, None);
    }
    let Some(open) = trimmed.rfind('(') else {
        return (trimmed, None);
    };
    let tag = &trimmed[open + 1..trimmed.len() - 1];
    if !tag.is_empty() && tag.chars().all(|c| c.is_ascii_lowercase()) {
        (&trimmed[..open], Some(tag))
    } else {
        (trimmed, None)
    }
}
