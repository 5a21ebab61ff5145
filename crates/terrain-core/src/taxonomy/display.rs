//! Presentation metadata, kept apart from the identifier enums so the
//! classifier never touches copy.

use super::{EnergyTendency, Modifier, PrimaryType, TemperatureTendency};

/// Label and nickname for a primary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDisplay {
    pub label: &'static str,
    pub nickname: &'static str,
}

/// Label and one-line description for a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierDisplay {
    pub label: &'static str,
    pub description: &'static str,
}

pub fn primary_type(primary: PrimaryType) -> TypeDisplay {
    let (label, nickname) = match primary {
        PrimaryType::ColdDeficient => ("Cold + Deficient", "Low Flame"),
        PrimaryType::ColdBalanced => ("Cold + Balanced", "Cool Core"),
        PrimaryType::NeutralDeficient => ("Neutral + Deficient", "Low Battery"),
        PrimaryType::NeutralBalanced => ("Neutral + Balanced", "Steady Core"),
        PrimaryType::NeutralExcess => ("Neutral + Excess", "Busy Mind"),
        PrimaryType::WarmDeficient => ("Warm + Deficient", "Overclocked"),
        PrimaryType::WarmBalanced => ("Warm + Balanced", "High Flame"),
        PrimaryType::WarmExcess => ("Warm + Excess", "Overdrive"),
    };
    TypeDisplay { label, nickname }
}

pub fn modifier(modifier: Modifier) -> ModifierDisplay {
    let (label, description) = match modifier {
        Modifier::Shen => ("Restless Mind", "Sleep and mood run unsettled."),
        Modifier::Stagnation => ("Stuck", "Tension builds and does not move through."),
        Modifier::Damp => ("Damp", "Heaviness and sluggish digestion."),
        Modifier::Dry => ("Dry", "Dry skin and persistent thirst."),
        Modifier::None => ("Balanced", "No secondary pattern stands out."),
    };
    ModifierDisplay { label, description }
}

pub fn temperature(tendency: TemperatureTendency) -> &'static str {
    match tendency {
        TemperatureTendency::Cold => "Runs cold",
        TemperatureTendency::Neutral => "Even temperature",
        TemperatureTendency::Warm => "Runs warm",
    }
}

pub fn energy(tendency: EnergyTendency) -> &'static str {
    match tendency {
        EnergyTendency::Deficient => "Low reserves",
        EnergyTendency::Balanced => "Steady reserves",
        EnergyTendency::Excess => "Surplus drive",
    }
}
