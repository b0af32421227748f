use super::pricing::WeightClass;

/// Sums package weights. Entries that are not finite, non-negative numbers count as zero.
pub fn total_weight(weights: &[f64]) -> f64 {
    weights
        .iter()
        .copied()
        .filter(|weight| weight.is_finite() && *weight > 0.0)
        .sum()
}

/// Reads a live-typed weight. Accepts `,` as decimal separator; anything unparsable is zero.
pub fn parse_weight(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedClass<'a> {
    pub index: usize,
    pub class: &'a WeightClass,
    /// The weight lies above every band and was clamped to the last one.
    pub clamped: bool,
}

/// Finds the weight class for `weight_kg`.
///
/// The first band with `min <= weight <= max` wins. A weight that falls into a gap between
/// two bands belongs to the band below the gap; a weight above every band is clamped to the
/// last band. Returns `None` only for an empty band list.
pub fn resolve_weight_class(weight_kg: f64, classes: &[WeightClass]) -> Option<ResolvedClass<'_>> {
    if let Some((index, class)) = classes
        .iter()
        .enumerate()
        .find(|(_, class)| class.contains(weight_kg))
    {
        return Some(ResolvedClass {
            index,
            class,
            clamped: false,
        });
    }

    let last_index = classes.len().checked_sub(1)?;
    let last = &classes[last_index];
    if weight_kg <= last.max {
        if let Some((index, class)) = classes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, class)| class.min <= weight_kg)
        {
            return Some(ResolvedClass {
                index,
                class,
                clamped: false,
            });
        }
    }

    tracing::warn!(
        weight_kg,
        class = %last.label,
        "weight outside every configured class; using the last class"
    );
    Some(ResolvedClass {
        index: last_index,
        class: last,
        clamped: true,
    })
}
