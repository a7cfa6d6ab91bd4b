use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_LORE: &str = "There's nothing special about it.";

const ENTRIES: &[(&str, &str)] = &[
    (
        "witcher medallion",
        "A silver wolf's head on a heavy chain.\n\
         It trembles in the presence of magic, and the wolf's eyes seem to follow you.",
    ),
    (
        "medallion",
        "A tarnished medallion shaped like a snarling wolf.\n\
         Witchers of the School of the Wolf wear these until they die.",
    ),
    (
        "silver sword",
        "A slender blade of meteorite steel plated with silver.\n\
         Runes along the fuller glow faintly. It is meant for monsters, not men.",
    ),
    (
        "sword",
        "A plain steel sword, nicked along the edge.\n\
         It has seen more use than care.",
    ),
    (
        "torch",
        "A pitch-soaked torch.\n\
         The flame gutters but refuses to die.",
    ),
    (
        "map",
        "A hand-drawn map of the keep.\n\
         Someone has circled the cellar in faded red ink.",
    ),
    (
        "bestiary",
        "A thick volume bound in wyvern hide.\n\
         The pages on drowners and nekkers are dog-eared and stained with swamp water.",
    ),
    (
        "swallow potion",
        "A small vial of cloudy red liquid.\n\
         Witchers drink it to close wounds. Anyone else would be poisoned.",
    ),
];

static LORE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Descriptive text for a normalized item name.
///
/// `name` must already be in canonical form (see
/// [`normalize_name`](super::lookup::normalize_name)); unknown names get
/// [`DEFAULT_LORE`].
pub fn lore_for(name: &str) -> &'static str {
    LORE.get(name).copied().unwrap_or(DEFAULT_LORE)
}
