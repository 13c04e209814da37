//! Built-in item lists used when no language model is configured.
//!
//! Keys are lowercase phrases matched as substrings of the lowercased prompt.
//! The table is scanned in definition order and the first hit wins.

pub const PRESET_SETS: &[(&str, &[&str])] = &[
    (
        "ppe",
        &[
            "N95 respirator",
            "Face shield",
            "Disposable gloves",
            "Protective gown",
            "Medical goggles",
            "Hand sanitizer",
        ],
    ),
    (
        "first aid",
        &[
            "Adhesive bandages",
            "Sterile gauze pads",
            "Medical tape",
            "Antiseptic wipes",
            "Elastic bandage",
            "Tweezers",
        ],
    ),
    (
        "camping",
        &[
            "Tent",
            "Sleeping bag",
            "Camping stove",
            "Water purifier",
            "Headlamp",
            "First aid kit",
        ],
    ),
];

/// Items returned when the prompt yields nothing usable.
pub const PLACEHOLDER_ITEMS: &[&str] = &[
    "example item",
    "another example item",
    "refine your prompt for better results",
];

/// Find the first preset whose keyword appears in the prompt.
pub fn find_preset(prompt: &str) -> Option<(&'static str, &'static [&'static str])> {
    let lowered = prompt.to_lowercase();
    PRESET_SETS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .copied()
}
