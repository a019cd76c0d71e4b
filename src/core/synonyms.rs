//! Static synonym vocabulary, one table per domain.
//!
//! Each entry maps a canonical funnel keyword to the free-text terms that
//! providers commonly use in their tags. Terms are lowercase. A keyword with
//! no entry expands to itself, so lookups never fail.

/// Bumped whenever any table's vocabulary changes
pub const TABLE_VERSION: u32 = 3;

type Entries = &'static [(&'static str, &'static [&'static str])];

/// Vocabulary domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SynonymDomain {
    Health,
    HomeServices,
    Cuisine,
    PriceTier,
    Dietary,
}

impl SynonymDomain {
    pub fn table(self) -> &'static SynonymTable {
        match self {
            SynonymDomain::Health => &HEALTH,
            SynonymDomain::HomeServices => &HOME_SERVICES,
            SynonymDomain::Cuisine => &CUISINE,
            SynonymDomain::PriceTier => &PRICE_TIER,
            SynonymDomain::Dietary => &DIETARY,
        }
    }
}

/// Read-only canonical keyword → related terms mapping
#[derive(Debug)]
pub struct SynonymTable {
    domain: SynonymDomain,
    entries: Entries,
}

impl SynonymTable {
    pub fn domain(&self) -> SynonymDomain {
        self.domain
    }

    /// Canonical keywords in declaration order
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(keyword, _)| *keyword)
    }

    /// Expand `keyword` into its related terms.
    ///
    /// The lookup is case-insensitive and treats `_` and spaces as `-`.
    /// The keyword itself is always part of the result.
    pub fn expand(&self, keyword: &str) -> Vec<String> {
        let normalized = keyword.trim().to_lowercase();
        let key = normalized.replace(['_', ' '], "-");

        let Some((_, terms)) = self.entries.iter().find(|(canonical, _)| *canonical == key) else {
            return vec![normalized];
        };

        let mut expanded: Vec<String> = terms.iter().map(|t| (*t).to_string()).collect();
        if !expanded.contains(&key) {
            expanded.push(key);
        }
        expanded
    }
}

pub static HEALTH: SynonymTable = SynonymTable {
    domain: SynonymDomain::Health,
    entries: &[
        (
            "dental",
            &[
                "dental", "dentist", "dentistry", "orthodontic", "orthodontist", "teeth", "tooth",
                "oral", "endodontic", "periodontal", "hygienist", "smile",
            ],
        ),
        (
            "gym",
            &[
                "gym", "fitness", "24 hour", "workout", "crossfit", "personal trainer", "training",
                "yoga", "pilates", "strength", "health club", "athletic club",
            ],
        ),
        (
            "fitness",
            &[
                "fitness", "gym", "24 hour", "workout", "crossfit", "personal trainer", "yoga",
                "pilates", "bootcamp", "health club",
            ],
        ),
        (
            "salon",
            &[
                "salon", "hair", "barber", "beauty", "nails", "nail", "stylist", "blowout", "lashes",
                "brows", "waxing", "cosmetology",
            ],
        ),
        (
            "beauty",
            &[
                "beauty", "salon", "hair", "nails", "makeup", "lashes", "brows", "waxing",
                "cosmetology", "esthetician",
            ],
        ),
        (
            "spa",
            &[
                "spa", "day spa", "massage", "facial", "wellness", "relaxation", "sauna", "bodywork",
                "aromatherapy",
            ],
        ),
        (
            "medspa",
            &[
                "medspa", "med spa", "medical spa", "botox", "filler", "injectables", "laser",
                "aesthetics", "skin rejuvenation", "coolsculpting",
            ],
        ),
        (
            "chiropractic",
            &[
                "chiropractic", "chiropractor", "chiro", "spinal", "spine", "adjustment",
                "back pain", "alignment", "sports chiropractic",
            ],
        ),
        (
            "medical",
            &[
                "medical", "doctor", "physician", "clinic", "primary care", "urgent care",
                "family medicine", "internal medicine", "pediatric", "healthcare",
            ],
        ),
        (
            "therapy",
            &[
                "therapy", "therapist", "counseling", "counselor", "psychotherapy", "family therapy",
                "couples therapy", "behavioral",
            ],
        ),
        (
            "naturopathic",
            &[
                "naturopathic", "naturopath", "holistic", "functional medicine", "integrative",
                "herbal", "homeopathic", "natural medicine",
            ],
        ),
        (
            "vision",
            &[
                "vision", "optometry", "optometrist", "eye care", "eye exam", "eye doctor",
                "ophthalmology", "glasses", "contact lenses", "optical",
            ],
        ),
        (
            "mental-health",
            &[
                "mental health", "mental-health", "psychiatry", "psychiatrist", "psychologist",
                "psychology", "anxiety", "depression", "counseling", "behavioral health",
            ],
        ),
        (
            "physical-therapy",
            &[
                "physical therapy", "physical-therapy", "physiotherapy", "physio", "rehab",
                "rehabilitation", "sports medicine", "mobility", "injury recovery",
            ],
        ),
        (
            "podiatry",
            &[
                "podiatry", "podiatrist", "foot care", "foot doctor", "feet", "ankle", "bunion",
                "orthotics",
            ],
        ),
        (
            "dermatology",
            &[
                "dermatology", "dermatologist", "skin", "skin care", "skincare", "acne", "eczema",
                "psoriasis", "mole check",
            ],
        ),
        (
            "acupuncture",
            &[
                "acupuncture", "acupuncturist", "traditional chinese medicine", "tcm", "cupping",
                "dry needling", "eastern medicine", "oriental medicine",
            ],
        ),
    ],
};

pub static HOME_SERVICES: SynonymTable = SynonymTable {
    domain: SynonymDomain::HomeServices,
    entries: &[
        (
            "landscaping",
            &[
                "landscaping", "landscape", "landscaper", "lawn", "lawn care", "gardening", "garden",
                "yard", "tree service", "irrigation", "sprinkler", "hardscape", "mowing",
            ],
        ),
        (
            "cleaning",
            &[
                "cleaning", "cleaner", "maid", "housekeeping", "janitorial", "house cleaning",
                "carpet cleaning", "deep clean", "move-out cleaning", "pressure washing",
            ],
        ),
        (
            "solar",
            &[
                "solar", "solar panels", "solar installation", "photovoltaic", "renewable",
                "battery storage", "green energy", "solar energy",
            ],
        ),
        (
            "remodeling",
            &[
                "remodeling", "remodel", "renovation", "kitchen remodel", "bathroom remodel",
                "general contractor", "contractor", "home addition", "home improvement",
                "construction", "cabinetry",
            ],
        ),
        (
            "plumbing",
            &[
                "plumbing", "plumber", "pipes", "drain", "leak", "water heater", "sewer", "repiping",
                "fixtures", "clog",
            ],
        ),
        (
            "electrical",
            &[
                "electrical", "electrician", "wiring", "panel upgrade", "lighting", "outlets",
                "ev charger", "generator", "rewiring",
            ],
        ),
        (
            "hvac",
            &[
                "hvac", "heating", "cooling", "air conditioning", "ac repair", "a/c", "furnace",
                "heat pump", "ductwork", "ventilation",
            ],
        ),
        (
            "roofing",
            &[
                "roofing", "roofer", "roof", "roof repair", "shingles", "gutters", "re-roof",
                "tile roof", "skylights",
            ],
        ),
        (
            "flooring",
            &[
                "flooring", "floors", "hardwood", "tile", "carpet", "laminate", "vinyl",
                "refinishing", "floor installation",
            ],
        ),
        (
            "painting",
            &[
                "painting", "painter", "paint", "interior painting", "exterior painting", "drywall",
                "staining", "wallpaper", "cabinet painting",
            ],
        ),
        (
            "handyman",
            &[
                "handyman", "handy man", "odd jobs", "repairs", "home repair", "fix-it",
                "maintenance", "furniture assembly", "tv mounting",
            ],
        ),
        (
            "pool-service",
            &[
                "pool", "pool service", "pool cleaning", "pool repair", "pool maintenance",
                "hot tub", "spa service",
            ],
        ),
        (
            "pest-control",
            &[
                "pest control", "pest-control", "exterminator", "extermination", "termite",
                "rodent", "bed bugs", "insects", "fumigation", "wildlife removal",
            ],
        ),
        (
            "security",
            &[
                "security", "alarm", "alarm system", "cameras", "surveillance", "smart home",
                "locksmith", "access control", "monitoring",
            ],
        ),
        (
            "windows-doors",
            &[
                "windows", "doors", "window installation", "window replacement", "door installation",
                "glass", "screens", "sliding door", "garage door",
            ],
        ),
        (
            "insulation",
            &[
                "insulation", "attic insulation", "spray foam", "blown-in", "weatherization",
                "energy efficiency", "radiant barrier", "soundproofing",
            ],
        ),
        (
            "concrete-masonry",
            &[
                "concrete", "masonry", "mason", "brick", "stone", "pavers", "stucco", "foundation",
                "driveway", "retaining wall", "patio",
            ],
        ),
    ],
};

pub static CUISINE: SynonymTable = SynonymTable {
    domain: SynonymDomain::Cuisine,
    entries: &[
        (
            "mexican",
            &[
                "mexican", "tacos", "taqueria", "burritos", "tex-mex", "cantina", "latin",
                "oaxacan", "enchiladas", "mariscos",
            ],
        ),
        (
            "asian",
            &[
                "asian", "chinese", "japanese", "sushi", "thai", "vietnamese", "pho", "korean",
                "ramen", "indian", "dim sum", "noodles", "filipino",
            ],
        ),
        (
            "american",
            &[
                "american", "burgers", "bbq", "barbecue", "diner", "grill", "steakhouse", "southern",
                "comfort food", "wings", "sandwiches",
            ],
        ),
        (
            "cafe",
            &[
                "cafe", "café", "coffee", "coffee shop", "espresso", "bakery", "tea", "brunch",
                "breakfast", "pastries", "donuts",
            ],
        ),
        (
            "italian",
            &[
                "italian", "pizza", "pizzeria", "pasta", "trattoria", "osteria", "ristorante",
                "gelato", "wood-fired",
            ],
        ),
        (
            "mediterranean",
            &[
                "mediterranean", "greek", "middle eastern", "lebanese", "turkish", "falafel", "gyro",
                "hummus", "persian", "kebab",
            ],
        ),
        (
            "seafood",
            &[
                "seafood", "fish", "oysters", "oyster bar", "crab", "lobster", "poke", "shrimp",
                "fish tacos", "raw bar",
            ],
        ),
        (
            "vegetarian",
            &["vegetarian", "vegan", "plant-based", "plant based", "veggie", "meatless"],
        ),
        (
            "fast-food",
            &[
                "fast food", "fast-food", "quick service", "drive-thru", "drive through", "takeout",
                "fast casual", "burgers", "fries",
            ],
        ),
        (
            "fine-dining",
            &[
                "fine dining", "fine-dining", "tasting menu", "chef's table", "prix fixe", "gourmet",
                "michelin", "white tablecloth", "upscale",
            ],
        ),
    ],
};

pub static PRICE_TIER: SynonymTable = SynonymTable {
    domain: SynonymDomain::PriceTier,
    entries: &[
        (
            "budget",
            &[
                "$", "budget", "cheap", "inexpensive", "affordable", "low cost", "low-cost", "value",
                "bargain",
            ],
        ),
        (
            "$",
            &["$", "budget", "cheap", "inexpensive", "affordable", "low cost", "value"],
        ),
        (
            "moderate",
            &["$$", "moderate", "mid-range", "midrange", "mid range", "reasonable", "fair price"],
        ),
        ("$$", &["$$", "moderate", "mid-range", "midrange", "reasonable"]),
        (
            "upscale",
            &["$$$", "upscale", "expensive", "pricey", "high-end", "high end", "premium"],
        ),
        ("$$$", &["$$$", "upscale", "expensive", "pricey", "high-end", "premium"]),
        (
            "fine-dining",
            &[
                "$$$$", "fine dining", "fine-dining", "luxury", "luxurious", "splurge", "very expensive",
            ],
        ),
        ("$$$$", &["$$$$", "fine dining", "luxury", "luxurious", "splurge"]),
    ],
};

pub static DIETARY: SynonymTable = SynonymTable {
    domain: SynonymDomain::Dietary,
    entries: &[
        (
            "vegetarian",
            &["vegetarian", "veg", "veggie", "plant-based", "meatless", "lacto-ovo"],
        ),
        (
            "vegan",
            &["vegan", "vg", "plant-based", "plant based", "dairy-free", "no animal products"],
        ),
        (
            "gluten-free",
            &["gluten-free", "gluten free", "gf", "celiac", "celiac-friendly", "no gluten", "wheat-free"],
        ),
        ("keto", &["keto", "ketogenic", "low-carb", "low carb", "lchf", "carb-conscious"]),
        ("halal", &["halal", "zabiha", "halal-certified", "halal meat", "muslim-friendly"]),
        ("kosher", &["kosher", "glatt", "kosher-certified", "pareve", "parve"]),
    ],
};
