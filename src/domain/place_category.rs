/// Raw place tags as reported by a geocoder, used to classify a place.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct PlaceTags {
    pub house_number: Option<String>,
    pub shop: Option<String>,
    pub amenity: Option<String>,
    pub highway: Option<String>,
    pub natural: Option<String>,
    pub leisure: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum PlaceCategory {
    Residential,
    Commercial,
    Restaurant,
    Hospital,
    School,
    Bank,
    Road,
    NaturalArea,
    Recreational,
    #[default]
    General,
}

impl PlaceCategory {
    /// Classifies a place, the first matching tag wins.
    pub fn classify(tags: &PlaceTags) -> Self {
        if tags.house_number.is_some() {
            return PlaceCategory::Residential;
        }
        if tags.shop.is_some() || tags.amenity.as_deref() == Some("shop") {
            return PlaceCategory::Commercial;
        }

        match tags.amenity.as_deref() {
            Some("restaurant") => return PlaceCategory::Restaurant,
            Some("hospital") => return PlaceCategory::Hospital,
            Some("school") => return PlaceCategory::School,
            Some("bank") => return PlaceCategory::Bank,
            _ => {}
        }

        if tags.highway.is_some() {
            PlaceCategory::Road
        } else if tags.natural.is_some() {
            PlaceCategory::NaturalArea
        } else if tags.leisure.is_some() {
            PlaceCategory::Recreational
        } else {
            PlaceCategory::General
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Residential => "🏠 Residential",
            PlaceCategory::Commercial => "🏪 Commercial",
            PlaceCategory::Restaurant => "🍽️ Restaurant",
            PlaceCategory::Hospital => "🏥 Hospital",
            PlaceCategory::School => "🏫 School",
            PlaceCategory::Bank => "🏦 Bank",
            PlaceCategory::Road => "🛣️ Road",
            PlaceCategory::NaturalArea => "🌿 Natural area",
            PlaceCategory::Recreational => "🎯 Recreational",
            PlaceCategory::General => "📍 General location",
        }
    }
}
