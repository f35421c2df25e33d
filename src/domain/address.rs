use crate::domain::PlaceCategory;

/// A structured address as resolved by a reverse geocoder.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Address {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub postcode: Option<String>,
    pub category: PlaceCategory,
}

/// A coarse region, typically derived from the network location rather than the position.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Region {
    pub country: Option<String>,
    pub country_code: Option<String>,
}

impl Address {
    pub fn street_line(&self) -> String {
        match (&self.house_number, &self.road) {
            (Some(house_number), Some(road)) => format!("{} {}", house_number, road),
            (_, Some(road)) => road.clone(),
            _ => "Street not specified".to_string(),
        }
    }

    /// Returns `street, city, country`, with placeholders for the missing parts.
    pub fn simple_address(&self) -> String {
        format!(
            "{}, {}, {}",
            self.street_line(),
            self.city.as_deref().unwrap_or("City not specified"),
            self.country.as_deref().unwrap_or("Country not specified")
        )
    }

    pub fn flag(&self) -> String {
        flag_emoji(self.country_code.as_deref())
    }

    /// Fills the country fields the address lacks from the given region.
    pub fn with_country_fallback(mut self, region: &Region) -> Self {
        if self.country.is_none() {
            self.country = region.country.clone();
        }
        if self.country_code.is_none() {
            self.country_code = region.country_code.clone();
        }
        self
    }
}

/// Converts an ISO 3166-1 alpha-2 code into its regional indicator flag, or a globe when the code is unusable.
pub fn flag_emoji(country_code: Option<&str>) -> String {
    const GLOBE: &str = "🌍";
    const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

    let Some(code) = country_code.filter(|code| code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic())) else {
        return GLOBE.to_string();
    };

    code.to_ascii_uppercase()
        .chars()
        .map(|c| char::from_u32(REGIONAL_INDICATOR_A + (c as u32 - 'A' as u32)))
        .collect::<Option<String>>()
        .unwrap_or_else(|| GLOBE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn simple_address_joins_street_city_and_country() {
        let address = Address {
            house_number: some("5"),
            road: some("Calle de Madero"),
            city: some("Ciudad de México"),
            country: some("México"),
            ..Default::default()
        };

        assert_eq!(address.simple_address(), "5 Calle de Madero, Ciudad de México, México");
    }

    #[test]
    fn simple_address_uses_the_road_without_a_house_number() {
        let address = Address {
            road: some("Zócalo"),
            ..Default::default()
        };

        assert_eq!(address.simple_address(), "Zócalo, City not specified, Country not specified");
    }

    #[test]
    fn street_line_ignores_a_house_number_without_a_road() {
        let address = Address {
            house_number: some("5"),
            ..Default::default()
        };

        assert_eq!(address.street_line(), "Street not specified");
    }

    #[test]
    fn with_country_fallback_keeps_known_country_fields() {
        let address = Address {
            country: some("Nederland"),
            ..Default::default()
        };
        let region = Region {
            country: some("Mexico"),
            country_code: some("MX"),
        };

        let address = address.with_country_fallback(&region);

        assert_eq!(address.country, some("Nederland"));
        assert_eq!(address.country_code, some("MX"));
    }

    #[rstest]
    #[case(Some("mx"), "🇲🇽")]
    #[case(Some("NL"), "🇳🇱")]
    #[case(Some("jp"), "🇯🇵")]
    #[case(Some(""), "🌍")]
    #[case(Some("usa"), "🌍")]
    #[case(Some("1a"), "🌍")]
    #[case(None, "🌍")]
    fn flag_emoji_converts_country_codes(#[case] code: Option<&str>, #[case] expected: &str) {
        assert_eq!(flag_emoji(code), expected);
    }
}
