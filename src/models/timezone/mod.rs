// Timezone option tables for the selector dropdown.
// The ids are opaque to the core; only the hour mapper inspects them.

pub struct ZoneOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub struct ZoneRegion {
    pub label: &'static str,
    pub options: &'static [ZoneOption],
}

pub const ZONE_REGIONS: &[ZoneRegion] = &[
    ZoneRegion {
        label: "US/Canada",
        options: &[
            ZoneOption { id: "America/Anchorage", label: "Alaska Time" },
            ZoneOption { id: "America/Los_Angeles", label: "Pacific Time - US & Canada" },
            ZoneOption { id: "America/Denver", label: "Mountain Time - US & Canada" },
            ZoneOption { id: "America/Chicago", label: "Central Time - US & Canada" },
            ZoneOption { id: "America/New_York", label: "Eastern Time - US & Canada" },
        ],
    },
    ZoneRegion {
        label: "Asia",
        options: &[
            ZoneOption { id: "Asia/Kolkata", label: "India Standard Time" },
            ZoneOption { id: "Asia/Dhaka", label: "Bangladesh Standard Time" },
            ZoneOption { id: "Asia/Jakarta", label: "Jakarta, Indonesia" },
            ZoneOption { id: "Asia/Bangkok", label: "Thailand - Indochina Time" },
            ZoneOption { id: "Asia/Dubai", label: "UAE - Gulf Standard Time" },
            ZoneOption { id: "Asia/Karachi", label: "Pak - Pakistan Standard Time" },
        ],
    },
    ZoneRegion {
        label: "Europe",
        options: &[
            ZoneOption { id: "Europe/London", label: "UK Time" },
            ZoneOption { id: "Europe/Berlin", label: "Central European Time" },
            ZoneOption { id: "Europe/Moscow", label: "Moscow Time" },
        ],
    },
    ZoneRegion {
        label: "Australia",
        options: &[
            ZoneOption { id: "Australia/Sydney", label: "Sydney Time" },
            ZoneOption { id: "Australia/Perth", label: "Perth Time" },
        ],
    },
    ZoneRegion {
        label: "Africa",
        options: &[
            ZoneOption { id: "Africa/Cairo", label: "Egypt Time" },
            ZoneOption { id: "Africa/Nairobi", label: "Kenya Time" },
            ZoneOption { id: "Africa/Lagos", label: "Nigeria Time" },
        ],
    },
    ZoneRegion {
        label: "South America",
        options: &[
            ZoneOption { id: "America/Sao_Paulo", label: "Brazil Time" },
            ZoneOption { id: "America/Buenos_Aires", label: "Argentina Time" },
        ],
    },
];

/// Display label for a zone id, falling back to the default zone's label
/// when the id is not in the table.
pub fn label_for(zone_id: &str) -> &'static str {
    for region in ZONE_REGIONS {
        for option in region.options {
            if option.id == zone_id {
                return option.label;
            }
        }
    }
    "Pak - Pakistan Standard Time"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_known_zone() {
        assert_eq!(label_for("America/New_York"), "Eastern Time - US & Canada");
        assert_eq!(label_for("Asia/Karachi"), "Pak - Pakistan Standard Time");
    }

    #[test]
    fn test_label_for_unknown_zone_falls_back() {
        assert_eq!(label_for("Mars/Olympus_Mons"), "Pak - Pakistan Standard Time");
    }

    #[test]
    fn test_regions_are_non_empty() {
        assert_eq!(ZONE_REGIONS.len(), 6);
        for region in ZONE_REGIONS {
            assert!(!region.options.is_empty());
        }
    }
}
