//! Region badge shown above the species table

/// Read-only description of the region a table is scoped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionBadge {
    pub name: String,
    pub identifier: String,
    /// Path of the region's map image, `"/" + region + ".png"`
    pub image_path: String,
    pub readonly: bool,
}

impl RegionBadge {
    /// Badge for a region, using the identifier as name and image stem
    pub fn for_region(region: &str) -> Self {
        Self {
            name: region.to_string(),
            identifier: region.to_string(),
            image_path: format!("/{}.png", region),
            readonly: true,
        }
    }
}
